use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::product_purchase::{NewProductPurchase, ProductPurchase};
use crate::models::product_purchase::{ProductPurchase as DbProductPurchase, ProductPurchaseBody};
use crate::repository::catalog_paths::PRODUCT_PURCHASES;
use crate::repository::{
    ProductPurchaseReader, ProductPurchaseWriter, RepositoryResult, RestRepository, fetch_list,
    fetch_one, insert, replace,
};

#[async_trait]
impl ProductPurchaseReader for RestRepository {
    async fn list_product_purchases(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductPurchase>)> {
        fetch_list::<DbProductPurchase, ProductPurchase>(&self.catalog, PRODUCT_PURCHASES, query)
            .await
    }

    async fn get_product_purchase_by_id(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<ProductPurchase>> {
        fetch_one::<DbProductPurchase, ProductPurchase>(&self.catalog, PRODUCT_PURCHASES, id).await
    }
}

#[async_trait]
impl ProductPurchaseWriter for RestRepository {
    async fn create_product_purchase(
        &self,
        new_purchase: &NewProductPurchase,
    ) -> RepositoryResult<ProductPurchase> {
        insert::<_, DbProductPurchase, ProductPurchase>(
            &self.catalog,
            PRODUCT_PURCHASES,
            &ProductPurchaseBody::from(new_purchase),
        )
        .await
    }

    async fn update_product_purchase(
        &self,
        purchase: &ProductPurchase,
    ) -> RepositoryResult<ProductPurchase> {
        replace::<_, DbProductPurchase, ProductPurchase>(
            &self.catalog,
            PRODUCT_PURCHASES,
            purchase.id,
            &ProductPurchaseBody::from(purchase),
            purchase.clone(),
        )
        .await
    }
}
