use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::promotion_product::{NewPromotionProduct, PromotionProduct};
use crate::models::promotion_product::{
    PromotionProduct as DbPromotionProduct, PromotionProductBody,
};
use crate::repository::catalog_paths::PROMOTION_PRODUCTS;
use crate::repository::{
    PromotionProductReader, PromotionProductWriter, RepositoryResult, RestRepository, fetch_list,
    fetch_one, insert, replace,
};

#[async_trait]
impl PromotionProductReader for RestRepository {
    async fn list_promotion_products(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<PromotionProduct>)> {
        fetch_list::<DbPromotionProduct, PromotionProduct>(&self.catalog, PROMOTION_PRODUCTS, query)
            .await
    }

    async fn get_promotion_product_by_id(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<PromotionProduct>> {
        fetch_one::<DbPromotionProduct, PromotionProduct>(&self.catalog, PROMOTION_PRODUCTS, id)
            .await
    }
}

#[async_trait]
impl PromotionProductWriter for RestRepository {
    async fn create_promotion_product(
        &self,
        new_link: &NewPromotionProduct,
    ) -> RepositoryResult<PromotionProduct> {
        insert::<_, DbPromotionProduct, PromotionProduct>(
            &self.catalog,
            PROMOTION_PRODUCTS,
            &PromotionProductBody::from(new_link),
        )
        .await
    }

    async fn update_promotion_product(
        &self,
        link: &PromotionProduct,
    ) -> RepositoryResult<PromotionProduct> {
        replace::<_, DbPromotionProduct, PromotionProduct>(
            &self.catalog,
            PROMOTION_PRODUCTS,
            link.id,
            &PromotionProductBody::from(link),
            link.clone(),
        )
        .await
    }
}
