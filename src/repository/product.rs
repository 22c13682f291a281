use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::product::{NewProduct, Product};
use crate::models::product::{Product as DbProduct, ProductBody};
use crate::repository::catalog_paths::PRODUCTS;
use crate::repository::{
    ProductReader, ProductWriter, RepositoryResult, RestRepository, fetch_list, fetch_one, insert,
    replace,
};

#[async_trait]
impl ProductReader for RestRepository {
    async fn list_products(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        fetch_list::<DbProduct, Product>(&self.catalog, PRODUCTS, query).await
    }

    async fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        fetch_one::<DbProduct, Product>(&self.catalog, PRODUCTS, id).await
    }
}

#[async_trait]
impl ProductWriter for RestRepository {
    async fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        insert::<_, DbProduct, Product>(&self.catalog, PRODUCTS, &ProductBody::from(new_product))
            .await
    }

    async fn update_product(&self, product: &Product) -> RepositoryResult<Product> {
        replace::<_, DbProduct, Product>(
            &self.catalog,
            PRODUCTS,
            product.id,
            &ProductBody::from(product),
            product.clone(),
        )
        .await
    }
}
