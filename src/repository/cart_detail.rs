use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::cart_detail::{NewCartDetail, CartDetail};
use crate::models::cart_detail::CartDetail as DbCartDetail;
use crate::repository::commerce_paths::CART_DETAILS;
use crate::repository::{
    CartDetailReader, CartDetailWriter, RepositoryResult, RestRepository, fetch_list, fetch_one,
    insert, replace,
};

#[async_trait]
impl CartDetailReader for RestRepository {
    async fn list_cart_details(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<CartDetail>)> {
        fetch_list::<DbCartDetail, CartDetail>(&self.commerce, CART_DETAILS, query).await
    }

    async fn get_cart_detail_by_id(&self, id: i32) -> RepositoryResult<Option<CartDetail>> {
        fetch_one::<DbCartDetail, CartDetail>(&self.commerce, CART_DETAILS, id).await
    }
}

#[async_trait]
impl CartDetailWriter for RestRepository {
    async fn create_cart_detail(&self, new_detail: &NewCartDetail) -> RepositoryResult<CartDetail> {
        insert::<_, DbCartDetail, CartDetail>(
            &self.commerce,
            CART_DETAILS,
            &DbCartDetail::from(new_detail),
        )
        .await
    }

    async fn update_cart_detail(&self, detail: &CartDetail) -> RepositoryResult<CartDetail> {
        replace::<_, DbCartDetail, CartDetail>(
            &self.commerce,
            CART_DETAILS,
            detail.id,
            &DbCartDetail::from(detail),
            detail.clone(),
        )
        .await
    }
}
