use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::order_detail::{NewOrderDetail, OrderDetail};
use crate::models::order_detail::OrderDetail as DbOrderDetail;
use crate::repository::commerce_paths::ORDER_DETAILS;
use crate::repository::{
    OrderDetailReader, OrderDetailWriter, RepositoryResult, RestRepository, fetch_list, fetch_one,
    insert, replace,
};

#[async_trait]
impl OrderDetailReader for RestRepository {
    async fn list_order_details(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<OrderDetail>)> {
        fetch_list::<DbOrderDetail, OrderDetail>(&self.commerce, ORDER_DETAILS, query).await
    }

    async fn get_order_detail_by_id(&self, id: i32) -> RepositoryResult<Option<OrderDetail>> {
        fetch_one::<DbOrderDetail, OrderDetail>(&self.commerce, ORDER_DETAILS, id).await
    }
}

#[async_trait]
impl OrderDetailWriter for RestRepository {
    async fn create_order_detail(
        &self,
        new_detail: &NewOrderDetail,
    ) -> RepositoryResult<OrderDetail> {
        insert::<_, DbOrderDetail, OrderDetail>(
            &self.commerce,
            ORDER_DETAILS,
            &DbOrderDetail::from(new_detail),
        )
        .await
    }

    async fn update_order_detail(&self, detail: &OrderDetail) -> RepositoryResult<OrderDetail> {
        replace::<_, DbOrderDetail, OrderDetail>(
            &self.commerce,
            ORDER_DETAILS,
            detail.id,
            &DbOrderDetail::from(detail),
            detail.clone(),
        )
        .await
    }
}
