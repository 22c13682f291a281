use async_trait::async_trait;

use crate::domain::order::{NewOrder, Order};
use crate::domain::{ListQuery, OrderStage};
use crate::models::order::Order as DbOrder;
use crate::models::status::StagePatch;
use crate::repository::commerce_paths::ORDERS;
use crate::repository::{
    OrderReader, OrderWriter, RepositoryResult, RestRepository, fetch_list, fetch_one, insert,
    item_path, replace,
};

#[async_trait]
impl OrderReader for RestRepository {
    async fn list_orders(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Order>)> {
        fetch_list::<DbOrder, Order>(&self.commerce, ORDERS, query).await
    }

    async fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>> {
        fetch_one::<DbOrder, Order>(&self.commerce, ORDERS, id).await
    }
}

#[async_trait]
impl OrderWriter for RestRepository {
    async fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order> {
        insert::<_, DbOrder, Order>(&self.commerce, ORDERS, &DbOrder::from(new_order)).await
    }

    async fn update_order(&self, order: &Order) -> RepositoryResult<Order> {
        replace::<_, DbOrder, Order>(
            &self.commerce,
            ORDERS,
            order.id,
            &DbOrder::from(order),
            order.clone(),
        )
        .await
    }

    async fn update_order_stage(&self, id: i32, stage: OrderStage) -> RepositoryResult<()> {
        let body = StagePatch {
            estado_pedido: stage,
        };
        self.commerce.patch(&item_path(ORDERS, id), &body).await
    }
}
