use chrono::Utc;

use crate::domain::OrderStage;
use crate::domain::order::Order;
use crate::forms::EditPayload;
use crate::forms::orders::{AddOrderForm, ChangeStageForm, EditOrderForm};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the orders overview page.
pub async fn load_orders<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<Order>>
where
    R: OrderReader + ?Sized,
{
    let (total, items) = repo
        .list_orders(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Places a new order stamped with the current time.
pub async fn create_order<R>(repo: &R, form: AddOrderForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let new_order = form
        .into_new_order(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_order(&new_order)
        .await
        .map_err(ServiceError::from)
}

pub async fn modify_order<R>(repo: &R, form: EditOrderForm) -> ServiceResult<Order>
where
    R: OrderReader + OrderWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_order()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_order_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_order(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

/// Moves an order to another fulfilment stage without touching other fields.
pub async fn change_order_stage<R>(
    repo: &R,
    order_id: i32,
    form: ChangeStageForm,
) -> ServiceResult<OrderStage>
where
    R: OrderWriter + ?Sized,
{
    let stage = form
        .into_stage()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_order_stage(order_id, stage)
        .await
        .map_err(ServiceError::from)?;

    Ok(stage)
}
