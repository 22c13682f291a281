use crate::domain::order_detail::OrderDetail;
use crate::forms::EditPayload;
use crate::forms::order_details::{AddOrderDetailForm, EditOrderDetailForm};
use crate::repository::{OrderDetailReader, OrderDetailWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the order detail list page.
pub async fn load_order_details<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<OrderDetail>>
where
    R: OrderDetailReader + ?Sized,
{
    let (total, items) = repo
        .list_order_details(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates an order detail from the add dialog.
pub async fn create_order_detail<R>(
    repo: &R,
    form: AddOrderDetailForm,
) -> ServiceResult<OrderDetail>
where
    R: OrderDetailWriter + ?Sized,
{
    let payload = form
        .into_new_order_detail()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_order_detail(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored order detail.
pub async fn modify_order_detail<R>(
    repo: &R,
    form: EditOrderDetailForm,
) -> ServiceResult<OrderDetail>
where
    R: OrderDetailReader + OrderDetailWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_order_detail()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_order_detail_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_order_detail(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::RecordStatus;
    use crate::domain::order_detail::NewOrderDetail;
    use crate::repository::mock::MockRepository;

    #[actix_web::test]
    async fn create_order_detail_parses_price() {
        let mut repo = MockRepository::new();
        repo.expect_create_order_detail()
            .times(1)
            .withf(|new: &NewOrderDetail| {
                new.payment_id == 2 && new.unit_price == Decimal::new(2590, 2)
            })
            .returning(|new| {
                Ok(OrderDetail {
                    id: 11,
                    order_id: new.order_id,
                    product_id: new.product_id,
                    payment_id: new.payment_id,
                    quantity: new.quantity,
                    unit_price: new.unit_price,
                    status: RecordStatus::Active,
                    modified_by: new.modified_by.clone(),
                })
            });

        let form = AddOrderDetailForm {
            order_id: 7,
            product_id: 8,
            payment_id: 2,
            quantity: 2,
            unit_price: "25,90".to_string(),
            modified_by: "eva".to_string(),
        };

        assert_eq!(create_order_detail(&repo, form).await.expect("detail").id, 11);
    }

    #[actix_web::test]
    async fn invalid_price_is_a_form_error() {
        let repo = MockRepository::new();

        let form = AddOrderDetailForm {
            order_id: 7,
            product_id: 8,
            payment_id: 2,
            quantity: 2,
            unit_price: "gratis".to_string(),
            modified_by: "eva".to_string(),
        };

        assert!(matches!(
            create_order_detail(&repo, form).await,
            Err(ServiceError::Form(_))
        ));
    }
}
