use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::RecordStatus;
use crate::domain::payment_method::PaymentMethod;
use crate::forms::EditPayload;
use crate::forms::payment_methods::{AddPaymentMethodForm, EditPaymentMethodForm};
use crate::repository::{PaymentMethodReader, PaymentMethodWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// View model exposed to the payment methods template. Card data is masked.
#[derive(Debug, Serialize)]
pub struct PaymentMethodView {
    pub id: i32,
    pub customer_id: i32,
    pub kind: String,
    pub holder_name: String,
    pub masked_card_number: String,
    pub expires_on: NaiveDate,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl From<PaymentMethod> for PaymentMethodView {
    fn from(method: PaymentMethod) -> Self {
        let masked_card_number = method.masked_card_number();
        let PaymentMethod {
            id,
            customer_id,
            kind,
            holder_name,
            expires_on,
            status,
            modified_by,
            ..
        } = method;

        Self {
            id,
            customer_id,
            kind,
            holder_name,
            masked_card_number,
            expires_on,
            status,
            modified_by,
        }
    }
}

/// Loads the payment methods page.
pub async fn load_payment_methods<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<PaymentMethodView>>
where
    R: PaymentMethodReader + ?Sized,
{
    let (total, items) = repo
        .list_payment_methods(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    let items = items.into_iter().map(PaymentMethodView::from).collect();
    Ok(PageData::new(total, items, &query))
}

pub async fn create_payment_method<R>(
    repo: &R,
    form: AddPaymentMethodForm,
) -> ServiceResult<PaymentMethodView>
where
    R: PaymentMethodWriter + ?Sized,
{
    let new_method = form
        .into_new_payment_method()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_payment_method(&new_method)
        .await
        .map(PaymentMethodView::from)
        .map_err(ServiceError::from)
}

/// Applies the edit dialog; blank card number or CVV keep the stored values.
pub async fn modify_payment_method<R>(
    repo: &R,
    form: EditPaymentMethodForm,
) -> ServiceResult<PaymentMethodView>
where
    R: PaymentMethodReader + PaymentMethodWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_payment_method()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_payment_method_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_payment_method(&update.apply_to(current))
        .await
        .map(PaymentMethodView::from)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn method(id: i32) -> PaymentMethod {
        PaymentMethod {
            id,
            customer_id: 1,
            kind: "tarjeta_credito".to_string(),
            holder_name: "Ana Torres".to_string(),
            card_number: "4111111111111111".to_string(),
            expires_on: NaiveDate::from_ymd_opt(2027, 12, 31).expect("date"),
            cvv: "123".to_string(),
            status: RecordStatus::Active,
            modified_by: "eva".to_string(),
        }
    }

    #[actix_web::test]
    async fn list_never_exposes_card_data() {
        let mut repo = MockRepository::new();
        repo.expect_list_payment_methods()
            .returning(|_| Ok((1, vec![method(1)])));

        let data = load_payment_methods(&repo, PageQuery::default())
            .await
            .expect("page data");

        let rendered = serde_json::to_string(&data).expect("serialization");
        assert!(rendered.contains("************1111"));
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("\"cvv\""));
    }

    #[actix_web::test]
    async fn blank_card_fields_keep_stored_values() {
        let mut repo = MockRepository::new();
        repo.expect_get_payment_method_by_id()
            .returning(|id| Ok(Some(method(id))));
        repo.expect_update_payment_method()
            .times(1)
            .withf(|updated: &PaymentMethod| {
                updated.card_number == "4111111111111111"
                    && updated.cvv == "123"
                    && updated.holder_name == "Ana T."
            })
            .returning(|updated| Ok(updated.clone()));

        let form = EditPaymentMethodForm {
            id: 1,
            customer_id: 1,
            kind: "tarjeta_credito".to_string(),
            holder_name: "Ana T.".to_string(),
            card_number: None,
            expires_on: "2027-12-31".to_string(),
            cvv: None,
            status: "activo".to_string(),
            modified_by: "eva".to_string(),
        };

        let view = modify_payment_method(&repo, form).await.expect("updated");

        assert_eq!(view.masked_card_number, "************1111");
    }
}
