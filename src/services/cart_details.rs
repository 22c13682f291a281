use crate::domain::cart_detail::CartDetail;
use crate::forms::EditPayload;
use crate::forms::cart_details::{AddCartDetailForm, EditCartDetailForm};
use crate::repository::{CartDetailReader, CartDetailWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the cart detail list page.
pub async fn load_cart_details<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<CartDetail>>
where
    R: CartDetailReader + ?Sized,
{
    let (total, items) = repo
        .list_cart_details(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a cart detail from the add dialog.
pub async fn create_cart_detail<R>(repo: &R, form: AddCartDetailForm) -> ServiceResult<CartDetail>
where
    R: CartDetailWriter + ?Sized,
{
    let payload = form
        .into_new_cart_detail()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_cart_detail(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored cart detail.
pub async fn modify_cart_detail<R>(repo: &R, form: EditCartDetailForm) -> ServiceResult<CartDetail>
where
    R: CartDetailReader + CartDetailWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_cart_detail()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_cart_detail_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_cart_detail(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::RecordStatus;
    use crate::domain::cart_detail::NewCartDetail;
    use crate::repository::mock::MockRepository;

    fn detail(id: i32) -> CartDetail {
        CartDetail {
            id,
            cart_id: 2,
            product_id: 8,
            quantity: 1,
            unit_price: Decimal::new(1000, 2),
            total: Decimal::new(1000, 2),
            status: RecordStatus::Active,
            modified_by: "eva".to_string(),
        }
    }

    #[actix_web::test]
    async fn create_cart_detail_sends_line_total() {
        let mut repo = MockRepository::new();
        repo.expect_create_cart_detail()
            .times(1)
            .withf(|new: &NewCartDetail| new.total == Decimal::new(3000, 2))
            .returning(|_| Ok(detail(6)));

        let form = AddCartDetailForm {
            cart_id: 2,
            product_id: 8,
            quantity: 3,
            unit_price: "10,00".to_string(),
            modified_by: "eva".to_string(),
        };

        assert_eq!(create_cart_detail(&repo, form).await.expect("detail").id, 6);
    }

    #[actix_web::test]
    async fn overflowing_price_never_reaches_backend() {
        let repo = MockRepository::new();

        let form = AddCartDetailForm {
            cart_id: 2,
            product_id: 8,
            quantity: 1000,
            unit_price: "79228162514264337593543950335".to_string(),
            modified_by: "eva".to_string(),
        };

        assert!(matches!(
            create_cart_detail(&repo, form).await,
            Err(ServiceError::Form(_))
        ));
    }

    #[actix_web::test]
    async fn modify_cart_detail_recomputes_total() {
        let mut repo = MockRepository::new();
        repo.expect_get_cart_detail_by_id()
            .returning(|id| Ok(Some(detail(id))));
        repo.expect_update_cart_detail()
            .times(1)
            .withf(|updated: &CartDetail| {
                updated.quantity == 4 && updated.total == Decimal::new(4000, 2)
            })
            .returning(|updated| Ok(updated.clone()));

        let form = EditCartDetailForm {
            id: 6,
            cart_id: 2,
            product_id: 8,
            quantity: 4,
            unit_price: "10.00".to_string(),
            status: "activo".to_string(),
            modified_by: "luis".to_string(),
        };

        let updated = modify_cart_detail(&repo, form).await.expect("updated");

        assert_eq!(updated.modified_by, "luis");
    }
}
