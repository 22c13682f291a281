use chrono::Utc;

use crate::domain::cart::Cart;
use crate::forms::EditPayload;
use crate::forms::carts::{AddCartForm, EditCartForm};
use crate::repository::{CartReader, CartWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the cart list page.
pub async fn load_carts<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<Cart>>
where
    R: CartReader + ?Sized,
{
    let (total, items) = repo
        .list_carts(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a cart from the add dialog.
pub async fn create_cart<R>(repo: &R, form: AddCartForm) -> ServiceResult<Cart>
where
    R: CartWriter + ?Sized,
{
    let payload = form
        .into_new_cart(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_cart(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored cart.
pub async fn modify_cart<R>(repo: &R, form: EditCartForm) -> ServiceResult<Cart>
where
    R: CartReader + CartWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_cart()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_cart_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_cart(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::NewCart;
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[actix_web::test]
    async fn backend_rejection_keeps_its_message() {
        let mut repo = MockRepository::new();
        repo.expect_create_cart()
            .times(1)
            .withf(|new: &NewCart| new.customer_id == 9)
            .returning(|_| {
                Err(RepositoryError::Rejected {
                    status: 422,
                    message: "cliente inexistente".to_string(),
                })
            });

        let form = AddCartForm {
            customer_id: 9,
            total: "0".to_string(),
            state: "abierto".to_string(),
            modified_by: "eva".to_string(),
        };

        assert!(matches!(
            create_cart(&repo, form).await,
            Err(ServiceError::Backend(message)) if message == "cliente inexistente"
        ));
    }
}
