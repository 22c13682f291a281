use crate::domain::product_purchase::ProductPurchase;
use crate::forms::EditPayload;
use crate::forms::product_purchases::{AddProductPurchaseForm, EditProductPurchaseForm};
use crate::repository::{ProductPurchaseReader, ProductPurchaseWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the product purchase list page.
pub async fn load_product_purchases<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<ProductPurchase>>
where
    R: ProductPurchaseReader + ?Sized,
{
    let (total, items) = repo
        .list_product_purchases(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a product purchase from the add dialog.
pub async fn create_product_purchase<R>(
    repo: &R,
    form: AddProductPurchaseForm,
) -> ServiceResult<ProductPurchase>
where
    R: ProductPurchaseWriter + ?Sized,
{
    let payload = form
        .into_new_product_purchase()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product_purchase(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored product purchase.
pub async fn modify_product_purchase<R>(
    repo: &R,
    form: EditProductPurchaseForm,
) -> ServiceResult<ProductPurchase>
where
    R: ProductPurchaseReader + ProductPurchaseWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_product_purchase()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_product_purchase_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_product_purchase(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}
