use crate::domain::promotion::Promotion;
use crate::forms::EditPayload;
use crate::forms::promotions::{AddPromotionForm, EditPromotionForm};
use crate::repository::{PromotionReader, PromotionWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the promotion list page.
pub async fn load_promotions<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<Promotion>>
where
    R: PromotionReader + ?Sized,
{
    let (total, items) = repo
        .list_promotions(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a promotion from the add dialog.
pub async fn create_promotion<R>(repo: &R, form: AddPromotionForm) -> ServiceResult<Promotion>
where
    R: PromotionWriter + ?Sized,
{
    let payload = form
        .into_new_promotion()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_promotion(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored promotion.
pub async fn modify_promotion<R>(repo: &R, form: EditPromotionForm) -> ServiceResult<Promotion>
where
    R: PromotionReader + PromotionWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_promotion()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_promotion_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_promotion(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}
