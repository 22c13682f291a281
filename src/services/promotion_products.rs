use crate::domain::promotion_product::PromotionProduct;
use crate::forms::EditPayload;
use crate::forms::promotion_products::{AddPromotionProductForm, EditPromotionProductForm};
use crate::repository::{PromotionProductReader, PromotionProductWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the promotion product link list page.
pub async fn load_promotion_products<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<PromotionProduct>>
where
    R: PromotionProductReader + ?Sized,
{
    let (total, items) = repo
        .list_promotion_products(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a promotion product link from the add dialog.
pub async fn create_promotion_product<R>(
    repo: &R,
    form: AddPromotionProductForm,
) -> ServiceResult<PromotionProduct>
where
    R: PromotionProductWriter + ?Sized,
{
    let payload = form
        .into_new_promotion_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_promotion_product(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored promotion product link.
pub async fn modify_promotion_product<R>(
    repo: &R,
    form: EditPromotionProductForm,
) -> ServiceResult<PromotionProduct>
where
    R: PromotionProductReader + PromotionProductWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_promotion_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_promotion_product_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_promotion_product(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuditTrail, RecordStatus};
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn link(id: i32) -> PromotionProduct {
        PromotionProduct {
            id,
            product_id: 8,
            promotion_id: 5,
            status: RecordStatus::Active,
            audit: AuditTrail::default(),
        }
    }

    #[actix_web::test]
    async fn modify_promotion_product_switches_promotion() {
        let mut repo = MockRepository::new();
        repo.expect_get_promotion_product_by_id()
            .returning(|id| Ok(Some(link(id))));
        repo.expect_update_promotion_product()
            .times(1)
            .withf(|updated: &PromotionProduct| updated.promotion_id == 6 && updated.id == 4)
            .returning(|updated| Ok(updated.clone()));

        let form = EditPromotionProductForm {
            id: 4,
            product_id: 8,
            promotion_id: 6,
            status: "A".to_string(),
            modified_by: None,
        };

        assert!(modify_promotion_product(&repo, form).await.is_ok());
    }

    #[actix_web::test]
    async fn rejected_link_shows_backend_message() {
        let mut repo = MockRepository::new();
        repo.expect_create_promotion_product().returning(|_| {
            Err(RepositoryError::Rejected {
                status: 422,
                message: "promoción vencida".to_string(),
            })
        });

        let form = AddPromotionProductForm {
            product_id: 8,
            promotion_id: 5,
            status: "A".to_string(),
            modified_by: None,
        };

        assert!(matches!(
            create_promotion_product(&repo, form).await,
            Err(ServiceError::Backend(message)) if message == "promoción vencida"
        ));
    }
}
