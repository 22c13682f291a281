use crate::domain::surface_category::SurfaceCategory;
use crate::forms::EditPayload;
use crate::forms::surfaces::{AddSurfaceCategoryForm, EditSurfaceCategoryForm};
use crate::repository::{SurfaceCategoryReader, SurfaceCategoryWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the surface category list page.
pub async fn load_surface_categories<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<SurfaceCategory>>
where
    R: SurfaceCategoryReader + ?Sized,
{
    let (total, items) = repo
        .list_surface_categories(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a surface category from the add dialog.
pub async fn create_surface_category<R>(
    repo: &R,
    form: AddSurfaceCategoryForm,
) -> ServiceResult<SurfaceCategory>
where
    R: SurfaceCategoryWriter + ?Sized,
{
    let payload = form
        .into_new_surface_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_surface_category(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored surface category.
pub async fn modify_surface_category<R>(
    repo: &R,
    form: EditSurfaceCategoryForm,
) -> ServiceResult<SurfaceCategory>
where
    R: SurfaceCategoryReader + SurfaceCategoryWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_surface_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_surface_category_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_surface_category(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuditTrail, RecordStatus};
    use crate::repository::mock::MockRepository;

    #[actix_web::test]
    async fn modify_surface_category_replaces_operator() {
        let mut repo = MockRepository::new();
        repo.expect_get_surface_category_by_id().returning(|id| {
            Ok(Some(SurfaceCategory {
                id,
                name: "Piso".to_string(),
                description: String::new(),
                status: RecordStatus::Active,
                audit: AuditTrail {
                    modified_by: Some("carla".to_string()),
                    ..AuditTrail::default()
                },
            }))
        });
        repo.expect_update_surface_category()
            .times(1)
            .withf(|updated: &SurfaceCategory| {
                updated.name == "Pared"
                    && updated.status == RecordStatus::Inactive
                    && updated.audit.modified_by.as_deref() == Some("eva")
            })
            .returning(|updated| Ok(updated.clone()));

        let form = EditSurfaceCategoryForm {
            id: 4,
            name: "Pared".to_string(),
            description: "Revestimientos".to_string(),
            status: "I".to_string(),
            modified_by: Some("eva".to_string()),
        };

        let updated = modify_surface_category(&repo, form).await.expect("updated");

        assert_eq!(updated.description, "Revestimientos");
    }

    #[actix_web::test]
    async fn blank_name_is_a_form_error() {
        let repo = MockRepository::new();

        let form = AddSurfaceCategoryForm {
            name: String::new(),
            description: String::new(),
            status: "A".to_string(),
            modified_by: None,
        };

        assert!(matches!(
            create_surface_category(&repo, form).await,
            Err(ServiceError::Form(_))
        ));
    }
}
