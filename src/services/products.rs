use crate::domain::product::Product;
use crate::forms::EditPayload;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the product list page.
pub async fn load_products<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<Product>>
where
    R: ProductReader + ?Sized,
{
    let (total, items) = repo
        .list_products(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a product from the add dialog.
pub async fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored product.
pub async fn modify_product<R>(repo: &R, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_product_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_product(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{AuditTrail, RecordStatus};
    use crate::repository::mock::MockRepository;

    fn product(id: i32) -> Product {
        Product {
            id,
            name: "Pintura".to_string(),
            description: String::new(),
            price: Decimal::new(1999, 2),
            category_id: 2,
            surface_category_id: 1,
            status: RecordStatus::Active,
            audit: AuditTrail {
                created_at: NaiveDate::from_ymd_opt(2023, 4, 1)
                    .and_then(|d| d.and_hms_opt(9, 0, 0)),
                modified_at: None,
                modified_by: Some("carga".to_string()),
            },
        }
    }

    #[actix_web::test]
    async fn modify_product_preserves_creation_audit() {
        let mut repo = MockRepository::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(product(id))));
        repo.expect_update_product()
            .times(1)
            .withf(|updated: &Product| {
                updated.audit.created_at == product(1).audit.created_at
                    && updated.audit.modified_by.as_deref() == Some("eva")
                    && updated.status == RecordStatus::Inactive
            })
            .returning(|updated| Ok(updated.clone()));

        let form = EditProductForm {
            id: 1,
            name: "Pintura".to_string(),
            description: String::new(),
            price: "19.99".to_string(),
            category_id: 2,
            surface_category_id: 1,
            status: "I".to_string(),
            modified_by: Some("eva".to_string()),
        };

        modify_product(&repo, form).await.expect("updated");
    }

    #[actix_web::test]
    async fn load_products_echoes_filters() {
        let mut repo = MockRepository::new();
        repo.expect_list_products()
            .times(1)
            .withf(|query| query.status == Some(RecordStatus::Inactive))
            .returning(|_| Ok((0, Vec::new())));

        let query = PageQuery {
            search: None,
            status: Some("I".to_string()),
            page: None,
        };

        let data = load_products(&repo, query).await.expect("page data");

        assert_eq!(data.status, Some(RecordStatus::Inactive));
        assert!(data.items.items.is_empty());
        assert!(data.items.pages.is_empty());
    }
}
