use crate::domain::supplier::Supplier;
use crate::forms::EditPayload;
use crate::forms::suppliers::{AddSupplierForm, EditSupplierForm};
use crate::repository::{SupplierReader, SupplierWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the supplier list page.
pub async fn load_suppliers<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    let (total, items) = repo
        .list_suppliers(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a supplier from the add dialog.
pub async fn create_supplier<R>(repo: &R, form: AddSupplierForm) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    let payload = form
        .into_new_supplier()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_supplier(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored supplier.
pub async fn modify_supplier<R>(repo: &R, form: EditSupplierForm) -> ServiceResult<Supplier>
where
    R: SupplierReader + SupplierWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_supplier()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_supplier_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_supplier(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::supplier::NewSupplier;
    use crate::domain::{AuditTrail, ListQuery, RecordStatus};
    use crate::repository::mock::MockRepository;

    fn supplier(id: i32) -> Supplier {
        Supplier {
            id,
            name: "Cerámicas del Sur".to_string(),
            contact_name: "Pedro".to_string(),
            email: "ventas@ceramicas.com".to_string(),
            phone: "555-0101".to_string(),
            address: "Ruta 5 km 12".to_string(),
            status: RecordStatus::Active,
            audit: AuditTrail::default(),
        }
    }

    #[actix_web::test]
    async fn create_supplier_lowercases_email() {
        let mut repo = MockRepository::new();
        repo.expect_create_supplier()
            .times(1)
            .withf(|new: &NewSupplier| new.email == "ventas@ceramicas.com")
            .returning(|_| Ok(supplier(2)));

        let form = AddSupplierForm {
            name: "Cerámicas del Sur".to_string(),
            contact_name: "Pedro".to_string(),
            email: "Ventas@Ceramicas.com".to_string(),
            phone: "555-0101".to_string(),
            address: "Ruta 5 km 12".to_string(),
            status: "A".to_string(),
            modified_by: None,
        };

        assert_eq!(create_supplier(&repo, form).await.expect("supplier").id, 2);
    }

    #[actix_web::test]
    async fn load_suppliers_ignores_unknown_status() {
        let mut repo = MockRepository::new();
        repo.expect_list_suppliers()
            .withf(|query: &ListQuery| query.status.is_none())
            .returning(|_| Ok((2, vec![supplier(1), supplier(2)])));

        let query = PageQuery {
            search: None,
            status: Some("todos".to_string()),
            page: None,
        };
        let data = load_suppliers(&repo, query).await.expect("suppliers");

        assert_eq!(data.items.items.len(), 2);
        assert!(data.status.is_none());
    }
}
