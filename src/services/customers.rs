use crate::domain::customer::Customer;
use crate::forms::EditPayload;
use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the customers overview page.
pub async fn load_customers<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let (total, items) = repo
        .list_customers(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a new customer profile.
pub async fn create_customer<R>(repo: &R, form: AddCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let new_customer = form
        .into_new_customer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_customer(&new_customer)
        .await
        .map_err(ServiceError::from)
}

/// Updates an existing customer profile.
pub async fn modify_customer<R>(repo: &R, form: EditCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_customer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_customer_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_customer(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

/// Marks a customer inactive. Customers are never removed from the backend.
pub async fn deactivate_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.deactivate_customer(customer_id)
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordStatus;
    use crate::domain::customer::NewCustomer;
    use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn customer(id: i32, first_name: &str) -> Customer {
        Customer {
            id,
            user_id: id * 10,
            first_name: first_name.to_string(),
            last_name: "Torres".to_string(),
            phone: "555 0101".to_string(),
            address: "Calle 8".to_string(),
            status: RecordStatus::Active,
        }
    }

    fn edit_form(id: i32) -> EditCustomerForm {
        EditCustomerForm {
            id,
            user_id: 70,
            first_name: "Ana María".to_string(),
            last_name: "Torres".to_string(),
            phone: String::new(),
            address: "Calle 9".to_string(),
            status: "activo".to_string(),
        }
    }

    #[actix_web::test]
    async fn load_customers_passes_filters_and_paginates() {
        let mut repo = MockRepository::new();
        repo.expect_list_customers()
            .times(1)
            .withf(|query| {
                query.search.as_deref() == Some("torres")
                    && query.status == Some(RecordStatus::Active)
                    && query
                        .pagination
                        .is_some_and(|p| p.page == 2 && p.per_page == DEFAULT_ITEMS_PER_PAGE)
            })
            .returning(|_| Ok((25, vec![customer(21, "Ana")])));

        let query = PageQuery {
            search: Some("torres".to_string()),
            status: Some("activo".to_string()),
            page: Some(2),
        };

        let data = load_customers(&repo, query).await.expect("page data");

        assert_eq!(data.items.items.len(), 1);
        assert_eq!(data.items.page, 2);
        assert_eq!(data.items.pages, vec![Some(1), Some(2)]);
        assert_eq!(data.search.as_deref(), Some("torres"));
    }

    #[actix_web::test]
    async fn create_customer_rejects_invalid_form_without_calling_backend() {
        let mut repo = MockRepository::new();
        repo.expect_create_customer().times(0);

        let form = AddCustomerForm {
            user_id: 1,
            first_name: "  ".to_string(),
            last_name: String::new(),
            phone: String::new(),
            address: String::new(),
        };

        let result = create_customer(&repo, form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn create_customer_returns_stored_record() {
        let mut repo = MockRepository::new();
        repo.expect_create_customer()
            .times(1)
            .withf(|new: &NewCustomer| new.first_name == "Ana" && new.user_id == 4)
            .returning(|_| Ok(customer(12, "Ana")));

        let form = AddCustomerForm {
            user_id: 4,
            first_name: " Ana ".to_string(),
            last_name: "Torres".to_string(),
            phone: String::new(),
            address: String::new(),
        };

        let created = create_customer(&repo, form).await.expect("created");

        assert_eq!(created.id, 12);
    }

    #[actix_web::test]
    async fn modify_customer_replaces_record_by_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id()
            .times(1)
            .withf(|id| *id == 5)
            .returning(|id| Ok(Some(customer(id, "Ana"))));
        repo.expect_update_customer()
            .times(1)
            .withf(|updated: &Customer| {
                updated.id == 5 && updated.first_name == "Ana María" && updated.user_id == 70
            })
            .returning(|updated| Ok(updated.clone()));

        let updated = modify_customer(&repo, edit_form(5)).await.expect("updated");

        assert_eq!(updated.address, "Calle 9");
    }

    #[actix_web::test]
    async fn modify_customer_reports_missing_record() {
        let mut repo = MockRepository::new();
        repo.expect_get_customer_by_id().returning(|_| Ok(None));
        repo.expect_update_customer().times(0);

        let result = modify_customer(&repo, edit_form(99)).await;

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[actix_web::test]
    async fn deactivate_customer_propagates_backend_failure() {
        let mut repo = MockRepository::new();
        repo.expect_deactivate_customer().returning(|_| {
            Err(RepositoryError::Backend {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let result = deactivate_customer(&repo, 3).await;

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
