use async_trait::async_trait;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::{ListQuery, RecordStatus};
use crate::models::customer::Customer as DbCustomer;
use crate::repository::commerce_paths::CUSTOMERS;
use crate::repository::{
    CustomerReader, CustomerWriter, RepositoryError, RepositoryResult, RestRepository, fetch_list,
    fetch_one, insert, replace,
};

#[async_trait]
impl CustomerReader for RestRepository {
    async fn list_customers(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        fetch_list::<DbCustomer, Customer>(&self.commerce, CUSTOMERS, query).await
    }

    async fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>> {
        fetch_one::<DbCustomer, Customer>(&self.commerce, CUSTOMERS, id).await
    }
}

#[async_trait]
impl CustomerWriter for RestRepository {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        insert::<_, DbCustomer, Customer>(
            &self.commerce,
            CUSTOMERS,
            &DbCustomer::from(new_customer),
        )
        .await
    }

    async fn update_customer(&self, customer: &Customer) -> RepositoryResult<Customer> {
        replace::<_, DbCustomer, Customer>(
            &self.commerce,
            CUSTOMERS,
            customer.id,
            &DbCustomer::from(customer),
            customer.clone(),
        )
        .await
    }

    async fn deactivate_customer(&self, id: i32) -> RepositoryResult<Customer> {
        let mut customer = self
            .get_customer_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        customer.status = RecordStatus::Inactive;
        self.update_customer(&customer).await
    }
}
