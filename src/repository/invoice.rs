use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::invoice::{NewInvoice, Invoice};
use crate::models::invoice::{Invoice as DbInvoice, InvoiceBody};
use crate::repository::catalog_paths::INVOICES;
use crate::repository::{
    InvoiceReader, InvoiceWriter, RepositoryResult, RestRepository, fetch_list, fetch_one, insert,
    replace,
};

#[async_trait]
impl InvoiceReader for RestRepository {
    async fn list_invoices(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Invoice>)> {
        fetch_list::<DbInvoice, Invoice>(&self.catalog, INVOICES, query).await
    }

    async fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>> {
        fetch_one::<DbInvoice, Invoice>(&self.catalog, INVOICES, id).await
    }
}

#[async_trait]
impl InvoiceWriter for RestRepository {
    async fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice> {
        insert::<_, DbInvoice, Invoice>(&self.catalog, INVOICES, &InvoiceBody::from(new_invoice))
            .await
    }

    async fn update_invoice(&self, invoice: &Invoice) -> RepositoryResult<Invoice> {
        replace::<_, DbInvoice, Invoice>(
            &self.catalog,
            INVOICES,
            invoice.id,
            &InvoiceBody::from(invoice),
            invoice.clone(),
        )
        .await
    }
}
