use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::invoice_detail::{NewInvoiceDetail, InvoiceDetail};
use crate::models::invoice_detail::{InvoiceDetail as DbInvoiceDetail, InvoiceDetailBody};
use crate::repository::catalog_paths::INVOICE_DETAILS;
use crate::repository::{
    InvoiceDetailReader, InvoiceDetailWriter, RepositoryResult, RestRepository, fetch_list,
    fetch_one, insert, replace,
};

#[async_trait]
impl InvoiceDetailReader for RestRepository {
    async fn list_invoice_details(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<InvoiceDetail>)> {
        fetch_list::<DbInvoiceDetail, InvoiceDetail>(&self.catalog, INVOICE_DETAILS, query).await
    }

    async fn get_invoice_detail_by_id(&self, id: i32) -> RepositoryResult<Option<InvoiceDetail>> {
        fetch_one::<DbInvoiceDetail, InvoiceDetail>(&self.catalog, INVOICE_DETAILS, id).await
    }
}

#[async_trait]
impl InvoiceDetailWriter for RestRepository {
    async fn create_invoice_detail(
        &self,
        new_detail: &NewInvoiceDetail,
    ) -> RepositoryResult<InvoiceDetail> {
        insert::<_, DbInvoiceDetail, InvoiceDetail>(
            &self.catalog,
            INVOICE_DETAILS,
            &InvoiceDetailBody::from(new_detail),
        )
        .await
    }

    async fn update_invoice_detail(
        &self,
        detail: &InvoiceDetail,
    ) -> RepositoryResult<InvoiceDetail> {
        replace::<_, DbInvoiceDetail, InvoiceDetail>(
            &self.catalog,
            INVOICE_DETAILS,
            detail.id,
            &InvoiceDetailBody::from(detail),
            detail.clone(),
        )
        .await
    }
}
