use crate::domain::invoice::Invoice;
use crate::forms::EditPayload;
use crate::forms::invoices::{AddInvoiceForm, EditInvoiceForm};
use crate::repository::{InvoiceReader, InvoiceWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the invoice list page.
pub async fn load_invoices<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<Invoice>>
where
    R: InvoiceReader + ?Sized,
{
    let (total, items) = repo
        .list_invoices(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates an invoice from the add dialog.
pub async fn create_invoice<R>(repo: &R, form: AddInvoiceForm) -> ServiceResult<Invoice>
where
    R: InvoiceWriter + ?Sized,
{
    let payload = form
        .into_new_invoice()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_invoice(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored invoice.
pub async fn modify_invoice<R>(repo: &R, form: EditInvoiceForm) -> ServiceResult<Invoice>
where
    R: InvoiceReader + InvoiceWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_invoice()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_invoice_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_invoice(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}
