use crate::domain::invoice_detail::InvoiceDetail;
use crate::forms::EditPayload;
use crate::forms::invoice_details::{AddInvoiceDetailForm, EditInvoiceDetailForm};
use crate::repository::{InvoiceDetailReader, InvoiceDetailWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the invoice detail list page.
pub async fn load_invoice_details<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<InvoiceDetail>>
where
    R: InvoiceDetailReader + ?Sized,
{
    let (total, items) = repo
        .list_invoice_details(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates an invoice detail from the add dialog.
pub async fn create_invoice_detail<R>(
    repo: &R,
    form: AddInvoiceDetailForm,
) -> ServiceResult<InvoiceDetail>
where
    R: InvoiceDetailWriter + ?Sized,
{
    let payload = form
        .into_new_invoice_detail()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_invoice_detail(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored invoice detail.
pub async fn modify_invoice_detail<R>(
    repo: &R,
    form: EditInvoiceDetailForm,
) -> ServiceResult<InvoiceDetail>
where
    R: InvoiceDetailReader + InvoiceDetailWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_invoice_detail()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_invoice_detail_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_invoice_detail(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}
