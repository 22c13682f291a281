use chrono::Utc;

use crate::domain::purchase_record::PurchaseRecord;
use crate::forms::EditPayload;
use crate::forms::order_history::{AddPurchaseRecordForm, EditPurchaseRecordForm};
use crate::repository::{PurchaseRecordReader, PurchaseRecordWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the purchase record list page.
pub async fn load_purchase_records<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<PurchaseRecord>>
where
    R: PurchaseRecordReader + ?Sized,
{
    let (total, items) = repo
        .list_purchase_records(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a purchase record from the add dialog.
pub async fn create_purchase_record<R>(
    repo: &R,
    form: AddPurchaseRecordForm,
) -> ServiceResult<PurchaseRecord>
where
    R: PurchaseRecordWriter + ?Sized,
{
    let payload = form
        .into_new_purchase_record(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_purchase_record(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored purchase record.
pub async fn modify_purchase_record<R>(
    repo: &R,
    form: EditPurchaseRecordForm,
) -> ServiceResult<PurchaseRecord>
where
    R: PurchaseRecordReader + PurchaseRecordWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_purchase_record()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_purchase_record_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_purchase_record(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}
