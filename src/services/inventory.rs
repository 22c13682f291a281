use crate::domain::inventory::InventoryItem;
use crate::forms::EditPayload;
use crate::forms::inventory::{AddInventoryItemForm, EditInventoryItemForm};
use crate::repository::{InventoryReader, InventoryWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the inventory item list page.
pub async fn load_inventory_items<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<InventoryItem>>
where
    R: InventoryReader + ?Sized,
{
    let (total, items) = repo
        .list_inventory_items(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates an inventory item from the add dialog.
pub async fn create_inventory_item<R>(
    repo: &R,
    form: AddInventoryItemForm,
) -> ServiceResult<InventoryItem>
where
    R: InventoryWriter + ?Sized,
{
    let payload = form
        .into_new_inventory_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_inventory_item(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored inventory item.
pub async fn modify_inventory_item<R>(
    repo: &R,
    form: EditInventoryItemForm,
) -> ServiceResult<InventoryItem>
where
    R: InventoryReader + InventoryWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_inventory_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_inventory_item_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_inventory_item(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}
