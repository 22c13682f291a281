use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::inventory::{NewInventoryItem, InventoryItem};
use crate::models::inventory::{InventoryItem as DbInventoryItem, InventoryItemBody};
use crate::repository::catalog_paths::INVENTORY;
use crate::repository::{
    InventoryReader, InventoryWriter, RepositoryResult, RestRepository, fetch_list, fetch_one,
    insert, replace,
};

#[async_trait]
impl InventoryReader for RestRepository {
    async fn list_inventory_items(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<InventoryItem>)> {
        fetch_list::<DbInventoryItem, InventoryItem>(&self.catalog, INVENTORY, query).await
    }

    async fn get_inventory_item_by_id(&self, id: i32) -> RepositoryResult<Option<InventoryItem>> {
        fetch_one::<DbInventoryItem, InventoryItem>(&self.catalog, INVENTORY, id).await
    }
}

#[async_trait]
impl InventoryWriter for RestRepository {
    async fn create_inventory_item(
        &self,
        new_item: &NewInventoryItem,
    ) -> RepositoryResult<InventoryItem> {
        insert::<_, DbInventoryItem, InventoryItem>(
            &self.catalog,
            INVENTORY,
            &InventoryItemBody::from(new_item),
        )
        .await
    }

    async fn update_inventory_item(&self, item: &InventoryItem) -> RepositoryResult<InventoryItem> {
        replace::<_, DbInventoryItem, InventoryItem>(
            &self.catalog,
            INVENTORY,
            item.id,
            &InventoryItemBody::from(item),
            item.clone(),
        )
        .await
    }
}
