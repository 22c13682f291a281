use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::purchase_record::{NewPurchaseRecord, PurchaseRecord};
use crate::models::purchase_record::PurchaseRecord as DbPurchaseRecord;
use crate::repository::commerce_paths::ORDER_HISTORY;
use crate::repository::{
    PurchaseRecordReader, PurchaseRecordWriter, RepositoryResult, RestRepository, fetch_list,
    fetch_one, insert, replace,
};

#[async_trait]
impl PurchaseRecordReader for RestRepository {
    async fn list_purchase_records(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<PurchaseRecord>)> {
        fetch_list::<DbPurchaseRecord, PurchaseRecord>(&self.commerce, ORDER_HISTORY, query).await
    }

    async fn get_purchase_record_by_id(&self, id: i32) -> RepositoryResult<Option<PurchaseRecord>> {
        fetch_one::<DbPurchaseRecord, PurchaseRecord>(&self.commerce, ORDER_HISTORY, id).await
    }
}

#[async_trait]
impl PurchaseRecordWriter for RestRepository {
    async fn create_purchase_record(
        &self,
        new_record: &NewPurchaseRecord,
    ) -> RepositoryResult<PurchaseRecord> {
        insert::<_, DbPurchaseRecord, PurchaseRecord>(
            &self.commerce,
            ORDER_HISTORY,
            &DbPurchaseRecord::from(new_record),
        )
        .await
    }

    async fn update_purchase_record(
        &self,
        record: &PurchaseRecord,
    ) -> RepositoryResult<PurchaseRecord> {
        replace::<_, DbPurchaseRecord, PurchaseRecord>(
            &self.commerce,
            ORDER_HISTORY,
            record.id,
            &DbPurchaseRecord::from(record),
            record.clone(),
        )
        .await
    }
}
