use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::login_record::{NewLoginRecord, LoginRecord};
use crate::models::login_record::LoginRecord as DbLoginRecord;
use crate::repository::commerce_paths::LOGINS;
use crate::repository::{
    LoginRecordReader, LoginRecordWriter, RepositoryResult, RestRepository, fetch_list, fetch_one,
    insert, replace,
};

#[async_trait]
impl LoginRecordReader for RestRepository {
    async fn list_login_records(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<LoginRecord>)> {
        fetch_list::<DbLoginRecord, LoginRecord>(&self.commerce, LOGINS, query).await
    }

    async fn get_login_record_by_id(&self, id: i32) -> RepositoryResult<Option<LoginRecord>> {
        fetch_one::<DbLoginRecord, LoginRecord>(&self.commerce, LOGINS, id).await
    }
}

#[async_trait]
impl LoginRecordWriter for RestRepository {
    async fn create_login_record(
        &self,
        new_record: &NewLoginRecord,
    ) -> RepositoryResult<LoginRecord> {
        insert::<_, DbLoginRecord, LoginRecord>(
            &self.commerce,
            LOGINS,
            &DbLoginRecord::from(new_record),
        )
        .await
    }

    async fn update_login_record(&self, record: &LoginRecord) -> RepositoryResult<LoginRecord> {
        replace::<_, DbLoginRecord, LoginRecord>(
            &self.commerce,
            LOGINS,
            record.id,
            &DbLoginRecord::from(record),
            record.clone(),
        )
        .await
    }
}
