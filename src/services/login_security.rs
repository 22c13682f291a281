use chrono::Utc;

use crate::domain::login_record::LoginRecord;
use crate::forms::EditPayload;
use crate::forms::login_security::{AddLoginRecordForm, EditLoginRecordForm};
use crate::repository::{LoginRecordReader, LoginRecordWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the login record list page.
pub async fn load_login_records<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<LoginRecord>>
where
    R: LoginRecordReader + ?Sized,
{
    let (total, items) = repo
        .list_login_records(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a login record from the add dialog.
pub async fn create_login_record<R>(
    repo: &R,
    form: AddLoginRecordForm,
) -> ServiceResult<LoginRecord>
where
    R: LoginRecordWriter + ?Sized,
{
    let payload = form
        .into_new_login_record(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_login_record(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored login record.
pub async fn modify_login_record<R>(
    repo: &R,
    form: EditLoginRecordForm,
) -> ServiceResult<LoginRecord>
where
    R: LoginRecordReader + LoginRecordWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_login_record()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_login_record_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_login_record(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::RecordStatus;
    use crate::domain::login_record::NewLoginRecord;
    use crate::repository::mock::MockRepository;

    fn record(id: i32) -> LoginRecord {
        LoginRecord {
            id,
            customer_id: 4,
            last_login: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(10, 30, 0))
                .expect("timestamp"),
            failed_attempts: 0,
            verified: true,
            status: RecordStatus::Active,
            modified_by: "eva".to_string(),
        }
    }

    #[actix_web::test]
    async fn create_login_record_stamps_utc_time() {
        let before = Utc::now().naive_utc();
        let mut repo = MockRepository::new();
        repo.expect_create_login_record()
            .times(1)
            .withf(move |new: &NewLoginRecord| {
                new.last_login >= before && new.failed_attempts == 2 && !new.verified
            })
            .returning(|_| Ok(record(5)));

        let form = AddLoginRecordForm {
            customer_id: 4,
            failed_attempts: 2,
            verified: false,
            modified_by: "eva".to_string(),
        };

        assert_eq!(create_login_record(&repo, form).await.expect("record").id, 5);
    }

    #[actix_web::test]
    async fn modify_login_record_keeps_last_login() {
        let mut repo = MockRepository::new();
        let stored = record(5);
        let last_login = stored.last_login;
        repo.expect_get_login_record_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update_login_record()
            .times(1)
            .withf(move |updated: &LoginRecord| {
                updated.last_login == last_login && updated.failed_attempts == 5
            })
            .returning(|updated| Ok(updated.clone()));

        let form = EditLoginRecordForm {
            id: 5,
            customer_id: 4,
            failed_attempts: 5,
            verified: true,
            status: "inactivo".to_string(),
            modified_by: "luis".to_string(),
        };

        let updated = modify_login_record(&repo, form).await.expect("updated");

        assert_eq!(updated.status, RecordStatus::Inactive);
    }
}
