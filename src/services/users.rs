use chrono::Utc;

use crate::domain::user::User;
use crate::forms::EditPayload;
use crate::forms::users::{AddUserForm, EditUserForm};
use crate::repository::{UserReader, UserWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

pub async fn load_users<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<User>>
where
    R: UserReader + ?Sized,
{
    let (total, items) = repo
        .list_users(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Registers a new back-office user.
pub async fn create_user<R>(repo: &R, form: AddUserForm) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let new_user = form
        .into_new_user(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_user(&new_user).await.map_err(ServiceError::from)
}

/// Updates a user; the password is only sent when a new one was typed.
pub async fn modify_user<R>(repo: &R, form: EditUserForm) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_user()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_user_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let (user, password) = update.apply_to(current);
    repo.update_user(&user, password)
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::RecordStatus;
    use crate::repository::mock::MockRepository;

    fn registered_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 11, 5)
            .and_then(|d| d.and_hms_opt(7, 45, 0))
            .expect("timestamp")
    }

    fn user(id: i32) -> User {
        User {
            id,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role_id: 1,
            active: true,
            registered_at: registered_at(),
            status: RecordStatus::Active,
            modified_by: "eva".to_string(),
        }
    }

    fn edit_form(password: Option<&str>) -> EditUserForm {
        EditUserForm {
            id: 2,
            name: "Ana T.".to_string(),
            email: "ana@example.com".to_string(),
            password: password.map(str::to_string),
            role_id: 3,
            active: true,
            status: "activo".to_string(),
            modified_by: "luis".to_string(),
        }
    }

    #[actix_web::test]
    async fn modify_user_without_password_keeps_existing_one() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id()
            .returning(|id| Ok(Some(user(id))));
        repo.expect_update_user()
            .times(1)
            .withf(|updated: &User, password: &Option<String>| {
                password.is_none()
                    && updated.registered_at == registered_at()
                    && updated.role_id == 3
            })
            .returning(|updated, _| Ok(updated.clone()));

        let updated = modify_user(&repo, edit_form(None)).await.expect("updated");

        assert_eq!(updated.name, "Ana T.");
    }

    #[actix_web::test]
    async fn modify_user_forwards_new_password() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id()
            .returning(|id| Ok(Some(user(id))));
        repo.expect_update_user()
            .times(1)
            .withf(|_, password: &Option<String>| password.as_deref() == Some("nueva-clave"))
            .returning(|updated, _| Ok(updated.clone()));

        modify_user(&repo, edit_form(Some("nueva-clave")))
            .await
            .expect("updated");
    }
}
