use crate::domain::role::Role;
use crate::forms::EditPayload;
use crate::forms::roles::{AddRoleForm, EditRoleForm};
use crate::repository::{RoleReader, RoleWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the role list page.
pub async fn load_roles<R>(repo: &R, query: PageQuery) -> ServiceResult<PageData<Role>>
where
    R: RoleReader + ?Sized,
{
    let (total, items) = repo
        .list_roles(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a role from the add dialog.
pub async fn create_role<R>(repo: &R, form: AddRoleForm) -> ServiceResult<Role>
where
    R: RoleWriter + ?Sized,
{
    let payload = form
        .into_new_role()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_role(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored role.
pub async fn modify_role<R>(repo: &R, form: EditRoleForm) -> ServiceResult<Role>
where
    R: RoleReader + RoleWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_role()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_role_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_role(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}
