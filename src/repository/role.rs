use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::role::{NewRole, Role};
use crate::models::role::Role as DbRole;
use crate::repository::commerce_paths::ROLES;
use crate::repository::{
    RepositoryResult, RestRepository, RoleReader, RoleWriter, fetch_list, fetch_one, insert,
    replace,
};

#[async_trait]
impl RoleReader for RestRepository {
    async fn list_roles(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Role>)> {
        fetch_list::<DbRole, Role>(&self.commerce, ROLES, query).await
    }

    async fn get_role_by_id(&self, id: i32) -> RepositoryResult<Option<Role>> {
        fetch_one::<DbRole, Role>(&self.commerce, ROLES, id).await
    }
}

#[async_trait]
impl RoleWriter for RestRepository {
    async fn create_role(&self, new_role: &NewRole) -> RepositoryResult<Role> {
        insert::<_, DbRole, Role>(&self.commerce, ROLES, &DbRole::from(new_role)).await
    }

    async fn update_role(&self, role: &Role) -> RepositoryResult<Role> {
        replace::<_, DbRole, Role>(
            &self.commerce,
            ROLES,
            role.id,
            &DbRole::from(role),
            role.clone(),
        )
        .await
    }
}
