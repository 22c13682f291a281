use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::user::{LoginCredentials, NewUser, User};
use crate::models::user::{LoginRequest, User as DbUser};
use crate::repository::commerce_paths::USERS;
use crate::repository::{
    LoginGateway, RepositoryError, RepositoryResult, RestRepository, UserReader, UserWriter,
    fetch_list, fetch_one, insert, replace,
};

#[async_trait]
impl UserReader for RestRepository {
    async fn list_users(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<User>)> {
        fetch_list::<DbUser, User>(&self.commerce, USERS, query).await
    }

    async fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        fetch_one::<DbUser, User>(&self.commerce, USERS, id).await
    }
}

#[async_trait]
impl UserWriter for RestRepository {
    async fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        insert::<_, DbUser, User>(&self.commerce, USERS, &DbUser::from(new_user)).await
    }

    async fn update_user(&self, user: &User, password: Option<String>) -> RepositoryResult<User> {
        let body = DbUser::for_update(user, password.as_deref());
        replace::<_, DbUser, User>(&self.commerce, USERS, user.id, &body, user.clone()).await
    }
}

#[async_trait]
impl LoginGateway for RestRepository {
    async fn submit_login(&self, credentials: &LoginCredentials) -> RepositoryResult<()> {
        log::debug!("submitting login for {}", credentials.email);
        let body = LoginRequest::from(credentials);
        match self.commerce.post::<serde_json::Value, _>(USERS, &body).await {
            // Any 2xx counts, whatever the body says.
            Ok(_) | Err(RepositoryError::Decode(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
