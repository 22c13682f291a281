use crate::forms::auth::LoginForm;
use crate::repository::LoginGateway;
use crate::services::{ServiceError, ServiceResult};

/// Checks the credentials against the users backend.
///
/// No session is created; a successful check only greets the operator.
pub async fn login<R>(repo: &R, form: LoginForm) -> ServiceResult<()>
where
    R: LoginGateway + ?Sized,
{
    let credentials = form
        .into_credentials()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.submit_login(&credentials)
        .await
        .map_err(ServiceError::from)
}
