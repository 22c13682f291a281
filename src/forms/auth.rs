use serde::Deserialize;
use validator::Validate;

use crate::domain::user::LoginCredentials;
use crate::forms::FormResult;

/// Credentials posted from the login page.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginForm {
    pub fn into_credentials(self) -> FormResult<LoginCredentials> {
        self.validate()?;

        Ok(LoginCredentials {
            email: self.email.trim().to_string(),
            password: self.password,
        })
    }
}
