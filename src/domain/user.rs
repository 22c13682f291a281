use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// Back-office user account. Passwords are write-only and never read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier of the user.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Login email, stored in lowercase.
    pub email: String,
    /// Role granted to the user.
    pub role_id: i32,
    /// Account enabled flag, separate from the record status.
    pub active: bool,
    /// Timestamp when the account was registered.
    pub registered_at: NaiveDateTime,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl Searchable for User {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone()]
    }
}

/// Payload required to create a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i32,
    pub active: bool,
    pub registered_at: NaiveDateTime,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl NewUser {
    /// Build the payload, normalising the email to lowercase.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role_id: i32,
        active: bool,
        registered_at: NaiveDateTime,
        status: RecordStatus,
        modified_by: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into().to_lowercase(),
            password: password.into(),
            role_id,
            active,
            registered_at,
            status,
            modified_by: modified_by.into(),
        }
    }
}

/// Replacement values; `password` is only sent when the operator typed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub role_id: i32,
    pub active: bool,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdateUser {
    /// Split into the full record and the optional new password.
    pub fn apply_to(self, current: User) -> (User, Option<String>) {
        let user = User {
            id: current.id,
            name: self.name,
            email: self.email.to_lowercase(),
            role_id: self.role_id,
            active: self.active,
            registered_at: current.registered_at,
            status: self.status,
            modified_by: self.modified_by,
        };
        (user, self.password)
    }
}

/// Credentials typed into the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}
