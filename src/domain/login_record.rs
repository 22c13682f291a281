use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// Login-security bookkeeping for a customer account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRecord {
    pub id: i32,
    pub customer_id: i32,
    pub last_login: NaiveDateTime,
    pub failed_attempts: i32,
    pub verified: bool,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl Searchable for LoginRecord {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.customer_id.to_string(), self.modified_by.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoginRecord {
    pub customer_id: i32,
    pub last_login: NaiveDateTime,
    pub failed_attempts: i32,
    pub verified: bool,
    pub modified_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateLoginRecord {
    pub customer_id: i32,
    pub failed_attempts: i32,
    pub verified: bool,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdateLoginRecord {
    /// Produce the full record, keeping the last login time.
    pub fn apply_to(self, current: LoginRecord) -> LoginRecord {
        LoginRecord {
            id: current.id,
            customer_id: self.customer_id,
            last_login: current.last_login,
            failed_attempts: self.failed_attempts,
            verified: self.verified,
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}
