use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::login_record::{NewLoginRecord, UpdateLoginRecord};
use crate::forms::{EditPayload, FormResult, NAME_MAX_LEN, parse_status, required_text};

#[derive(Debug, Deserialize, Validate)]
pub struct AddLoginRecordForm {
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub failed_attempts: i32,
    #[serde(default)]
    pub verified: bool,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddLoginRecordForm {
    pub fn into_new_login_record(self, now: NaiveDateTime) -> FormResult<NewLoginRecord> {
        self.validate()?;

        Ok(NewLoginRecord {
            customer_id: self.customer_id,
            last_login: now,
            failed_attempts: self.failed_attempts,
            verified: self.verified,
            modified_by: required_text(&self.modified_by, "modified by")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditLoginRecordForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[validate(range(min = 0))]
    pub failed_attempts: i32,
    #[serde(default)]
    pub verified: bool,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditLoginRecordForm {
    pub fn into_update_login_record(self) -> FormResult<EditPayload<UpdateLoginRecord>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateLoginRecord {
                customer_id: self.customer_id,
                failed_attempts: self.failed_attempts,
                verified: self.verified,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormError;

    #[test]
    fn failed_attempts_cannot_be_negative() {
        let form = EditLoginRecordForm {
            id: 1,
            customer_id: 1,
            failed_attempts: -1,
            verified: true,
            status: "activo".into(),
            modified_by: "eva".into(),
        };

        assert!(matches!(form.into_update_login_record(), Err(FormError::Validation(_))));
    }
}
