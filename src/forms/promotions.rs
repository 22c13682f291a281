use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::domain::promotion::{NewPromotion, UpdatePromotion};
use crate::forms::{
    EditPayload, FormError, FormResult, NAME_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none,
    optional_text, parse_bounded_amount, parse_date, parse_status, required_text,
    sanitize_multiline_text,
};

/// Form payload emitted when submitting the "Add promotion" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPromotionForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub description: String,
    /// Percentage between 0 and 100.
    pub discount_percent: String,
    pub starts_on: String,
    pub ends_on: String,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddPromotionForm {
    pub fn into_new_promotion(self) -> FormResult<NewPromotion> {
        self.validate()?;

        let (starts_on, ends_on) = parse_period(&self.starts_on, &self.ends_on)?;
        Ok(NewPromotion {
            name: required_text(&self.name, "name")?,
            description: sanitize_multiline_text(&self.description),
            discount_percent: parse_bounded_amount(
                &self.discount_percent,
                "discount",
                Decimal::ONE_HUNDRED,
            )?,
            starts_on,
            ends_on,
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditPromotionForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub description: String,
    pub discount_percent: String,
    pub starts_on: String,
    pub ends_on: String,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditPromotionForm {
    pub fn into_update_promotion(self) -> FormResult<EditPayload<UpdatePromotion>> {
        self.validate()?;

        let (starts_on, ends_on) = parse_period(&self.starts_on, &self.ends_on)?;
        Ok(EditPayload {
            id: self.id,
            update: UpdatePromotion {
                name: required_text(&self.name, "name")?,
                description: sanitize_multiline_text(&self.description),
                discount_percent: parse_bounded_amount(
                    &self.discount_percent,
                    "discount",
                    Decimal::ONE_HUNDRED,
                )?,
                starts_on,
                ends_on,
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}

fn parse_period(starts_on: &str, ends_on: &str) -> FormResult<(NaiveDate, NaiveDate)> {
    let starts_on = parse_date(starts_on, "start date")?;
    let ends_on = parse_date(ends_on, "end date")?;
    if ends_on < starts_on {
        return Err(FormError::DateRange);
    }
    Ok((starts_on, ends_on))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(discount: &str, starts_on: &str, ends_on: &str) -> AddPromotionForm {
        AddPromotionForm {
            name: "Verano".into(),
            description: String::new(),
            discount_percent: discount.into(),
            starts_on: starts_on.into(),
            ends_on: ends_on.into(),
            status: "activo".into(),
            modified_by: None,
        }
    }

    #[test]
    fn single_day_promotion_is_valid() {
        let promotion = form("15", "2024-12-01", "2024-12-01")
            .into_new_promotion()
            .expect("conversion");

        assert_eq!(promotion.starts_on, promotion.ends_on);
        assert_eq!(promotion.discount_percent, Decimal::new(15, 0));
    }

    #[test]
    fn end_before_start_is_rejected() {
        assert!(matches!(
            form("15", "2024-12-10", "2024-12-01").into_new_promotion(),
            Err(FormError::DateRange)
        ));
    }

    #[test]
    fn discount_above_hundred_is_rejected() {
        assert!(matches!(
            form("120", "2024-12-01", "2024-12-31").into_new_promotion(),
            Err(FormError::InvalidAmount { field: "discount", .. })
        ));
    }
}
