//! Normalized and persisted submission shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ImageSource;

/// Draft values after validation: trimmed, typed, empty optionals as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub image: ImageSource,
    pub budget: Decimal,
    pub material: Option<String>,
    pub comments: Option<String>,
    pub name: String,
    pub phone: String,
}

impl NormalizedFields {
    /// Build the row to insert once the image address is known.
    pub fn to_record(&self, product_url: String) -> SubmissionRecord {
        SubmissionRecord {
            product_url,
            budget: self.budget,
            material: self.material.clone(),
            extra_comments: self.comments.clone(),
            name: Some(self.name.clone()),
            phone_number: Some(self.phone.clone()),
        }
    }
}

/// Row written to the `submissions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub product_url: String,
    pub budget: Decimal,
    pub material: Option<String>,
    pub extra_comments: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// Row returned by the record store after an insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InsertedSubmission {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub product_url: String,
    pub budget: Decimal,
    pub material: Option<String>,
    pub extra_comments: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_maps_comments_to_extra_comments() {
        let fields = NormalizedFields {
            image: ImageSource::Url("https://shop.example/item".to_string()),
            budget: Decimal::new(125, 1),
            material: None,
            comments: Some("matte finish".to_string()),
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
        };

        let record = fields.to_record("https://shop.example/item".to_string());
        assert_eq!(record.extra_comments.as_deref(), Some("matte finish"));
        assert_eq!(record.material, None);
        assert_eq!(record.phone_number.as_deref(), Some("555-0100"));
        assert_eq!(record.budget, Decimal::new(125, 1));
    }

    #[test]
    fn record_serializes_nulls_not_empty_strings() {
        let record = SubmissionRecord {
            product_url: "https://x/y.png".to_string(),
            budget: Decimal::new(40, 0),
            material: None,
            extra_comments: None,
            name: Some("Ada".to_string()),
            phone_number: Some("555".to_string()),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["material"].is_null());
        assert!(json["extra_comments"].is_null());
    }

    #[test]
    fn budget_serializes_as_exact_decimal_string() {
        let budget: Decimal = "1234567890.123456789012345678".parse().unwrap();
        let row = InsertedSubmission {
            id: Uuid::nil(),
            created_at: Utc::now(),
            product_url: "https://x/y.png".to_string(),
            budget,
            material: None,
            extra_comments: None,
            name: Some("Ada".to_string()),
            phone_number: Some("555".to_string()),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["budget"], "1234567890.123456789012345678");

        let back: InsertedSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(back.budget, budget);
    }
}
