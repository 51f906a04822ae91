//! Field validation for submission drafts.
//!
//! Checks run in a fixed order and the first failure wins, so a draft with
//! several problems always reports the same one.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ErrorMetadata, LogLevel};
use crate::models::{ImageMode, ImageSource, NormalizedFields, SubmissionDraft};

/// Reasons a draft cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing image")]
    MissingImage,

    #[error("missing product URL")]
    MissingProductUrl,

    #[error("missing budget")]
    MissingBudget,

    #[error("missing name")]
    MissingName,

    #[error("missing phone")]
    MissingPhone,

    #[error("invalid budget")]
    InvalidBudget,
}

impl ErrorMetadata for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingImage => "MISSING_IMAGE",
            ValidationError::MissingProductUrl => "MISSING_PRODUCT_URL",
            ValidationError::MissingBudget => "MISSING_BUDGET",
            ValidationError::MissingName => "MISSING_NAME",
            ValidationError::MissingPhone => "MISSING_PHONE",
            ValidationError::InvalidBudget => "INVALID_BUDGET",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn log_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize a plain decimal literal: optional sign, digits with an optional
/// fraction, optional exponent. At least one mantissa digit is required.
/// Returns `None` for anything else (`1_000`, `NaN`, `12,5`, `0x10`).
fn decimal_literal(value: &str) -> Option<String> {
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let mut literal = String::with_capacity(value.len() + 1);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }

    if let Some(exponent) = exponent {
        let digits = exponent
            .strip_prefix(['+', '-'])
            .unwrap_or(exponent);
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
        literal.push('e');
        if exponent.starts_with('-') {
            literal.push('-');
        }
        literal.push_str(digits);
    }

    Some(literal)
}

/// Parse a budget as a finite decimal, accepting plain (`12.5`) and
/// scientific (`1.2e3`) notation.
///
/// Values must fit `Decimal`: at most 28 significant digits and 28 decimal
/// places. Larger or finer values are rejected rather than rounded.
pub fn parse_budget(value: &str) -> Option<Decimal> {
    let literal = decimal_literal(value.trim())?;
    if literal.contains('e') {
        Decimal::from_scientific(&literal).ok()
    } else {
        Decimal::from_str(&literal).ok()
    }
}

/// Validate a draft and normalize it into record-ready fields.
pub fn validate_draft(draft: &SubmissionDraft) -> Result<NormalizedFields, ValidationError> {
    if draft.mode == ImageMode::File && draft.image_file.is_none() {
        return Err(ValidationError::MissingImage);
    }
    if draft.mode == ImageMode::Url && is_blank(&draft.product_url) {
        return Err(ValidationError::MissingProductUrl);
    }
    if is_blank(&draft.budget) {
        return Err(ValidationError::MissingBudget);
    }
    if is_blank(&draft.name) {
        return Err(ValidationError::MissingName);
    }
    if is_blank(&draft.phone) {
        return Err(ValidationError::MissingPhone);
    }
    let budget = parse_budget(&draft.budget).ok_or(ValidationError::InvalidBudget)?;

    let image = match (draft.mode, &draft.image_file) {
        (ImageMode::File, Some(file)) => ImageSource::File(file.clone()),
        (ImageMode::File, None) => return Err(ValidationError::MissingImage),
        (ImageMode::Url, _) => ImageSource::Url(draft.product_url.trim().to_string()),
    };

    Ok(NormalizedFields {
        image,
        budget,
        material: optional(&draft.material),
        comments: optional(&draft.comments),
        name: draft.name.trim().to_string(),
        phone: draft.phone.trim().to_string(),
    })
}
