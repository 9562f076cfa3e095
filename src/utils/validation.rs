use crate::domain::model::{RawValue, SizeOptionId};
use crate::utils::error::{CartError, FieldError, FieldErrorKind, Result};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// What a submitted size value turned out to be before any store lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeInput {
    Missing,
    Id(SizeOptionId),
    /// Supplied, but not something a size option id could ever be.
    Malformed,
}

/// Parses an integer the way HTML forms submit it: surrounding whitespace and a
/// trailing `.0` decimal part are tolerated.
pub fn parse_whole_number(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits = match trimmed.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
        Some(_) => return None,
        None => trimmed,
    };
    digits.parse().ok()
}

pub fn parse_size_id(raw: Option<&RawValue>) -> SizeInput {
    match raw {
        None => SizeInput::Missing,
        Some(RawValue::Int(value)) => u64::try_from(*value)
            .map(|id| SizeInput::Id(SizeOptionId(id)))
            .unwrap_or(SizeInput::Malformed),
        Some(RawValue::Text(text)) if text.trim().is_empty() => SizeInput::Missing,
        Some(RawValue::Text(text)) => parse_whole_number(text)
            .and_then(|value| u64::try_from(value).ok())
            .map(|id| SizeInput::Id(SizeOptionId(id)))
            .unwrap_or(SizeInput::Malformed),
    }
}

fn invalid_quantity(message: impl Into<String>) -> FieldError {
    FieldError::new(FieldErrorKind::InvalidQuantity, message)
}

/// Cleans a submitted quantity. Absent means `default`; an explicitly blank
/// value is a missing required value.
pub fn parse_quantity(
    raw: Option<&RawValue>,
    min_value: u32,
    default: u32,
) -> std::result::Result<u32, FieldError> {
    let value = match raw {
        None => return Ok(default),
        Some(RawValue::Int(value)) => *value,
        Some(RawValue::Text(text)) if text.trim().is_empty() => {
            return Err(invalid_quantity("This field is required."));
        }
        Some(RawValue::Text(text)) => {
            parse_whole_number(text).ok_or_else(|| invalid_quantity("Enter a whole number."))?
        }
    };

    if value < i64::from(min_value) {
        return Err(invalid_quantity(format!(
            "Ensure this value is greater than or equal to {}.",
            min_value
        )));
    }

    u32::try_from(value).map_err(|_| {
        invalid_quantity(format!(
            "Ensure this value is less than or equal to {}.",
            u32::MAX
        ))
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CartError::InvalidCatalogValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<T, I>(field_name: &str, ids: I) -> Result<()>
where
    T: Eq + Hash + Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(CartError::InvalidCatalogValue {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate id".to_string(),
            });
        }
        seen.insert(id);
    }
    Ok(())
}
