use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::domain::model::ProductId;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Cart item validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Size option store failed: {message}")]
    Store { message: String },

    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: ProductId },

    #[error("Catalog parsing error: {message}")]
    CatalogParse { message: String },

    #[error("Invalid catalog value for {field} ({value}): {reason}")]
    InvalidCatalogValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CartError {
    /// Field errors of a validation failure, `None` for every other kind of error.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CartError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CartError::Validation(_))
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::Validation(errors) => format!("Please correct the form: {}", errors),
            CartError::Store { .. } => {
                "Size availability could not be checked, please try again".to_string()
            }
            CartError::ProductNotFound { product_id } => {
                format!("Product {} does not exist", product_id)
            }
            CartError::CatalogParse { .. } | CartError::InvalidCatalogValue { .. } => {
                format!("Catalog file is invalid: {}", self)
            }
            CartError::Io(e) => format!("Could not read file: {}", e),
            CartError::Serialization(e) => format!("Could not encode output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    InvalidQuantity,
    SizeRequired,
    InvalidSizeSelected,
    SizeUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_size_selected() -> Self {
        Self::new(FieldErrorKind::InvalidSizeSelected, "Invalid size selected.")
    }

    pub fn size_unavailable() -> Self {
        Self::new(
            FieldErrorKind::SizeUnavailable,
            "Selected size is currently unavailable.",
        )
    }

    pub fn size_required() -> Self {
        Self::new(FieldErrorKind::SizeRequired, "This field is required.")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validation failures keyed by field name.
///
/// Serializes as `{"field": ["message", ...]}`, the shape a view needs to
/// re-render the form next to its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<FieldError>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, error: FieldError) {
        self.errors.entry(field.to_string()).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn get(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str, kind: FieldErrorKind) -> bool {
        self.get(field).iter().any(|e| e.kind == kind)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected failure.
    pub fn into_result<T>(self, value: T) -> Result<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(CartError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, errors) in &self.errors {
            for error in errors {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, error)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, errors) in &self.errors {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            map.serialize_entry(field, &messages)?;
        }
        map.end()
    }
}
