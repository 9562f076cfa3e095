//! Field descriptors of the add-to-cart form.
//!
//! The descriptor set is derived once per validator from a single availability
//! query and never mutated afterwards.

use serde::Serialize;

use crate::domain::model::{SizeOption, SizeOptionId};

pub const SIZE_FIELD: &str = "size_id";
pub const QUANTITY_FIELD: &str = "quantity";

pub const SIZE_HELP_TEXT: &str = "Select an available size.";
pub const SIZE_WIDGET_CLASS: &str = "form-control";

pub const MIN_QUANTITY: u32 = 1;
pub const DEFAULT_QUANTITY: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeChoice {
    pub id: SizeOptionId,
    pub label: String,
}

impl From<&SizeOption> for SizeChoice {
    fn from(option: &SizeOption) -> Self {
        Self {
            id: option.id,
            label: option.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "presence", rename_all = "snake_case")]
pub enum FieldPresence {
    /// The product has sizes in stock; one of them must be picked.
    Required {
        choices: Vec<SizeChoice>,
        initial: SizeOptionId,
        help_text: String,
        widget_class: String,
    },
    /// No product context: a plain optional integer field.
    Optional,
    /// Size-less product: the field is not part of the form.
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SizeField {
    pub presence: FieldPresence,
}

impl SizeField {
    /// Builds the size field from the in-stock options of a product, in store order.
    pub fn from_in_stock(options: &[SizeOption]) -> Self {
        let presence = match options.first() {
            Some(first) => FieldPresence::Required {
                choices: options.iter().map(SizeChoice::from).collect(),
                initial: first.id,
                help_text: SIZE_HELP_TEXT.to_string(),
                widget_class: SIZE_WIDGET_CLASS.to_string(),
            },
            None => FieldPresence::Absent,
        };
        Self { presence }
    }

    pub fn optional() -> Self {
        Self {
            presence: FieldPresence::Optional,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.presence, FieldPresence::Required { .. })
    }

    pub fn is_present(&self) -> bool {
        !matches!(self.presence, FieldPresence::Absent)
    }

    pub fn choices(&self) -> &[SizeChoice] {
        match &self.presence {
            FieldPresence::Required { choices, .. } => choices,
            _ => &[],
        }
    }

    pub fn initial(&self) -> Option<SizeOptionId> {
        match &self.presence {
            FieldPresence::Required { initial, .. } => Some(*initial),
            _ => None,
        }
    }

    pub fn offers(&self, id: SizeOptionId) -> bool {
        self.choices().iter().any(|choice| choice.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityField {
    pub min_value: u32,
    pub initial: u32,
}

impl Default for QuantityField {
    fn default() -> Self {
        Self {
            min_value: MIN_QUANTITY,
            initial: DEFAULT_QUANTITY,
        }
    }
}

/// Everything a view needs to render the form for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    pub size_id: SizeField,
    pub quantity: QuantityField,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductId;

    fn option(id: u64, label: &str, stock: u32) -> SizeOption {
        SizeOption {
            id: SizeOptionId(id),
            product_id: ProductId(1),
            label: label.to_string(),
            stock,
        }
    }

    #[test]
    fn test_size_field_required_when_options_exist() {
        let field = SizeField::from_in_stock(&[option(4, "M", 2), option(3, "S", 1)]);

        assert!(field.is_required());
        assert_eq!(field.initial(), Some(SizeOptionId(4)));
        assert_eq!(field.choices().len(), 2);
        assert_eq!(field.choices()[1].label, "S");
        assert!(field.offers(SizeOptionId(3)));
        assert!(!field.offers(SizeOptionId(9)));
    }

    #[test]
    fn test_size_field_absent_without_options() {
        let field = SizeField::from_in_stock(&[]);
        assert!(!field.is_present());
        assert!(!field.is_required());
        assert_eq!(field.initial(), None);
    }

    #[test]
    fn test_schema_serialization() {
        let schema = FormSchema {
            size_id: SizeField::from_in_stock(&[option(4, "M", 2)]),
            quantity: QuantityField::default(),
        };

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "size_id": {
                    "presence": "required",
                    "choices": [{"id": 4, "label": "M"}],
                    "initial": 4,
                    "help_text": "Select an available size.",
                    "widget_class": "form-control"
                },
                "quantity": {"min_value": 1, "initial": 1}
            })
        );

        let absent = FormSchema {
            size_id: SizeField::from_in_stock(&[]),
            quantity: QuantityField::default(),
        };
        let value = serde_json::to_value(&absent).unwrap();
        assert_eq!(value["size_id"], serde_json::json!({"presence": "absent"}));
    }
}
