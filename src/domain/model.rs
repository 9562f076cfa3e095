use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeOptionId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SizeOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
}

/// A per-product size variant with its own stock count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub id: SizeOptionId,
    pub product_id: ProductId,
    pub label: String,
    pub stock: u32,
}

impl SizeOption {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A submitted form value: either already numeric (JSON bodies) or text (form bodies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Text(String),
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Cart-addition input exactly as the user submitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCartItem {
    #[serde(default)]
    pub size_id: Option<RawValue>,
    #[serde(default)]
    pub quantity: Option<RawValue>,
}

impl RawCartItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size_id: impl Into<RawValue>) -> Self {
        self.size_id = Some(size_id.into());
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<RawValue>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }
}

/// Cleaned values, safe to hand to the cart-add operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub size_id: Option<SizeOptionId>,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_cart_item_accepts_numbers_and_strings() {
        let json = r#"{"size_id": "10", "quantity": 2}"#;
        let raw: RawCartItem = serde_json::from_str(json).unwrap();

        assert_eq!(raw.size_id, Some(RawValue::Text("10".to_string())));
        assert_eq!(raw.quantity, Some(RawValue::Int(2)));
    }

    #[test]
    fn test_raw_cart_item_missing_fields() {
        let raw: RawCartItem = serde_json::from_str("{}").unwrap();
        assert_eq!(raw, RawCartItem::new());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let item = CartItem {
            size_id: Some(SizeOptionId(7)),
            quantity: 3,
        };
        let value = serde_json::to_value(item).unwrap();
        assert_eq!(value, serde_json::json!({"size_id": 7, "quantity": 3}));
    }
}
