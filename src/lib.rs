pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{fields::FormSchema, form::CartItemValidator};
pub use adapters::in_memory::InMemorySizeStore;
pub use config::Catalog;
pub use domain::model::{
    CartItem, Product, ProductId, RawCartItem, RawValue, SizeOption, SizeOptionId,
};
pub use domain::ports::SizeOptionStore;
pub use utils::error::{CartError, FieldError, FieldErrorKind, FieldErrors, Result};
