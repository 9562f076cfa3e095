use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::domain::model::{ProductId, RawCartItem, RawValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cart-check")]
#[command(about = "Validate an add-to-cart submission against a product catalog")]
pub struct CliConfig {
    /// Path to the TOML catalog file
    #[arg(short, long, default_value = "catalog.toml")]
    pub catalog: String,

    /// Product the item is added for
    #[arg(short, long)]
    pub product: u64,

    /// Submitted size option id, passed through as raw form text
    #[arg(short, long)]
    pub size: Option<String>,

    /// Submitted quantity, passed through as raw form text
    #[arg(short, long)]
    pub quantity: Option<String>,

    /// Print the derived form schema instead of validating
    #[arg(long)]
    pub schema: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn product_id(&self) -> ProductId {
        ProductId(self.product)
    }

    pub fn submission(&self) -> RawCartItem {
        RawCartItem {
            size_id: self.size.clone().map(RawValue::Text),
            quantity: self.quantity.clone().map(RawValue::Text),
        }
    }
}
