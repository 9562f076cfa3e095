use cart_item_form::config::LogFormat;
use cart_item_form::utils::{logger, validation::Validate};
use cart_item_form::{CartError, CartItemValidator, Catalog, CliConfig, InMemorySizeStore};
use clap::Parser;
use serde_json::json;

fn exit_with(error: &CartError) -> ! {
    tracing::error!("❌ {}", error);
    eprintln!("❌ {}", error.user_friendly_message());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("📁 Loading catalog from: {}", config.catalog);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let catalog = Catalog::from_file(&config.catalog).unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = catalog.validate() {
        exit_with(&e);
    }
    tracing::info!(
        "✅ Catalog loaded: {} product(s), {} size option(s)",
        catalog.products.len(),
        catalog.size_option_count()
    );

    let store = InMemorySizeStore::from_catalog(&catalog);
    let product = store
        .product(config.product_id())
        .unwrap_or_else(|e| exit_with(&e));

    let validator = CartItemValidator::build(&store, Some(&product))
        .await
        .unwrap_or_else(|e| exit_with(&e));

    if config.schema {
        println!("{}", serde_json::to_string_pretty(validator.schema())?);
        return Ok(());
    }

    match validator.validate(&config.submission()).await {
        Ok(item) => {
            tracing::info!("✅ Cart item for '{}' is valid", product.name);
            let output = json!({ "valid": true, "cleaned": item });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Err(CartError::Validation(errors)) => {
            tracing::info!("Cart item for '{}' rejected: {}", product.name, errors);
            let output = json!({ "valid": false, "errors": errors });
            println!("{}", serde_json::to_string_pretty(&output)?);
            std::process::exit(2);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
