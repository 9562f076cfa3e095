use crate::domain::model::{Product, ProductId, SizeOption, SizeOptionId};
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_ids, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Products and their size options, as loaded from a TOML catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sizes: Vec<SizeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeEntry {
    pub id: SizeOptionId,
    pub label: String,
    #[serde(default)]
    pub stock: u32,
}

impl Catalog {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CartError::CatalogParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .map(ProductEntry::to_product)
    }

    pub fn size_option_count(&self) -> usize {
        self.products.iter().map(|p| p.sizes.len()).sum()
    }
}

impl ProductEntry {
    pub fn to_product(&self) -> Product {
        Product {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn size_options(&self) -> impl Iterator<Item = SizeOption> + '_ {
        self.sizes.iter().map(move |size| SizeOption {
            id: size.id,
            product_id: self.id,
            label: size.label.clone(),
            stock: size.stock,
        })
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_unique_ids("products.id", self.products.iter().map(|p| p.id))?;
        // Size ids are primary keys of their own table, unique across products.
        validate_unique_ids(
            "products.sizes.id",
            self.products.iter().flat_map(|p| p.sizes.iter().map(|s| s.id)),
        )?;

        for product in &self.products {
            validate_non_empty_string("products.name", &product.name)?;
            for size in &product.sizes {
                validate_non_empty_string("products.sizes.label", &size.label)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"
[[products]]
id = 1
name = "Linen shirt"

[[products.sizes]]
id = 10
label = "S"
stock = 3

[[products.sizes]]
id = 11
label = "M"

[[products]]
id = 2
name = "Gift card"
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_toml_str(CATALOG).unwrap();

        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.size_option_count(), 2);
        assert_eq!(catalog.products[0].sizes[1].stock, 0);
        assert!(catalog.products[1].sizes.is_empty());
        assert!(catalog.validate().is_ok());

        let product = catalog.product(ProductId(2)).unwrap();
        assert_eq!(product.name, "Gift card");
        assert!(catalog.product(ProductId(3)).is_none());
    }

    #[test]
    fn test_size_options_carry_parent_product() {
        let catalog = Catalog::from_toml_str(CATALOG).unwrap();
        let options: Vec<SizeOption> = catalog.products[0].size_options().collect();

        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.product_id == ProductId(1)));
        assert_eq!(options[0].label, "S");
    }

    #[test]
    fn test_duplicate_size_ids_rejected() {
        let content = r#"
[[products]]
id = 1
name = "Shirt"
sizes = [{ id = 5, label = "S", stock = 1 }]

[[products]]
id = 2
name = "Trousers"
sizes = [{ id = 5, label = "32", stock = 1 }]
"#;
        let catalog = Catalog::from_toml_str(content).unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CartError::InvalidCatalogValue { ref field, .. } if field == "products.sizes.id"
        ));
    }

    #[test]
    fn test_blank_label_rejected() {
        let content = r#"
[[products]]
id = 1
name = "Shirt"
sizes = [{ id = 5, label = " ", stock = 1 }]
"#;
        let catalog = Catalog::from_toml_str(content).unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Catalog::from_toml_str("[[products]]\nid = \"one\"").unwrap_err();
        assert!(matches!(err, CartError::CatalogParse { .. }));
    }

    #[test]
    fn test_catalog_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = Catalog::from_file(temp_file.path()).unwrap();
        assert_eq!(catalog.products[0].name, "Linen shirt");
    }
}
