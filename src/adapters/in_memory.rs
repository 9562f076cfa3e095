use std::sync::RwLock;

use async_trait::async_trait;

use crate::config::catalog::Catalog;
use crate::domain::model::{Product, ProductId, SizeOption, SizeOptionId};
use crate::domain::ports::SizeOptionStore;
use crate::utils::error::{CartError, Result};

/// Size options held in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemorySizeStore {
    products: Vec<Product>,
    sizes: RwLock<Vec<SizeOption>>,
}

fn poisoned() -> CartError {
    CartError::Store {
        message: "size option lock poisoned".to_string(),
    }
}

impl InMemorySizeStore {
    pub fn new(products: Vec<Product>, sizes: Vec<SizeOption>) -> Self {
        Self {
            products,
            sizes: RwLock::new(sizes),
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        let products = catalog.products.iter().map(|p| p.to_product()).collect();
        let sizes = catalog
            .products
            .iter()
            .flat_map(|p| p.size_options())
            .collect();
        Self::new(products, sizes)
    }

    pub fn product(&self, id: ProductId) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CartError::ProductNotFound { product_id: id })
    }

    /// Overwrites the stock of a size option; returns whether it existed.
    pub fn set_stock(&self, id: SizeOptionId, stock: u32) -> Result<bool> {
        let mut sizes = self.sizes.write().map_err(|_| poisoned())?;
        match sizes.iter_mut().find(|s| s.id == id) {
            Some(size) => {
                size.stock = stock;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl SizeOptionStore for InMemorySizeStore {
    async fn get_size_option(
        &self,
        id: SizeOptionId,
        product: ProductId,
    ) -> Result<Option<SizeOption>> {
        let sizes = self.sizes.read().map_err(|_| poisoned())?;
        Ok(sizes
            .iter()
            .find(|s| s.id == id && s.product_id == product)
            .cloned())
    }

    async fn list_size_options(
        &self,
        product: ProductId,
        stock_greater_than: u32,
    ) -> Result<Vec<SizeOption>> {
        let sizes = self.sizes.read().map_err(|_| poisoned())?;
        Ok(sizes
            .iter()
            .filter(|s| s.product_id == product && s.stock > stock_greater_than)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn store() -> InMemorySizeStore {
        let size = |id, product, label: &str, stock| SizeOption {
            id: SizeOptionId(id),
            product_id: ProductId(product),
            label: label.to_string(),
            stock,
        };
        InMemorySizeStore::new(
            vec![Product {
                id: ProductId(1),
                name: "Shirt".to_string(),
            }],
            vec![
                size(10, 1, "S", 0),
                size(11, 1, "M", 4),
                size(12, 1, "L", 1),
                size(20, 2, "42", 9),
            ],
        )
    }

    #[test]
    fn test_list_filters_by_product_and_stock() {
        let store = store();
        let listed = block_on(store.list_size_options(ProductId(1), 0)).unwrap();
        let ids: Vec<u64> = listed.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![11, 12]);

        let listed = block_on(store.list_size_options(ProductId(1), 1)).unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn test_get_is_scoped_to_product() {
        let store = store();
        assert!(block_on(store.get_size_option(SizeOptionId(20), ProductId(1)))
            .unwrap()
            .is_none());
        assert!(block_on(store.get_size_option(SizeOptionId(20), ProductId(2)))
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_set_stock() {
        let store = store();
        assert!(store.set_stock(SizeOptionId(10), 2).unwrap());
        assert!(!store.set_stock(SizeOptionId(99), 2).unwrap());

        let option = block_on(store.get_size_option(SizeOptionId(10), ProductId(1)))
            .unwrap()
            .unwrap();
        assert_eq!(option.stock, 2);
    }

    #[test]
    fn test_product_lookup() {
        let store = store();
        assert_eq!(store.product(ProductId(1)).unwrap().name, "Shirt");
        assert!(matches!(
            store.product(ProductId(7)),
            Err(CartError::ProductNotFound { .. })
        ));
    }
}
