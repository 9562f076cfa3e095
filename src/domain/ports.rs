use crate::domain::model::{ProductId, SizeOption, SizeOptionId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the size options owned by the persistence layer.
///
/// A lookup miss is `Ok(None)`; `Err` is reserved for the store itself failing.
#[async_trait]
pub trait SizeOptionStore: Send + Sync {
    async fn get_size_option(
        &self,
        id: SizeOptionId,
        product: ProductId,
    ) -> Result<Option<SizeOption>>;

    /// Options of `product` whose stock is strictly greater than `stock_greater_than`,
    /// in the store's own order.
    async fn list_size_options(
        &self,
        product: ProductId,
        stock_greater_than: u32,
    ) -> Result<Vec<SizeOption>>;
}
