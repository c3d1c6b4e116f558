//! Cache value types for the commerce client.

use super::types::Product;

/// Values stored in the commerce client's moka cache.
#[derive(Debug, Clone)]
pub enum CacheValue {
    /// A single product keyed by id.
    Product(Box<Product>),
    /// The product listing.
    Products(Vec<Product>),
}
