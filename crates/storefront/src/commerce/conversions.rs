//! Product payload normalization.
//!
//! The backend serves two product shapes: the API serializer
//! (`primary_image`, `average_rating`, `category_name`, `brand_name`,
//! `description`) and the legacy catalog shape (`image`, `rating`,
//! `category`, `brand`, `short_description`). Both carry the same concepts
//! under different names. Normalization happens here, once, first-match-wins
//! per alias group; the rest of the storefront only ever sees [`Product`].

use rust_decimal::Decimal;
use serde::Deserialize;

use verdant_core::{Price, ProductId};

use super::types::{EcoAttributes, Product};

/// Raw product payload covering both upstream shapes.
///
/// Every field is optional; a missing field degrades to a default rather than
/// failing deserialization.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,

    // Image aliases
    pub primary_image: Option<String>,
    pub image: Option<String>,

    // Brand aliases
    pub brand_name: Option<String>,
    pub brand: Option<String>,

    // Rating aliases
    pub average_rating: Option<f64>,
    pub eco_rating: Option<f64>,
    pub rating: Option<f64>,

    // Category aliases
    pub category_name: Option<String>,
    pub category: Option<String>,

    // Description aliases
    pub description: Option<String>,
    pub short_description: Option<String>,

    pub price: Option<Decimal>,
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub is_biodegradable: bool,
    #[serde(default)]
    pub is_recyclable: bool,
    #[serde(default)]
    pub is_plastic_free: bool,

    pub is_in_stock: Option<bool>,
}

/// Normalize a raw payload into the canonical [`Product`].
///
/// Resolution order per alias group is fixed and first-match-wins:
///
/// - image: `primary_image`, `image`
/// - brand: `brand_name`, `brand`
/// - display rating: `average_rating`, `eco_rating`, `rating` (default 0)
/// - eco rating: `eco_rating`, `rating` (default 0)
/// - category: `category_name`, `category`
/// - description: `description`, `short_description`
///
/// A missing `is_in_stock` means in stock.
#[must_use]
pub fn convert_product(payload: ProductPayload) -> Product {
    Product {
        id: ProductId::new(payload.id),
        name: payload.name,
        image: payload.primary_image.or(payload.image),
        brand: payload.brand_name.or(payload.brand).unwrap_or_default(),
        price: Price::new(payload.price.unwrap_or_default()),
        display_rating: payload
            .average_rating
            .or(payload.eco_rating)
            .or(payload.rating)
            .unwrap_or(0.0),
        eco_rating: payload.eco_rating.or(payload.rating).unwrap_or(0.0),
        category: payload
            .category_name
            .or(payload.category)
            .unwrap_or_default(),
        description: payload.description.or(payload.short_description),
        tags: payload.tags,
        eco: EcoAttributes {
            organic: payload.is_organic,
            biodegradable: payload.is_biodegradable,
            recyclable: payload.is_recyclable,
            plastic_free: payload.is_plastic_free,
        },
        in_stock: payload.is_in_stock.unwrap_or(true),
    }
}
