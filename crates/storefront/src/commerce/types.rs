//! Canonical commerce types.
//!
//! These are the shapes the rest of the storefront renders from. The backend
//! serves product records in two historical shapes with overlapping field
//! names; `conversions` normalizes both into [`Product`] before anything else
//! sees them.

use serde::{Deserialize, Serialize};

use verdant_core::{Price, ProductId};

/// A normalized product record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Resolved image URL; `None` renders the placeholder glyph.
    pub image: Option<String>,
    pub brand: String,
    pub price: Price,
    /// Star rating shown next to the product name, 0-5.
    pub display_rating: f64,
    /// Sustainability score, 0-5. Defaults to 0 when the backend omits it.
    pub eco_rating: f64,
    pub category: String,
    /// Resolved description; `None` omits the section entirely.
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub eco: EcoAttributes,
    /// Stock availability. Absent on the wire means in stock.
    pub in_stock: bool,
}

/// Boolean eco-attribute flags attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EcoAttributes {
    pub organic: bool,
    pub biodegradable: bool,
    pub recyclable: bool,
    pub plastic_free: bool,
}

impl EcoAttributes {
    /// Whether any flag is set (controls whether the section renders).
    #[must_use]
    pub const fn any(self) -> bool {
        self.organic || self.biodegradable || self.recyclable || self.plastic_free
    }
}

// =============================================================================
// Auth Wire Types
// =============================================================================

/// Login payload: exactly email and password.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload for a merchant account.
///
/// `user_type` is always `"merchant"`; `phone_number` defaults to the empty
/// string when not provided. Password confirmation is validated by the
/// backend, so both password fields travel on the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: String,
    pub phone_number: String,
    pub business_name: String,
    pub business_type: String,
    pub password: String,
    pub password_confirm: String,
}

/// Successful authentication response.
///
/// The `user` record is kept as raw JSON: it is persisted verbatim into the
/// session and handed to the success collaborator, and its exact shape is
/// owned by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    pub access: String,
    pub refresh: String,
    pub user: serde_json::Value,
}

/// Add-to-cart payload forwarded to the backend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: u32,
}
