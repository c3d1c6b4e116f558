//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to product listing
//! GET  /health                  - Health check
//!
//! # Products
//! GET  /products                - Product listing
//! GET  /products/:id            - Product detail
//! GET  /products/:id/modal      - Product detail fragment (HTMX)
//!
//! # Cart
//! POST /cart/add                - Add to cart (customers only)
//!
//! # Merchant Auth
//! GET  /merchant/login          - Merchant login page
//! POST /merchant/login          - Merchant login action
//! GET  /merchant/register       - Merchant registration page
//! POST /merchant/register       - Merchant registration action
//! POST /merchant/logout         - Logout action
//!
//! # Merchant Portal (requires merchant role)
//! GET  /merchant-portal         - Merchant portal
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod merchant;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::services::auth::MERCHANT_PORTAL_PATH;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/modal", get(products::modal))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/add", post(cart::add))
}

/// Create the merchant auth routes router.
pub fn merchant_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home redirect
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Merchant auth routes
        .nest("/merchant", merchant_auth_routes())
        // Merchant portal
        .route(MERCHANT_PORTAL_PATH, get(merchant::portal))
}
