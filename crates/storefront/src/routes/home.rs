//! Home route handler.

use axum::response::Redirect;

/// The listing is the storefront's landing surface.
pub async fn home() -> Redirect {
    Redirect::to("/products")
}
