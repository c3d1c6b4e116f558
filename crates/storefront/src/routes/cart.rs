//! Cart route handlers.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::commerce::types::AddToCartRequest;
use crate::error::{AppError, Result};
use crate::models::session::{access_token, current_user};
use crate::state::AppState;

/// Add-to-cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// Handle add-to-cart form submission.
///
/// The button is only rendered for in-stock products viewed by customers;
/// the role and token checks here re-assert that server-side. Issues
/// exactly one upstream call per submission, then redirects back to the
/// listing so the detail view closes.
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let user = current_user(&session)
        .await
        .ok_or_else(|| AppError::Unauthorized("login required".to_string()))?;
    if !user.role.is_customer() {
        return Err(AppError::Unauthorized(
            "only customers can add to cart".to_string(),
        ));
    }
    let token = access_token(&session)
        .await
        .ok_or_else(|| AppError::Unauthorized("login required".to_string()))?;

    state
        .commerce()
        .add_to_cart(
            &token,
            &AddToCartRequest {
                product_id: form.product_id,
                quantity: form.quantity,
            },
        )
        .await?;

    tracing::info!(product_id = form.product_id, "Added product to cart");
    Ok(Redirect::to("/products").into_response())
}
