//! Merchant portal route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::RequireMerchant;
use crate::models::User;

/// Merchant portal page template.
#[derive(Template, WebTemplate)]
#[template(path = "merchant/portal.html")]
pub struct MerchantPortalTemplate {
    pub user: User,
}

/// Display the merchant portal.
///
/// Reached after a successful login or registration; gated on the
/// merchant role by the extractor.
pub async fn portal(RequireMerchant(user): RequireMerchant) -> impl IntoResponse {
    MerchantPortalTemplate { user }
}
