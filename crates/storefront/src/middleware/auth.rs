//! Authentication extractors.
//!
//! Provides extractors for reading the logged-in user from the session.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use verdant_core::UserRole;

use crate::models::User;
use crate::models::session;

/// Extractor that optionally gets the logged-in user.
///
/// Does not reject the request when nobody is logged in.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalUser(user): OptionalUser) -> impl IntoResponse {
///     match user {
///         Some(u) => format!("Hello, {}", u.display_name()),
///         None => "Guest visitor".to_string(),
///     }
/// }
/// ```
pub struct OptionalUser(pub Option<User>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(sess) => session::current_user(sess).await,
            None => None,
        };

        Ok(Self(user))
    }
}

/// Extractor that requires a logged-in merchant.
///
/// Anyone else is redirected to the merchant login page (or gets a 401 for
/// API-style requests).
pub struct RequireMerchant(pub User);

/// Error returned when merchant authentication is required but not present.
pub enum MerchantRejection {
    /// Redirect to the merchant login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for MerchantRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/merchant/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireMerchant
where
    S: Send + Sync,
{
    type Rejection = MerchantRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let sess = parts
            .extensions
            .get::<Session>()
            .ok_or(MerchantRejection::Unauthorized)?;

        let is_api = parts.uri.path().starts_with("/api/");
        let reject = || {
            if is_api {
                MerchantRejection::Unauthorized
            } else {
                MerchantRejection::RedirectToLogin
            }
        };

        let user = session::current_user(sess).await.ok_or_else(reject)?;
        if user.role != UserRole::Merchant {
            return Err(reject());
        }

        Ok(Self(user))
    }
}
