//! Middleware and extractors.

pub mod auth;
pub mod session;

pub use auth::{OptionalUser, RequireMerchant};
pub use session::create_session_layer;
