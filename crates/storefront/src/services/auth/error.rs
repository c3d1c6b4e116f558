//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while completing authentication.
///
/// Backend rejections are not errors at this layer; they surface to the user
/// through the form's error banner. This type covers only failures of the
/// storefront's own machinery.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Writing session artifacts failed.
    #[error("session persistence failed: {0}")]
    Session(#[from] tower_sessions::session::Error),
}
