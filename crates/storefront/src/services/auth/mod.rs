//! Merchant authentication service.
//!
//! Completes an authentication attempt: persists the session artifacts,
//! invokes the success collaborator, and picks the navigation target. The
//! ambient session and redirect facilities are expressed as the injected
//! [`SessionStore`] and [`Navigator`] capabilities so this logic is testable
//! without a running server; route handlers supply implementations backed by
//! tower-sessions and axum redirects.

mod error;

pub use error::AuthError;

use tower_sessions::Session;

use crate::commerce::CommerceError;
use crate::commerce::types::AuthSession;
use crate::models::session::keys;

/// Where a successful merchant authentication navigates to.
pub const MERCHANT_PORTAL_PATH: &str = "/merchant-portal";

/// Fixed message for transport-level failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

// =============================================================================
// Injected Capabilities
// =============================================================================

/// A key-value sink for session artifacts.
pub trait SessionStore {
    /// Record a string value under a key.
    fn set(&mut self, key: &str, value: String);
}

/// A navigation facility.
pub trait Navigator {
    /// Navigate to a location.
    fn navigate(&mut self, location: &str);
}

/// Buffered session writes, flushed into tower-sessions by the handler.
#[derive(Debug, Default)]
pub struct SessionWrites {
    pairs: Vec<(String, String)>,
}

impl SessionWrites {
    /// The buffered key-value pairs, in write order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Flush the buffered writes into a tower-sessions session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Session` if the session backend fails. Writes are
    /// not transactional; a failure may leave a prefix of them applied.
    pub async fn persist(self, session: &Session) -> Result<(), AuthError> {
        for (key, value) in self.pairs {
            session.insert(&key, value).await?;
        }
        Ok(())
    }
}

impl SessionStore for SessionWrites {
    fn set(&mut self, key: &str, value: String) {
        self.pairs.push((key.to_owned(), value));
    }
}

/// A pending redirect, turned into an axum `Redirect` by the handler.
#[derive(Debug, Default)]
pub struct PendingRedirect {
    target: Option<String>,
}

impl PendingRedirect {
    /// The recorded target, if navigation happened.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl Navigator for PendingRedirect {
    fn navigate(&mut self, location: &str) {
        self.target = Some(location.to_owned());
    }
}

// =============================================================================
// Completion Logic
// =============================================================================

/// Complete a successful authentication.
///
/// Persists the access token, refresh token, and the user record (as compact
/// serialized JSON) into the store, invokes the success collaborator with
/// the user record, then navigates to the merchant portal.
pub fn complete_auth<F>(
    outcome: &AuthSession,
    store: &mut dyn SessionStore,
    navigator: &mut dyn Navigator,
    on_success: F,
) where
    F: FnOnce(&serde_json::Value),
{
    store.set(keys::ACCESS_TOKEN, outcome.access.clone());
    store.set(keys::REFRESH_TOKEN, outcome.refresh.clone());
    store.set(keys::USER, outcome.user.to_string());

    on_success(&outcome.user);

    navigator.navigate(MERCHANT_PORTAL_PATH);
}

/// The error banner message for a failed authentication attempt.
///
/// Backend rejections carry their extracted message; anything else (the
/// request never completed, or the response wasn't JSON) shows the fixed
/// network failure message.
#[must_use]
pub fn failure_message(err: &CommerceError) -> String {
    match err {
        CommerceError::Rejected(message) => message.clone(),
        _ => NETWORK_ERROR_MESSAGE.to_owned(),
    }
}
