//! Session-stored authentication artifacts.
//!
//! On successful authentication three keys are written to the session:
//! the access token, the refresh token, and the user record as compact
//! serialized JSON. The writes are not transactional; a partial write is an
//! accepted risk.

use tower_sessions::Session;

use super::user::User;

/// Session keys for authentication artifacts.
pub mod keys {
    /// Backend access token.
    pub const ACCESS_TOKEN: &str = "access_token";

    /// Backend refresh token.
    pub const REFRESH_TOKEN: &str = "refresh_token";

    /// The authenticated user record, as serialized JSON.
    pub const USER: &str = "user";
}

/// Read the current user record from the session, if any.
///
/// A stored record that no longer parses is treated as absent rather than an
/// error; the user simply appears logged out.
pub async fn current_user(session: &Session) -> Option<User> {
    let raw: String = session.get(keys::USER).await.ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Read the backend access token from the session, if any.
pub async fn access_token(session: &Session) -> Option<String> {
    session.get(keys::ACCESS_TOKEN).await.ok().flatten()
}

/// Remove all authentication artifacts from the session.
///
/// # Errors
///
/// Returns an error if the session backend fails.
pub async fn clear_auth(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<String>(keys::ACCESS_TOKEN).await?;
    session.remove::<String>(keys::REFRESH_TOKEN).await?;
    session.remove::<String>(keys::USER).await?;
    Ok(())
}
