//! Storefront user model.

use serde::{Deserialize, Serialize};

use verdant_core::{UserId, UserRole};

/// A user record as supplied by the commerce backend.
///
/// Deserialized from the `user` value of an auth response or from the
/// session. Everything beyond `id` is optional; the backend owns the full
/// shape and we only read what the storefront renders or gates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(rename = "user_type", alias = "role", default)]
    pub role: UserRole,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
}

impl User {
    /// Best available name for greeting the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .or(self.first_name.as_deref())
            .or(self.username.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("there")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use verdant_core::UserRole;

    #[test]
    fn test_deserialize_backend_shape() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "email": "a@b.com", "user_type": "customer", "unknown_field": true}"#,
        )
        .unwrap();
        assert_eq!(user.id.as_i64(), 1);
        assert_eq!(user.role, UserRole::Customer);
    }

    #[test]
    fn test_role_alias_accepted() {
        let user: User = serde_json::from_str(r#"{"id": 2, "role": "merchant"}"#).unwrap();
        assert_eq!(user.role, UserRole::Merchant);
    }

    #[test]
    fn test_missing_role_defaults_to_other() {
        let user: User = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(user.role, UserRole::Other);
        assert!(!user.role.is_customer());
    }

    #[test]
    fn test_display_name_preference() {
        let user: User = serde_json::from_str(
            r#"{"id": 4, "email": "a@b.com", "first_name": "Ada", "business_name": "Verdant Goods"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Verdant Goods");
    }
}
