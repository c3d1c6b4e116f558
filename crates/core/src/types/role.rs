//! User role type.

use serde::{Deserialize, Serialize};

/// Role of an authenticated storefront user.
///
/// Roles come from the commerce backend's `user_type` field. Only customers
/// may purchase; merchants operate storefronts through the merchant portal.
/// Anything the backend sends that we don't recognize maps to [`Self::Other`]
/// so an unexpected role degrades to read-only behavior instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// A shopper; the only role permitted to add items to the cart.
    Customer,
    /// A storefront operator.
    Merchant,
    /// Any role this storefront does not model.
    #[default]
    #[serde(other)]
    Other,
}

impl UserRole {
    /// Whether this role may add products to the cart.
    #[must_use]
    pub const fn is_customer(self) -> bool {
        matches!(self, Self::Customer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_known_roles() {
        let role: UserRole = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, UserRole::Customer);
        let role: UserRole = serde_json::from_str("\"merchant\"").unwrap();
        assert_eq!(role, UserRole::Merchant);
    }

    #[test]
    fn test_unknown_role_degrades() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Other);
        assert!(!role.is_customer());
    }

    #[test]
    fn test_only_customer_may_purchase() {
        assert!(UserRole::Customer.is_customer());
        assert!(!UserRole::Merchant.is_customer());
    }
}
