//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price in the store currency.
///
/// The backend serializes prices as decimal strings (e.g., `"4.99"`); this
/// wrapper keeps the value exact and owns the display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    /// Format for display (e.g., `$19.99`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        let price = Price::new(Decimal::new(45, 1)); // 4.5
        assert_eq!(price.to_string(), "$4.50");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Price::default().to_string(), "$0.00");
    }

    #[test]
    fn test_deserialize_from_string() {
        // Backend sends decimal strings
        let price: Price = serde_json::from_str("\"12.99\"").unwrap();
        assert_eq!(price.to_string(), "$12.99");
    }
}
