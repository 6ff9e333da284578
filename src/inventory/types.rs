use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::store::db::StoreError;

/// Dollar value of an inventory item.
///
/// Renders as a fixed two-decimal currency string: `Dollars(12.5)` displays
/// as `$12.50`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dollars(pub f64);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Dollars {
    type Err = InventoryError;

    /// Parse a raw price field. Only finite, non-negative numbers are
    /// valid monetary amounts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.parse().map_err(|_| InventoryError::InvalidPrice)?;
        if !value.is_finite() {
            return Err(InventoryError::InvalidPrice);
        }
        if value < 0.0 {
            return Err(InventoryError::NegativePrice);
        }
        Ok(Dollars(value))
    }
}

/// A single inventory item. The name is the unique identifier and doubles
/// as the storage key.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: Dollars,
}

/// Error taxonomy for inventory operations.
///
/// The first three variants are user input problems: rendered back to the
/// caller, never logged as system failures. `Storage` wraps a durable-store
/// fault, which is both logged and rendered.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("price not set")]
    MissingPrice,

    #[error("price must be a numerical value")]
    InvalidPrice,

    #[error("price must be greater than or equal to 0")]
    NegativePrice,

    #[error("no such item: '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
