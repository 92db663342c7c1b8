//! Quantity classification against the low-stock threshold.

use serde::{Deserialize, Serialize};

use bizdesk_core::ValueObject;

/// Quantities strictly below this (and above zero) count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// How much of an item is on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// Nothing on hand.
    Empty,
    /// Between one and `LOW_STOCK_THRESHOLD - 1` units.
    Low,
    /// At or above `LOW_STOCK_THRESHOLD`.
    Healthy,
}

impl ValueObject for StockLevel {}

impl StockLevel {
    pub fn for_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockLevel::Empty,
            q if q < LOW_STOCK_THRESHOLD => StockLevel::Low,
            _ => StockLevel::Healthy,
        }
    }
}
