use core::str::FromStr;

use serde::{Deserialize, Serialize};

use bizdesk_core::{DomainError, Entity, ValueObject};

use crate::level::StockLevel;

/// Stock item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockItemId(pub u32);

impl core::fmt::Display for StockItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// The three status labels the stock table knows how to colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ValueObject for StockStatus {}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Exact, case-sensitive match on the label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// The status a given level would normally be reported with.
    pub fn expected_for(level: StockLevel) -> Self {
        match level {
            StockLevel::Empty => StockStatus::OutOfStock,
            StockLevel::Low => StockStatus::LowStock,
            StockLevel::Healthy => StockStatus::InStock,
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
            .ok_or_else(|| DomainError::validation(format!("unknown stock status '{s}'")))
    }
}

/// One row of stock as supplied by the data source.
///
/// `status` is a free-form label carried next to `quantity`; nothing ties the
/// two together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    pub name: String,
    pub code: String,
    pub quantity: u32,
    pub status: String,
}

impl StockItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        code: impl Into<String>,
        quantity: u32,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: StockItemId(id),
            name: name.into(),
            code: code.into(),
            quantity,
            status: status.into(),
        }
    }

    pub fn level(&self) -> StockLevel {
        StockLevel::for_quantity(self.quantity)
    }

    /// The typed status, if the label is one of the known three.
    pub fn known_status(&self) -> Option<StockStatus> {
        StockStatus::from_label(&self.status)
    }

    /// Whether the supplied label agrees with the quantity.
    ///
    /// Unknown labels never match. Diagnostic only; nothing rewrites `status`.
    pub fn status_matches_level(&self) -> bool {
        self.known_status() == Some(StockStatus::expected_for(self.level()))
    }
}

impl Entity for StockItem {
    type Id = StockItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
