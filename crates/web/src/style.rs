//! Class names and the stock table's colouring policy.

use serde::{Deserialize, Serialize};

use bizdesk_stock::{StockLevel, StockStatus};

pub const CARD: &str = "card";
pub const CARD_HEADER: &str = "card-header";
pub const CARD_TITLE: &str = "card-title";
pub const CARD_CONTENT: &str = "card-content";
pub const CARD_ACTIONS: &str = "card-actions";
pub const BUTTON: &str = "btn";
pub const PLACEHOLDER: &str = "placeholder-text";
pub const TABLE: &str = "table";
pub const QUANTITY_CELL: &str = "quantity";
pub const BADGE: &str = "badge";
pub const NAV: &str = "nav";
pub const NAV_LINK: &str = "nav-link";
pub const ACTIVE: &str = "active";

/// Colour applied to a quantity cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityTone {
    Neutral,
    Warning,
    Alarm,
}

impl QuantityTone {
    pub fn for_level(level: StockLevel) -> Self {
        match level {
            StockLevel::Empty => QuantityTone::Alarm,
            StockLevel::Low => QuantityTone::Warning,
            StockLevel::Healthy => QuantityTone::Neutral,
        }
    }

    pub fn for_quantity(quantity: u32) -> Self {
        Self::for_level(StockLevel::for_quantity(quantity))
    }

    pub fn class(&self) -> &'static str {
        match self {
            QuantityTone::Neutral => "text-gray-900",
            QuantityTone::Warning => "text-amber-600",
            QuantityTone::Alarm => "text-red-600",
        }
    }
}

/// Colour of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Green,
    Yellow,
    Red,
}

impl BadgeTone {
    pub fn for_status(status: StockStatus) -> Self {
        match status {
            StockStatus::InStock => BadgeTone::Green,
            StockStatus::LowStock => BadgeTone::Yellow,
            StockStatus::OutOfStock => BadgeTone::Red,
        }
    }

    /// Exact label match; any other label has no tone.
    pub fn for_label(label: &str) -> Option<Self> {
        StockStatus::from_label(label).map(Self::for_status)
    }

    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Green => "bg-green-100 text-green-800",
            BadgeTone::Yellow => "bg-yellow-100 text-yellow-800",
            BadgeTone::Red => "bg-red-100 text-red-800",
        }
    }
}

/// Full class list for a badge: the base class plus the tone, if any.
pub fn badge_classes(tone: Option<BadgeTone>) -> String {
    match tone {
        Some(tone) => format!("{BADGE} {}", tone.class()),
        None => BADGE.to_string(),
    }
}
