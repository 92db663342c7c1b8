//! Stock table view.
//!
//! The only conditional rendering in the app: quantity cells are coloured by
//! stock level and status badges by exact label. Status is shown as supplied,
//! even when it disagrees with the quantity.

use serde::{Deserialize, Serialize};

use bizdesk_stock::{StockItem, sample_stock};

use crate::markup::Node;
use crate::style::{self, BadgeTone, QuantityTone};
use crate::toolkit;

pub const TITLE: &str = "Stock";
pub const PLACEHOLDER: &str = "Stock transfers are coming soon.";
pub const COLUMNS: [&str; 4] = ["Code", "Name", "Quantity", "Status"];

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    pub id: u32,
    pub code: String,
    pub name: String,
    pub quantity: u32,
    pub quantity_tone: QuantityTone,
    pub status: String,
    pub badge: Option<BadgeTone>,
}

impl StockRow {
    pub fn from_item(item: &StockItem) -> Self {
        Self {
            id: item.id.0,
            code: item.code.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            quantity_tone: QuantityTone::for_level(item.level()),
            status: item.status.clone(),
            badge: BadgeTone::for_label(&item.status),
        }
    }

    pub fn quantity_class(&self) -> &'static str {
        self.quantity_tone.class()
    }

    pub fn badge_classes(&self) -> String {
        style::badge_classes(self.badge)
    }

    fn cells(&self) -> Vec<Node> {
        vec![
            toolkit::cell(Node::text(&self.code), &[]),
            toolkit::cell(Node::text(&self.name), &[]),
            toolkit::cell(
                Node::text(self.quantity.to_string()),
                &[style::QUANTITY_CELL, self.quantity_class()],
            ),
            toolkit::cell(toolkit::badge(&self.status, self.badge), &[]),
        ]
    }
}

/// View model for the stock table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTable {
    pub rows: Vec<StockRow>,
}

impl StockTable {
    pub fn from_items(items: &[StockItem]) -> Self {
        tracing::debug!(rows = items.len(), "building stock table");

        for item in items.iter().filter(|i| !i.status_matches_level()) {
            tracing::warn!(
                code = %item.code,
                quantity = item.quantity,
                status = %item.status,
                "stock status does not match quantity"
            );
        }

        Self {
            rows: items.iter().map(StockRow::from_item).collect(),
        }
    }

    /// Table over the hard-coded sample rows.
    pub fn sample() -> Self {
        Self::from_items(&sample_stock())
    }

    pub fn row(&self, code: &str) -> Option<&StockRow> {
        self.rows.iter().find(|r| r.code == code)
    }

    pub fn render(&self) -> Node {
        let table = toolkit::table(&COLUMNS, self.rows.iter().map(StockRow::cells).collect());
        toolkit::card::<[&str; 0], &str>(TITLE, [], vec![table, toolkit::placeholder(PLACEHOLDER)])
    }
}
