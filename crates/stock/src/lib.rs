//! Stock data model.
//!
//! Plain data plus the quantity classification used by the stock table. No
//! IO and no persistence: the sample list is rebuilt on every call.

pub mod item;
pub mod level;
pub mod sample;

pub use item::{StockItem, StockItemId, StockStatus};
pub use level::{LOW_STOCK_THRESHOLD, StockLevel};
pub use sample::sample_stock;
