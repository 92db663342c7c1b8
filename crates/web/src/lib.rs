//! `bizdesk-web`
//!
//! **Responsibility:** the view layer of the BizDesk back office.
//!
//! This crate provides:
//! - Toolkit primitives (card, button, table, badge) built as a markup tree
//! - The placeholder panels and the stock table
//! - Role navigation and the page shell
//! - A static preview renderer (native) and a Leptos frontend (wasm32)
//!
//! Every view is a pure function of nothing: it takes no input and always
//! renders the same tree.

pub mod markup;
pub mod navigation;
pub mod panels;
pub mod stock_table;
pub mod style;
pub mod toolkit;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod preview;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use markup::{Element, Node};
pub use navigation::{Role, View, render_page, resolve, route};
pub use panels::{Panel, PanelCard};
pub use stock_table::{StockRow, StockTable};
