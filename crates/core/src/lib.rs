//! `bizdesk-core` — shared building blocks.
//!
//! This crate contains **pure** primitives used by every other crate (no
//! rendering, no IO).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
