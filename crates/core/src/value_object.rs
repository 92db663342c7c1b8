//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two values with the same attributes are
/// the same value. In this workspace they are the small classification types
/// (stock status, stock level) that the view layer maps to styles.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum StockLevel { Empty, Low, Healthy }
///
/// impl ValueObject for StockLevel {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
