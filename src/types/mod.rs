//! Core data types for the matching engine.
//!
//! All prices are integer cents and all quantities are signed 32-bit
//! integers; the book never touches floating point. Decimal rendering and
//! parsing exist only at the text boundary.
//!
//! ## Types
//!
//! - [`Side`]: Buy or Sell
//! - [`TradeEvent`] / [`Fill`]: one match step and how it left each order
//! - [`ErrorCode`] / [`RequestKind`]: structured reject reporting
//! - [`BookEvent`]: everything a sink can observe, in emission order

/// Scalar types, sides, and request classification
pub mod order;

/// Trade, fill, and error events published through the sink
pub mod events;

/// Decimal dollar ⇄ integer cent conversions for the text boundary
pub mod price;

pub use events::{BookEvent, ErrorCode, Fill, TradeEvent};
pub use order::{CentPrice, OrderId, Qty, RequestKind, Side};
