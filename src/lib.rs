//! # matchbook
//!
//! Single-instrument limit order book matching engine with price-time
//! priority: best price first across levels, FIFO within a level.
//!
//! ## Architecture
//!
//! - **Types**: integer-only scalars, sides, trade and error events
//! - **Book**: slab-backed levels, per-side price priority queues with lazy
//!   cleanup, and an order-id index for O(1) cancel
//! - **Sink**: the event contract every operation reports through
//! - **CSV**: the text request protocol and its reporter
//!
//! ## Example
//!
//! ```
//! use matchbook::{OrderBook, RecordingSink, Side};
//!
//! let mut book = OrderBook::new();
//! let mut sink = RecordingSink::new();
//!
//! book.add_order(1, Side::Buy, 100, 3000, &mut sink);
//! book.add_order(2, Side::Sell, 40, 3000, &mut sink);
//!
//! assert_eq!(sink.trades().count(), 1);
//! assert_eq!(book.top(Side::Buy), Some((3000, 1)));
//! ```
//!
//! The engine is single-threaded and fully synchronous: request order
//! defines event order, and every request runs to completion on the calling
//! thread. Run one book per thread to parallelise across instruments.

/// Core data types: scalars, sides, events
pub mod types;

/// Order book: levels, priority queues, index, matching
pub mod book;

/// Event sink contract and stock sinks
pub mod sink;

/// CSV trade reporter
pub mod report;

/// CSV request protocol
pub mod csv;

pub use book::{OrderBook, SideBook};
pub use sink::{EventSink, NullSink, RecordingSink};
pub use types::{
    BookEvent, CentPrice, ErrorCode, Fill, OrderId, Qty, RequestKind, Side, TradeEvent,
};
