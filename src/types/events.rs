//! Events published through the sink: trades, rejects, and log lines.
//!
//! ## Trade anatomy
//!
//! Every match step produces exactly one [`TradeEvent`] carrying the traded
//! quantity, the execution price (always the resting level's price), and one
//! [`Fill`] per participant. A fill is `Full` when that side's remaining
//! quantity reached zero, otherwise `Partial` with the quantity still open.

use crate::types::{CentPrice, OrderId, Qty, RequestKind};

/// How a match step left one of the two participating orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// The order's remaining quantity reached zero.
    Full { order_id: OrderId },
    /// The order still has `leave_qty` open after this step.
    Partial { order_id: OrderId, leave_qty: Qty },
}

impl Fill {
    /// The identifier of the filled order.
    #[inline]
    pub fn order_id(&self) -> OrderId {
        match *self {
            Fill::Full { order_id } | Fill::Partial { order_id, .. } => order_id,
        }
    }

    /// True when the order was completely consumed.
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, Fill::Full { .. })
    }
}

/// A single match step between the incoming order and a resting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeEvent {
    /// Quantity exchanged in this step.
    pub qty: Qty,
    /// Execution price: the resting level's price.
    pub price: CentPrice,
    /// The incoming order's fill.
    pub aggressor: Fill,
    /// The resting order's fill.
    pub resting: Fill,
}

/// Reject reasons reported through the sink. None of these are fatal; the
/// offending request is dropped and the book is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateOrderId,
    UnknownOrderId,
    QtyTooLarge,
    QtyTooSmall,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCode::DuplicateOrderId => "DuplicateOrderID",
            ErrorCode::UnknownOrderId => "UnknownOrderID",
            ErrorCode::QtyTooLarge => "QtyTooLarge",
            ErrorCode::QtyTooSmall => "QtyTooSmall",
        };
        f.write_str(name)
    }
}

/// Everything a sink can observe, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEvent {
    Trade(TradeEvent),
    Error {
        order_id: OrderId,
        request: RequestKind,
        code: ErrorCode,
        context: String,
    },
    Log {
        order_id: OrderId,
        request: RequestKind,
        message: String,
    },
}
