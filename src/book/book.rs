//! Two-sided order book: request dispatch over a shared order-id index.
//!
//! ## Request flow
//!
//! An add first consults the index (duplicate ids are rejected before any
//! matching), then drains the opposite side's book top-down at marketable
//! prices, then rests any remainder on its own side. Cancels and partial
//! cancels resolve the id through the index and go straight to the owning
//! side. A replace is a cancel followed by an add under the new id, so it
//! always loses time priority.
//!
//! All outcomes are observable through the [`EventSink`] passed to each
//! call: trades as they happen, one structured error per rejected request.
//! Rejected requests leave the book untouched and return `false`.

use crate::book::index::OrderIndex;
use crate::book::side::SideBook;
use crate::sink::EventSink;
use crate::types::{CentPrice, ErrorCode, OrderId, Qty, RequestKind, Side};

/// A single instrument's order book.
#[derive(Debug)]
pub struct OrderBook {
    /// Side books indexed by [`Side::index`]: 0 = Buy, 1 = Sell.
    books: [SideBook; 2],
    /// Shared OrderId → handle lookup for both sides.
    index: OrderIndex,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Create an empty book with pre-allocated storage: room for
    /// `reserve_orders` resting orders overall and
    /// `reserve_price_levels_per_side` levels on each side.
    pub fn with_capacity(reserve_orders: usize, reserve_price_levels_per_side: usize) -> Self {
        Self {
            books: [
                SideBook::with_capacity(Side::Buy, reserve_orders, reserve_price_levels_per_side),
                SideBook::with_capacity(Side::Sell, reserve_orders, reserve_price_levels_per_side),
            ],
            index: OrderIndex::with_capacity(reserve_orders),
        }
    }

    /// Match a new order against the opposite side, then rest any remainder
    /// on its own side.
    ///
    /// Rejects a duplicate `order_id` with [`ErrorCode::DuplicateOrderId`]
    /// and a non-positive `qty` with [`ErrorCode::QtyTooSmall`].
    pub fn add_order<S: EventSink>(
        &mut self,
        order_id: OrderId,
        side: Side,
        qty: Qty,
        price: CentPrice,
        sink: &mut S,
    ) -> bool {
        if self.index.contains_key(&order_id) {
            sink.on_error(order_id, RequestKind::Add, ErrorCode::DuplicateOrderId, "");
            return false;
        }
        if qty <= 0 {
            sink.on_error(order_id, RequestKind::Add, ErrorCode::QtyTooSmall, "");
            return false;
        }

        let (buys, sells) = self.books.split_at_mut(1);
        let (own, other) = match side {
            Side::Buy => (&mut buys[0], &mut sells[0]),
            Side::Sell => (&mut sells[0], &mut buys[0]),
        };

        let leave = other.try_match(order_id, qty, price, &mut self.index, sink);
        if leave > 0 {
            own.add_resting(order_id, leave, price, &mut self.index);
        }
        true
    }

    /// Cancel a resting order. Rejects an unknown `order_id` with
    /// [`ErrorCode::UnknownOrderId`].
    pub fn cancel_order<S: EventSink>(&mut self, order_id: OrderId, sink: &mut S) -> bool {
        match self.index.get(&order_id).copied() {
            Some(at) => {
                self.books[at.side.index()].cancel_resting(order_id, at, &mut self.index);
                true
            }
            None => {
                sink.on_error(order_id, RequestKind::Cancel, ErrorCode::UnknownOrderId, "");
                false
            }
        }
    }

    /// Reduce a resting order's quantity in place, preserving its position
    /// in the level FIFO. A reduction to exactly zero converts into a full
    /// cancel.
    ///
    /// Rejects an unknown id, a `cancelled_qty` above the open quantity
    /// ([`ErrorCode::QtyTooLarge`]), and a non-positive `cancelled_qty`
    /// ([`ErrorCode::QtyTooSmall`]).
    pub fn partial_cancel<S: EventSink>(
        &mut self,
        order_id: OrderId,
        cancelled_qty: Qty,
        sink: &mut S,
    ) -> bool {
        let Some(at) = self.index.get(&order_id).copied() else {
            sink.on_error(
                order_id,
                RequestKind::PartialCancel,
                ErrorCode::UnknownOrderId,
                "",
            );
            return false;
        };
        if cancelled_qty <= 0 {
            sink.on_error(
                order_id,
                RequestKind::PartialCancel,
                ErrorCode::QtyTooSmall,
                "",
            );
            return false;
        }
        let book = &mut self.books[at.side.index()];
        if book.order_qty(at) < cancelled_qty {
            sink.on_error(
                order_id,
                RequestKind::PartialCancel,
                ErrorCode::QtyTooLarge,
                "",
            );
            return false;
        }

        if book.reduce_resting(at, cancelled_qty) == 0 {
            self.books[at.side.index()].cancel_resting(order_id, at, &mut self.index);
            sink.on_log(
                order_id,
                RequestKind::PartialCancel,
                "remaining quantity reached zero; order removed",
            );
        }
        true
    }

    /// Cancel `original` and enter `qty @ price` under `new_id` on the same
    /// side. Time priority is lost: the new order matches and rests as a
    /// fresh arrival.
    ///
    /// Rejects `new_id == original` or a live `new_id` with
    /// [`ErrorCode::DuplicateOrderId`]; an absent `original` fails with
    /// [`ErrorCode::UnknownOrderId`] from the cancel step.
    pub fn replace_order<S: EventSink>(
        &mut self,
        original: OrderId,
        new_id: OrderId,
        qty: Qty,
        price: CentPrice,
        sink: &mut S,
    ) -> bool {
        if new_id == original || self.index.contains_key(&new_id) {
            sink.on_error(
                new_id,
                RequestKind::Replace,
                ErrorCode::DuplicateOrderId,
                &format!("original orderID: {original}"),
            );
            return false;
        }
        let side = self.index.get(&original).map(|at| at.side);
        if !self.cancel_order(original, sink) {
            return false;
        }
        let side = side.expect("cancel succeeded, so the original was indexed");
        self.add_order(new_id, side, qty, price, sink)
    }

    /// Number of resting orders on `side`.
    pub fn count_orders(&self, side: Side) -> usize {
        self.books[side.index()].order_count()
    }

    /// Number of non-empty price levels on `side`.
    pub fn count_price_levels(&self, side: Side) -> usize {
        self.books[side.index()].level_count()
    }

    /// Number of orders resting at `price` on `side`.
    pub fn count_orders_at_price(&self, side: Side, price: CentPrice) -> usize {
        self.books[side.index()].orders_at_price(price)
    }

    /// Best level on `side`: its price and the number of orders queued there.
    pub fn top(&self, side: Side) -> Option<(CentPrice, usize)> {
        self.books[side.index()].top()
    }

    /// Priority-queue entries on `side`, counting emptied levels not yet
    /// drained. Exposed for laziness inspection; always
    /// `>= count_price_levels(side)`.
    pub fn price_queue_len(&self, side: Side) -> usize {
        self.books[side.index()].price_queue_len()
    }

    /// Number of live orders across both sides.
    pub fn live_orders(&self) -> usize {
        self.index.len()
    }

    /// True when `order_id` is resting on either side.
    pub fn contains_order(&self, order_id: OrderId) -> bool {
        self.index.contains_key(&order_id)
    }
}
