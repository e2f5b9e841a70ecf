//! One side of the book: price levels, their priority queue, and matching.
//!
//! ## Structure
//!
//! - `orders`: slab of [`OrderNode`]s; slab keys are the stable order
//!   handles held by the shared index.
//! - `levels`: slab of [`PriceLevel`]s; slab keys are the stable level
//!   handles held by the price map, the priority queue, and the index.
//! - `level_by_price`: price → level key. Always agrees with the queue on
//!   which prices exist.
//! - `queue`: price priority queue. May lag behind cancels: a level emptied
//!   below the top keeps its entry until it surfaces or an add revives it.
//!
//! ## Counters
//!
//! `order_count` is the number of resting orders; `level_count` counts
//! levels with a non-empty FIFO. Emptied-but-queued levels are excluded
//! from `level_count` but still occupy a queue entry (observable through
//! [`SideBook::price_queue_len`]).

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use slab::Slab;

use crate::book::heap::PriceQueue;
use crate::book::index::{OrderIndex, OrderRef};
use crate::book::level::PriceLevel;
use crate::book::node::OrderNode;
use crate::sink::EventSink;
use crate::types::{CentPrice, Fill, OrderId, Qty, Side, TradeEvent};

/// All resting orders for one side of an instrument.
#[derive(Debug)]
pub struct SideBook {
    side: Side,
    orders: Slab<OrderNode>,
    levels: Slab<PriceLevel>,
    level_by_price: HashMap<CentPrice, usize>,
    queue: PriceQueue,
    order_count: usize,
    level_count: usize,
}

impl SideBook {
    /// Create an empty side book.
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, 0, 0)
    }

    /// Create an empty side book with pre-allocated storage.
    pub fn with_capacity(side: Side, reserve_orders: usize, reserve_levels: usize) -> Self {
        Self {
            side,
            orders: Slab::with_capacity(reserve_orders),
            levels: Slab::with_capacity(reserve_levels),
            level_by_price: HashMap::with_capacity(reserve_levels),
            queue: PriceQueue::with_capacity(side, reserve_levels),
            order_count: 0,
            level_count: 0,
        }
    }

    /// The side this book holds.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of resting orders.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    /// Number of price levels with at least one resting order.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Queue entries, counting emptied levels not yet drained.
    /// Always `>= level_count()`.
    #[inline]
    pub fn price_queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Number of orders resting at `price`.
    pub fn orders_at_price(&self, price: CentPrice) -> usize {
        self.level_by_price
            .get(&price)
            .and_then(|&key| self.levels.get(key))
            .map_or(0, PriceLevel::len)
    }

    /// Best live level: its price and the number of orders queued there.
    pub fn top(&self) -> Option<(CentPrice, usize)> {
        let (price, level_key) = self.queue.peek()?;
        let level = self.levels.get(level_key).expect("queued level key is live");
        debug_assert!(!level.is_empty(), "empty tops drain before an operation returns");
        Some((price, level.len()))
    }

    /// Quantity still open on an indexed order.
    pub(crate) fn order_qty(&self, at: OrderRef) -> Qty {
        self.orders.get(at.order_key).expect("indexed order key is live").qty
    }

    /// True when this side's `top_price` satisfies an incoming order limited
    /// at `limit`: a buy book matches a sell aggressor at `top >= limit`, a
    /// sell book matches a buy aggressor at `top <= limit`.
    #[inline]
    fn marketable(&self, top_price: CentPrice, limit: CentPrice) -> bool {
        match self.side {
            Side::Buy => top_price >= limit,
            Side::Sell => top_price <= limit,
        }
    }

    /// Rest a new order at `price`, behind everything already queued there.
    ///
    /// The caller has verified `order_id` is not in the index and `qty > 0`.
    pub(crate) fn add_resting(
        &mut self,
        order_id: OrderId,
        qty: Qty,
        price: CentPrice,
        index: &mut OrderIndex,
    ) {
        debug_assert!(qty > 0, "resting quantity must be positive");

        let (level_key, created) = match self.level_by_price.entry(price) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                let key = self.levels.insert(PriceLevel::new(price));
                entry.insert(key);
                (key, true)
            }
        };
        if created {
            // One queue entry per extant price: push only on a fresh map key.
            // An existing key means the entry is still queued, possibly for a
            // level a cancel emptied.
            self.queue.push(price, level_key);
        }

        let level = self.levels.get_mut(level_key).expect("level key from map is live");
        debug_assert_eq!(level.price, price, "map key and level price agree");
        if level.is_empty() {
            // Fresh level, or an emptied one coming back into use.
            self.level_count += 1;
        }

        let order_key = self.orders.insert(OrderNode::new(order_id, qty));
        level.push_back(order_key, &mut self.orders);

        let displaced = index.insert(
            order_id,
            OrderRef {
                side: self.side,
                level_key,
                order_key,
            },
        );
        debug_assert!(displaced.is_none(), "caller checks id uniqueness first");
        self.order_count += 1;
    }

    /// Match an incoming order against this side: best price first, FIFO
    /// within a level, one [`TradeEvent`] per step. Returns the aggressor's
    /// unfilled quantity.
    pub(crate) fn try_match<S: EventSink>(
        &mut self,
        aggressor_id: OrderId,
        mut qty: Qty,
        limit: CentPrice,
        index: &mut OrderIndex,
        sink: &mut S,
    ) -> Qty {
        while qty > 0 {
            let Some((top_price, level_key)) = self.queue.peek() else {
                break;
            };
            if !self.marketable(top_price, limit) {
                break;
            }
            let level = self.levels.get(level_key).expect("queued level key is live");
            if level.is_empty() {
                self.remove_top_level();
                continue;
            }

            let front_key = level.front().expect("non-empty level has a front");
            let resting = self.orders.get_mut(front_key).expect("front key is live");

            let trade_qty = qty.min(resting.qty);
            qty -= trade_qty;
            resting.qty -= trade_qty;

            let resting_done = resting.qty == 0;
            let resting_fill = if resting_done {
                Fill::Full { order_id: resting.order_id }
            } else {
                Fill::Partial {
                    order_id: resting.order_id,
                    leave_qty: resting.qty,
                }
            };
            let aggressor_fill = if qty == 0 {
                Fill::Full { order_id: aggressor_id }
            } else {
                Fill::Partial {
                    order_id: aggressor_id,
                    leave_qty: qty,
                }
            };

            sink.on_trade(TradeEvent {
                qty: trade_qty,
                price: top_price,
                aggressor: aggressor_fill,
                resting: resting_fill,
            });

            if resting_done {
                self.remove_filled_front(level_key, front_key, index);
            }
        }

        // The loop can stop with a cancel-emptied level on top; drop such
        // entries so the rest state's top is always live.
        self.drain_empty_tops();
        qty
    }

    /// Remove a resting order found through the index.
    ///
    /// Empties drain from the queue top only: a level emptied below the top
    /// keeps its queue entry for later reuse or cleanup.
    pub(crate) fn cancel_resting(&mut self, order_id: OrderId, at: OrderRef, index: &mut OrderIndex) {
        let removed = index.remove(&order_id);
        debug_assert!(removed.is_some(), "caller resolves the id before cancelling");

        let level = self.levels.get_mut(at.level_key).expect("indexed level key is live");
        level.remove(at.order_key, &mut self.orders);
        self.orders.remove(at.order_key);
        self.order_count -= 1;

        if self.levels.get(at.level_key).expect("indexed level key is live").is_empty() {
            self.level_count -= 1;
            self.drain_empty_tops();
        }
    }

    /// Reduce an indexed order's open quantity in place; its FIFO position
    /// is untouched. Returns the remaining quantity.
    pub(crate) fn reduce_resting(&mut self, at: OrderRef, by: Qty) -> Qty {
        let node = self.orders.get_mut(at.order_key).expect("indexed order key is live");
        node.qty -= by;
        node.qty
    }

    /// Unlink the fully filled front order of the current top level and
    /// clean the level up when it empties.
    fn remove_filled_front(&mut self, level_key: usize, order_key: usize, index: &mut OrderIndex) {
        let order_id = self.orders.get(order_key).expect("front key is live").order_id;
        let level = self.levels.get_mut(level_key).expect("top level key is live");
        level.remove(order_key, &mut self.orders);
        self.orders.remove(order_key);

        let removed = index.remove(&order_id);
        debug_assert!(removed.is_some(), "filled order was indexed");
        self.order_count -= 1;

        if self.levels.get(level_key).expect("top level key is live").is_empty() {
            self.level_count -= 1;
            self.remove_top_level();
        }
    }

    /// Pop the queue top and delete its level from the map and the slab.
    fn remove_top_level(&mut self) {
        let (price, level_key) = self.queue.pop().expect("caller checked the queue top");
        let mapped = self.level_by_price.remove(&price);
        debug_assert_eq!(mapped, Some(level_key), "map and queue agree on prices");
        self.levels.remove(level_key);
    }

    /// Drop queue entries whose level was emptied by cancels.
    fn drain_empty_tops(&mut self) {
        while let Some((_, level_key)) = self.queue.peek() {
            if self.levels.get(level_key).expect("queued level key is live").is_empty() {
                self.remove_top_level();
            } else {
                break;
            }
        }
    }
}
