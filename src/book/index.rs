//! Order-id index shared by the two sides of a book.
//!
//! One entry per live order. The entry records which side owns the order and
//! the slab keys of its level and node, making cancel and partial cancel
//! O(1): no search through levels is ever needed. Both handles stay valid
//! until the order itself is erased.

use std::collections::HashMap;

use crate::types::{OrderId, Side};

/// Where a live order rests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRef {
    /// Side whose book holds the order.
    pub side: Side,
    /// Slab key of the containing price level.
    pub level_key: usize,
    /// Slab key of the order node inside the level's FIFO.
    pub order_key: usize,
}

/// OrderId → [`OrderRef`] lookup, shared by both side books.
pub type OrderIndex = HashMap<OrderId, OrderRef>;
