//! Price priority queue: the side's best price on top.
//!
//! Entries pair a price with the slab key of its level. The buy queue ranks
//! by price (highest on top), the sell queue by negated price (lowest on
//! top), so `peek` always yields the side's best level.
//!
//! The queue may hold entries for levels that cancels have since emptied;
//! callers skip and drain those lazily from the top. At most one entry
//! exists per extant price: pushes happen only when the price map gains a
//! new key.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::{CentPrice, Side};

/// Heap entry ordered by side-adjusted rank only.
#[derive(Debug, Clone, Copy)]
struct LevelEntry {
    rank: i64,
    price: CentPrice,
    level_key: usize,
}

impl PartialEq for LevelEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for LevelEntry {}

impl PartialOrd for LevelEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LevelEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// One side's price priority queue over level slab keys.
#[derive(Debug, Clone)]
pub struct PriceQueue {
    side: Side,
    heap: BinaryHeap<LevelEntry>,
}

impl PriceQueue {
    /// Create an empty queue for the given side.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            heap: BinaryHeap::new(),
        }
    }

    /// Create an empty queue with room for `capacity` levels.
    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self {
            side,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Rank widened to i64 so negating a sell price cannot overflow.
    #[inline]
    fn rank(&self, price: CentPrice) -> i64 {
        match self.side {
            Side::Buy => i64::from(price),
            Side::Sell => -i64::from(price),
        }
    }

    /// Queue a level. The caller guarantees no live entry shares this price.
    pub fn push(&mut self, price: CentPrice, level_key: usize) {
        self.heap.push(LevelEntry {
            rank: self.rank(price),
            price,
            level_key,
        });
    }

    /// The best-ranked entry: `(price, level_key)`.
    #[inline]
    pub fn peek(&self) -> Option<(CentPrice, usize)> {
        self.heap.peek().map(|e| (e.price, e.level_key))
    }

    /// Remove and return the best-ranked entry.
    pub fn pop(&mut self) -> Option<(CentPrice, usize)> {
        self.heap.pop().map(|e| (e.price, e.level_key))
    }

    /// Number of queued entries, counting not-yet-drained empty levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when no entries are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
