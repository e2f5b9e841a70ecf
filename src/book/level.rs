//! Price level: the FIFO queue of resting orders at one price.
//!
//! ## Queue structure
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! New orders append at the tail, matching consumes from the head, and any
//! order can be removed in O(1) using its slab key. The order data lives in
//! the side book's slab; this struct only holds the queue metadata, so a
//! level handle stays valid while orders come and go.

use slab::Slab;

use crate::book::node::OrderNode;
use crate::types::CentPrice;

/// All orders queued at a single price, in arrival order.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price shared by every order queued here.
    pub price: CentPrice,

    /// Oldest order (slab key). Matched first.
    head: Option<usize>,

    /// Newest order (slab key). New arrivals link here.
    tail: Option<usize>,

    /// Number of queued orders.
    len: usize,
}

impl PriceLevel {
    /// Create an empty level.
    pub fn new(price: CentPrice) -> Self {
        Self {
            price,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of orders queued at this level.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no orders are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slab key of the oldest queued order, the next to match.
    #[inline]
    pub fn front(&self) -> Option<usize> {
        self.head
    }

    /// Append an order at the tail, preserving arrival order.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present in `orders`.
    pub fn push_back(&mut self, key: usize, orders: &mut Slab<OrderNode>) {
        let node = orders.get_mut(key).expect("pushed key must be live");
        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            let tail_node = orders.get_mut(tail_key).expect("tail key must be live");
            tail_node.next = Some(key);
        } else {
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Unlink an order from anywhere in the queue.
    ///
    /// The slab entry itself is left alive; the caller frees it.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present in `orders`.
    pub fn remove(&mut self, key: usize, orders: &mut Slab<OrderNode>) {
        let node = orders.get(key).expect("removed key must be live");
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            let prev_node = orders.get_mut(prev).expect("prev key must be live");
            prev_node.next = next_key;
        } else {
            self.head = next_key;
        }

        if let Some(next) = next_key {
            let next_node = orders.get_mut(next).expect("next key must be live");
            next_node.prev = prev_key;
        } else {
            self.tail = prev_key;
        }

        let node = orders.get_mut(key).expect("removed key must be live");
        node.prev = None;
        node.next = None;

        self.len -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_order(orders: &mut Slab<OrderNode>, order_id: u64, qty: i32) -> usize {
        orders.insert(OrderNode::new(order_id, qty))
    }

    #[test]
    fn test_new_level_is_empty() {
        let level = PriceLevel::new(3000);
        assert_eq!(level.price, 3000);
        assert!(level.is_empty());
        assert_eq!(level.len(), 0);
        assert!(level.front().is_none());
    }

    #[test]
    fn test_push_single() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(3000);

        let key = insert_order(&mut orders, 1, 100);
        level.push_back(key, &mut orders);

        assert_eq!(level.len(), 1);
        assert_eq!(level.front(), Some(key));

        let node = orders.get(key).unwrap();
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_push_preserves_arrival_order() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(3000);

        let k1 = insert_order(&mut orders, 1, 100);
        let k2 = insert_order(&mut orders, 2, 200);
        let k3 = insert_order(&mut orders, 3, 300);
        level.push_back(k1, &mut orders);
        level.push_back(k2, &mut orders);
        level.push_back(k3, &mut orders);

        assert_eq!(level.len(), 3);
        assert_eq!(level.front(), Some(k1));

        // k1 <-> k2 <-> k3
        assert_eq!(orders[k1].prev, None);
        assert_eq!(orders[k1].next, Some(k2));
        assert_eq!(orders[k2].prev, Some(k1));
        assert_eq!(orders[k2].next, Some(k3));
        assert_eq!(orders[k3].prev, Some(k2));
        assert_eq!(orders[k3].next, None);
    }

    #[test]
    fn test_remove_middle() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(3000);

        let k1 = insert_order(&mut orders, 1, 100);
        let k2 = insert_order(&mut orders, 2, 200);
        let k3 = insert_order(&mut orders, 3, 300);
        level.push_back(k1, &mut orders);
        level.push_back(k2, &mut orders);
        level.push_back(k3, &mut orders);

        level.remove(k2, &mut orders);

        assert_eq!(level.len(), 2);
        assert_eq!(level.front(), Some(k1));
        assert_eq!(orders[k1].next, Some(k3));
        assert_eq!(orders[k3].prev, Some(k1));
        assert!(orders[k2].is_unlinked());
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(3000);

        let k1 = insert_order(&mut orders, 1, 100);
        let k2 = insert_order(&mut orders, 2, 200);
        level.push_back(k1, &mut orders);
        level.push_back(k2, &mut orders);

        level.remove(k1, &mut orders);
        assert_eq!(level.front(), Some(k2));
        assert!(orders[k2].is_unlinked());

        level.remove(k2, &mut orders);
        assert!(level.is_empty());
        assert!(level.front().is_none());
    }
}
