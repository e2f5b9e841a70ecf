//! Event sink contract and stock sinks.
//!
//! The book publishes everything through a sink: one [`TradeEvent`] per
//! match step in price-then-time order, one error per rejected request, and
//! the occasional informational note. Dispatch is monomorphised; each book
//! operation is generic over the sink it reports to.
//!
//! Sinks are total: a sink swallows its own IO problems rather than failing
//! the book. A sink must not call back into the order book.

use crate::types::{BookEvent, ErrorCode, OrderId, RequestKind, TradeEvent};

/// Receiver for everything the book emits.
pub trait EventSink {
    /// One match step. Called in price-priority then time-priority order
    /// within a single add request.
    fn on_trade(&mut self, trade: TradeEvent);

    /// One rejected request. `context` carries extra detail when the ids in
    /// the event are not enough to reconstruct the failure.
    fn on_error(&mut self, order_id: OrderId, request: RequestKind, code: ErrorCode, context: &str);

    /// Informational note about an accepted request.
    fn on_log(&mut self, order_id: OrderId, request: RequestKind, message: &str) {
        let _ = (order_id, request, message);
    }
}

/// Discards every event. Useful for benchmarks and bulk loads.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_trade(&mut self, _trade: TradeEvent) {}
    fn on_error(&mut self, _order_id: OrderId, _request: RequestKind, _code: ErrorCode, _context: &str) {}
}

/// Buffers every event in emission order. Useful for tests and for callers
/// that post-process a request's full event batch.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    /// Events in the order the book emitted them.
    pub events: Vec<BookEvent>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded trades, in emission order.
    pub fn trades(&self) -> impl Iterator<Item = &TradeEvent> {
        self.events.iter().filter_map(|event| match event {
            BookEvent::Trade(trade) => Some(trade),
            _ => None,
        })
    }

    /// The recorded errors, in emission order.
    pub fn errors(&self) -> impl Iterator<Item = (OrderId, RequestKind, ErrorCode)> + '_ {
        self.events.iter().filter_map(|event| match event {
            BookEvent::Error { order_id, request, code, .. } => Some((*order_id, *request, *code)),
            _ => None,
        })
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn on_trade(&mut self, trade: TradeEvent) {
        self.events.push(BookEvent::Trade(trade));
    }

    fn on_error(&mut self, order_id: OrderId, request: RequestKind, code: ErrorCode, context: &str) {
        self.events.push(BookEvent::Error {
            order_id,
            request,
            code,
            context: context.to_string(),
        });
    }

    fn on_log(&mut self, order_id: OrderId, request: RequestKind, message: &str) {
        self.events.push(BookEvent::Log {
            order_id,
            request,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Fill;

    #[test]
    fn test_recording_sink_keeps_emission_order() {
        let mut sink = RecordingSink::new();
        sink.on_error(5, RequestKind::Add, ErrorCode::DuplicateOrderId, "");
        sink.on_trade(TradeEvent {
            qty: 10,
            price: 1000,
            aggressor: Fill::Full { order_id: 1 },
            resting: Fill::Full { order_id: 2 },
        });

        assert_eq!(sink.events.len(), 2);
        assert_eq!(sink.trades().count(), 1);
        assert_eq!(
            sink.errors().next(),
            Some((5, RequestKind::Add, ErrorCode::DuplicateOrderId))
        );

        sink.clear();
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.on_trade(TradeEvent {
            qty: 1,
            price: 1,
            aggressor: Fill::Full { order_id: 1 },
            resting: Fill::Full { order_id: 2 },
        });
        sink.on_error(1, RequestKind::Cancel, ErrorCode::UnknownOrderId, "");
        sink.on_log(1, RequestKind::Add, "ignored");
    }
}
