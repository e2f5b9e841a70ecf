//! Trade reporting in the CSV wire format.

use std::io::Write;

use crate::sink::EventSink;
use crate::types::price::cents_to_dollars;
use crate::types::{ErrorCode, Fill, OrderId, RequestKind, TradeEvent};

/// Writes the text protocol to `out`, one line per event:
///
/// - `2,qty,price` for a trade, price quoted in decimal dollars;
/// - immediately followed by the aggressive fill line, then the resting
///   fill line: `3,orderID` for a full fill, `4,orderID,leaveQty` for a
///   partial fill. The triple is indivisible.
///
/// Rejected requests go to the diagnostic log, not the output stream.
/// Writes are best effort; the output stream's failures are not the book's
/// problem.
#[derive(Debug)]
pub struct CsvReporter<W: Write> {
    out: W,
}

impl<W: Write> CsvReporter<W> {
    /// Report into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_fill(&mut self, fill: Fill) {
        let _ = match fill {
            Fill::Full { order_id } => writeln!(self.out, "3,{order_id}"),
            Fill::Partial { order_id, leave_qty } => {
                writeln!(self.out, "4,{order_id},{leave_qty}")
            }
        };
    }
}

impl<W: Write> EventSink for CsvReporter<W> {
    fn on_trade(&mut self, trade: TradeEvent) {
        let _ = writeln!(
            self.out,
            "2,{},{}",
            trade.qty,
            cents_to_dollars(trade.price)
        );
        self.write_fill(trade.aggressor);
        self.write_fill(trade.resting);
    }

    fn on_error(&mut self, order_id: OrderId, request: RequestKind, code: ErrorCode, context: &str) {
        tracing::warn!(order_id, %request, %code, context, "request rejected");
    }

    fn on_log(&mut self, order_id: OrderId, request: RequestKind, message: &str) {
        tracing::info!(order_id, %request, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(trade: TradeEvent) -> String {
        let mut reporter = CsvReporter::new(Vec::new());
        reporter.on_trade(trade);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_trade_triple_aggressor_first() {
        let out = report(TradeEvent {
            qty: 100,
            price: 3000,
            aggressor: Fill::Partial { order_id: 4, leave_qty: 100 },
            resting: Fill::Full { order_id: 1 },
        });
        assert_eq!(out, "2,100,30\n4,4,100\n3,1\n");
    }

    #[test]
    fn test_full_full_triple() {
        let out = report(TradeEvent {
            qty: 300,
            price: 1000,
            aggressor: Fill::Full { order_id: 5 },
            resting: Fill::Full { order_id: 3 },
        });
        assert_eq!(out, "2,300,10\n3,5\n3,3\n");
    }

    #[test]
    fn test_sub_dollar_price_quoting() {
        let out = report(TradeEvent {
            qty: 1,
            price: 1025,
            aggressor: Fill::Full { order_id: 1 },
            resting: Fill::Full { order_id: 2 },
        });
        assert_eq!(out, "2,1,10.25\n3,1\n3,2\n");
    }

    #[test]
    fn test_errors_do_not_touch_the_output_stream() {
        let mut reporter = CsvReporter::new(Vec::new());
        reporter.on_error(7, RequestKind::Add, ErrorCode::DuplicateOrderId, "");
        assert!(reporter.into_inner().is_empty());
    }
}
