//! CSV request protocol: one request per line.
//!
//! | Leading token | Request | Fields |
//! |---|---|---|
//! | `0` | add | `0,orderID,side,qty,price` |
//! | `1` | cancel | `1,orderID` |
//! | `5` | partial cancel | `5,orderID,cancelledQty` |
//! | `6` | replace | `6,originalOrderID,newOrderID,qty,price` |
//!
//! Fields are trimmed individually. `side` is `0` (buy) or `1` (sell).
//! `price` is decimal dollars, stored as integer cents. Blank lines parse
//! to nothing; anything else malformed is a [`ParseError`] and the caller
//! drops the line and keeps going.

use thiserror::Error;

use crate::book::OrderBook;
use crate::sink::EventSink;
use crate::types::price::dollars_to_cents;
use crate::types::{CentPrice, OrderId, Qty, Side};

/// A malformed request line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The leading token is not a known request type.
    #[error("unknown request type {0:?}")]
    UnknownRequestType(String),

    /// A required field is absent or blank.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// More fields than the request kind defines.
    #[error("unexpected trailing fields")]
    TrailingFields,

    /// A field is present but does not parse.
    #[error("bad {field} field {value:?}")]
    BadField {
        field: &'static str,
        value: String,
    },
}

/// A parsed request, ready for [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Add {
        order_id: OrderId,
        side: Side,
        qty: Qty,
        price: CentPrice,
    },
    Cancel {
        order_id: OrderId,
    },
    PartialCancel {
        order_id: OrderId,
        qty: Qty,
    },
    Replace {
        original: OrderId,
        new_id: OrderId,
        qty: Qty,
        price: CentPrice,
    },
}

/// Parse one request line. `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<Request>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(',').map(str::trim);
    let kind = fields.next().expect("split yields at least one token");

    let request = match kind {
        "0" => Request::Add {
            order_id: int_field(&mut fields, "orderID")?,
            side: side_field(&mut fields)?,
            qty: int_field(&mut fields, "qty")?,
            price: price_field(&mut fields)?,
        },
        "1" => Request::Cancel {
            order_id: int_field(&mut fields, "orderID")?,
        },
        "5" => Request::PartialCancel {
            order_id: int_field(&mut fields, "orderID")?,
            qty: int_field(&mut fields, "cancelledQty")?,
        },
        "6" => Request::Replace {
            original: int_field(&mut fields, "originalOrderID")?,
            new_id: int_field(&mut fields, "newOrderID")?,
            qty: int_field(&mut fields, "qty")?,
            price: price_field(&mut fields)?,
        },
        other => return Err(ParseError::UnknownRequestType(other.to_string())),
    };

    if fields.next().is_some() {
        return Err(ParseError::TrailingFields);
    }
    Ok(Some(request))
}

/// Route a parsed request to the book. Returns the book's success flag.
pub fn apply<S: EventSink>(book: &mut OrderBook, request: Request, sink: &mut S) -> bool {
    match request {
        Request::Add { order_id, side, qty, price } => {
            book.add_order(order_id, side, qty, price, sink)
        }
        Request::Cancel { order_id } => book.cancel_order(order_id, sink),
        Request::PartialCancel { order_id, qty } => book.partial_cancel(order_id, qty, sink),
        Request::Replace { original, new_id, qty, price } => {
            book.replace_order(original, new_id, qty, price, sink)
        }
    }
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    match fields.next() {
        Some(field) if !field.is_empty() => Ok(field),
        _ => Err(ParseError::MissingField(name)),
    }
}

fn int_field<'a, T: std::str::FromStr>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<T, ParseError> {
    let field = next_field(fields, name)?;
    field.parse().map_err(|_| ParseError::BadField {
        field: name,
        value: field.to_string(),
    })
}

fn side_field<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<Side, ParseError> {
    let field = next_field(fields, "side")?;
    field
        .parse::<u8>()
        .ok()
        .and_then(Side::from_u8)
        .ok_or_else(|| ParseError::BadField {
            field: "side",
            value: field.to_string(),
        })
}

fn price_field<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<CentPrice, ParseError> {
    let field = next_field(fields, "price")?;
    dollars_to_cents(field).ok_or_else(|| ParseError::BadField {
        field: "price",
        value: field.to_string(),
    })
}
