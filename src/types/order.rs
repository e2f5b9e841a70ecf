//! Scalar order types, sides, and request classification.

/// Client-supplied order identifier. Unique while the order is live.
pub type OrderId = u64;

/// Order quantity. Strictly positive on entry and while resting.
pub type Qty = i32;

/// Price in minor currency units (cents). All matching compares integers;
/// see [`crate::types::price`] for the decimal boundary.
pub type CentPrice = i32;

/// Order side: Buy (bid) or Sell (ask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Array index for side-keyed storage: Buy = 0, Sell = 1.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Decode the wire encoding (0 = Buy, 1 = Sell).
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }
}

/// The kind of request that produced an event. Reported alongside rejects so
/// a failing request can be reconstructed from the sink's view alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Add,
    Cancel,
    PartialCancel,
    Replace,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RequestKind::Add => "AddOrderRequest",
            RequestKind::Cancel => "CancelOrderRequest",
            RequestKind::PartialCancel => "PartialCancelRequest",
            RequestKind::Replace => "ReplaceOrderRequest",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_decoding() {
        assert_eq!(Side::from_u8(0), Some(Side::Buy));
        assert_eq!(Side::from_u8(1), Some(Side::Sell));
        assert_eq!(Side::from_u8(2), None);
    }

    #[test]
    fn test_side_index() {
        assert_eq!(Side::Buy.index(), 0);
        assert_eq!(Side::Sell.index(), 1);
    }

    #[test]
    fn test_request_kind_display() {
        assert_eq!(RequestKind::Add.to_string(), "AddOrderRequest");
        assert_eq!(RequestKind::PartialCancel.to_string(), "PartialCancelRequest");
    }
}
