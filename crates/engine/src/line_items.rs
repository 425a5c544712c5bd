//! The module contains the representation of a single receipt line as
//! attached to one participant.

use crate::{EngineError, ResultEngine};

/// One priced receipt line, scoped to one participant.
///
/// `unit_price` is the full listed price of the line and `share_count` is
/// how many participants split it. Every participant listed on a line gets
/// their own `LineItem` carrying the same `unit_price`, so output can say
/// "item costs 12.00 total, your share is 4.00".
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    name: String,
    unit_price: f64,
    share_count: usize,
}

impl LineItem {
    /// Creates a line item.
    ///
    /// `share_count` is clamped to at least 1, so a line with zero recorded
    /// sharers is attributed in full to whichever participant it is
    /// attached to. This clamp is policy, not an accident of the input.
    pub fn new(name: &str, unit_price: f64, share_count: usize) -> ResultEngine<Self> {
        if name.trim().is_empty() {
            return Err(EngineError::InvalidItem(
                "item name must not be empty".to_string(),
            ));
        }
        if !unit_price.is_finite() {
            return Err(EngineError::InvalidItem(format!(
                "price for item '{name}' must be a finite number"
            )));
        }
        if unit_price < 0.0 {
            return Err(EngineError::InvalidItem(format!(
                "price for item '{name}' must not be negative"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            unit_price,
            share_count: share_count.max(1),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full listed price of the line.
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn share_count(&self) -> usize {
        self.share_count
    }

    /// The slice of the line charged to the participant holding this item.
    pub fn price_per_share(&self) -> f64 {
        self.unit_price / self.share_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_price_by_share_count() {
        let item = LineItem::new("Pizza", 12.0, 3).unwrap();
        assert_eq!(item.price_per_share(), 4.0);
        assert_eq!(item.unit_price(), 12.0);
    }

    #[test]
    fn clamps_share_count_to_one() {
        let item = LineItem::new("Coffee", 5.0, 0).unwrap();
        assert_eq!(item.share_count(), 1);
        assert_eq!(item.price_per_share(), 5.0);
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            LineItem::new("  ", 5.0, 1),
            Err(EngineError::InvalidItem(_))
        ));
    }

    #[test]
    fn rejects_negative_or_non_finite_price() {
        assert!(matches!(
            LineItem::new("Pizza", -1.0, 1),
            Err(EngineError::InvalidItem(_))
        ));
        assert!(matches!(
            LineItem::new("Pizza", f64::NAN, 1),
            Err(EngineError::InvalidItem(_))
        ));
        assert!(matches!(
            LineItem::new("Pizza", f64::INFINITY, 1),
            Err(EngineError::InvalidItem(_))
        ));
    }
}
