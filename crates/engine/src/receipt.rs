//! External input contract: the parsed receipt and the group roster.
//!
//! Both shapes arrive from upstream collaborators (OCR/manual entry and the
//! group selection flow). The engine reads them to seed and populate a
//! ledger and never writes them back.

use serde::Deserialize;

use crate::{EngineError, ResultEngine};

/// A parsed receipt.
#[derive(Clone, Debug, Deserialize)]
pub struct Receipt {
    pub items: Vec<ReceiptLine>,
    /// Subtotal as stated on the receipt. Kept for the record; surcharge
    /// distribution uses the sum actually attributed to participants.
    pub subtotal: f64,
    #[serde(default)]
    pub additional: AdditionalCharges,
}

/// One receipt line.
///
/// `price` is the full line price (not per-person). `people` lists the ids
/// of the participants sharing the line; empty means a share count of 1.
#[derive(Clone, Debug, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub people: Vec<String>,
}

/// Whole-receipt charges distributed proportionally across participants.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdditionalCharges {
    pub tax: f64,
    pub tip: f64,
    pub misc: f64,
}

/// The group roster: the universe of valid participant ids for one receipt.
#[derive(Clone, Debug, Deserialize)]
pub struct Group {
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Receipt {
    /// Parses a receipt from JSON.
    ///
    /// Structural problems (items not an array, subtotal not a number,
    /// additional charges not an object) surface as
    /// [`EngineError::MalformedReceipt`].
    pub fn from_json(raw: &str) -> ResultEngine<Self> {
        serde_json::from_str(raw).map_err(|err| EngineError::MalformedReceipt(err.to_string()))
    }
}

impl Group {
    /// Parses a group roster from JSON.
    pub fn from_json(raw: &str) -> ResultEngine<Self> {
        serde_json::from_str(raw)
            .map_err(|err| EngineError::MalformedReceipt(format!("group roster: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_additional_defaults_to_zero() {
        let receipt =
            Receipt::from_json(r#"{"items": [], "subtotal": 0}"#).unwrap();
        assert_eq!(receipt.additional.tax, 0.0);
        assert_eq!(receipt.additional.tip, 0.0);
        assert_eq!(receipt.additional.misc, 0.0);
    }

    #[test]
    fn partial_additional_fills_the_rest() {
        let receipt = Receipt::from_json(
            r#"{"items": [], "subtotal": 10, "additional": {"tip": 2}}"#,
        )
        .unwrap();
        assert_eq!(receipt.additional.tip, 2.0);
        assert_eq!(receipt.additional.tax, 0.0);
    }

    #[test]
    fn structural_errors_are_malformed_receipt() {
        assert!(matches!(
            Receipt::from_json(r#"{"items": 5, "subtotal": 0}"#),
            Err(EngineError::MalformedReceipt(_))
        ));
        assert!(matches!(
            Receipt::from_json(r#"{"items": [], "subtotal": "ten"}"#),
            Err(EngineError::MalformedReceipt(_))
        ));
        assert!(matches!(
            Receipt::from_json("not json"),
            Err(EngineError::MalformedReceipt(_))
        ));
    }
}
