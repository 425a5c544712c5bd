use serde::{Deserialize, Serialize};

pub mod receipt {
    use super::*;

    /// Whole-receipt totals across all splits.
    ///
    /// `subtotal` and `total` are sums over the per-participant entries, so
    /// `total` already carries the bounded per-participant rounding slack.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Summary {
        pub tip: f64,
        pub tax: f64,
        pub misc: f64,
        pub subtotal: f64,
        pub total: f64,
    }

    /// One item as charged to one participant.
    ///
    /// `price` is the participant's per-share slice; `total_price` is the
    /// full listed line price, kept so clients can show "item costs 12.00
    /// total, your share is 4.00".
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SplitItem {
        pub name: String,
        pub price: f64,
        pub total_price: f64,
    }

    /// One participant's final breakdown.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Split {
        pub name: String,
        pub id: String,
        /// Present only for participants whose id is a canonical account
        /// UUID; omitted from the JSON otherwise.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
        pub subtotal: f64,
        pub final_total: f64,
        pub tip: f64,
        pub tax: f64,
        pub misc: f64,
        pub items: Vec<SplitItem>,
    }

    /// Body submitted to the backend persistence service.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ReceiptBreakdown {
        pub receipt_id: String,
        pub summary: Summary,
        pub splits: Vec<Split>,
    }
}
