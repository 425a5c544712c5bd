//! Output projections over a completed ledger.
//!
//! Two independent, pure views: the API-shaped breakdown submitted to the
//! backend, and the human-readable settlement message with payment deep
//! links.

use uuid::Uuid;

use api_types::receipt::{ReceiptBreakdown, Split, SplitItem, Summary};

use crate::{EngineError, Ledger, LineItem, ResultEngine, money::format_amount};

/// Deep-link scheme for the generated payment links.
const PAY_SCHEME: &str = "venmo";

/// Returns `true` for canonical hyphenated UUIDs (8-4-4-4-12 hex groups).
///
/// Phone numbers are exposed only for roster members whose id is a real
/// account UUID; synthetic ids like `"you"` never leak a phone. This is a
/// policy, not an incidental check.
fn is_account_uuid(id: &str) -> bool {
    id.len() == 36 && Uuid::try_parse(id).is_ok()
}

/// Projects a processed ledger into the API-shaped breakdown.
///
/// Summary fields are sums over all entries; each split carries the
/// participant's per-share item prices next to the full line prices for
/// traceability.
pub fn format_for_api(ledger: &Ledger, receipt_id: &str) -> ReceiptBreakdown {
    let mut summary = Summary::default();
    let mut splits = Vec::with_capacity(ledger.len());

    for entry in ledger.entries() {
        summary.tip += entry.tip();
        summary.tax += entry.tax();
        summary.misc += entry.misc();
        summary.subtotal += entry.subtotal();
        summary.total += entry.final_total();

        splits.push(Split {
            name: entry.name.clone(),
            id: entry.id.clone(),
            phone: if is_account_uuid(&entry.id) {
                entry.phone.clone()
            } else {
                None
            },
            subtotal: entry.subtotal(),
            final_total: entry.final_total(),
            tip: entry.tip(),
            tax: entry.tax(),
            misc: entry.misc(),
            items: entry
                .items()
                .iter()
                .map(|item| SplitItem {
                    name: item.name().to_string(),
                    price: item.price_per_share(),
                    total_price: item.unit_price(),
                })
                .collect(),
        });
    }

    ReceiptBreakdown {
        receipt_id: receipt_id.to_string(),
        summary,
        splits,
    }
}

/// Builds the shareable settlement message.
///
/// One paragraph per participant, excluding the synthetic id `"you"` (the
/// bill payer is never asked to pay themself): name, final amount, the
/// item names in assignment order, and a payment deep link of the form
/// `venmo://paycharge?txn=pay&recipients=<username>&amount=<amount>`.
///
/// Fails with [`EngineError::MissingPaymentHandle`] when no payment
/// username is supplied.
pub fn generate_group_message(ledger: &Ledger, payment_username: &str) -> ResultEngine<String> {
    if payment_username.trim().is_empty() {
        return Err(EngineError::MissingPaymentHandle);
    }

    let mut message = String::from("📌 Receipt Split\n\n");

    for entry in ledger.entries() {
        if entry.id == "you" {
            continue;
        }

        let amount = format_amount(entry.final_total());
        let items: Vec<&str> = entry.items().iter().map(LineItem::name).collect();

        message.push_str(&format!("👤 {}\n", entry.name));
        message.push_str(&format!("💳 Amount: {amount}\n"));
        message.push_str(&format!("🛒 Items: {}\n", items.join(", ")));
        message.push_str(&format!(
            "🔗 Pay:\n {PAY_SCHEME}://paycharge?txn=pay&recipients={payment_username}&amount={amount}\n\n"
        ));
    }

    message.push_str("✅ Tap your link above to pay!");
    Ok(message)
}
