use crate::{AdditionalCharges, Ledger, money::round2};

/// Distributes tax/tip/misc across ledger entries in proportion to each
/// entry's share of the attributed subtotal.
///
/// The denominator is always the sum of entry subtotals, i.e. what
/// allocation actually attributed, which may legitimately differ from the
/// subtotal stated on the receipt. When that sum is zero (no priced items)
/// the charges are split evenly across entries instead of dividing by
/// zero.
///
/// Each entry's charges are rounded to cents independently, so the rounded
/// shares can drift from the original charge by up to one cent per
/// participant. That slack is accepted; no reconciliation pass reassigns
/// the remainder.
pub fn process_additional_charges(ledger: &mut Ledger, additional: &AdditionalCharges) {
    let AdditionalCharges { tax, tip, misc } = *additional;

    let total_subtotal = ledger.total_subtotal();
    let entry_count = ledger.len();

    for entry in ledger.entries_mut() {
        let ratio = if total_subtotal > 0.0 {
            entry.subtotal() / total_subtotal
        } else if entry_count > 0 {
            1.0 / entry_count as f64
        } else {
            0.0
        };

        entry.apply_charges(
            round2(tax * ratio),
            round2(tip * ratio),
            round2(misc * ratio),
        );
    }
}
