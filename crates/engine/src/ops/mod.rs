//! Processing pipeline over one receipt: validation, item allocation,
//! surcharge distribution.
//!
//! Each stage is pure given its inputs. The ledger being built is the only
//! mutable state and it is scoped to a single call, so concurrent
//! invocations for different receipts never interfere.

mod allocate;
mod surcharges;

pub use allocate::process_transaction;
pub use surcharges::process_additional_charges;

use crate::{Group, Ledger, Receipt, ResultEngine};

/// Full pipeline: allocate items to participants, then distribute
/// tax/tip/misc proportionally.
///
/// Equivalent to [`process_transaction`] followed by
/// [`process_additional_charges`].
pub fn process_receipt(receipt: &Receipt, group: &Group) -> ResultEngine<Ledger> {
    let mut ledger = process_transaction(receipt, group)?;
    process_additional_charges(&mut ledger, &receipt.additional);
    Ok(ledger)
}
