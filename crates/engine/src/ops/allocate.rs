use crate::{EngineError, Group, Ledger, LedgerEntry, LineItem, Receipt, ResultEngine};

/// Validates a receipt before any ledger mutation.
///
/// All-or-nothing: either the whole receipt passes or processing aborts
/// with [`EngineError::MalformedReceipt`] and no ledger is built.
fn validate_receipt(receipt: &Receipt) -> ResultEngine<()> {
    if !receipt.subtotal.is_finite() {
        return Err(EngineError::MalformedReceipt(
            "subtotal must be a finite number".to_string(),
        ));
    }

    let charges = [
        ("tax", receipt.additional.tax),
        ("tip", receipt.additional.tip),
        ("misc", receipt.additional.misc),
    ];
    for (label, charge) in charges {
        if !charge.is_finite() {
            return Err(EngineError::MalformedReceipt(format!(
                "{label} must be a finite number"
            )));
        }
    }

    for line in &receipt.items {
        if line.name.trim().is_empty() {
            return Err(EngineError::MalformedReceipt(
                "every item needs a non-empty name".to_string(),
            ));
        }
        if !line.price.is_finite() {
            return Err(EngineError::MalformedReceipt(format!(
                "price of item '{}' must be a finite number",
                line.name
            )));
        }
    }

    Ok(())
}

/// Allocates receipt lines to participants.
///
/// Seeds one [`LedgerEntry`] per roster member, then charges every
/// participant listed on a line that line's per-share price, with
/// `share_count = max(1, people.len())`. A line referencing an id outside
/// the roster aborts the whole call with
/// [`EngineError::UnknownParticipant`]; no partial ledger is returned.
///
/// The returned ledger has subtotals populated and surcharges still zero.
pub fn process_transaction(receipt: &Receipt, group: &Group) -> ResultEngine<Ledger> {
    validate_receipt(receipt)?;

    let mut ledger = Ledger::default();
    for member in &group.members {
        ledger.insert(LedgerEntry::new(
            &member.name,
            &member.id,
            member.phone.as_deref(),
        )?);
    }

    for line in &receipt.items {
        // Explicit policy: a line nobody was recorded on still counts as one
        // share, so it is charged in full wherever it lands.
        let share_count = line.people.len().max(1);
        for person_id in &line.people {
            let entry = ledger
                .get_mut(person_id)
                .ok_or_else(|| EngineError::UnknownParticipant(person_id.clone()))?;
            entry.add_item(LineItem::new(&line.name, line.price, share_count)?);
        }
    }

    Ok(ledger)
}
