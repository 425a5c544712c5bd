//! Per-participant ledger built while processing one receipt.
//!
//! A [`Ledger`] is scoped to a single processing call. It owns value-typed
//! [`LedgerEntry`] records keyed by participant id; it never aliases the
//! roster structs it was seeded from, and it is never shared across
//! receipts.

use crate::{EngineError, LineItem, ResultEngine, money::round2};

/// One participant's accumulated share of the receipt.
///
/// `subtotal` always equals the sum of the attached items' per-share
/// prices, and `final_total` always equals `subtotal + tax + tip + misc`;
/// both are recomputed whenever items or charges change.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerEntry {
    pub name: String,
    /// Opaque participant id: a roster member id or a synthetic id such as
    /// `"you"` for the bill payer.
    pub id: String,
    pub phone: Option<String>,
    items: Vec<LineItem>,
    subtotal: f64,
    tax: f64,
    tip: f64,
    misc: f64,
    final_total: f64,
}

impl LedgerEntry {
    pub fn new(name: &str, id: &str, phone: Option<&str>) -> ResultEngine<Self> {
        if name.trim().is_empty() || id.trim().is_empty() {
            return Err(EngineError::InvalidParticipant(
                "name and id are required".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            id: id.to_string(),
            phone: phone.map(str::to_string),
            items: Vec::new(),
            subtotal: 0.0,
            tax: 0.0,
            tip: 0.0,
            misc: 0.0,
            final_total: 0.0,
        })
    }

    /// Attaches an item and refreshes the running subtotal.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
        self.recalculate_subtotal();
    }

    fn recalculate_subtotal(&mut self) {
        self.subtotal = self.items.iter().map(LineItem::price_per_share).sum();
        self.final_total = self.subtotal + self.tax + self.tip + self.misc;
    }

    /// Sets the distributed surcharges and finalizes the total to cents.
    pub(crate) fn apply_charges(&mut self, tax: f64, tip: f64, misc: f64) {
        self.tax = tax;
        self.tip = tip;
        self.misc = misc;
        self.final_total = round2(self.subtotal + tax + tip + misc);
    }

    /// Items in assignment order (the receipt's processing order).
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn tax(&self) -> f64 {
        self.tax
    }

    pub fn tip(&self) -> f64 {
        self.tip
    }

    pub fn misc(&self) -> f64 {
        self.misc
    }

    pub fn final_total(&self) -> f64 {
        self.final_total
    }
}

/// Insertion-ordered mapping from participant id to [`LedgerEntry`].
///
/// Entries keep roster order so every projection (API splits, settlement
/// message) is deterministic.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Inserts an entry; an entry with the same id is replaced in place.
    pub(crate) fn insert(&mut self, entry: LedgerEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, id: &str) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut LedgerEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [LedgerEntry] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the subtotals actually attributed during allocation. This is
    /// the denominator for proportional surcharge distribution, never the
    /// receipt's stated subtotal.
    pub fn total_subtotal(&self) -> f64 {
        self.entries.iter().map(LedgerEntry::subtotal).sum()
    }
}
