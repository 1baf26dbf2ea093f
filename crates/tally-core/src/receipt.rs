//! # Receipt
//!
//! The ordered record of one transaction's scanned items.
//!
//! ## Two totals, one truth
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Receipt::total()    = Σ item.price()   (ground truth, scheme-blind)    │
//! │  Register::subtotal  = scheme.apply()   (discount-aware)                │
//! │                                                                         │
//! │  The receipt never knows about pricing schemes. What was scanned and    │
//! │  what each item costs on its own is the receipt's whole story.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering contract
//! `output()` is the one externally observable text format in the system;
//! printer drivers and test harnesses depend on it byte-for-byte:
//!
//! ```text
//! Receipt:
//! <name>: $<N.NN>
//! ...
//! ------------------
//! TOTAL: $<N.NN>
//! ```
//!
//! A trailing newline follows the TOTAL line.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::Item;
use crate::money::Money;

/// Separator between the line items and the TOTAL line (18 dashes).
const SEPARATOR: &str = "------------------";

// =============================================================================
// Receipt
// =============================================================================

/// An ordered, append-only record of priceable items for one transaction.
///
/// Insertion order is preserved and duplicates are allowed; scanning the
/// same can of beans three times yields three lines. Never shared between
/// concurrent transactions: a register owns exactly one at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt identity, assigned at creation (dual-key pattern: hosts may
    /// add their own human-readable receipt numbers on top).
    id: Uuid,

    /// When this transaction started accumulating items.
    opened_at: DateTime<Utc>,

    /// Stamped by the register when the receipt is finalized.
    completed_at: Option<DateTime<Utc>>,

    items: Vec<Item>,
}

impl Receipt {
    /// Creates a new empty receipt.
    pub fn new() -> Self {
        Receipt {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            completed_at: None,
            items: Vec::new(),
        }
    }

    /// Receipt identity.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the transaction started.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// When the register finalized this receipt, if it has.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Marks the receipt finalized. Crate-internal: only the register's
    /// `total()` transition closes a receipt.
    pub(crate) fn mark_completed(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Appends an item to the end of the receipt. Always succeeds.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// The full ordered item sequence, as a read-only view.
    ///
    /// The reference implementation handed out its live backing array;
    /// a borrowed slice keeps external callers from mutating receipt
    /// internals without changing what they can observe.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of scanned lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been scanned yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every contained item's own price, ignoring any pricing
    /// scheme. This is the ground-truth per-item total; discount-aware
    /// subtotals live on the register.
    pub fn total(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    /// Empties the receipt. Manual reset path, distinct from the
    /// register's automatic swap on finalize.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Renders the receipt as the documented multi-line report.
    ///
    /// One line per item as `<name>: $<N.NN>`, the 18-dash separator,
    /// then `TOTAL: $<N.NN>` and a trailing newline. Currency rendering
    /// is integer splitting of cents, so it is exact and deterministic.
    pub fn output(&self) -> String {
        let mut out = String::from("Receipt:\n");
        for item in &self.items {
            // Money's Display is the $N.NN contract.
            let _ = writeln!(out, "{}: {}", item.name(), item.price());
        }
        out.push_str(SEPARATOR);
        out.push('\n');
        let _ = writeln!(out, "TOTAL: {}", self.total());
        out
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Receipt::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn beans() -> Item {
        Item::fixed("Beans (8oz Can)", 199).unwrap()
    }

    #[test]
    fn test_total_is_sum_of_item_prices() {
        let mut receipt = Receipt::new();
        receipt.add_item(beans());
        receipt.add_item(beans());
        receipt.add_item(Item::fixed("Pencil", 99).unwrap());

        assert_eq!(receipt.total(), Money::from_cents(497));
        assert_eq!(receipt.len(), 3);
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = Receipt::new();
        assert!(receipt.is_empty());
        assert_eq!(receipt.total(), Money::zero());
        assert_eq!(
            receipt.output(),
            "Receipt:\n------------------\nTOTAL: $0.00\n"
        );
    }

    #[test]
    fn test_insertion_order_and_duplicates_preserved() {
        let mut receipt = Receipt::new();
        receipt.add_item(beans());
        receipt.add_item(Item::fixed("Pencil", 99).unwrap());
        receipt.add_item(beans());

        let names: Vec<&str> = receipt.items().iter().map(Item::name).collect();
        assert_eq!(names, ["Beans (8oz Can)", "Pencil", "Beans (8oz Can)"]);
    }

    #[test]
    fn test_output_byte_contract() {
        let mut receipt = Receipt::new();
        receipt.add_item(beans());
        receipt.add_item(beans());

        assert_eq!(
            receipt.output(),
            "Receipt:\n\
             Beans (8oz Can): $1.99\n\
             Beans (8oz Can): $1.99\n\
             ------------------\n\
             TOTAL: $3.98\n"
        );
    }

    #[test]
    fn test_output_includes_weighed_items() {
        let mut receipt = Receipt::new();
        receipt.add_item(Item::by_weight("Bananas", 50, 1.99).unwrap());

        let out = receipt.output();
        assert!(out.contains("Bananas: $0.99\n"));
        assert!(out.ends_with("TOTAL: $0.99\n"));
    }

    #[test]
    fn test_clear_empties_items() {
        let mut receipt = Receipt::new();
        receipt.add_item(beans());
        receipt.clear();

        assert!(receipt.is_empty());
        assert_eq!(receipt.total(), Money::zero());
    }

    #[test]
    fn test_total_ignores_any_scheme() {
        // The receipt's total is scheme-blind by definition: 3 cans at
        // shelf price even if a register elsewhere gives one free.
        let mut receipt = Receipt::new();
        for _ in 0..3 {
            receipt.add_item(beans());
        }
        assert_eq!(receipt.total().cents(), 597);
    }

    #[test]
    fn test_new_receipt_is_not_completed() {
        let receipt = Receipt::new();
        assert!(receipt.completed_at().is_none());
        assert!(receipt.opened_at() <= Utc::now());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut receipt = Receipt::new();
        receipt.add_item(beans());

        let json = serde_json::to_string(&receipt).unwrap();
        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), receipt.id());
        assert_eq!(back.total(), receipt.total());
        assert_eq!(back.output(), receipt.output());
    }
}
