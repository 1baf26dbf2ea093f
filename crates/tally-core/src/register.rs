//! # Register
//!
//! The transaction lifecycle: scan, subtotal, finalize.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Register Lifecycle                                  │
//! │                                                                         │
//! │            ┌──────────────── Accumulating ───────────────┐              │
//! │            │                                             │              │
//! │  scan(item) ──► append to current receipt                │              │
//! │  subtotal() ──► scheme.apply(receipt.items())  (no change)              │
//! │  total() ─────► swap in fresh receipt, stamp and return old one         │
//! │            │                                             │              │
//! │            └──────── always back to Accumulating ────────┘              │
//! │                                                                         │
//! │  There is no explicit "closed" state: total() is both accessor and      │
//! │  transition, and the register never retains a receipt it has closed.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! All mutation goes through `&mut self`, so a register is confined to one
//! logical transaction at a time by the borrow checker; there is no
//! internal locking. Hosts that genuinely need a shared register wrap it
//! in a mutex themselves. Pricing schemes are immutable and freely shared
//! across registers.

use std::mem;

use tracing::debug;

use crate::item::Item;
use crate::money::Money;
use crate::pricing::PricingScheme;
use crate::receipt::Receipt;

// =============================================================================
// Register
// =============================================================================

/// Owns the in-progress receipt for one lane and the pricing scheme it
/// totals under.
///
/// The scheme is fixed at construction for the lifetime of the register;
/// absent an explicit scheme, naive summation applies.
#[derive(Debug, Clone)]
pub struct Register {
    current: Receipt,
    scheme: PricingScheme,
}

impl Register {
    /// Creates a register with naive pricing (every item at its own price).
    pub fn new() -> Self {
        Register::with_scheme(PricingScheme::Default)
    }

    /// Creates a register totalling under the given pricing scheme.
    ///
    /// ```rust
    /// use tally_core::pricing::{MultiBuy, PricingScheme};
    /// use tally_core::register::Register;
    ///
    /// let deal = MultiBuy::new("Beans (8oz Can)", 199, 3).unwrap();
    /// let register = Register::with_scheme(PricingScheme::MultiBuy(deal));
    /// assert_eq!(register.subtotal().cents(), 0);
    /// ```
    pub fn with_scheme(scheme: PricingScheme) -> Self {
        Register {
            current: Receipt::new(),
            scheme,
        }
    }

    /// The scheme this register totals under.
    pub fn scheme(&self) -> &PricingScheme {
        &self.scheme
    }

    /// Read-only view of the in-progress receipt.
    pub fn current_receipt(&self) -> &Receipt {
        &self.current
    }

    /// Scans an item: appends it to the current receipt.
    pub fn scan(&mut self, item: Item) {
        debug!(
            receipt = %self.current.id(),
            item = item.name(),
            price_cents = item.price().cents(),
            "item scanned"
        );
        self.current.add_item(item);
    }

    /// Discount-aware running total for the in-progress receipt.
    ///
    /// Idempotent: repeated calls without an intervening `scan` or
    /// `total` return the same value.
    pub fn subtotal(&self) -> Money {
        self.scheme.apply(self.current.items())
    }

    /// Finalizes the transaction: detaches the current receipt, stamps
    /// its completion time, installs a fresh empty one, and hands the
    /// closed receipt to the caller.
    ///
    /// After this call the returned receipt is unaffected by further
    /// scans; the register has already begun a new transaction.
    pub fn total(&mut self) -> Receipt {
        let mut finished = mem::replace(&mut self.current, Receipt::new());
        finished.mark_completed();
        debug!(
            receipt = %finished.id(),
            lines = finished.len(),
            total_cents = finished.total().cents(),
            "receipt finalized"
        );
        finished
    }
}

impl Default for Register {
    fn default() -> Self {
        Register::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::MultiBuy;

    fn beans() -> Item {
        Item::fixed("Beans (8oz Can)", 199).unwrap()
    }

    #[test]
    fn test_schemeless_subtotal_equals_receipt_total() {
        let mut register = Register::new();
        register.scan(beans());
        register.scan(Item::fixed("Pencil", 99).unwrap());

        assert_eq!(register.subtotal(), register.current_receipt().total());
        assert_eq!(register.subtotal().cents(), 298);
    }

    #[test]
    fn test_subtotal_is_idempotent() {
        let mut register = Register::new();
        register.scan(beans());

        let first = register.subtotal();
        assert_eq!(register.subtotal(), first);
        assert_eq!(register.subtotal(), first);
    }

    #[test]
    fn test_total_detaches_and_resets() {
        let mut register = Register::new();
        register.scan(beans());

        let receipt = register.total();
        assert_eq!(receipt.total().cents(), 199);
        assert!(receipt.completed_at().is_some());

        // Fresh transaction: empty receipt, zero subtotal, new identity.
        assert_eq!(register.subtotal().cents(), 0);
        assert!(register.current_receipt().is_empty());
        assert_ne!(register.current_receipt().id(), receipt.id());
    }

    #[test]
    fn test_closed_receipt_unaffected_by_further_scans() {
        let mut register = Register::new();
        register.scan(beans());
        let closed = register.total();

        register.scan(Item::fixed("Pencil", 99).unwrap());
        register.scan(Item::fixed("Eraser", 49).unwrap());

        assert_eq!(closed.len(), 1);
        assert_eq!(closed.total().cents(), 199);
        assert_eq!(register.subtotal().cents(), 148);
    }

    #[test]
    fn test_multi_buy_register_subtotal() {
        let deal = MultiBuy::new("Beans (8oz Can)", 199, 3).unwrap();
        let mut register = Register::with_scheme(PricingScheme::MultiBuy(deal));

        for _ in 0..7 {
            register.scan(beans());
        }
        assert_eq!(register.subtotal().cents(), 995); // 5 paid of 7

        // Ground-truth receipt total is scheme-blind.
        assert_eq!(register.current_receipt().total().cents(), 1393);
    }

    #[test]
    fn test_end_to_end_single_item() {
        let mut register = Register::new();
        register.scan(beans());
        assert_eq!(register.subtotal().cents(), 199);

        let receipt = register.total();
        let out = receipt.output();
        assert!(out.starts_with("Receipt:\n"));
        assert!(out.contains("Beans (8oz Can): $1.99\n"));
        assert!(out.ends_with("TOTAL: $1.99\n"));

        // A new scan starts an empty transaction.
        assert_eq!(register.subtotal().cents(), 0);
        register.scan(beans());
        assert_eq!(register.subtotal().cents(), 199);
        assert_eq!(register.current_receipt().len(), 1);
    }

    #[test]
    fn test_scheme_fixed_for_register_lifetime() {
        let deal = MultiBuy::new("Beans (8oz Can)", 199, 3).unwrap();
        let register = Register::with_scheme(PricingScheme::MultiBuy(deal.clone()));
        assert_eq!(register.scheme(), &PricingScheme::MultiBuy(deal));
    }

    #[test]
    fn test_shared_scheme_across_registers() {
        let scheme =
            PricingScheme::MultiBuy(MultiBuy::new("Beans (8oz Can)", 199, 3).unwrap());
        let mut lane_one = Register::with_scheme(scheme.clone());
        let mut lane_two = Register::with_scheme(scheme);

        for _ in 0..3 {
            lane_one.scan(beans());
            lane_two.scan(beans());
        }
        assert_eq!(lane_one.subtotal().cents(), 398);
        assert_eq!(lane_two.subtotal().cents(), 398);
    }
}
