//! # Pricing Schemes
//!
//! Pluggable strategies for computing a basket subtotal.
//!
//! ## Strategy Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PricingScheme::apply(items)                        │
//! │                                                                         │
//! │  Default ───────► Σ item.price()                                        │
//! │                                                                         │
//! │  MultiBuy ──────► qualifying items only:                                │
//! │                   paid = count − count / group_size                     │
//! │                   total = paid × unit_price                             │
//! │                   (non-qualifying items are NOT priced — see below)     │
//! │                                                                         │
//! │  Composite ─────► each rule prices its qualifying subset,               │
//! │                   everything unmatched is priced naively                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mixed baskets
//! A bare `MultiBuy` deliberately totals only the items it qualifies,
//! ignoring the rest of the basket. That is the historical contract and it
//! is kept as-is rather than silently widened. Mixed baskets belong to
//! [`PricingScheme::Composite`], where the composition rule is explicit.

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::item::Item;
use crate::money::Money;
use crate::validation::{validate_group_size, validate_item_name, validate_price_cents};

// =============================================================================
// MultiBuy Rule
// =============================================================================

/// A "buy N, get one free" promotion keyed by item name.
///
/// Stateless and immutable: construct once, share across registers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiBuy {
    qualifying_name: String,
    unit_price: Money,
    group_size: u32,
}

impl MultiBuy {
    /// Creates a multi-buy rule.
    ///
    /// `group_size` is the N in "for every N qualifying items, one is
    /// free"; it must be >= 1 (validated here so the free-count division
    /// can never fault mid-transaction).
    ///
    /// ```rust
    /// use tally_core::pricing::MultiBuy;
    ///
    /// let beans_deal = MultiBuy::new("Beans (8oz Can)", 199, 3).unwrap();
    /// assert_eq!(beans_deal.group_size(), 3);
    ///
    /// assert!(MultiBuy::new("Beans (8oz Can)", 199, 0).is_err());
    /// ```
    pub fn new(
        qualifying_name: impl Into<String>,
        unit_price_cents: i64,
        group_size: u32,
    ) -> ConfigResult<Self> {
        let qualifying_name = qualifying_name.into();
        validate_item_name(&qualifying_name)?;
        validate_price_cents(unit_price_cents)?;
        validate_group_size(group_size)?;
        Ok(MultiBuy {
            qualifying_name,
            unit_price: Money::from_cents(unit_price_cents),
            group_size,
        })
    }

    /// The exact, case-sensitive item name this rule matches.
    pub fn qualifying_name(&self) -> &str {
        &self.qualifying_name
    }

    /// Price charged for each paid qualifying item.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// The N in "buy N, get one free".
    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// Whether an item qualifies for this rule.
    fn matches(&self, item: &Item) -> bool {
        item.name() == self.qualifying_name
    }

    /// Total for `count` qualifying items: one free per full group.
    fn price_group(&self, count: u64) -> Money {
        let free = count / self.group_size as u64;
        let paid = count - free;
        self.unit_price.multiply_quantity(paid as i64)
    }
}

// =============================================================================
// PricingScheme
// =============================================================================

/// A pluggable strategy computing a basket subtotal.
///
/// The default "sum of prices" behavior is a distinct variant rather than
/// a null-check branch, so dispatch is uniform whether or not a discount
/// is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum PricingScheme {
    /// Naive summation: every item at its own price.
    Default,

    /// One multi-buy promotion; totals ONLY the qualifying items.
    MultiBuy(MultiBuy),

    /// Explicit mixed-basket composition: each rule prices its qualifying
    /// subset, unmatched items are priced naively. An item matched by more
    /// than one rule is priced by the first matching rule.
    Composite { rules: Vec<MultiBuy> },
}

impl PricingScheme {
    /// Computes the subtotal for an ordered sequence of items.
    ///
    /// Total over its whole input domain: never fails, never panics.
    /// Repeated calls on the same items return the same value.
    pub fn apply(&self, items: &[Item]) -> Money {
        match self {
            PricingScheme::Default => items.iter().map(Item::price).sum(),
            PricingScheme::MultiBuy(rule) => {
                let count = items.iter().filter(|i| rule.matches(i)).count() as u64;
                rule.price_group(count)
            }
            PricingScheme::Composite { rules } => {
                // One counter per rule; unmatched items priced as scanned.
                let mut counts = vec![0u64; rules.len()];
                let mut unmatched = Money::zero();
                for item in items {
                    match rules.iter().position(|r| r.matches(item)) {
                        Some(idx) => counts[idx] += 1,
                        None => unmatched += item.price(),
                    }
                }
                rules
                    .iter()
                    .zip(counts)
                    .map(|(rule, count)| rule.price_group(count))
                    .sum::<Money>()
                    + unmatched
            }
        }
    }
}

impl Default for PricingScheme {
    fn default() -> Self {
        PricingScheme::Default
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
