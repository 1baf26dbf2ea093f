//! # Item Types
//!
//! Priceable items scanned at the register.
//!
//! ## Variant Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Item                                         │
//! │                                                                         │
//! │  ┌───────────────────────┐      ┌───────────────────────────────┐      │
//! │  │        Fixed          │      │           ByWeight            │      │
//! │  │  ───────────────────  │      │  ───────────────────────────  │      │
//! │  │  name                 │      │  name                         │      │
//! │  │  price (cents)        │      │  price_per_unit (cents/unit)  │      │
//! │  │                       │      │  weight (lb, kg, ...)         │      │
//! │  │  price() = price      │      │  price() = trunc(rate × wt)   │      │
//! │  └───────────────────────┘      └───────────────────────────────┘      │
//! │                                                                         │
//! │  The variant set is small and fixed, so a closed enum beats a trait     │
//! │  object: pattern matching stays exhaustive and items stay Clone.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are immutable values: once constructed, name and price never
//! change. A receipt therefore freezes prices at scan time for free.

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price_cents, validate_weight};

// =============================================================================
// Item
// =============================================================================

/// A single product capable of reporting a display name and an integer
/// price in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// A shelf item with one fixed price each.
    Fixed { name: String, price: Money },

    /// A weighed item (produce, deli) priced per unit weight.
    ///
    /// The weight unit is whatever the scale reports; the engine only
    /// multiplies, it never converts units.
    ByWeight {
        name: String,
        price_per_unit: Money,
        weight: f64,
    },
}

impl Item {
    /// Creates a fixed-price item.
    ///
    /// Fails fast on an empty name or a negative price instead of letting
    /// a bad value flow into totals.
    ///
    /// ```rust
    /// use tally_core::item::Item;
    ///
    /// let beans = Item::fixed("Beans (8oz Can)", 199).unwrap();
    /// assert_eq!(beans.price().cents(), 199);
    ///
    /// assert!(Item::fixed("Beans", -1).is_err());
    /// ```
    pub fn fixed(name: impl Into<String>, price_cents: i64) -> ConfigResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents(price_cents)?;
        Ok(Item::Fixed {
            name,
            price: Money::from_cents(price_cents),
        })
    }

    /// Creates a weight-priced item.
    ///
    /// `price_per_unit_cents` is the rate for one whole weight unit; the
    /// item's price is the truncated product (see [`Money::multiply_weight`]).
    ///
    /// ```rust
    /// use tally_core::item::Item;
    ///
    /// let bananas = Item::by_weight("Bananas", 50, 1.99).unwrap();
    /// assert_eq!(bananas.price().cents(), 99); // floor(50 × 1.99)
    /// ```
    pub fn by_weight(
        name: impl Into<String>,
        price_per_unit_cents: i64,
        weight: f64,
    ) -> ConfigResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents(price_per_unit_cents)?;
        validate_weight(weight)?;
        Ok(Item::ByWeight {
            name,
            price_per_unit: Money::from_cents(price_per_unit_cents),
            weight,
        })
    }

    /// The display name shown on the receipt line.
    pub fn name(&self) -> &str {
        match self {
            Item::Fixed { name, .. } => name,
            Item::ByWeight { name, .. } => name,
        }
    }

    /// The item's price in whole cents.
    ///
    /// For weighed items this is trunc(price_per_unit × weight);
    /// fractional-cent loss is the documented rounding rule.
    pub fn price(&self) -> Money {
        match self {
            Item::Fixed { price, .. } => *price,
            Item::ByWeight {
                price_per_unit,
                weight,
                ..
            } => price_per_unit.multiply_weight(*weight),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
