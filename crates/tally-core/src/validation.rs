//! # Validation Module
//!
//! Construction-time precondition checks for tally-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Validate ONCE, at the constructor boundary.                            │
//! │                                                                         │
//! │  Item::fixed(..) ──────► validate_item_name + validate_price_cents      │
//! │  Item::by_weight(..) ──► + validate_weight                              │
//! │  MultiBuy::new(..) ────► + validate_group_size                          │
//! │                                                                         │
//! │  After construction succeeds, every downstream operation is             │
//! │  infallible: scan/subtotal/total/output never see bad data.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Anything printable is otherwise fine ("Beans (8oz Can)" is a valid name)
///
/// ```rust
/// use tally_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Beans (8oz Can)").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ConfigResult<()> {
    if name.trim().is_empty() {
        return Err(ConfigError::Required { field: "name" });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ```rust
/// use tally_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(199).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ConfigResult<()> {
    if cents < 0 {
        return Err(ConfigError::MustBeNonNegative { field: "price" });
    }
    Ok(())
}

/// Validates a weight quantity.
///
/// ## Rules
/// - Must be finite (NaN and infinity would poison the cents product)
/// - Must be non-negative; zero weight is allowed (prices to zero)
pub fn validate_weight(weight: f64) -> ConfigResult<()> {
    if !weight.is_finite() {
        return Err(ConfigError::NotFinite { field: "weight" });
    }
    if weight < 0.0 {
        return Err(ConfigError::MustBeNonNegative { field: "weight" });
    }
    Ok(())
}

/// Validates a multi-buy group size.
///
/// ## Rules
/// - Must be >= 1; a zero group size would divide by zero in the
///   free-count computation, so it is refused at construction rather
///   than becoming a runtime fault mid-transaction.
pub fn validate_group_size(group_size: u32) -> ConfigResult<()> {
    if group_size == 0 {
        return Err(ConfigError::MustBePositive { field: "group_size" });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
