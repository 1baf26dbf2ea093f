//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  This domain has almost no runtime-failure surface.                     │
//! │                                                                         │
//! │  ConfigError  - precondition violations at CONSTRUCTION time            │
//! │                 (negative price, zero group size, NaN weight)           │
//! │                                                                         │
//! │  Once an item / scheme / register is constructed, every operation       │
//! │  (scan, subtotal, total, output) is a total function: no Result,        │
//! │  no panic, no I/O.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants carrying the offending field, never String
//! 3. Validate eagerly at construction boundaries, fail fast

use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Construction-time precondition violations.
///
/// The reference behavior accepted silently wrong inputs (a negative
/// price, a zero multi-buy group size) and produced silently wrong
/// totals. Here every constructor validates and refuses instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be zero or greater (prices, weights).
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: &'static str },

    /// Value must be strictly greater than zero (multi-buy group size).
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Floating-point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::Required { field: "name" }.to_string(),
            "name is required"
        );
        assert_eq!(
            ConfigError::MustBeNonNegative { field: "price" }.to_string(),
            "price must be non-negative"
        );
        assert_eq!(
            ConfigError::MustBePositive { field: "group_size" }.to_string(),
            "group_size must be positive"
        );
        assert_eq!(
            ConfigError::NotFinite { field: "weight" }.to_string(),
            "weight must be a finite number"
        );
    }
}
