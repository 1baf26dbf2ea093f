//! # tally-core: Pure Checkout Logic for Tally POS
//!
//! This crate is the **heart** of Tally POS. It models a point-of-sale
//! checkout as pure functions with zero I/O dependencies: priceable items,
//! pluggable pricing schemes, a running receipt, and a register that ties
//! the transaction lifecycle together.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tally POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Host applications (external to this repo)            │   │
//! │  │     terminal UI ─ printer driver ─ test harness ─ storage       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   item    │  │  pricing  │  │ register  │  │   │
//! │  │   │   Money   │  │   Item    │  │  schemes  │  │  Receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`item`] - Priceable items (fixed-price and weight-priced)
//! - [`pricing`] - Pluggable pricing schemes (default, multi-buy, composite)
//! - [`receipt`] - Ordered transaction record with text rendering
//! - [`register`] - Scan / subtotal / finalize lifecycle
//! - [`validation`] - Construction-time precondition checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same basket, same total, every time
//! 2. **No I/O**: the only output this crate produces is an in-memory string
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Fail Fast**: bad configuration is rejected at construction; after
//!    that, every operation is infallible
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Item, Register};
//!
//! let mut register = Register::new();
//! register.scan(Item::fixed("Beans (8oz Can)", 199)?);
//! assert_eq!(register.subtotal().cents(), 199);
//!
//! let receipt = register.total();
//! assert!(receipt.output().ends_with("TOTAL: $1.99\n"));
//!
//! // The register has already begun the next transaction.
//! assert_eq!(register.subtotal().cents(), 0);
//! # Ok::<(), tally_core::ConfigError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod register;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use error::{ConfigError, ConfigResult};
pub use item::Item;
pub use money::Money;
pub use pricing::{MultiBuy, PricingScheme};
pub use receipt::Receipt;
pub use register::Register;
