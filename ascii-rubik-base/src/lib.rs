//! This library is an internal component of [`ascii-rubik`],
//! which defines the core mathematical types and functions.
//! Do not depend on this library; use only [`ascii-rubik`] instead.
//!
//! [`ascii-rubik`]: https://crates.io/crates/ascii-rubik/

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

/// Do not use this module directly; its contents are re-exported from `ascii-rubik`.
pub mod math;

// reexport for convenience of our tests
#[doc(hidden)]
pub use euclid;
