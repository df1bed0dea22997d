//! sf-core: stable foundation for sonoflow.
//!
//! Contains:
//! - units (uom SI types + centimeter/liter/watt constructors)
//! - numeric (Real + tolerances + rounding and counting helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SfError, SfResult};
pub use numeric::*;
pub use units::*;
