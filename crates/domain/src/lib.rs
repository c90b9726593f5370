//! Domain types and pure financial math for the DeFi yield calculator.
//!
//! - `metrics`: APR/APY conversion, fee arithmetic and the impermanent loss formula
//! - `value_objects`: input and result records of the two calculators
//! - `gas`: gas cost estimation for pre-filling gas fees
//! - `format`: currency and percentage display helpers

/// Enumerations shared across crates.
pub mod enums;
/// Input validation errors.
pub mod error;
/// Display formatting.
pub mod format;
/// Gas cost estimation.
pub mod gas;
/// Rate and loss formulas.
pub mod metrics;
/// Calculator inputs and results.
pub mod value_objects;

pub use error::ValidationError;
