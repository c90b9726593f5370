//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use defi_yield_simulation::prelude::*;
//! ```

// Calculators
pub use crate::il_simulator::simulate_il;
pub use crate::yield_projector::project_yield;

// Chart model
pub use crate::chart::{ChartBar, ILChart, il_chart};

// Records
pub use defi_yield_domain::value_objects::{
    ILInputs, ILResult, ILScenario, YieldInputs, YieldResult,
};
pub use defi_yield_domain::ValidationError;
