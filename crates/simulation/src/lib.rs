//! Yield projection and impermanent loss simulation.
//!
//! Both calculators are pure: identical inputs always produce identical
//! results, and nothing is shared between calls.

/// Prelude module for convenient imports.
pub mod prelude;

/// Bar-chart model of a sweep.
pub mod chart;
/// Impermanent loss sweep.
pub mod il_simulator;
/// Two-venue yield projection.
pub mod yield_projector;

pub use chart::il_chart;
pub use il_simulator::simulate_il;
pub use yield_projector::project_yield;
