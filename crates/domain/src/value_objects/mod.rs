pub mod il_sweep;
pub mod yield_projection;

pub use il_sweep::{ILInputs, ILResult, ILScenario};
pub use yield_projection::{YieldInputs, YieldResult};
