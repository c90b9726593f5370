//! Impermanent loss sweep.
//!
//! Evaluates a constant product position across evenly spaced price changes
//! and aggregates the risk statistics of the sweep.

use defi_yield_domain::metrics::{hold_value_after_change, impermanent_loss, lp_value_after_il};
use defi_yield_domain::value_objects::{ILInputs, ILResult, ILScenario};
use tracing::debug;

/// LP and hold values closer than this count as a breakeven point.
pub const BREAKEVEN_TOLERANCE: f64 = 0.01;
/// Losses below this percentage count as high risk.
pub const HIGH_RISK_IL_PCT: f64 = -20.0;
/// Share of the volatility added on top of the worst loss for the breakeven yield.
pub const VOLATILITY_BUFFER: f64 = 0.1;

/// Sweeps `inputs.steps` price changes from the minimum to the maximum,
/// endpoints included.
///
/// Inputs are not validated; call [`ILInputs::validate`] first. Fewer than two
/// steps produce `NaN` or infinite statistics instead of panicking.
#[must_use]
pub fn simulate_il(inputs: &ILInputs) -> ILResult {
    let step = (inputs.max_price_change_pct - inputs.min_price_change_pct)
        / (inputs.steps as f64 - 1.0);

    let mut scenarios = Vec::with_capacity(inputs.steps);
    let mut breakeven_points = Vec::new();
    let mut high_risk_count = 0;

    for i in 0..inputs.steps {
        let price_change_pct = inputs.min_price_change_pct + i as f64 * step;
        let new_price = inputs.initial_price * (1.0 + price_change_pct / 100.0);

        let il = impermanent_loss(inputs.initial_price, new_price);
        let lp_value = lp_value_after_il(inputs.initial_value, il);
        let hold_value = hold_value_after_change(inputs.initial_value, price_change_pct);

        if (lp_value - hold_value).abs() < BREAKEVEN_TOLERANCE {
            breakeven_points.push(price_change_pct);
        }
        if il < HIGH_RISK_IL_PCT {
            high_risk_count += 1;
        }

        scenarios.push(ILScenario {
            price_change_pct,
            impermanent_loss_pct: il,
            lp_value,
            hold_value,
        });
    }

    let max_il_pct = scenarios
        .iter()
        .map(|s| s.impermanent_loss_pct)
        .fold(f64::INFINITY, worst_loss);
    let avg_il_pct = scenarios
        .iter()
        .map(|s| s.impermanent_loss_pct)
        .sum::<f64>()
        / scenarios.len() as f64;
    let breakeven_yield_pct = max_il_pct.abs() + inputs.volatility_pct * VOLATILITY_BUFFER;

    debug!(
        steps = inputs.steps,
        max_il_pct,
        avg_il_pct,
        breakeven_yield_pct,
        high_risk_count,
        "impermanent loss sweep complete"
    );

    ILResult {
        scenarios,
        max_il_pct,
        avg_il_pct,
        breakeven_yield_pct,
        high_risk_count,
        breakeven_points,
    }
}

/// Minimum that propagates `NaN` once seen.
fn worst_loss(worst: f64, il: f64) -> f64 {
    if il.is_nan() || il < worst { il } else { worst }
}
