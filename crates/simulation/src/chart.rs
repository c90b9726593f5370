//! Bar-chart model of an impermanent loss sweep.

use defi_yield_domain::value_objects::ILResult;
use serde::{Deserialize, Serialize};

/// One bar per scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub price_change_pct: f64,
    pub impermanent_loss_pct: f64,
    /// Bar height relative to the worst loss, in `[0, 1]`.
    pub height_ratio: f64,
    /// Whether the scenario loses value.
    pub loss: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ILChart {
    pub bars: Vec<ChartBar>,
    /// Price change at the left end of the axis.
    pub first_change_pct: Option<f64>,
    /// Price change at the right end of the axis.
    pub last_change_pct: Option<f64>,
}

/// Normalizes each scenario's loss against the worst loss of the sweep.
///
/// A sweep without any loss renders flat bars.
#[must_use]
pub fn il_chart(result: &ILResult) -> ILChart {
    let scale = result.max_il_pct.abs();

    let bars = result
        .scenarios
        .iter()
        .map(|s| ChartBar {
            price_change_pct: s.price_change_pct,
            impermanent_loss_pct: s.impermanent_loss_pct,
            height_ratio: if scale > 0.0 && scale.is_finite() {
                s.impermanent_loss_pct.abs() / scale
            } else {
                0.0
            },
            loss: s.impermanent_loss_pct < 0.0,
        })
        .collect();

    ILChart {
        bars,
        first_change_pct: result.scenarios.first().map(|s| s.price_change_pct),
        last_change_pct: result.scenarios.last().map(|s| s.price_change_pct),
    }
}
