use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameters of an impermanent loss sweep over a price-change range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ILInputs {
    /// Token price when the position is opened.
    pub initial_price: f64,
    /// USD value of the LP position when opened.
    pub initial_value: f64,
    /// Simulation period in days.
    pub horizon_days: f64,
    /// Expected volatility as a percentage, used as a breakeven buffer.
    pub volatility_pct: f64,
    /// Lowest price change swept, as a percentage (e.g., `-50.0`).
    pub min_price_change_pct: f64,
    /// Highest price change swept, as a percentage.
    pub max_price_change_pct: f64,
    /// Number of evenly spaced scenarios, endpoints included.
    pub steps: usize,
}

impl ILInputs {
    /// Checks the inputs before they are handed to the simulator.
    ///
    /// # Errors
    /// Returns the first violated rule: non-finite numbers, then price,
    /// value, period, volatility, price range, a minimum price change above
    /// -100% and step count in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("initial token price", self.initial_price),
            ("initial LP value", self.initial_value),
            ("simulation period", self.horizon_days),
            ("volatility", self.volatility_pct),
            ("minimum price change", self.min_price_change_pct),
            ("maximum price change", self.max_price_change_pct),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ValidationError::NotFinite { field });
        }

        if self.initial_price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        if self.initial_value <= 0.0 {
            return Err(ValidationError::NonPositiveValue);
        }
        if self.horizon_days <= 0.0 {
            return Err(ValidationError::NonPositivePeriod);
        }
        if self.volatility_pct < 0.0 {
            return Err(ValidationError::NegativeVolatility);
        }
        if self.max_price_change_pct <= self.min_price_change_pct {
            return Err(ValidationError::InvalidPriceRange {
                min: self.min_price_change_pct,
                max: self.max_price_change_pct,
            });
        }
        if self.min_price_change_pct <= -100.0 {
            return Err(ValidationError::PriceChangeBelowTotalLoss(
                self.min_price_change_pct,
            ));
        }
        if self.steps < 2 {
            return Err(ValidationError::TooFewSteps(self.steps));
        }
        Ok(())
    }
}

/// One point of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ILScenario {
    pub price_change_pct: f64,
    pub impermanent_loss_pct: f64,
    /// Position value after impermanent loss.
    pub lp_value: f64,
    /// Value of holding the assets outside the pool.
    pub hold_value: f64,
}

/// Scenarios of a sweep plus its aggregate risk statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ILResult {
    /// Scenarios in ascending price-change order.
    pub scenarios: Vec<ILScenario>,
    /// Worst (most negative) impermanent loss of the sweep.
    pub max_il_pct: f64,
    pub avg_il_pct: f64,
    /// Yield needed to offset the worst loss plus a volatility buffer.
    pub breakeven_yield_pct: f64,
    /// Scenarios losing more than 20%.
    pub high_risk_count: usize,
    /// Price changes at which LP and hold values agree within 0.01.
    pub breakeven_points: Vec<f64>,
}

impl ILResult {
    /// First scenario whose loss equals `max_il_pct`.
    #[must_use]
    pub fn worst_scenario(&self) -> Option<&ILScenario> {
        self.scenarios
            .iter()
            .find(|s| s.impermanent_loss_pct == self.max_il_pct)
    }
}
