use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameters of a two-venue yield projection.
///
/// Venue A is the trading venue (an AMM pool) and is the only one charged the
/// trading fee. Venue B is the lending venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldInputs {
    /// Capital deployed at the start, in USD.
    pub initial_capital: f64,
    /// Nominal APR of the trading venue, as a percentage.
    pub venue_a_apr: f64,
    /// Nominal APR of the lending venue, as a percentage.
    pub venue_b_apr: f64,
    /// Projection horizon in days. Fractional days are allowed.
    pub horizon_days: f64,
    /// Trading fee charged on venue A's yield, as a percentage.
    pub trading_fee_pct: f64,
    /// Flat gas cost for the whole horizon, in USD.
    pub gas_fee_absolute: f64,
    /// Reinvest yield daily instead of accruing simple interest.
    pub compounding: bool,
}

impl YieldInputs {
    /// Checks the inputs before they are handed to the projector.
    ///
    /// # Errors
    /// Returns the first violated rule: non-finite numbers, then
    /// capital, APRs, horizon, trading fee and gas fee in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("initial capital", self.initial_capital),
            ("venue A APR", self.venue_a_apr),
            ("venue B APR", self.venue_b_apr),
            ("timeframe", self.horizon_days),
            ("trading fee", self.trading_fee_pct),
            ("gas fee", self.gas_fee_absolute),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ValidationError::NotFinite { field });
        }

        if self.initial_capital <= 0.0 {
            return Err(ValidationError::NonPositiveCapital);
        }
        if self.venue_a_apr < 0.0 || self.venue_b_apr < 0.0 {
            return Err(ValidationError::NegativeApr);
        }
        if self.horizon_days <= 0.0 {
            return Err(ValidationError::NonPositiveTimeframe);
        }
        if self.trading_fee_pct < 0.0 {
            return Err(ValidationError::NegativeTradingFee);
        }
        if self.gas_fee_absolute < 0.0 {
            return Err(ValidationError::NegativeGasFee);
        }
        Ok(())
    }
}

/// Outcome of a yield projection. All amounts are in USD except `total_apy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// Gross yield from both venues.
    pub total_yield: f64,
    /// Net return annualized over the horizon, as a percentage.
    pub total_apy: f64,
    pub venue_a_yield: f64,
    pub venue_b_yield: f64,
    /// `total_yield - trading_fees - gas_fees`.
    pub net_yield: f64,
    /// `initial_capital + net_yield`.
    pub final_value: f64,
    pub trading_fees: f64,
    pub gas_fees: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> YieldInputs {
        YieldInputs {
            initial_capital: 10_000.0,
            venue_a_apr: 15.0,
            venue_b_apr: 5.0,
            horizon_days: 365.0,
            trading_fee_pct: 0.3,
            gas_fee_absolute: 50.0,
            compounding: true,
        }
    }

    #[test]
    fn test_valid_inputs() {
        assert_eq!(inputs().validate(), Ok(()));

        let zero_rates = YieldInputs {
            venue_a_apr: 0.0,
            venue_b_apr: 0.0,
            trading_fee_pct: 0.0,
            gas_fee_absolute: 0.0,
            ..inputs()
        };
        assert_eq!(zero_rates.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_each_rule() {
        let cases = [
            (
                YieldInputs { initial_capital: 0.0, ..inputs() },
                ValidationError::NonPositiveCapital,
            ),
            (
                YieldInputs { venue_b_apr: -1.0, ..inputs() },
                ValidationError::NegativeApr,
            ),
            (
                YieldInputs { horizon_days: 0.0, ..inputs() },
                ValidationError::NonPositiveTimeframe,
            ),
            (
                YieldInputs { trading_fee_pct: -0.1, ..inputs() },
                ValidationError::NegativeTradingFee,
            ),
            (
                YieldInputs { gas_fee_absolute: -5.0, ..inputs() },
                ValidationError::NegativeGasFee,
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(input.validate(), Err(expected));
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let input = YieldInputs {
            initial_capital: -1.0,
            venue_a_apr: -1.0,
            horizon_days: 0.0,
            ..inputs()
        };
        assert_eq!(input.validate(), Err(ValidationError::NonPositiveCapital));
    }

    #[test]
    fn test_rejects_nan() {
        let input = YieldInputs { horizon_days: f64::NAN, ..inputs() };
        assert_eq!(
            input.validate(),
            Err(ValidationError::NotFinite { field: "timeframe" })
        );
        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "timeframe must be a finite number"
        );
    }

    #[test]
    fn test_error_messages() {
        let input = YieldInputs { initial_capital: 0.0, ..inputs() };
        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "Initial capital must be greater than 0"
        );
    }
}
