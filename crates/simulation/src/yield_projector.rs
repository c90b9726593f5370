//! Two-venue yield projection.
//!
//! Projects the yield of capital split across a trading venue (A) and a
//! lending venue (B), either compounding daily or accruing simple interest,
//! net of venue A's trading fee and a flat gas cost.

use defi_yield_domain::metrics::{
    DAYS_PER_YEAR, annualized_return_pct, apr_to_apy, daily_rate_from_apy, trading_fee,
};
use defi_yield_domain::value_objects::{YieldInputs, YieldResult};
use tracing::debug;

/// Projects the yield of `inputs` over its horizon.
///
/// With compounding, the projector runs one iteration per whole day
/// (`floor(horizon_days)`) and reinvests both venues' daily yield into a
/// single capital base. Without compounding, each venue earns
/// `initial_capital * APY * horizon_days / 365`.
///
/// The trading fee applies to venue A's yield only.
///
/// Inputs are not validated; call [`YieldInputs::validate`] first. Invalid
/// inputs produce `NaN` or infinite fields instead of panicking.
#[must_use]
pub fn project_yield(inputs: &YieldInputs) -> YieldResult {
    let venue_a_apy = apr_to_apy(inputs.venue_a_apr);
    let venue_b_apy = apr_to_apy(inputs.venue_b_apr);

    let (venue_a_yield, venue_b_yield) = if inputs.compounding {
        compound_daily(
            inputs.initial_capital,
            daily_rate_from_apy(venue_a_apy),
            daily_rate_from_apy(venue_b_apy),
            compounding_days(inputs.horizon_days),
        )
    } else {
        let time_ratio = inputs.horizon_days / DAYS_PER_YEAR;
        (
            inputs.initial_capital * (venue_a_apy / 100.0) * time_ratio,
            inputs.initial_capital * (venue_b_apy / 100.0) * time_ratio,
        )
    };

    let trading_fees = trading_fee(venue_a_yield, inputs.trading_fee_pct);
    let total_yield = venue_a_yield + venue_b_yield;
    let net_yield = total_yield - trading_fees - inputs.gas_fee_absolute;
    let total_apy = annualized_return_pct(net_yield, inputs.initial_capital, inputs.horizon_days);

    debug!(
        compounding = inputs.compounding,
        venue_a_apy,
        venue_b_apy,
        total_yield,
        net_yield,
        total_apy,
        "yield projected"
    );

    YieldResult {
        total_yield,
        total_apy,
        venue_a_yield,
        venue_b_yield,
        net_yield,
        final_value: inputs.initial_capital + net_yield,
        trading_fees,
        gas_fees: inputs.gas_fee_absolute,
    }
}

/// Whole days simulated when compounding. Fractional days are dropped.
#[must_use]
pub fn compounding_days(horizon_days: f64) -> u64 {
    // saturating cast: NaN and negatives become 0
    horizon_days.floor() as u64
}

/// Accrues both venues on a shared capital base, reinvesting daily.
/// Returns the yield attributed to each venue.
fn compound_daily(initial_capital: f64, rate_a: f64, rate_b: f64, days: u64) -> (f64, f64) {
    let mut current_capital = initial_capital;
    let mut yield_a = 0.0;
    let mut yield_b = 0.0;

    for _ in 0..days {
        let daily_a = current_capital * rate_a;
        let daily_b = current_capital * rate_b;

        yield_a += daily_a;
        yield_b += daily_b;

        current_capital += daily_a + daily_b;
    }

    (yield_a, yield_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> YieldInputs {
        YieldInputs {
            initial_capital: 1000.0,
            venue_a_apr: 10.0,
            venue_b_apr: 0.0,
            horizon_days: 365.0,
            trading_fee_pct: 0.0,
            gas_fee_absolute: 0.0,
            compounding: false,
        }
    }

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "{a} != {b} (tol {tol})");
    }

    #[test]
    fn test_simple_yield_uses_apy() {
        let result = project_yield(&inputs());
        assert_close(result.venue_a_yield, 1000.0 * apr_to_apy(10.0) / 100.0, 1e-9);
        assert_eq!(result.venue_b_yield, 0.0);
        assert_close(result.total_apy, apr_to_apy(10.0), 1e-9);
    }

    #[test]
    fn test_result_invariants() {
        let input = YieldInputs {
            initial_capital: 10_000.0,
            venue_a_apr: 15.0,
            venue_b_apr: 5.0,
            horizon_days: 180.0,
            trading_fee_pct: 0.3,
            gas_fee_absolute: 50.0,
            compounding: true,
        };
        let r = project_yield(&input);

        assert_eq!(r.total_yield, r.venue_a_yield + r.venue_b_yield);
        assert_eq!(r.net_yield, r.total_yield - r.trading_fees - r.gas_fees);
        assert_eq!(r.final_value, input.initial_capital + r.net_yield);
        assert_eq!(r.gas_fees, 50.0);
    }

    #[test]
    fn test_trading_fee_only_hits_venue_a() {
        let lending_only = YieldInputs {
            venue_a_apr: 0.0,
            venue_b_apr: 8.0,
            trading_fee_pct: 1.0,
            ..inputs()
        };
        let r = project_yield(&lending_only);
        assert_eq!(r.trading_fees, 0.0);
        assert!(r.venue_b_yield > 0.0);

        let trading_only = YieldInputs { trading_fee_pct: 1.0, ..inputs() };
        let r = project_yield(&trading_only);
        assert_close(r.trading_fees, r.venue_a_yield * 0.01, 1e-12);
    }

    #[test]
    fn test_single_venue_compounding_matches_apy() {
        // One venue reinvested daily for a year grows by exactly its APY
        let compounding = YieldInputs { compounding: true, ..inputs() };
        let r = project_yield(&compounding);
        assert_close(r.venue_a_yield, 1000.0 * apr_to_apy(10.0) / 100.0, 1e-6);
    }

    #[test]
    fn test_pooled_reinvestment_beats_simple() {
        let two_venues = YieldInputs { venue_b_apr: 6.0, ..inputs() };
        let simple = project_yield(&two_venues);
        let compounded = project_yield(&YieldInputs { compounding: true, ..two_venues });
        assert!(compounded.total_yield > simple.total_yield);
        assert!(compounded.venue_a_yield > simple.venue_a_yield);
    }

    #[test]
    fn test_compounding_truncates_fractional_days() {
        let base = YieldInputs { compounding: true, horizon_days: 30.0, ..inputs() };
        let fractional = YieldInputs { horizon_days: 30.9, ..base.clone() };

        let whole = project_yield(&base);
        let partial = project_yield(&fractional);
        assert_eq!(whole.total_yield, partial.total_yield);
        // annualization still uses the exact horizon
        assert!(partial.total_apy < whole.total_apy);
    }

    #[test]
    fn test_compounding_days() {
        assert_eq!(compounding_days(30.0), 30);
        assert_eq!(compounding_days(30.99), 30);
        assert_eq!(compounding_days(0.5), 0);
        assert_eq!(compounding_days(f64::NAN), 0);
        assert_eq!(compounding_days(-3.0), 0);
    }

    #[test]
    fn test_one_day_compounding() {
        let one_day = YieldInputs { compounding: true, horizon_days: 1.0, ..inputs() };
        let r = project_yield(&one_day);
        let expected = 1000.0 * daily_rate_from_apy(apr_to_apy(10.0));
        assert_eq!(r.venue_a_yield, expected);
    }

    #[test]
    fn test_fees_can_make_apy_negative() {
        let expensive = YieldInputs {
            venue_a_apr: 1.0,
            horizon_days: 30.0,
            gas_fee_absolute: 100.0,
            ..inputs()
        };
        let r = project_yield(&expensive);
        assert!(r.net_yield < 0.0);
        assert!(r.total_apy < 0.0);
        assert!(r.final_value < 1000.0);
    }

    #[test]
    fn test_zero_rates_yield_nothing() {
        let flat = YieldInputs { venue_a_apr: 0.0, compounding: true, ..inputs() };
        let r = project_yield(&flat);
        assert_eq!(r.total_yield, 0.0);
        assert_eq!(r.final_value, 1000.0);
        assert_eq!(r.total_apy, 0.0);
    }

    #[test]
    fn test_zero_capital_is_not_guarded() {
        let degenerate = YieldInputs { initial_capital: 0.0, ..inputs() };
        assert!(project_yield(&degenerate).total_apy.is_nan());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let input = YieldInputs { compounding: true, venue_b_apr: 4.2, ..inputs() };
        assert_eq!(project_yield(&input), project_yield(&input));
    }
}
