//! Rate conversions and fee arithmetic shared by the yield projector.

/// Days used to annualize every rate in the calculator.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Converts a nominal APR to the effective APY under daily compounding.
///
/// formula: ((1 + apr / 100 / 365) ^ 365 - 1) * 100
///
/// # Arguments
///
/// * `apr` - Nominal annual rate as a percentage (e.g., `10.0` for 10%)
///
/// # Returns
///
/// * `f64` - The effective annual yield as a percentage. Negative APRs are
///   converted algebraically.
#[must_use]
pub fn apr_to_apy(apr: f64) -> f64 {
    let daily_rate = apr / 100.0 / DAYS_PER_YEAR;
    ((1.0 + daily_rate).powf(DAYS_PER_YEAR) - 1.0) * 100.0
}

/// Effective daily rate that compounds to the given APY over one year.
///
/// formula: (1 + apy / 100) ^ (1 / 365) - 1
#[must_use]
pub fn daily_rate_from_apy(apy: f64) -> f64 {
    (1.0 + apy / 100.0).powf(1.0 / DAYS_PER_YEAR) - 1.0
}

/// Annualizes a return earned over `days` as a percentage of `principal`.
///
/// No guard on zero principal or zero days: the result is `NaN` or infinite.
#[must_use]
pub fn annualized_return_pct(net_return: f64, principal: f64, days: f64) -> f64 {
    (net_return / principal) / (days / DAYS_PER_YEAR) * 100.0
}

/// Trading fee charged as a percentage of the yield it applies to.
#[must_use]
pub fn trading_fee(yield_amount: f64, fee_pct: f64) -> f64 {
    yield_amount * (fee_pct / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apr_to_apy_zero() {
        assert_eq!(apr_to_apy(0.0), 0.0);
    }

    #[test]
    fn test_apr_to_apy_never_below_apr() {
        for apr in [1.0, 5.0, 10.0, 50.0] {
            let apy = apr_to_apy(apr);
            assert!(apy >= apr, "apy {apy} < apr {apr}");
        }
    }

    #[test]
    fn test_apr_to_apy_known_value() {
        // 10% APR compounded daily is ~10.5156% APY
        let apy = apr_to_apy(10.0);
        assert!((apy - 10.5156).abs() < 1e-4);
    }

    #[test]
    fn test_apr_to_apy_negative_is_algebraic() {
        assert!(apr_to_apy(-5.0) < 0.0);
    }

    #[test]
    fn test_daily_rate_compounds_back_to_apy() {
        let apy = 12.0;
        let daily = daily_rate_from_apy(apy);
        let compounded = ((1.0 + daily).powf(DAYS_PER_YEAR) - 1.0) * 100.0;
        assert!((compounded - apy).abs() < 1e-9);
        assert_eq!(daily_rate_from_apy(0.0), 0.0);
    }

    #[test]
    fn test_annualized_return_pct() {
        // 50 earned on 1000 over half a year is 10% annualized
        let apy = annualized_return_pct(50.0, 1000.0, 182.5);
        assert!((apy - 10.0).abs() < 1e-12);

        assert!(annualized_return_pct(-20.0, 1000.0, 365.0) < 0.0);
        assert!(annualized_return_pct(1.0, 0.0, 365.0).is_infinite());
    }

    #[test]
    fn test_trading_fee() {
        assert!((trading_fee(200.0, 0.3) - 0.6).abs() < 1e-12);
        assert_eq!(trading_fee(200.0, 0.0), 0.0);
    }
}
