/// Calculates Impermanent Loss for a constant product pool.
/// formula: (2 * sqrt(price_ratio) / (1 + price_ratio) - 1) * 100
///
/// # Arguments
///
/// * `entry_price` - The price at which the position was opened
/// * `current_price` - The price being evaluated
///
/// # Returns
///
/// * `f64` - The impermanent loss as a percentage, zero or negative
///   (e.g., `-5.72` when the price doubles). Non-positive prices produce
///   `NaN` or infinite values; callers validate before calling.
#[must_use]
pub fn impermanent_loss(entry_price: f64, current_price: f64) -> f64 {
    let price_ratio = current_price / entry_price;
    let sqrt_ratio = price_ratio.sqrt();

    let il = (2.0 * sqrt_ratio) / (1.0 + price_ratio) - 1.0;
    il * 100.0
}

/// Value of an LP position of `initial_value` after suffering `il_pct`.
#[must_use]
pub fn lp_value_after_il(initial_value: f64, il_pct: f64) -> f64 {
    initial_value * (1.0 + il_pct / 100.0)
}

/// Value of simply holding `initial_value` through a `price_change_pct` move.
#[must_use]
pub fn hold_value_after_change(initial_value: f64, price_change_pct: f64) -> f64 {
    initial_value * (1.0 + price_change_pct / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impermanent_loss_price_doubles() {
        // Ratio = 2. IL = 2*sqrt(2)/(1+2) - 1 = -0.0572 (5.72%)
        let il = impermanent_loss(100.0, 200.0);
        assert!((il - (-5.719)).abs() < 0.001);
    }

    #[test]
    fn test_impermanent_loss_unchanged_price() {
        for p in [0.01, 1.0, 100.0, 65_000.0] {
            assert_eq!(impermanent_loss(p, p), 0.0);
        }
    }

    #[test]
    fn test_impermanent_loss_symmetric_in_log_space() {
        let p = 100.0;
        for k in [0.5, 2.0, 5.0] {
            let up = impermanent_loss(p, p * k);
            let down = impermanent_loss(p, p / k);
            assert!((up - down).abs() < 1e-9, "k={k}: {up} vs {down}");
        }
    }

    #[test]
    fn test_impermanent_loss_never_positive() {
        for ratio in [0.01, 0.1, 0.5, 0.9, 1.0, 1.1, 2.0, 10.0, 100.0] {
            assert!(impermanent_loss(1.0, ratio) <= 0.0);
        }
    }

    #[test]
    fn test_impermanent_loss_grows_with_divergence() {
        let up: Vec<f64> = [1.0, 1.5, 2.0, 4.0, 8.0]
            .iter()
            .map(|r| impermanent_loss(1.0, *r))
            .collect();
        assert!(up.windows(2).all(|w| w[1] < w[0]));

        let down: Vec<f64> = [1.0, 0.75, 0.5, 0.25, 0.1]
            .iter()
            .map(|r| impermanent_loss(1.0, *r))
            .collect();
        assert!(down.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_lp_and_hold_values() {
        assert!((lp_value_after_il(1000.0, -5.0) - 950.0).abs() < 1e-9);
        assert!((hold_value_after_change(1000.0, 50.0) - 1500.0).abs() < 1e-9);
        assert_eq!(hold_value_after_change(1000.0, 0.0), 1000.0);
    }
}
