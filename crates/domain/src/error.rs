//! Input validation errors.
//!
//! The calculators never validate their own inputs. Front ends call
//! `validate()` on the input records first and surface these messages.

use thiserror::Error;

/// Reasons an input record is rejected before it reaches a calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Initial capital must be greater than 0")]
    NonPositiveCapital,
    #[error("APR values cannot be negative")]
    NegativeApr,
    #[error("Timeframe must be greater than 0")]
    NonPositiveTimeframe,
    #[error("Trading fee cannot be negative")]
    NegativeTradingFee,
    #[error("Gas fee cannot be negative")]
    NegativeGasFee,
    #[error("Initial token price must be greater than 0")]
    NonPositivePrice,
    #[error("Initial LP value must be greater than 0")]
    NonPositiveValue,
    #[error("Simulation period must be greater than 0")]
    NonPositivePeriod,
    #[error("Volatility cannot be negative")]
    NegativeVolatility,
    #[error("Maximum price change ({max}%) must be greater than minimum ({min}%)")]
    InvalidPriceRange { min: f64, max: f64 },
    #[error("Minimum price change must be greater than -100%, got {0}%")]
    PriceChangeBelowTotalLoss(f64),
    #[error("At least 2 price steps are required, got {0}")]
    TooFewSteps(usize),
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}
