//! Gas cost estimation used to pre-fill the gas fee of a projection.

use crate::enums::{GasOperation, GasSpeed};
use serde::{Deserialize, Serialize};

/// ETH price assumed when no quote is supplied, in USD.
pub const DEFAULT_ETH_PRICE_USD: f64 = 2000.0;

const GWEI_IN_ETH: f64 = 1e-9;

/// Gas prices per speed tier, in gwei.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasPrices {
    pub safe: f64,
    pub standard: f64,
    pub fast: f64,
}

impl Default for GasPrices {
    /// Fallback tiers used when no gas oracle answers.
    fn default() -> Self {
        Self {
            safe: 20.0,
            standard: 25.0,
            fast: 30.0,
        }
    }
}

impl GasPrices {
    #[must_use]
    pub fn for_speed(&self, speed: GasSpeed) -> f64 {
        match speed {
            GasSpeed::Safe => self.safe,
            GasSpeed::Standard => self.standard,
            GasSpeed::Fast => self.fast,
        }
    }
}

/// USD cost of one operation at the given gas price.
///
/// formula: gwei * 1e-9 * gas_limit * eth_price_usd
#[must_use]
pub fn estimate_gas_cost_usd(
    gas_price_gwei: f64,
    operation: GasOperation,
    eth_price_usd: f64,
) -> f64 {
    gas_price_gwei * GWEI_IN_ETH * operation.gas_limit() as f64 * eth_price_usd
}

/// Gas paid to enter a farming position: add liquidity, then stake the LP tokens.
#[must_use]
pub fn position_entry_cost_usd(gas_price_gwei: f64, eth_price_usd: f64) -> f64 {
    [GasOperation::AddLiquidity, GasOperation::Stake]
        .into_iter()
        .map(|op| estimate_gas_cost_usd(gas_price_gwei, op, eth_price_usd))
        .sum()
}
