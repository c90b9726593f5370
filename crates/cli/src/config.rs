//! Configuration loading.
//!
//! Defaults for every subcommand can be supplied in a TOML file. Each
//! section and key is optional; missing values fall back to the built-in
//! defaults and command-line flags override both.

use defi_yield_domain::gas::{DEFAULT_ETH_PRICE_USD, GasPrices};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "DEFI_YIELD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub yield_defaults: YieldDefaults,
    pub il_defaults: ILDefaults,
    pub gas: GasConfig,
}

/// Defaults for the `yield` subcommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldDefaults {
    pub initial_capital: f64,
    pub venue_a_apr: f64,
    pub venue_b_apr: f64,
    pub horizon_days: f64,
    pub trading_fee_pct: f64,
    pub gas_fee_absolute: f64,
    pub compounding: bool,
}

impl Default for YieldDefaults {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            venue_a_apr: 15.0,
            venue_b_apr: 5.0,
            horizon_days: 365.0,
            trading_fee_pct: 0.3,
            gas_fee_absolute: 50.0,
            compounding: true,
        }
    }
}

/// Defaults for the `il` subcommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ILDefaults {
    pub initial_price: f64,
    pub initial_value: f64,
    pub horizon_days: f64,
    pub volatility_pct: f64,
    pub min_price_change_pct: f64,
    pub max_price_change_pct: f64,
    pub steps: usize,
}

impl Default for ILDefaults {
    fn default() -> Self {
        Self {
            initial_price: 2000.0,
            initial_value: 10_000.0,
            horizon_days: 30.0,
            volatility_pct: 50.0,
            min_price_change_pct: -50.0,
            max_price_change_pct: 100.0,
            steps: 21,
        }
    }
}

/// Gas price tiers (gwei) and the ETH price used to convert gas to USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasConfig {
    pub eth_price_usd: f64,
    pub safe_gwei: f64,
    pub standard_gwei: f64,
    pub fast_gwei: f64,
}

impl Default for GasConfig {
    fn default() -> Self {
        let prices = GasPrices::default();
        Self {
            eth_price_usd: DEFAULT_ETH_PRICE_USD,
            safe_gwei: prices.safe,
            standard_gwei: prices.standard,
            fast_gwei: prices.fast,
        }
    }
}

impl GasConfig {
    #[must_use]
    pub fn prices(&self) -> GasPrices {
        GasPrices {
            safe: self.safe_gwei,
            standard: self.standard_gwei,
            fast: self.fast_gwei,
        }
    }
}

/// Picks the config file: the explicit path first, then [`CONFIG_ENV_VAR`].
#[must_use]
pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

/// Loads the config at `path`, or the built-in defaults when there is none.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML, or
/// fails validation.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate(&config)?;

    info!(
        path = %path.display(),
        eth_price_usd = config.gas.eth_price_usd,
        "configuration loaded"
    );
    Ok(config)
}

/// Input records are validated when a command runs; only the gas section is
/// checked here since it is never validated downstream.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let gas = &config.gas;
    if !(gas.eth_price_usd.is_finite() && gas.eth_price_usd > 0.0) {
        return Err(ConfigError::Invalid(format!(
            "gas.eth_price_usd must be positive, got {}",
            gas.eth_price_usd
        )));
    }
    for (name, gwei) in [
        ("safe_gwei", gas.safe_gwei),
        ("standard_gwei", gas.standard_gwei),
        ("fast_gwei", gas.fast_gwei),
    ] {
        if !(gwei.is_finite() && gwei >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "gas.{name} cannot be negative, got {gwei}"
            )));
        }
    }
    Ok(())
}
