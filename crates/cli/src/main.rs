//! Command Line Interface for the DeFi yield calculator.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use defi_yield_cli::config::{self, AppConfig};
use defi_yield_cli::render;
use defi_yield_domain::enums::GasSpeed;
use defi_yield_domain::format::format_currency;
use defi_yield_domain::gas::position_entry_cost_usd;
use defi_yield_domain::value_objects::{ILInputs, YieldInputs};
use defi_yield_simulation::{il_chart, project_yield, simulate_il};
use dotenv::dotenv;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "defi-yield")]
#[command(about = "DeFi yield and impermanent loss calculator", long_about = None)]
struct Cli {
    /// TOML file with default inputs (falls back to $DEFI_YIELD_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project yield across a trading venue (A) and a lending venue (B)
    Yield {
        /// Initial capital in USD
        #[arg(long)]
        capital: Option<f64>,

        /// APR of the trading venue, in percent
        #[arg(long)]
        apr_a: Option<f64>,

        /// APR of the lending venue, in percent
        #[arg(long)]
        apr_b: Option<f64>,

        /// Horizon in days
        #[arg(short, long)]
        days: Option<f64>,

        /// Trading fee on venue A's yield, in percent
        #[arg(long)]
        trading_fee: Option<f64>,

        /// Flat gas cost in USD
        #[arg(long, conflicts_with = "gas_speed")]
        gas_fee: Option<f64>,

        /// Derive the gas cost of entering the position from this gas tier
        #[arg(long, value_enum)]
        gas_speed: Option<SpeedArg>,

        /// Reinvest yield daily (overrides the config file)
        #[arg(long, overrides_with = "simple")]
        compounding: bool,

        /// Accrue simple interest instead of compounding daily
        #[arg(long, overrides_with = "compounding")]
        simple: bool,
    },
    /// Sweep impermanent loss across a range of price changes
    Il {
        /// Initial token price
        #[arg(long)]
        price: Option<f64>,

        /// Initial LP position value in USD
        #[arg(long)]
        value: Option<f64>,

        /// Simulation period in days
        #[arg(short, long)]
        days: Option<f64>,

        /// Expected volatility, in percent
        #[arg(long)]
        volatility: Option<f64>,

        /// Lowest price change, in percent
        #[arg(long, allow_negative_numbers = true)]
        min_change: Option<f64>,

        /// Highest price change, in percent
        #[arg(long, allow_negative_numbers = true)]
        max_change: Option<f64>,

        /// Number of scenarios
        #[arg(long)]
        steps: Option<usize>,

        /// Draw a text chart of the sweep
        #[arg(long)]
        chart: bool,
    },
    /// Show gas costs of common operations
    Gas {
        /// Gas price tier
        #[arg(long, value_enum, default_value_t = SpeedArg::Standard)]
        speed: SpeedArg,

        /// ETH price in USD
        #[arg(long)]
        eth_price: Option<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SpeedArg {
    Safe,
    Standard,
    Fast,
}

impl From<SpeedArg> for GasSpeed {
    fn from(speed: SpeedArg) -> Self {
        match speed {
            SpeedArg::Safe => GasSpeed::Safe,
            SpeedArg::Standard => GasSpeed::Standard,
            SpeedArg::Fast => GasSpeed::Fast,
        }
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = config::resolve_path(cli.config);
    let config = config::load(config_path.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Yield {
            capital,
            apr_a,
            apr_b,
            days,
            trading_fee,
            gas_fee,
            gas_speed,
            compounding,
            simple,
        } => {
            let defaults = &config.yield_defaults;
            let gas_fee_absolute = match (gas_fee, gas_speed) {
                (Some(fee), _) => fee,
                (None, Some(speed)) => entry_gas_cost(&config, speed.into()),
                (None, None) => defaults.gas_fee_absolute,
            };
            let inputs = YieldInputs {
                initial_capital: capital.unwrap_or(defaults.initial_capital),
                venue_a_apr: apr_a.unwrap_or(defaults.venue_a_apr),
                venue_b_apr: apr_b.unwrap_or(defaults.venue_b_apr),
                horizon_days: days.unwrap_or(defaults.horizon_days),
                trading_fee_pct: trading_fee.unwrap_or(defaults.trading_fee_pct),
                gas_fee_absolute,
                compounding: resolve_compounding(defaults.compounding, compounding, simple),
            };
            if let Err(err) = inputs.validate() {
                warn!(%err, "rejected yield inputs");
                return Err(err).context("invalid yield inputs");
            }

            let result = project_yield(&inputs);
            if cli.json {
                print_json(&result)?;
            } else {
                println!(
                    "📈 {} over {} days ({})",
                    format_currency(inputs.initial_capital),
                    inputs.horizon_days,
                    if inputs.compounding { "compounding daily" } else { "simple interest" }
                );
                render::yield_table(&result).printstd();
            }
        }
        Commands::Il {
            price,
            value,
            days,
            volatility,
            min_change,
            max_change,
            steps,
            chart,
        } => {
            let defaults = &config.il_defaults;
            let inputs = ILInputs {
                initial_price: price.unwrap_or(defaults.initial_price),
                initial_value: value.unwrap_or(defaults.initial_value),
                horizon_days: days.unwrap_or(defaults.horizon_days),
                volatility_pct: volatility.unwrap_or(defaults.volatility_pct),
                min_price_change_pct: min_change.unwrap_or(defaults.min_price_change_pct),
                max_price_change_pct: max_change.unwrap_or(defaults.max_price_change_pct),
                steps: steps.unwrap_or(defaults.steps),
            };
            if let Err(err) = inputs.validate() {
                warn!(%err, "rejected impermanent loss inputs");
                return Err(err).context("invalid impermanent loss inputs");
            }

            let result = simulate_il(&inputs);
            if cli.json {
                print_json(&result)?;
            } else {
                println!(
                    "📉 Impermanent loss for {} LP at price {}",
                    format_currency(inputs.initial_value),
                    inputs.initial_price
                );
                render::il_summary_table(&result).printstd();
                println!();
                render::il_scenario_table(&result).printstd();
                if chart {
                    println!();
                    for line in render::chart_lines(&il_chart(&result)) {
                        println!("{line}");
                    }
                }
            }
        }
        Commands::Gas { speed, eth_price } => {
            let eth_price_usd = eth_price.unwrap_or(config.gas.eth_price_usd);
            anyhow::ensure!(
                eth_price_usd.is_finite() && eth_price_usd > 0.0,
                "ETH price must be positive, got {eth_price_usd}"
            );
            let prices = config.gas.prices();
            let speed = GasSpeed::from(speed);

            if cli.json {
                print_json(&prices)?;
            } else {
                println!(
                    "⛽ {} gwei at {} per ETH",
                    prices.for_speed(speed),
                    format_currency(eth_price_usd)
                );
                render::gas_table(&prices, speed, eth_price_usd).printstd();
                println!(
                    "Entering a farming position (add liquidity + stake): {}",
                    format_currency(position_entry_cost_usd(prices.for_speed(speed), eth_price_usd))
                );
            }
        }
    }

    Ok(())
}

/// The last of `--compounding` / `--simple` wins; without either the config decides.
fn resolve_compounding(default: bool, compounding: bool, simple: bool) -> bool {
    match (compounding, simple) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

fn entry_gas_cost(config: &AppConfig, speed: GasSpeed) -> f64 {
    position_entry_cost_usd(config.gas.prices().for_speed(speed), config.gas.eth_price_usd)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
