//! Terminal rendering of calculator results.

use defi_yield_domain::enums::{GasOperation, GasSpeed};
use defi_yield_domain::format::{format_currency, format_percentage};
use defi_yield_domain::gas::{GasPrices, estimate_gas_cost_usd};
use defi_yield_domain::value_objects::{ILResult, YieldResult};
use defi_yield_simulation::chart::ILChart;
use prettytable::{Table, format, row};

/// Widest bar of the text chart, in characters.
pub const CHART_WIDTH: usize = 40;

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table
}

pub fn yield_table(result: &YieldResult) -> Table {
    let mut table = new_table();
    table.set_titles(row!["Metric", "Value"]);
    table.add_row(row!["Venue A yield", r->format_currency(result.venue_a_yield)]);
    table.add_row(row!["Venue B yield", r->format_currency(result.venue_b_yield)]);
    table.add_row(row!["Total yield", r->format_currency(result.total_yield)]);
    table.add_row(row!["Trading fees", r->format_currency(result.trading_fees)]);
    table.add_row(row!["Gas fees", r->format_currency(result.gas_fees)]);
    table.add_row(row!["Net yield", r->format_currency(result.net_yield)]);
    table.add_row(row!["Final value", r->format_currency(result.final_value)]);
    table.add_row(row!["Effective APY", r->format_percentage(result.total_apy)]);
    table
}

pub fn il_summary_table(result: &ILResult) -> Table {
    let mut table = new_table();
    table.set_titles(row!["Metric", "Value"]);
    table.add_row(row!["Maximum IL", r->format_percentage(result.max_il_pct)]);
    if let Some(worst) = result.worst_scenario() {
        table.add_row(row!["  at price change", r->format!("{:.1}%", worst.price_change_pct)]);
    }
    table.add_row(row!["Average IL", r->format_percentage(result.avg_il_pct)]);
    table.add_row(row!["Breakeven yield needed", r->format_percentage(result.breakeven_yield_pct)]);
    table.add_row(row!["High risk scenarios (IL > 20%)", r->result.high_risk_count]);
    let breakeven = if result.breakeven_points.is_empty() {
        "none".to_string()
    } else {
        result
            .breakeven_points
            .iter()
            .map(|p| format!("{p:.1}%"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    table.add_row(row!["Breakeven price changes", r->breakeven]);
    table
}

pub fn il_scenario_table(result: &ILResult) -> Table {
    let mut table = new_table();
    table.set_titles(row!["Price change", "IL", "LP value", "Hold value"]);
    for s in &result.scenarios {
        table.add_row(row![
            r->format!("{:.1}%", s.price_change_pct),
            r->format_percentage(s.impermanent_loss_pct),
            r->format_currency(s.lp_value),
            r->format_currency(s.hold_value)
        ]);
    }
    table
}

/// One text line per bar, scaled to [`CHART_WIDTH`], plus the axis line.
pub fn chart_lines(chart: &ILChart) -> Vec<String> {
    let mut lines: Vec<String> = chart
        .bars
        .iter()
        .map(|bar| {
            let len = (bar.height_ratio * CHART_WIDTH as f64).round() as usize;
            let glyph = if bar.loss { "█" } else { "░" };
            format!(
                "{:>8} | {:<width$} {}",
                format!("{:.1}%", bar.price_change_pct),
                glyph.repeat(len),
                format_percentage(bar.impermanent_loss_pct),
                width = CHART_WIDTH
            )
        })
        .collect();

    if let (Some(first), Some(last)) = (chart.first_change_pct, chart.last_change_pct) {
        lines.push(format!("price change {first:.1}% .. {last:.1}%"));
    }
    lines
}

pub fn gas_table(prices: &GasPrices, speed: GasSpeed, eth_price_usd: f64) -> Table {
    let gwei = prices.for_speed(speed);
    let mut table = new_table();
    table.set_titles(row!["Operation", "Gas limit", "Cost"]);
    for op in GasOperation::ALL {
        table.add_row(row![
            op.label(),
            r->op.gas_limit(),
            r->format_currency(estimate_gas_cost_usd(gwei, op, eth_price_usd))
        ]);
    }
    table
}
