//! Display formatting for amounts and percentages.

use rust_decimal::prelude::*;

/// Formats a USD amount as `$1,234.56`, with a leading minus for losses.
///
/// Rounds half away from zero to cents.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return non_finite(amount).to_string();
    }

    let fixed = round_to_cents(amount);
    let (negative, digits) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));
    let negative = negative && !is_zero(digits);

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        cents
    )
}

/// Formats a percentage with two decimals, e.g. `12.34%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}%", non_finite(value));
    }
    let fixed = round_to_cents(value);
    match fixed.strip_prefix('-') {
        // "-0.00" is shown unsigned
        Some(rest) if is_zero(rest) => format!("{rest}%"),
        _ => format!("{fixed}%"),
    }
}

/// Two-decimal rendering, rounding half away from zero. Values too large for
/// `Decimal` fall back to float formatting.
fn round_to_cents(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(d) => format!(
            "{:.2}",
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{value:.2}"),
    }
}

fn is_zero(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0' || b == b'.')
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
