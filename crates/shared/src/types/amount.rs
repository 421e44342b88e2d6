//! Lenient decimal parsing for free-text numeric form input.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts typed by an operator are parsed into `rust_decimal::Decimal`.
//! Blank or malformed text is not an error: it counts as zero.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses operator-entered text as a decimal amount.
///
/// Surrounding whitespace is ignored. Plain (`"1250.50"`, `"-40"`) and
/// scientific (`"1e3"`) notation are accepted. Digit-group separators are
/// not: `"1,000"` and `"1_000"` both yield zero, as do empty text, anything
/// else that does not parse, and values outside the `Decimal` range.
#[must_use]
pub fn parse_amount(text: &str) -> Decimal {
    let trimmed = text.trim();
    // rust_decimal skips underscores; operator text gets no such allowance.
    if trimmed.is_empty() || trimmed.contains('_') {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Formats an amount with exactly two decimal places, rounding half away
/// from zero.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    )
}
