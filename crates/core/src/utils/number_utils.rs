//! Numeric parsing and display formatting shared across the domain.
//!
//! All user-facing amounts are display strings: whole numbers with thousands
//! separators for invested capital, fixed two-decimal amounts for dividends,
//! and whole percentages for budget ratios. Parsing is loose on purpose:
//! stored records carry already-formatted strings (`"$1,500"`, `"18%"`), and
//! every consumer must read them back without caring about the decoration.

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses a display string into a `Decimal`, ignoring formatting noise.
///
/// Strips every character except ASCII digits, the decimal point, and the
/// minus sign, so `"$1,500"`, `"1500"`, and `"18%"` all parse. Returns
/// `None` when nothing numeric remains or the residue is not a number.
pub fn parse_loose(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<Decimal>().ok()
}

/// Rounds to the nearest whole number, half away from zero.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to two decimal places, half away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value as a whole number with thousands separators.
///
/// `1234567.4` becomes `"1,234,567"`.
pub fn format_whole(value: Decimal) -> String {
    group_thousands(&round_whole(value).to_string())
}

/// Formats a value with exactly two decimal places and thousands separators
/// on the integer part.
///
/// `7000` becomes `"7,000.00"` and `4.2` becomes `"4.20"`.
pub fn format_cents(value: Decimal) -> String {
    let rounded = round_cents(value).to_string();
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), format!("{:0<2}", frac_part)),
        None => (rounded, "00".to_string()),
    };
    format!("{}.{}", group_thousands(&int_part), frac_part)
}

/// Groups the integer part of an already-clean numeric string, keeping any
/// fractional digits as typed.
///
/// `"8200"` becomes `"8,200"` and `"1385.25"` becomes `"1,385.25"`. Unlike
/// [`format_whole`] this never rounds, so it suits fields the user is still
/// editing, such as the budget totals and the FX rate.
pub fn format_grouped(raw: &str) -> String {
    match raw.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_thousands(int_part), frac_part),
        None => group_thousands(raw),
    }
}

/// Formats a value as a whole percentage with thousands separators,
/// e.g. `1250` becomes `"1,250%"`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_whole(value))
}

/// Inserts `,` separators into a plain integer string, preserving a leading
/// minus sign. The input must already be a bare integer (no dot).
fn group_thousands(digits: &str) -> String {
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(magnitude.len() + magnitude.len() / 3 + 1);
    for (i, c) in magnitude.chars().enumerate() {
        if i > 0 && (magnitude.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}
