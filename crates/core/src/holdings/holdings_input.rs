//! Form input normalization.
//!
//! Mirrors the entry form's behavior: tickers are forced to uppercase Latin
//! letters, amount fields shed separator noise, and the per-share dividend
//! keeps at most one decimal point. Bad numbers normalize to the empty
//! string; only a ticker typed in the wrong script is rejected outright.

use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// Guidance returned when a ticker contains Hangul characters.
pub const LATIN_TICKER_GUIDANCE: &str =
    "Ticker symbols must use Latin letters. Switch the keyboard to English input.";

/// Hangul compatibility jamo and syllable blocks, the ranges a Korean IME
/// produces while composing.
fn is_hangul(c: char) -> bool {
    matches!(c, '\u{3131}'..='\u{3163}' | '\u{AC00}'..='\u{D7A3}')
}

/// Normalizes a raw ticker: uppercases the input and strips every character
/// outside `A-Z`.
///
/// Hangul anywhere in the input is rejected with guidance instead of being
/// silently dropped, since it almost always means the keyboard layout is
/// wrong rather than a typo.
pub fn normalize_ticker(raw: &str) -> Result<String> {
    if raw.chars().any(is_hangul) {
        return Err(
            ValidationError::DisallowedCharacters(LATIN_TICKER_GUIDANCE.to_string()).into(),
        );
    }
    Ok(raw
        .chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect())
}

/// Normalizes an amount field (price, quantity, budget totals, FX rate).
///
/// Trims whitespace and drops `,` and `$`; anything that still fails to
/// parse as a number becomes the empty string.
pub fn normalize_amount(raw: &str) -> String {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    if stripped.parse::<Decimal>().is_ok() {
        stripped
    } else {
        String::new()
    }
}

/// Normalizes a decimal-entry field (per-share dividend, tax rate).
///
/// Keeps ASCII digits and the first decimal point; later dots are dropped
/// and their trailing digits merge, so `"1.2.3"` becomes `"1.23"`.
pub fn normalize_decimal_entry(raw: &str) -> String {
    let mut seen_dot = false;
    raw.trim()
        .chars()
        .filter(|c| {
            if c.is_ascii_digit() {
                true
            } else if *c == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                false
            }
        })
        .collect()
}
