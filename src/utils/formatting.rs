//! Formatting utilities used for report tables and console output.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in a field of `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Two decimals, sign always shown: "+1.23", "-0.40", "+0.00".
pub fn signed2(value: f64) -> String {
    format!("{:+.2}", value)
}

/// Fraction as a one-decimal percentage: 0.3333 → "33.3%".
pub fn percent1(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}
