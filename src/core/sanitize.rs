// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern"));

/// Collapse runs of whitespace (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First run of ASCII digits: "Код: 15873264" → "15873264".
pub fn first_digits(s: &str) -> Option<String> {
    DIGIT_RUN.find(s).map(|m| s!(m.as_str()))
}

/// Whole (trimmed) string is digits.
pub fn all_digits(s: &str) -> Option<String> {
    let t = s.trim();
    if !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()) {
        Some(s!(t))
    } else {
        None
    }
}

/// Rating with two decimals. Accepts a decimal comma.
pub fn format_rating(raw: &str) -> Option<String> {
    let v: f64 = raw.trim().replace(',', ".").parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    Some(format!("{v:.2}"))
}

/// `Some(s)` unless blank.
pub fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_nbsp_and_newlines() {
        assert_eq!(normalize_ws("  12\u{a0}990 \n ₽ "), "12 990 ₽");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn first_digits_takes_first_run() {
        assert_eq!(first_digits("Код: 15873264").as_deref(), Some("15873264"));
        assert_eq!(first_digits("арт. 12-34").as_deref(), Some("12"));
        assert_eq!(first_digits("нет"), None);
    }

    #[test]
    fn all_digits_is_strict() {
        assert_eq!(all_digits(" 42 ").as_deref(), Some("42"));
        assert_eq!(all_digits("42 отзыва"), None);
        assert_eq!(all_digits(""), None);
    }

    #[test]
    fn format_rating_variants() {
        assert_eq!(format_rating("4.5").as_deref(), Some("4.50"));
        assert_eq!(format_rating("4,666").as_deref(), Some("4.67"));
        assert_eq!(format_rating("5").as_deref(), Some("5.00"));
        assert_eq!(format_rating("abc"), None);
        assert_eq!(format_rating("NaN"), None);
    }
}
