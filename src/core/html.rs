// src/core/html.rs
//
// Small helpers over `scraper` for selector cascades.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: s!(css),
        reason: e.to_string(),
    })
}

/// Compile an ordered list of selectors (one "cascade").
pub fn compile(tiers: &[&str]) -> Result<Vec<Selector>> {
    tiers.iter().map(|css| parse_selector(css)).collect()
}

/// Visible text of an element, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Walk the cascade in order. Each tier looks at its *first* match only;
/// the tier wins if `f` accepts that element, otherwise the next tier is tried.
pub fn first_map<'a, T>(
    scope: ElementRef<'a>,
    tiers: &[Selector],
    mut f: impl FnMut(ElementRef<'a>) -> Option<T>,
) -> Option<T> {
    tiers
        .iter()
        .filter_map(|sel| scope.select(sel).next())
        .find_map(|el| f(el))
}

/// Attribute value of an element, trimmed; `None` if absent or blank.
pub fn attr_of(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
