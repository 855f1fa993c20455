// tests/common/mod.rs
//
// Listing-page fixtures and an in-memory page source.
#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Instant;

use vsi_scrape::core::browser::PageSource;
use vsi_scrape::error::{Result, ScrapeError};

pub const BASE: &str = "https://shop.test/category/drills-1234/?sort=price";

/// One product tile in the current site layout.
pub fn tile(code: u32) -> String {
    format!(
        r#"<div data-qa="products-tile">
  <p data-qa="product-code-text">Код: {code}</p>
  <a data-qa="product-name" href="/product/drill-{code}/"> Дрель {code} </a>
  <p data-qa="product-price-current">1&nbsp;990 ₽</p>
  <a data-qa="product-rating"><input name="rating" value="4.5"><span>12</span></a>
</div>"#
    )
}

/// A full listing page with the given product codes and an optional next link.
pub fn listing(codes: impl IntoIterator<Item = u32>, next: Option<&str>) -> String {
    let tiles: String = codes.into_iter().map(tile).collect();
    let next = next
        .map(|href| format!(r#"<a data-qa="pagination-next" href="{href}">Next</a>"#))
        .unwrap_or_default();
    format!("<!doctype html><html><body><main>{tiles}</main>{next}</body></html>")
}

/// Serves pages by exact URL and records what was asked for.
/// Unknown URLs fail like a page that never showed its tiles.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub requested: Vec<String>,
    pub fetched_at: Vec<Instant>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }
}

impl PageSource for FakeSite {
    fn fetch(&mut self, url: &str) -> Result<String> {
        self.requested.push(url.to_string());
        self.fetched_at.push(Instant::now());
        self.pages.get(url).cloned().ok_or_else(|| ScrapeError::PageLoad {
            url: url.to_string(),
            reason: "timed out waiting for product tiles".to_string(),
        })
    }
}
