// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the listing HTML: *where the ground truth lives*
//! and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of rendered listing pages (no browser, no I/O).
//! - **Selector choice & precedence**: every field is an ordered cascade,
//!   most specific (`data-qa`) first, then class and microdata fallbacks.
//! - **Light shaping** of results into `Product` records and `DataSet` rows.
//!
//! ## What does **not** live here
//! - Fetching pages (`core::browser`), deciding which page comes next
//!   (`scrape::listing`), or writing files (`file`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::run → scrape::collect_products → PageSource::fetch
//!                                                  ↘  specs::products::TileSpec::parse_listing
//!                          file::write_xlsx
//! ```
//!
//! ## Conventions & invariants
//! - A cascade tier only looks at its first match; if that yields nothing
//!   usable the next tier is tried, and the sentinel fills what's left.
//! - Row shape is fixed: see `products::HEADERS`.
//! - Specs are testable **offline** against HTML fixtures.
pub mod pagination;
pub mod products;
