// src/scrape/listing.rs
//
// The page loop: fetch → extract → check stop conditions → next page.
// Strictly sequential, one fixed pause between page loads.

use std::{collections::HashSet, fmt, thread};

use url::Url;

use crate::{
    config::options::{Pagination, ScrapeOptions},
    core::{browser::PageSource, paging},
    error::Result,
    progress::Progress,
    specs::{pagination::NextSpec, products::{Product, TileSpec}},
};

/// Why the loop ended. Every run ends with exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// A page failed to load (or never showed its tiles)
    LoadFailed,
    /// A page loaded but had no product tiles
    NoProducts,
    /// Requested number of products collected
    LimitReached,
    /// Computed page count used up
    PagesExhausted,
    /// Next-link mode: no next control, or it pointed back to a visited page
    NoNextPage,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::LoadFailed => "page failed to load",
            StopReason::NoProducts => "no products on page",
            StopReason::LimitReached => "requested count reached",
            StopReason::PagesExhausted => "all needed pages fetched",
            StopReason::NoNextPage => "no next page",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug)]
pub struct Collected {
    pub products: Vec<Product>,
    pub pages_fetched: usize,
    pub stop: StopReason,
}

/// Walk the listing from `opts.url` until a stop condition hits.
///
/// Only setup problems (bad URL, bad selector) are errors. A page that fails
/// to load is logged and ends the run with what was collected so far.
pub fn collect_products(
    opts: &ScrapeOptions,
    source: &mut dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collected> {
    let start = opts.validate()?;
    let tiles = TileSpec::new(&opts.tile_selector)?;
    let next_spec = match opts.pagination {
        Pagination::NextLink => Some(NextSpec::new()?),
        Pagination::PathSuffix => None,
    };

    let limit = opts.limit;
    let max_pages = opts.max_pages();
    match max_pages {
        Some(n) => logf!("Requested {} product(s): {} page(s) of {}", limit, n, opts.page_size),
        None => logf!("Requested all products: pages unbounded"),
    }

    if limit > 0 {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(limit);
        }
    }

    let mut products: Vec<Product> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut pages_fetched = 0usize;
    let mut page = 1usize;
    let mut url = start.clone();

    let stop = loop {
        visited.insert(s!(url.as_str()));

        let html = match source.fetch(url.as_str()) {
            Ok(html) => html,
            Err(e) => {
                logw!("Page {}: {}", page, e);
                note(&mut progress, format!("Page {page} failed to load: {e}"));
                break StopReason::LoadFailed;
            }
        };
        pages_fetched += 1;

        let found = tiles.parse_listing(&html, &url);
        if found.is_empty() {
            logw!("Page {}: no products found", page);
            note(&mut progress, format!("Page {page}: no products"));
            break StopReason::NoProducts;
        }
        logf!("Page {}: {} product(s) found", page, found.len());

        for product in found {
            if limit > 0 && products.len() >= limit {
                break;
            }
            products.push(product);
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(products.len());
            }
        }
        note(&mut progress, format!("Page {page}: {} product(s) so far", products.len()));

        if limit > 0 && products.len() >= limit {
            logf!("Requested count reached: {}", limit);
            break StopReason::LimitReached;
        }

        let next_page = page + 1;
        if max_pages.is_some_and(|m| next_page > m) {
            logf!("Page budget used: {}", page);
            break StopReason::PagesExhausted;
        }

        let next: Option<Url> = match &next_spec {
            None => Some(paging::page_url(&start, next_page)),
            Some(spec) => spec
                .find_next(&html, &url)
                .map(|n| paging::carry_query(n, &start))
                .filter(|n| !visited.contains(n.as_str())),
        };
        let Some(next) = next else {
            logf!("Page {}: no next page", page);
            break StopReason::NoNextPage;
        };

        url = next;
        page = next_page;
        thread::sleep(opts.page_pause());
    };

    logf!(
        "Scrape stopped ({}): {} product(s) from {} page(s)",
        stop,
        products.len(),
        pages_fetched
    );

    Ok(Collected { products, pages_fetched, stop })
}

fn note(progress: &mut Option<&mut dyn Progress>, msg: String) {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&msg);
    }
}
