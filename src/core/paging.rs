// src/core/paging.rs
//
// Pagination arithmetic and listing-page URLs.

use url::Url;

use crate::error::{Result, ScrapeError};

/// How many listing pages cover `limit` products. `None` = keep going until the site runs out.
pub fn pages_needed(limit: usize, page_size: usize) -> Option<usize> {
    if limit == 0 {
        return None;
    }
    Some(limit.div_ceil(page_size.max(1)))
}

/// Parse user input into the page-1 URL: trimmed, fragment dropped, http(s) only.
pub fn parse_listing_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let invalid = |reason: &str| ScrapeError::InvalidUrl { url: s!(raw), reason: s!(reason) };

    if raw.is_empty() {
        return Err(invalid("empty"));
    }
    let mut url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("only http and https are supported"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    url.set_fragment(None);
    Ok(url)
}

/// Page `n` of a listing. Page 1 is `base` itself; later pages get `/pageN/`
/// appended to the path. The query string rides along untouched.
pub fn page_url(base: &Url, n: usize) -> Url {
    if n <= 1 {
        return base.clone();
    }
    let mut url = base.clone();
    let path = format!("{}/page{}/", base.path().trim_end_matches('/'), n);
    url.set_path(&path);
    url
}

/// Copy query pairs from the start URL onto a followed "next" link,
/// unless the link already sets that key (filters survive page hops).
pub fn carry_query(mut next: Url, base: &Url) -> Url {
    let present: Vec<String> = next.query_pairs().map(|(k, _)| k.into_owned()).collect();
    let missing: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(k, _)| !present.iter().any(|p| p == k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if !missing.is_empty() {
        let mut pairs = next.query_pairs_mut();
        for (k, v) in &missing {
            pairs.append_pair(k, v);
        }
    }
    next.set_fragment(None);
    next
}
