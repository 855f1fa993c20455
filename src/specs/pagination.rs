// src/specs/pagination.rs
//
// The listing's own "next page" control, for sites/categories where the
// `/pageN/` path rewrite doesn't apply.

use scraper::{Html, Selector};
use url::Url;

use crate::core::html::{attr_of, compile};
use crate::error::Result;

const NEXT: &[&str] = &[
    r#"a[data-qa="pagination-next"]"#,
    r#"link[rel="next"]"#,
    r#"a[rel="next"]"#,
];

pub struct NextSpec {
    tiers: Vec<Selector>,
}

impl NextSpec {
    pub fn new() -> Result<Self> {
        Ok(Self { tiers: compile(NEXT)? })
    }

    /// Absolute URL of the next page, if the page advertises one.
    pub fn find_next(&self, html: &str, page_url: &Url) -> Option<Url> {
        let doc = Html::parse_document(html);
        let next = self
            .tiers
            .iter()
            .filter_map(|sel| doc.select(sel).next())
            .filter_map(|el| attr_of(el, "href"))
            .find_map(|href| page_url.join(&href).ok());
        next
    }
}
