// src/specs/products.rs
//
// Product tiles on a category listing.
//
// Each field has a cascade of selectors, most specific first. The site tags
// its markup with `data-qa` attributes; the class/microdata tiers catch the
// older tile layout and schema.org markup. Nothing matched → MISSING.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::consts::MISSING;
use crate::core::html::{attr_of, compile, first_map, parse_selector, text_of};
use crate::core::sanitize::{all_digits, first_digits, format_rating, non_empty};
use crate::error::Result;

/// Column order of the sheet.
pub const HEADERS: [&str; 6] = ["Артикул", "Название", "URL", "Цена", "Рейтинг", "Отзывы"];

const CODE: &[&str] = &[
    r#"p[data-qa="product-code-text"]"#,
    r#"[data-qa="product-code"]"#,
    ".product-code",
];
const NAME: &[&str] = &[
    r#"a[data-qa="product-name"]"#,
    r#"[data-qa="product-name"] a"#,
    "a.product-name",
    r#"a[itemprop="url"]"#,
];
const PRICE: &[&str] = &[
    r#"p[data-qa="product-price-current"]"#,
    r#"[data-qa="product-price"]"#,
    ".price-current",
    r#"[itemprop="price"]"#,
];
const RATING_BOX: &[&str] = &[r#"a[data-qa="product-rating"]"#, r#"[data-qa="product-rating"]"#];
const RATING_INPUT: &[&str] = &[r#"input[name="rating"]"#];
const RATING_META: &[&str] = &[r#"[itemprop="ratingValue"]"#];
const REVIEWS_IN_BOX: &[&str] = &["span"];
const REVIEWS_META: &[&str] = &[r#"[itemprop="reviewCount"]"#];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub url: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
}

impl Product {
    pub fn into_row(self) -> Vec<String> {
        vec![self.code, self.name, self.url, self.price, self.rating, self.reviews]
    }
}

/// Compiled selectors for one listing layout. Build once per run.
pub struct TileSpec {
    tile: Selector,
    code: Vec<Selector>,
    name: Vec<Selector>,
    price: Vec<Selector>,
    rating_box: Vec<Selector>,
    rating_input: Vec<Selector>,
    rating_meta: Vec<Selector>,
    reviews_in_box: Vec<Selector>,
    reviews_meta: Vec<Selector>,
}

impl TileSpec {
    pub fn new(tile_selector: &str) -> Result<Self> {
        Ok(Self {
            tile: parse_selector(tile_selector)?,
            code: compile(CODE)?,
            name: compile(NAME)?,
            price: compile(PRICE)?,
            rating_box: compile(RATING_BOX)?,
            rating_input: compile(RATING_INPUT)?,
            rating_meta: compile(RATING_META)?,
            reviews_in_box: compile(REVIEWS_IN_BOX)?,
            reviews_meta: compile(REVIEWS_META)?,
        })
    }

    /// All product tiles on the page, in document order. Empty = no products.
    pub fn parse_listing(&self, html: &str, page_url: &Url) -> Vec<Product> {
        let doc = Html::parse_document(html);
        let products = doc
            .select(&self.tile)
            .map(|tile| self.extract(tile, page_url))
            .collect();
        products
    }

    fn extract(&self, tile: ElementRef<'_>, page_url: &Url) -> Product {
        let code = first_map(tile, &self.code, |el| first_digits(&text_of(el)));
        let name = first_map(tile, &self.name, |el| non_empty(text_of(el)));
        let url = first_map(tile, &self.name, |el| {
            attr_of(el, "href")
                .and_then(|href| page_url.join(&href).ok())
                .map(String::from)
        });
        let price = first_map(tile, &self.price, |el| {
            non_empty(text_of(el)).or_else(|| attr_of(el, "content"))
        });

        let rating = first_map(tile, &self.rating_box, |rbox| {
            first_map(rbox, &self.rating_input, |inp| {
                attr_of(inp, "value").and_then(|v| format_rating(&v))
            })
        })
        .or_else(|| {
            first_map(tile, &self.rating_meta, |el| {
                attr_of(el, "content")
                    .or_else(|| non_empty(text_of(el)))
                    .and_then(|v| format_rating(&v))
            })
        });

        let reviews = first_map(tile, &self.rating_box, |rbox| {
            first_map(rbox, &self.reviews_in_box, |span| all_digits(&text_of(span)))
        })
        .or_else(|| {
            first_map(tile, &self.reviews_meta, |el| {
                attr_of(el, "content")
                    .or_else(|| non_empty(text_of(el)))
                    .and_then(|v| all_digits(&v))
            })
        });

        let or_missing = |v: Option<String>| v.unwrap_or_else(|| s!(MISSING));
        Product {
            code: or_missing(code),
            name: or_missing(name),
            url: or_missing(url),
            price: or_missing(price),
            rating: or_missing(rating),
            reviews: or_missing(reviews),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_match_row_width() {
        let p = Product {
            code: s!("1"), name: s!("n"), url: s!("u"),
            price: s!("p"), rating: s!("r"), reviews: s!("v"),
        };
        assert_eq!(p.into_row().len(), HEADERS.len());
    }

    #[test]
    fn all_cascades_compile() {
        assert!(TileSpec::new(crate::config::consts::TILE_SELECTOR).is_ok());
    }
}
