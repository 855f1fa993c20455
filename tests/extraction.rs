// tests/extraction.rs
//
// Product tiles → records, against hand-written listing HTML.
mod common;

use url::Url;
use vsi_scrape::config::consts::{MISSING, TILE_SELECTOR};
use vsi_scrape::error::ScrapeError;
use vsi_scrape::specs::pagination::NextSpec;
use vsi_scrape::specs::products::{Product, TileSpec};

fn page_url() -> Url {
    Url::parse("https://www.vseinstrumenti.ru/category/dreli-1/page2/").unwrap()
}

fn parse(body: &str) -> Vec<Product> {
    let html = format!("<html><body>{body}</body></html>");
    TileSpec::new(TILE_SELECTOR).unwrap().parse_listing(&html, &page_url())
}

#[test]
fn current_layout_fills_every_field() {
    let got = parse(&common::tile(15873264));
    assert_eq!(got.len(), 1);
    let p = &got[0];
    assert_eq!(p.code, "15873264");
    assert_eq!(p.name, "Дрель 15873264");
    assert_eq!(p.url, "https://www.vseinstrumenti.ru/product/drill-15873264/");
    assert_eq!(p.price, "1 990 ₽");
    assert_eq!(p.rating, "4.50");
    assert_eq!(p.reviews, "12");
}

#[test]
fn fallback_tiers_are_used_when_primary_is_absent() {
    let got = parse(
        r#"<div data-qa="products-tile">
             <span data-qa="product-code">арт. 777-1</span>
             <a class="product-name" href="https://cdn.other.test/p/777">  Шуруповёрт
               аккумуляторный </a>
             <div class="price-current">5 490 ₽</div>
             <span itemprop="ratingValue">4,8</span>
             <span itemprop="reviewCount">31</span>
           </div>"#,
    );
    let p = &got[0];
    assert_eq!(p.code, "777");
    assert_eq!(p.name, "Шуруповёрт аккумуляторный");
    // Absolute hrefs are kept as-is
    assert_eq!(p.url, "https://cdn.other.test/p/777");
    assert_eq!(p.price, "5 490 ₽");
    assert_eq!(p.rating, "4.80");
    assert_eq!(p.reviews, "31");
}

#[test]
fn price_falls_back_to_content_attribute() {
    let got = parse(
        r#"<div data-qa="products-tile"><span itemprop="price" content="1500"></span></div>"#,
    );
    assert_eq!(got[0].price, "1500");
}

#[test]
fn rating_box_without_input_falls_back_to_microdata() {
    let got = parse(
        r#"<div data-qa="products-tile">
             <a data-qa="product-rating"><span>нет отзывов</span></a>
             <span itemprop="ratingValue">4</span>
           </div>"#,
    );
    let p = &got[0];
    assert_eq!(p.rating, "4.00");
    // Box span is not a number and there is no reviewCount
    assert_eq!(p.reviews, MISSING);
}

#[test]
fn empty_tile_gets_sentinel_everywhere() {
    let got = parse(r#"<div data-qa="products-tile"><p>реклама</p></div>"#);
    let p = &got[0];
    for field in [&p.code, &p.name, &p.url, &p.price, &p.rating, &p.reviews] {
        assert_eq!(field, MISSING);
    }
}

#[test]
fn tiles_keep_document_order() {
    let body: String = [3, 1, 2].into_iter().map(common::tile).collect();
    let codes: Vec<String> = parse(&body).into_iter().map(|p| p.code).collect();
    assert_eq!(codes, ["3", "1", "2"]);
}

#[test]
fn page_without_tiles_is_empty() {
    assert!(parse("<p>Ничего не найдено</p>").is_empty());
    assert!(parse("").is_empty());
}

#[test]
fn custom_tile_selector() {
    let spec = TileSpec::new("li.card").unwrap();
    let html = r#"<ul><li class="card"><a data-qa="product-name" href="/p/1">One</a></li></ul>"#;
    let got = spec.parse_listing(html, &page_url());
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].name, "One");
    assert_eq!(got[0].url, "https://www.vseinstrumenti.ru/p/1");
}

#[test]
fn malformed_tile_selector_is_an_error() {
    assert!(matches!(TileSpec::new("div[data-qa="), Err(ScrapeError::Selector { .. })));
}

#[test]
fn next_link_tiers() {
    let spec = NextSpec::new().unwrap();
    let base = page_url();

    let html = r#"<a rel="next" href="?p=3">»</a><a data-qa="pagination-next" href="/category/dreli-1/page3/">Далее</a>"#;
    assert_eq!(
        spec.find_next(html, &base).unwrap().as_str(),
        "https://www.vseinstrumenti.ru/category/dreli-1/page3/"
    );

    let html = r#"<html><head><link rel="next" href="/category/dreli-1/page3/"></head></html>"#;
    assert!(spec.find_next(html, &base).is_some());

    let html = r#"<a rel="next" href="?p=3">»</a>"#;
    assert_eq!(
        spec.find_next(html, &base).unwrap().as_str(),
        "https://www.vseinstrumenti.ru/category/dreli-1/page2/?p=3"
    );

    assert!(spec.find_next("<p>last page</p>", &base).is_none());
}

/// One field's cascade, most specific tier first: (tile inner HTML, expected value).
struct Cascade {
    field: &'static str,
    get: fn(&Product) -> &str,
    tiers: Vec<(&'static str, &'static str)>,
}

fn code(p: &Product) -> &str { &p.code }
fn name(p: &Product) -> &str { &p.name }
fn price(p: &Product) -> &str { &p.price }
fn rating(p: &Product) -> &str { &p.rating }
fn reviews(p: &Product) -> &str { &p.reviews }

fn cascades() -> Vec<Cascade> {
    vec![
        Cascade {
            field: "code",
            get: code,
            tiers: vec![
                (r#"<p data-qa="product-code-text">Код: 111</p>"#, "111"),
                (r#"<span data-qa="product-code">арт. 222</span>"#, "222"),
                (r#"<span class="product-code">333</span>"#, "333"),
            ],
        },
        Cascade {
            field: "name",
            get: name,
            tiers: vec![
                (r#"<a data-qa="product-name" href="/n1">Name one</a>"#, "Name one"),
                (r#"<div data-qa="product-name"><a href="/n2">Name two</a></div>"#, "Name two"),
                (r#"<a class="product-name" href="/n3">Name three</a>"#, "Name three"),
                (r#"<a itemprop="url" href="/n4">Name four</a>"#, "Name four"),
            ],
        },
        Cascade {
            field: "price",
            get: price,
            tiers: vec![
                (r#"<p data-qa="product-price-current">100 ₽</p>"#, "100 ₽"),
                (r#"<span data-qa="product-price">200 ₽</span>"#, "200 ₽"),
                (r#"<span class="price-current">300 ₽</span>"#, "300 ₽"),
                (r#"<span itemprop="price">400</span>"#, "400"),
            ],
        },
        Cascade {
            field: "rating",
            get: rating,
            tiers: vec![
                (r#"<a data-qa="product-rating"><input name="rating" value="4.1"></a>"#, "4.10"),
                (r#"<div data-qa="product-rating"><input name="rating" value="4.2"></div>"#, "4.20"),
                (r#"<span itemprop="ratingValue">4.3</span>"#, "4.30"),
            ],
        },
        Cascade {
            field: "reviews",
            get: reviews,
            tiers: vec![
                (r#"<a data-qa="product-rating"><span>11</span></a>"#, "11"),
                (r#"<div data-qa="product-rating"><span>22</span></div>"#, "22"),
                (r#"<span itemprop="reviewCount">33</span>"#, "33"),
            ],
        },
    ]
}

fn parse_tile(inner: &str) -> Product {
    let mut got = parse(&format!(r#"<div data-qa="products-tile">{inner}</div>"#));
    assert_eq!(got.len(), 1);
    got.remove(0)
}

#[test]
fn each_tier_alone_then_earlier_tier_wins() {
    for c in cascades() {
        for (i, &(html, want)) in c.tiers.iter().enumerate() {
            assert_eq!((c.get)(&parse_tile(html)), want, "{} tier {} alone", c.field, i + 1);

            if let Some(&(next_html, _)) = c.tiers.get(i + 1) {
                // Later tier first in the document: precedence, not position, decides
                let both = format!("{next_html}{html}");
                assert_eq!(
                    (c.get)(&parse_tile(&both)),
                    want,
                    "{} tier {} over tier {}",
                    c.field,
                    i + 1,
                    i + 2
                );
            }
        }
    }
}

#[test]
fn url_follows_the_name_tier() {
    let p = parse_tile(
        r#"<a itemprop="url" href="/n4">Four</a><div data-qa="product-name"><a href="/n2">Two</a></div>"#,
    );
    assert_eq!(p.name, "Two");
    assert_eq!(p.url, "https://www.vseinstrumenti.ru/n2");
}
