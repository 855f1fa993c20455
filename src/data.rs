// src/data.rs
//
// Flat table data: what the scrape produces and what the sheet writer consumes.
// Rows are plain strings in `specs::products::HEADERS` order.

use crate::specs::products::{HEADERS, Product};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            headers: Some(HEADERS.iter().map(|h| s!(*h)).collect()),
            rows: products.into_iter().map(Product::into_row).collect(),
        }
    }

    #[inline] pub fn row_count(&self) -> usize { self.rows.len() }
    #[inline] pub fn header_count(&self) -> usize { self.headers.as_ref().map_or(0, |h| h.len()) }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Widest of the header row and any data row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header_count()))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_products_keep_headers() {
        let ds = DataSet::from_products(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.header_count(), HEADERS.len());
        assert_eq!(ds.column_count(), HEADERS.len());
    }

    #[test]
    fn column_count_without_headers_uses_widest_row() {
        let ds = DataSet {
            headers: None,
            rows: vec![vec![s!("a")], vec![s!("a"), s!("b"), s!("c")]],
        };
        assert_eq!(ds.column_count(), 3);
    }
}
