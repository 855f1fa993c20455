// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod scrape; // src/gui/actions/scrape.rs

pub use scrape::{FormInput, scrape, validate_form};
