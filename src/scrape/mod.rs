// src/scrape/mod.rs
mod listing;

pub use listing::{Collected, StopReason, collect_products};
