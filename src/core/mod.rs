// src/core/mod.rs

pub mod browser;
pub mod html;
pub mod paging;
pub mod sanitize;

pub use browser::{ChromeBrowser, PageSource};
