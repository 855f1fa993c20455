// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("bad selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("browser: {0}")]
    Browser(String),

    #[error("could not load {url}: {reason}")]
    PageLoad { url: String, reason: String },

    #[error("spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("options file: {0}")]
    ConfigRead(#[from] toml::de::Error),

    #[error("options file: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
