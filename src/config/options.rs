// src/config/options.rs
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use url::Url;

use super::consts::*;
use crate::core::paging;
use crate::error::{Result, ScrapeError};

/// Everything a run needs. Loaded from TOML when the user has a file;
/// any key left out keeps its default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub browser: BrowserOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Check every section; hands back the parsed start URL.
    pub fn validate(&self) -> Result<Url> {
        self.browser.validate()?;
        self.scrape.validate()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let opts: Self = toml::from_str(&text)?;
        logd!("Options: loaded {}", path.display());
        Ok(opts)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// How the next listing page is found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Pagination {
    /// Rewrite the path: `/category/x/` → `/category/x/page2/`
    #[default]
    PathSuffix,
    /// Follow the page's own "next" control
    NextLink,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub url: String,
    /// 0 = no limit
    pub limit: usize,
    pub page_size: usize,
    pub pagination: Pagination,
    pub page_pause_ms: u64,
    pub tile_selector: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(),
            limit: 0,
            page_size: PAGE_SIZE,
            pagination: Pagination::default(),
            page_pause_ms: PAGE_PAUSE_MS,
            tile_selector: s!(TILE_SELECTOR),
        }
    }
}

impl ScrapeOptions {
    /// Check the options and hand back the parsed start URL.
    pub fn validate(&self) -> Result<Url> {
        if self.page_size == 0 {
            return Err(ScrapeError::InvalidOption(s!("page_size must be at least 1")));
        }
        if self.limit > MAX_LIMIT {
            return Err(ScrapeError::InvalidOption(format!(
                "limit {} is above the maximum of {}",
                self.limit, MAX_LIMIT
            )));
        }
        if self.tile_selector.trim().is_empty() {
            return Err(ScrapeError::InvalidOption(s!("tile_selector is empty")));
        }
        paging::parse_listing_url(&self.url)
    }

    pub fn max_pages(&self) -> Option<usize> {
        paging::pages_needed(self.limit, self.page_size)
    }

    pub fn page_pause(&self) -> Duration {
        Duration::from_millis(self.page_pause_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserOptions {
    pub headless: bool,
    pub sandbox: bool,
    pub user_agent: String,
    pub wait_timeout_secs: u64,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: false,
            user_agent: s!(USER_AGENT),
            wait_timeout_secs: WAIT_TIMEOUT_SECS,
        }
    }
}

impl BrowserOptions {
    pub fn validate(&self) -> Result<()> {
        if self.wait_timeout_secs == 0 {
            return Err(ScrapeError::InvalidOption(s!("wait_timeout_secs must be at least 1")));
        }
        Ok(())
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    /// How long Chrome may stay silent before the connection is dropped.
    /// Covers a slow tile wait plus the pause between page loads.
    pub fn idle_timeout(&self, page_pause: Duration) -> Duration {
        self.wait_timeout() * 4 + page_pause
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    out_path: PathBuf,
    pub sheet_name: String,
    pub column_width: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            sheet_name: s!(SHEET_NAME),
            column_width: COLUMN_WIDTH,
        }
    }
}

impl ExportOptions {
    /// Final file path. `.xlsx` is added only when the user typed no extension.
    pub fn out_path(&self) -> PathBuf {
        let path = &self.out_path;
        if path.as_os_str().is_empty() {
            return PathBuf::from(DEFAULT_OUT_FILE);
        }
        if path.extension().is_some() {
            return path.clone();
        }
        match path.file_name() {
            Some(name) => path.with_file_name(join!(name.to_string_lossy(), ".", XLSX_EXT)),
            None => path.join(DEFAULT_OUT_FILE),
        }
    }

    /// Parse GUI/CLI text into a path. A trailing separator means "put the default file in here".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = PathBuf::from(DEFAULT_OUT_FILE);
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        self.out_path = if crate::file::looks_like_dir_hint(Path::new(s)) {
            p.join(DEFAULT_OUT_FILE)
        } else {
            p
        };
    }
}
