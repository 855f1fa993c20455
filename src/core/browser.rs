// src/core/browser.rs
//
// Headless Chrome as a page source. The listing is rendered client-side,
// so a plain GET won't do: load, wait for the tiles, read back the DOM.

use std::{
    ffi::{OsStr, OsString},
    fmt::Display,
    sync::Arc,
    time::Duration,
};

use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::config::options::BrowserOptions;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a listing URL into rendered HTML.
/// The scrape loop only talks to this; tests swap in canned pages.
pub trait PageSource {
    fn fetch(&mut self, url: &str) -> Result<String>;
}

pub struct ChromeBrowser {
    // Dropping the Browser kills the Chrome process, so it must outlive the tab.
    browser: Browser,
    tab: Arc<Tab>,
    wait_selector: String,
    wait_timeout: Duration,
}

fn browser_err(e: impl Display) -> ScrapeError {
    ScrapeError::Browser(e.to_string())
}

fn page_err(url: &str, e: impl Display) -> ScrapeError {
    ScrapeError::PageLoad { url: s!(url), reason: e.to_string() }
}

impl ChromeBrowser {
    /// Start Chrome and open the one tab every page load goes through.
    /// `idle_timeout` must outlast the longest quiet stretch of a run.
    pub fn launch(opts: &BrowserOptions, wait_selector: &str, idle_timeout: Duration) -> Result<Self> {
        logf!("Browser: launching (headless={})", opts.headless);

        let user_agent: OsString = format!("--user-agent={}", opts.user_agent).into();
        let args: Vec<&OsStr> = vec![
            OsStr::new("--disable-gpu"),
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--log-level=3"),
            user_agent.as_os_str(),
        ];

        let wait_timeout = opts.wait_timeout();
        let launch = LaunchOptions::default_builder()
            .headless(opts.headless)
            .sandbox(opts.sandbox)
            .idle_browser_timeout(idle_timeout)
            .args(args)
            .build()
            .map_err(browser_err)?;

        let browser = Browser::new(launch).map_err(browser_err)?;
        let tab = browser.new_tab().map_err(browser_err)?;
        tab.set_default_timeout(wait_timeout);

        logf!("Browser: ready");
        Ok(Self {
            browser,
            tab,
            wait_selector: s!(wait_selector),
            wait_timeout,
        })
    }

    /// Close the tab and shut Chrome down.
    pub fn quit(self) {
        if let Err(e) = self.tab.close(false) {
            logd!("Browser: tab close failed: {}", e);
        }
        drop(self.browser);
        logf!("Browser: closed");
    }
}

impl PageSource for ChromeBrowser {
    fn fetch(&mut self, url: &str) -> Result<String> {
        logf!("Loading page: {}", url);

        self.tab.navigate_to(url).map_err(|e| page_err(url, e))?;
        self.tab
            .wait_for_element_with_custom_timeout(&self.wait_selector, self.wait_timeout)
            .map_err(|e| page_err(url, e))?;
        let html = self.tab.get_content().map_err(|e| page_err(url, e))?;

        logf!("Loaded page: {} ({} bytes)", url, html.len());
        Ok(html)
    }
}
