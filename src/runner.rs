// src/runner.rs
//
// One full run: browser up → walk the listing → browser down → write the sheet.

use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::browser::{ChromeBrowser, PageSource},
    data::DataSet,
    error::Result,
    file,
    progress::{Progress, reborrow},
    scrape::{self, StopReason},
};

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub products: usize,
    pub pages: usize,
    pub stop: StopReason,
    pub written: PathBuf,
    pub dataset: DataSet,
}

/// Top-level runner with a real headless Chrome.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    // Fail on bad input before paying for a browser launch
    if let Err(e) = opts.validate() {
        loge!("Options: {}", e);
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        return Err(e);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log("Starting browser…");
    }
    let mut browser = match ChromeBrowser::launch(
        &opts.browser,
        &opts.scrape.tile_selector,
        opts.browser.idle_timeout(opts.scrape.page_pause()),
    ) {
        Ok(b) => b,
        Err(e) => {
            loge!("Browser: {}", e);
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    let res = run_with(opts, &mut browser, progress);
    browser.quit();
    res
}

/// Same as `run`, against any page source. The caller owns the source's lifecycle.
pub fn run_with(
    opts: &AppOptions,
    source: &mut dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let collected = scrape::collect_products(&opts.scrape, source, reborrow(&mut progress));
    let collected = match collected {
        Ok(c) => c,
        Err(e) => {
            loge!("Scrape: {}", e);
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    let products = collected.products.len();
    let dataset = DataSet::from_products(collected.products);
    let written = file::write_xlsx(&dataset, &opts.export);

    if let Some(p) = progress.as_deref_mut() {
        match &written {
            Ok(path) => p.log(&format!(
                "Stopped: {}. {} product(s) → {}",
                collected.stop, products, path.display()
            )),
            Err(e) => p.log(&format!("Export failed: {e}")),
        }
        p.finish();
    }

    Ok(RunSummary {
        products,
        pages: collected.pages_fetched,
        stop: collected.stop,
        written: written?,
        dataset,
    })
}
