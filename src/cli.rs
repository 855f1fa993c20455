// src/cli.rs
//
// Terminal front-end: flags override the options file, missing URL is asked for.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{
        consts::OPTIONS_FILE,
        options::{AppOptions, Pagination},
    },
    log,
    progress::Progress,
    runner,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Scrape a vseinstrumenti.ru category into an .xlsx file")]
pub struct Args {
    /// Category URL; asked for on stdin when omitted
    pub url: Option<String>,

    /// Max products to collect (0 = all)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output file (.xlsx appended when no extension; trailing / = directory)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Options file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub pagination: Option<Pagination>,

    /// Pause between page loads
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// How long to wait for product tiles on each page
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Run Chrome with a visible window
    #[arg(long)]
    pub show_browser: bool,

    /// Echo log lines to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Overlay flags onto loaded options.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(url) = &self.url { opts.scrape.url = url.clone(); }
        if let Some(n) = self.limit { opts.scrape.limit = n; }
        if let Some(out) = &self.out { opts.export.set_path(out); }
        if let Some(p) = self.pagination { opts.scrape.pagination = p; }
        if let Some(ms) = self.delay_ms { opts.scrape.page_pause_ms = ms; }
        if let Some(secs) = self.timeout_secs { opts.browser.wait_timeout_secs = secs; }
        if self.show_browser { opts.browser.headless = false; }
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let _log = log::init(args.verbose);

    let mut opts = load_options(args.config.as_deref())?;
    args.apply(&mut opts);

    if opts.scrape.url.trim().is_empty() {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        opts.scrape.url = prompt(&mut input, "Category URL: ")?;
        if args.limit.is_none() {
            opts.scrape.limit = parse_limit(&prompt(&mut input, "How many products (0 = all): ")?)?;
        }
    }

    logf!(
        "CLI: url={} limit={} out={}",
        opts.scrape.url,
        opts.scrape.limit,
        opts.export.out_path().display()
    );

    let mut prog = CliProgress::new();
    let summary = runner::run(&opts, Some(&mut prog)).wrap_err("scrape failed")?;

    println!(
        "Wrote {} product(s) from {} page(s) to {} ({})",
        summary.products,
        summary.pages,
        summary.written.display(),
        summary.stop
    );
    Ok(())
}

/// Explicit `--config` must load; the implicit file in the working dir is optional.
fn load_options(explicit: Option<&Path>) -> Result<AppOptions> {
    match explicit {
        Some(path) => AppOptions::load(path)
            .wrap_err_with(|| format!("reading options from {}", path.display())),
        None => {
            let path = Path::new(OPTIONS_FILE);
            if path.exists() {
                AppOptions::load(path)
                    .wrap_err_with(|| format!("reading options from {}", path.display()))
            } else {
                Ok(AppOptions::default())
            }
        }
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(s!(line.trim()))
}

/// Empty input means "all".
pub fn parse_limit(text: &str) -> Result<usize> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(0);
    }
    t.parse::<usize>()
        .map_err(|_| eyre!("not a product count: {t:?}"))
}

struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} {pos} product(s) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
    }
    fn log(&mut self, msg: &str) {
        self.bar.println(msg);
    }
    fn item_done(&mut self, done: usize) {
        self.bar.set_position(done as u64);
    }
    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}
