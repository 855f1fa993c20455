// src/config/consts.rs

// Site
pub const EXAMPLE_URL: &str = "https://www.vseinstrumenti.ru/category/perforatory-32/";
pub const TILE_SELECTOR: &str = r#"div[data-qa="products-tile"]"#;

// Scrape
pub const PAGE_SIZE: usize = 40; // tiles per listing page
pub const PAGE_PAUSE_MS: u64 = 500; // between page loads
pub const MAX_LIMIT: usize = 1_000_000;

// Browser
pub const WAIT_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Export
pub const DEFAULT_OUT_FILE: &str = "products.xlsx";
pub const XLSX_EXT: &str = "xlsx";
pub const SHEET_NAME: &str = "Товары";
pub const COLUMN_WIDTH: f64 = 20.0;
pub const MISSING: &str = "Н/Д";

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const GUI_STATE_FILE: &str = "gui.toml";
pub const LOG_ENV: &str = "VSI_SCRAPE_LOG";
/// Optional options file, looked up in the working directory
pub const OPTIONS_FILE: &str = "vsi_scrape.toml";
