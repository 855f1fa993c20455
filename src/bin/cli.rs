// src/bin/cli.rs
use vsi_scrape::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
