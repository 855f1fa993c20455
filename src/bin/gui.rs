// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use vsi_scrape::{gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    let _log = log::init(false);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Vseinstrumenti.ru Scraper")
            .with_inner_size([560.0, 640.0])
            .with_min_inner_size([420.0, 460.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
