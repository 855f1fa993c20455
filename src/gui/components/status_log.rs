// src/gui/components/status_log.rs

use eframe::egui::{self, RichText, ScrollArea};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label("Status:");
    let st = app.state();
    ScrollArea::vertical()
        .id_salt("status_log")
        .max_height(120.0)
        .auto_shrink([false, true])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in &st.log {
                ui.label(RichText::new(line).monospace().small());
            }
        });
}
