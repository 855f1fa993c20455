// src/gui/components/form.rs

use eframe::egui::{self, RichText, TextEdit};
use crate::{config::consts::EXAMPLE_URL, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App, running: bool) {
    ui.add_enabled_ui(!running, |ui| {
        ui.label("Category URL:");
        ui.label(RichText::new(format!("e.g. {EXAMPLE_URL}")).small().weak().italics());
        ui.add(
            TextEdit::singleline(&mut app.form.url)
                .hint_text("Enter category URL")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);

        ui.label("Max products (0 = all):");
        let resp = ui.add(
            TextEdit::singleline(&mut app.form.limit)
                .hint_text("0")
                .desired_width(120.0),
        );
        if resp.changed() {
            // Digits only; range is checked on start
            app.form.limit.retain(|c| c.is_ascii_digit());
        }

        ui.add_space(6.0);

        ui.label("Output file:");
        let resp = ui.add(
            TextEdit::singleline(&mut app.form.out_path)
                .hint_text("products.xlsx")
                .desired_width(f32::INFINITY),
        );
        if resp.lost_focus() {
            logd!("UI: out_path → {:?}", app.form.out_path);
        }
    });
}
