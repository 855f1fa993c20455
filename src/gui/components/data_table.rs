// src/gui/components/data_table.rs
//
// Read-only preview of the last run. Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(ds) = app.preview.as_ref() else {
        ui.weak("No data yet");
        return;
    };
    if ds.is_empty() {
        ui.weak("Last run collected no products");
        return;
    }

    let cols = ds.column_count();
    let headers: Vec<&str> = ds
        .headers
        .as_ref()
        .map(|h| h.iter().map(String::as_str).collect())
        .unwrap_or_default();

    ui.label(format!("Preview: {} row(s)", ds.row_count()));

    egui::ScrollArea::horizontal()
        .id_salt("preview_hscroll")
        .show(ui, |ui| {
            let max_h = ui.available_height();
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(max_h);
            for ci in 0..cols {
                // Name and URL get the room
                let w = match ci { 1 | 2 => 220.0, _ => 90.0 };
                table = table.column(Column::initial(w).resizable(true).clip(true));
            }

            table
                .header(ROW_H + 2.0, |mut row| {
                    for ci in 0..cols {
                        row.col(|ui| {
                            ui.label(RichText::new(headers.get(ci).copied().unwrap_or("")).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, ds.rows.len(), |mut row| {
                        let r = &ds.rows[row.index()];
                        for ci in 0..cols {
                            row.col(|ui| {
                                ui.label(r.get(ci).map(String::as_str).unwrap_or(""));
                            });
                        }
                    });
                });
        });
}
