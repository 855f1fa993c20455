// src/gui/components/run_bar.rs

use eframe::egui::{self, Button, Color32, ProgressBar, RichText, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (running, done, total) = {
        let st = app.state();
        (st.running, st.done, st.total)
    };

    let bar = if total > 0 {
        let frac = (done.min(total) as f32) / (total as f32);
        ProgressBar::new(frac).text(format!("{done}/{total}"))
    } else if running {
        ProgressBar::new(0.0).animate(true).text(format!("{done} collected"))
    } else {
        ProgressBar::new(0.0).text("0%")
    };
    ui.add(bar.desired_width(ui.available_width()));

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let label = RichText::new("Start scraping").strong().color(Color32::WHITE);
        let btn = Button::new(label).fill(Color32::from_rgb(0x20, 0x6a, 0xc8));
        if ui.add_enabled(!running, btn).clicked() {
            logf!("UI: Start clicked");
            let ctx = ui.ctx().clone();
            actions::scrape(app, &ctx);
        }
        if running {
            ui.add(Spinner::new());
        }
    });
}
