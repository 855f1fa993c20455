// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;
use super::app::{RunState, lock};

pub struct GuiProgress {
    shared: Arc<Mutex<RunState>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(shared: Arc<Mutex<RunState>>, ctx: egui::Context) -> Self {
        Self { shared, ctx }
    }

    fn with_state(&self, f: impl FnOnce(&mut RunState)) {
        f(&mut lock(&self.shared));
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.with_state(|st| {
            st.total = total;
            st.done = 0;
        });
    }
    fn log(&mut self, msg: &str) {
        self.with_state(|st| st.push_log(msg));
    }
    fn item_done(&mut self, done: usize) {
        self.with_state(|st| st.done = done);
    }
}
