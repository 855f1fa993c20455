// src/gui/app.rs
use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use eframe::egui;

use crate::{
    config::{
        consts::OPTIONS_FILE,
        options::AppOptions,
        state::GuiState,
    },
    data::DataSet,
};

const LOG_LINES_MAX: usize = 500;

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    eframe::run_native(
        "Vseinstrumenti.ru Scraper",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(App::new(load_options(), GuiState::load(&GuiState::default_path()))))
        }),
    )
}

/// Options file next to the working dir, if any. The form fills in url/limit/output.
fn load_options() -> AppOptions {
    let path = Path::new(OPTIONS_FILE);
    if !path.exists() {
        return AppOptions::default();
    }
    match AppOptions::load(path) {
        Ok(opts) => opts,
        Err(e) => {
            loge!("Options: {} ignored: {}", path.display(), e);
            AppOptions::default()
        }
    }
}

/// Written by the worker thread, read by the UI every frame.
#[derive(Debug, Default)]
pub struct RunState {
    pub running: bool,
    pub done: usize,
    /// 0 = unknown (no limit)
    pub total: usize,
    pub log: Vec<String>,
    /// Rows of the last finished run, picked up by the UI thread once
    pub finished: Option<DataSet>,
}

impl RunState {
    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
        if self.log.len() > LOG_LINES_MAX {
            let extra = self.log.len() - LOG_LINES_MAX;
            self.log.drain(..extra);
        }
    }
}

pub fn lock(shared: &Mutex<RunState>) -> MutexGuard<'_, RunState> {
    // A panicked worker leaves usable data behind; keep the UI alive
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct App {
    /// Base options; each run copies these and overlays the form
    pub options: AppOptions,

    /// The three form fields, as typed
    pub form: GuiState,

    /// Status/progress (workers write here)
    pub shared: Arc<Mutex<RunState>>,

    /// Last collected rows, for the preview table
    pub preview: Option<DataSet>,
}

impl App {
    pub fn new(options: AppOptions, form: GuiState) -> Self {
        logf!("Init: url={:?} limit={:?} out={:?}", form.url, form.limit, form.out_path);
        let mut state = RunState::default();
        state.push_log("Idle");
        Self {
            options,
            form,
            shared: Arc::new(Mutex::new(state)),
            preview: None,
        }
    }

    #[inline]
    pub fn state(&self) -> MutexGuard<'_, RunState> {
        lock(&self.shared)
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        self.state().push_log(msg);
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.state().running
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let finished = self.state().finished.take();
        if let Some(ds) = finished {
            self.preview = Some(ds);
        }
        let running = self.running();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Vseinstrumenti.ru Scraper");
            });
            ui.add_space(8.0);

            crate::gui::components::form::draw(ui, self, running);

            ui.add_space(8.0);

            crate::gui::components::run_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::status_log::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
