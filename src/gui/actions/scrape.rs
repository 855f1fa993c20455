// src/gui/actions/scrape.rs
use std::{
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::{consts::MAX_LIMIT, state::GuiState},
    gui::{app::{App, RunState, lock}, progress::GuiProgress},
    runner,
};

/// Form values after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormInput {
    pub url: String,
    pub limit: usize,
    pub out_path: String,
}

/// Checks the three form fields. `Err` carries the status line to show.
pub fn validate_form(form: &GuiState) -> Result<FormInput, String> {
    let url = form.url.trim();
    if url.is_empty() {
        return Err(s!("Enter a category URL"));
    }

    let limit_text = form.limit.trim();
    let limit = if limit_text.is_empty() {
        0
    } else {
        match limit_text.parse::<usize>() {
            Ok(n) if n <= MAX_LIMIT => n,
            _ => return Err(format!("Max products must be a number from 0 to {MAX_LIMIT}")),
        }
    };

    let out_path = form.out_path.trim();
    if out_path.is_empty() {
        return Err(s!("Enter an output file name"));
    }

    Ok(FormInput {
        url: s!(url),
        limit,
        out_path: s!(out_path),
    })
}

pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running() {
        return;
    }

    let input = match validate_form(&app.form) {
        Ok(i) => i,
        Err(msg) => {
            logw!("Form: {}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = app.form.save(&GuiState::default_path()) {
        logw!("GUI state: save failed: {}", e);
    }

    let mut opts = app.options.clone();
    opts.scrape.url = input.url;
    opts.scrape.limit = input.limit;
    opts.export.set_path(&input.out_path);

    logf!(
        "Scrape: Begin url={} limit={} out={}",
        opts.scrape.url,
        opts.scrape.limit,
        opts.export.out_path().display()
    );

    {
        let mut st = app.state();
        st.running = true;
        st.done = 0;
        st.total = 0;
        st.push_log("Scrape started…");
    }

    let shared = app.shared.clone();
    let ctx = ctx.clone();

    // → This is where the scrape happens ←
    thread::spawn(move || {
        let _reset = RunReset::new(shared.clone(), ctx.clone());
        let mut prog = GuiProgress::new(shared.clone(), ctx);
        let res = runner::run(&opts, Some(&mut prog));

        let mut st = lock(&shared);
        match res {
            Ok(summary) => {
                logf!("Scrape: OK rows={} pages={}", summary.products, summary.pages);
                st.push_log(format!("Scrape finished. File saved: {}", summary.written.display()));
                st.finished = Some(summary.dataset);
            }
            Err(e) => {
                loge!("Scrape: Error: {}", e);
                st.push_log(format!("Scrape error: {e}"));
            }
        }
        // Unlock before `_reset` takes the lock again
        drop(st);
    });
}

/// Puts the form back to idle when the worker ends, panic included.
struct RunReset {
    shared: Arc<Mutex<RunState>>,
    ctx: egui::Context,
}

impl RunReset {
    fn new(shared: Arc<Mutex<RunState>>, ctx: egui::Context) -> Self {
        Self { shared, ctx }
    }
}

impl Drop for RunReset {
    fn drop(&mut self) {
        let mut st = lock(&self.shared);
        if thread::panicking() {
            loge!("Scrape: worker panicked");
            st.push_log("Scrape aborted: internal error");
        }
        st.running = false;
        st.done = 0;
        st.total = 0;
        drop(st);
        self.ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state() -> Arc<Mutex<RunState>> {
        let mut st = RunState::default();
        st.running = true;
        st.done = 3;
        st.total = 10;
        Arc::new(Mutex::new(st))
    }

    #[test]
    fn panicking_worker_leaves_form_idle() {
        let shared = running_state();
        let worker_shared = shared.clone();
        let ctx = egui::Context::default();

        let joined = thread::spawn(move || {
            let _reset = RunReset::new(worker_shared, ctx);
            panic!("boom");
        })
        .join();
        assert!(joined.is_err());

        let st = lock(&shared);
        assert!(!st.running);
        assert_eq!((st.done, st.total), (0, 0));
        assert!(st.log.iter().any(|l| l.contains("aborted")));
    }

    #[test]
    fn finished_worker_leaves_form_idle() {
        let shared = running_state();
        drop(RunReset::new(shared.clone(), egui::Context::default()));

        let st = lock(&shared);
        assert!(!st.running);
        assert!(st.log.is_empty());
    }
}
