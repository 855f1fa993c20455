// src/progress.rs
/// Lightweight progress reporting used by the scrape loop and the runner.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of products requested (only when a limit is set).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per collected product with the running count.
    fn item_done(&mut self, _done: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Lend an optional sink to a callee and keep using it afterwards.
pub fn reborrow<'s>(progress: &'s mut Option<&mut dyn Progress>) -> Option<&'s mut dyn Progress> {
    match progress {
        Some(p) => Some(&mut **p),
        None => None,
    }
}
