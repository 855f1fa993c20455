// src/log.rs
//
// Sinks for the logf!/logd!/logw!/loge! macros (see src/macros.rs).
// Everything lands in .store/debug.log; the CLI also echoes to stderr.

use std::{fs, io, path::PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
///
/// The returned guard flushes the file writer on drop, so hold it for the
/// lifetime of the process.
pub fn init(echo: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match fs::create_dir_all(STORE_DIR) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(STORE_DIR, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: no log file ({}): {}", log_path().display(), e);
            (None, None)
        }
    };

    let stderr_layer = echo.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}
