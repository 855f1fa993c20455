// src/config/state.rs
//
// Form values remembered between GUI sessions (.store/gui.toml).
// Best-effort: a missing or unreadable file just means defaults.

use std::{fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use super::consts::{DEFAULT_OUT_FILE, GUI_STATE_FILE, STORE_DIR};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiState {
    pub url: String,
    /// Kept as typed so a half-edited value survives a restart
    pub limit: String,
    pub out_path: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url: s!(),
            limit: s!("0"),
            out_path: s!(DEFAULT_OUT_FILE),
        }
    }
}

impl GuiState {
    pub fn default_path() -> PathBuf {
        PathBuf::from(STORE_DIR).join(GUI_STATE_FILE)
    }

    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&text) {
            Ok(state) => state,
            Err(e) => {
                logw!("GUI state: ignoring {} ({})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }
}
