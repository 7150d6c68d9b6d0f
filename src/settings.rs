use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";
pub const STORAGE_FILE: &str = "storage.json";
const APP_DIR: &str = "start_page";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Location of the key-value storage file. If `None`, a file in the
    /// platform data directory is used.
    #[serde(default)]
    pub storage_path: Option<String>,
    /// Initial window size.
    #[serde(default = "default_window_size")]
    pub window_size: (i32, i32),
    /// Show toast notifications when something goes wrong.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Number of shortcut tiles per row.
    #[serde(default = "default_tile_columns")]
    pub tile_columns: usize,
}

fn default_window_size() -> (i32, i32) {
    (720, 480)
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_tile_columns() -> usize {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            storage_path: None,
            window_size: default_window_size(),
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            tile_columns: default_tile_columns(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolved location of the storage file.
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = self.storage_path.as_deref().filter(|p| !p.trim().is_empty()) {
            return PathBuf::from(path);
        }
        dirs_next::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(STORAGE_FILE)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn tile_columns(&self) -> usize {
        if self.tile_columns == 0 {
            tracing::warn!("tile_columns must be at least 1; using default");
            return default_tile_columns();
        }
        self.tile_columns
    }
}
