use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "galerie.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gallery_dir: String,
    pub grid_columns: usize,
    pub thumbnail_edge: u32,
    pub preview_edge: u32,
    /// Decorative footer line under the grid; spacing above it relaxes
    /// when the visible set is empty. Absent means no footer at all.
    pub caption: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gallery_dir: "gallery".to_string(),
            grid_columns: 3,
            thumbnail_edge: 320,
            preview_edge: 2048,
            caption: None,
        }
    }
}

impl AppConfig {
    /// Loads the config file if present; a missing file means defaults, an
    /// unreadable or malformed file is an error.
    pub fn load(path: &str) -> Result<Self, String> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .map_err(|error| format!("failed to read config {path}: {error}"))?;
        serde_json::from_str(&raw)
            .map_err(|error| format!("failed to parse config {path}: {error}"))
    }
}
