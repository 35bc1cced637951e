// Application settings
// Loaded from ~/.config/ongap/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::layout::DataLayout;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Data directory names, resolved against the project root per run.
    #[serde(rename = "data.layout")]
    pub layout: DataLayout,

    /// Project root used when --root is not given.
    #[serde(rename = "data.defaultRoot")]
    pub default_root: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: DataLayout::default(),
            default_root: ".".into(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ongap");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            let settings = Self::default();
            settings.create_default_file();
            return settings;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                eprintln!("Error reading settings.json: {}", e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON, stripping // comment lines first.
    fn parse(contents: &str) -> Self {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        match serde_json::from_str(&cleaned) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error parsing settings.json: {}", e);
                eprintln!("Using default settings");
                Self::default()
            }
        }
    }

    /// Create default settings file with comments
    fn create_default_file(&self) {
        let path = Self::config_path();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error creating config directory: {}", e);
                return;
            }
        }

        let default_config = r#"{
    // Data directory names, resolved against the project root
    "data.layout": {
        "data_raw": "data_raw",
        "data_clean": "data_clean",
        "outputs": "outputs"
    },

    // Project root used when --root is not given
    "data.defaultRoot": "."
}
"#;

        if let Err(e) = fs::write(&path, default_config) {
            eprintln!("Error writing default settings.json: {}", e);
        }
    }
}
