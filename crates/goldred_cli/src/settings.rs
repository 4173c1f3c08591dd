use serde::{Deserialize, Serialize};
use std::fs;

const SETTINGS_FILE: &str = "goldred_settings.json";

/// Display preferences, persisted next to the working directory so a
/// terminal without unicode or color support only needs configuring once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub unicode_pieces: bool,
    pub colored_output: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            unicode_pieces: true,
            colored_output: true,
        }
    }
}

impl DisplaySettings {
    /// Load saved settings, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        match fs::read_to_string(SETTINGS_FILE) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => DisplaySettings::default(),
        }
    }

    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(text) => {
                if let Err(e) = fs::write(SETTINGS_FILE, text) {
                    eprintln!("Warning: failed to save settings: {e}");
                }
            }
            Err(e) => eprintln!("Warning: failed to encode settings: {e}"),
        }
    }
}
