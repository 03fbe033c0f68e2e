//! Host-loop preferences
//!
//! Settings steer the native loop around the simulation - they never feed
//! back into gameplay. Loaded from a JSON file named by the
//! `INTERSTELLAR_SETTINGS` environment variable, falling back to defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Outline every active hit region in the draw list
    pub debug_hitboxes: bool,
    /// Fixed seed; `None` draws one at startup
    pub seed: Option<u64>,
    /// Stop the demo loop after this many ticks
    pub max_ticks: Option<u64>,
    /// Log a progress line this often (in ticks)
    pub progress_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_hitboxes: false,
            seed: None,
            max_ticks: None,
            progress_interval: 600,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const ENV_VAR: &'static str = "INTERSTELLAR_SETTINGS";

    /// Load settings from the configured file, or fall back to defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {path}");
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings in {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read settings file {path}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_json() {
        let settings = Settings {
            debug_hitboxes: true,
            seed: Some(42),
            max_ticks: Some(1000),
            progress_interval: 60,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(42));
        assert!(back.debug_hitboxes);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: Settings = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(back.seed, Some(7));
        assert!(!back.debug_hitboxes);
        assert_eq!(back.progress_interval, 600);
    }
}
