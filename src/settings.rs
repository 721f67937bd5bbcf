//! Board preferences
//!
//! Persisted separately from saved boards in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::KeyValueStorage;

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Generations per second (1-10)
    pub speed: u8,
    /// Cell edge length in CSS pixels
    pub cell_size: u32,
    /// Fraction of cells alive after randomize (0.0 - 1.0)
    pub random_density: f64,
    /// Draw faint lines between cells
    pub grid_lines: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            cell_size: DEFAULT_CELL_SIZE,
            random_density: DEFAULT_RANDOM_DENSITY,
            grid_lines: true,
        }
    }
}

impl Settings {
    /// Clamp every field into its valid range
    pub fn sanitized(mut self) -> Self {
        self.speed = crate::clamp_speed(self.speed);
        self.cell_size = self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        self.random_density = if self.random_density.is_finite() {
            self.random_density.clamp(0.0, 1.0)
        } else {
            DEFAULT_RANDOM_DENSITY
        };
        self
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load<S: KeyValueStorage>(storage: &S) -> Self {
        match storage.get_item(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings
    pub fn save<S: KeyValueStorage>(&self, storage: &mut S) -> crate::Result<()> {
        let json = serde_json::to_string(self)?;
        storage.set_item(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
