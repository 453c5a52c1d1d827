//! Game Configuration
//!
//! All tuning for one session in a single JSON-loadable struct. Every
//! section and field has a default, so a file only needs the values it
//! changes. The `bindings` section lists only the actions to rebind; `null`
//! unbinds an action:
//!
//! ```json
//! {
//!   "locomotion": { "sprint_speed": 14.0 },
//!   "weapon": { "max_range": 80.0 },
//!   "bindings": { "Slide": "C" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::WeaponConfig;
use crate::error::{ConfigError, require_positive};
use crate::input::KeyBindings;
use crate::player::LocomotionConfig;

/// Session tuning: locomotion, weapon, enemies and key bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub locomotion: LocomotionConfig,
    pub weapon: WeaponConfig,
    /// Hit points every spawned enemy starts with
    pub enemy_health: f32,
    /// Action to key table. Actions missing from the file keep their default key.
    pub bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            locomotion: LocomotionConfig::default(),
            weapon: WeaponConfig::default(),
            enemy_health: 100.0,
            bindings: KeyBindings::new(),
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty JSON for writing a template file.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locomotion.validate()?;
        self.weapon.validate()?;
        require_positive("enemy_health", self.enemy_health)?;
        Ok(())
    }
}
