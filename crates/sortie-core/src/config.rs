//! Configuration for starting a new run.
//!
//! Every field falls back to its default when missing, so a JSON file only
//! needs the keys it wants to override:
//!
//! ```json
//! { "seed": 7, "starting_area": 4 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{AREA_COUNT, DEFAULT_LIVES, MAIN_LEVEL_MAX};
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same run.
    pub seed: u64,
    pub starting_lives: u32,
    /// 1-based area to start in.
    pub starting_area: u8,
    pub starting_main_level: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_lives: DEFAULT_LIVES,
            starting_area: 1,
            starting_main_level: 0,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(text).map_err(SimError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.starting_lives == 0 {
            return Err(SimError::InvalidConfig {
                field: "starting_lives",
                expected: ">= 1",
            });
        }
        if self.starting_area == 0 || self.starting_area > AREA_COUNT {
            return Err(SimError::InvalidConfig {
                field: "starting_area",
                expected: "1..=12",
            });
        }
        if self.starting_main_level > MAIN_LEVEL_MAX {
            return Err(SimError::InvalidConfig {
                field: "starting_main_level",
                expected: "0..=30",
            });
        }
        Ok(())
    }
}
