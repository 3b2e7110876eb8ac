//! Error types for the fallible edges of the simulation: loading a config
//! and decoding a saved run. Tick processing itself never fails.

use std::fmt;

/// Top-level error enum for the shooter core.
#[derive(Debug)]
pub enum SimError {
    /// A config or save file could not be read.
    Io {
        path: String,
        source: std::io::Error,
    },

    /// JSON text did not deserialize into a config.
    ConfigParse(serde_json::Error),

    /// A config field is outside its accepted range.
    InvalidConfig {
        /// Field name (for logging).
        field: &'static str,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// Save data did not deserialize.
    SaveDecode(serde_json::Error),

    /// Save data could not be serialized.
    SaveEncode(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io { path, source } => write!(f, "cannot read '{}': {}", path, source),
            SimError::ConfigParse(err) => write!(f, "malformed config: {}", err),
            SimError::InvalidConfig { field, expected } => {
                write!(f, "config field '{}' out of range, expected {}", field, expected)
            }
            SimError::SaveDecode(err) => write!(f, "malformed save data: {}", err),
            SimError::SaveEncode(err) => write!(f, "cannot encode save data: {}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io { source, .. } => Some(source),
            SimError::ConfigParse(err) | SimError::SaveDecode(err) | SimError::SaveEncode(err) => {
                Some(err)
            }
            SimError::InvalidConfig { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;
