// Catalog configuration: dispatch policy for the notification registry and
// telemetry settings for the demo binaries.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::behavioral::observer::DispatchPolicy;
use crate::error::CatalogError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub observer: ObserverConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub dispatch_policy: DispatchPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set.
    pub filter: String,
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "pattern_catalog=info".to_string(),
            ansi: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
