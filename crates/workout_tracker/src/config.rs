use std::path::PathBuf;

use crate::TrackerError;
use crate::package::SensorPackage;
use crate::runner::{OutputFormat, sample_packages};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// `tracing` filter directive.
    pub log_level: String,
    /// JSON array of sensor packages; the built-in samples when unset.
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            packages_path: None,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Read configuration through `get` instead of the process environment,
    /// so tests can supply values without touching global state.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, TrackerError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_level = get("WORKOUT_TRACKER_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "warn".into());
        let packages_path = get("WORKOUT_TRACKER_PACKAGES")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let output = match get("WORKOUT_TRACKER_OUTPUT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self {
            log_level,
            packages_path,
            output,
        })
    }

    /// Packages to process: the configured file, or the built-in samples.
    pub fn load_packages(&self) -> Result<Vec<SensorPackage>, TrackerError> {
        let Some(path) = &self.packages_path else {
            return Ok(sample_packages());
        };
        tracing::debug!(path = %path.display(), "reading sensor packages");
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
