use std::io::Write;
use std::str::FromStr;

use crate::TrackerError;
use crate::package::{SensorPackage, read_package};

/// How each summary line is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TrackerError::Config(format!(
                "unsupported output format: {other}"
            ))),
        }
    }
}

/// Packages processed when no input file is configured.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Summarize every package in order, one line each. Stops at the first
/// package that cannot be dispatched; lines already written stay written.
pub fn run<W: Write>(
    packages: &[SensorPackage],
    format: OutputFormat,
    out: &mut W,
) -> Result<usize, TrackerError> {
    for (index, package) in packages.iter().enumerate() {
        let training = read_package(package).inspect_err(|e| {
            tracing::error!(index, workout_type = %package.workout_type, "package rejected: {e}");
        })?;
        let info = training.show_training_info();
        match format {
            OutputFormat::Text => writeln!(out, "{info}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &info)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    tracing::info!(count = packages.len(), "processed sensor packages");
    Ok(packages.len())
}
