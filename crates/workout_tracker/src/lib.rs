//! Workout statistics from raw sensor packages.
//!
//! A sensor package is a workout code (`"SWM"`, `"RUN"`, `"WLK"`) plus the
//! positional readings for that activity. [`create`] turns a package into a
//! [`Training`] calculator, and [`Training::show_training_info`] produces the
//! [`InfoMessage`] that gets printed.

use thiserror::Error;

pub mod config;
pub mod message;
pub mod package;
pub mod runner;
pub mod training;

pub use message::InfoMessage;
pub use package::{SensorPackage, WorkoutCode, create, read_package};
pub use runner::{OutputFormat, run, sample_packages};
pub use training::{Running, SportsWalking, Swimming, Training};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("{code} expects {expected} values, got {actual}")]
    Arity {
        code: String,
        expected: usize,
        actual: usize,
    },
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
    #[error("duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
}
