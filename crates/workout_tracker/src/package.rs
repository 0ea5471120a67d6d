//! Sensor packages and the dispatcher that turns them into calculators.
//!
//! Positional sensor data is bound to a named per-activity input struct before
//! any calculator is built, so arity and value problems surface as
//! [`TrackerError`] variants instead of odd numbers further down.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TrackerError;
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Activity selected by a sensor package's workout code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::SportsWalking,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }

    /// Number of positional values a package of this type carries.
    pub const fn arity(self) -> usize {
        match self {
            WorkoutCode::Swimming => 5,
            WorkoutCode::Running => 3,
            WorkoutCode::SportsWalking => 4,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| TrackerError::UnknownWorkoutType(s.to_string()))
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(workout code, positional data)` pair as read from the sensors.
///
/// Deserializes from either `{"workout_type": "RUN", "data": [...]}` or the
/// compact `["RUN", [...]]` form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunningInput {
    pub steps: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalkingInput {
    pub steps: u32,
    pub duration: f64,
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwimmingInput {
    pub strokes: u32,
    pub duration: f64,
    pub weight: f64,
    /// Meters.
    pub pool_length: f64,
    /// Laps swum.
    pub pool_count: u32,
}

impl TryFrom<&[f64]> for RunningInput {
    type Error = TrackerError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        let [steps, duration, weight] = positional::<3>(WorkoutCode::Running, data)?;
        Ok(Self {
            steps: count("steps", steps)?,
            duration: hours(duration)?,
            weight: non_negative("weight", weight)?,
        })
    }
}

impl TryFrom<&[f64]> for WalkingInput {
    type Error = TrackerError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        let [steps, duration, weight, height] = positional::<4>(WorkoutCode::SportsWalking, data)?;
        Ok(Self {
            steps: count("steps", steps)?,
            duration: hours(duration)?,
            weight: non_negative("weight", weight)?,
            height: positive("height", height)?,
        })
    }
}

impl TryFrom<&[f64]> for SwimmingInput {
    type Error = TrackerError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        let [strokes, duration, weight, pool_length, pool_count] =
            positional::<5>(WorkoutCode::Swimming, data)?;
        Ok(Self {
            strokes: count("strokes", strokes)?,
            duration: hours(duration)?,
            weight: non_negative("weight", weight)?,
            pool_length: non_negative("pool_length", pool_length)?,
            pool_count: count("pool_count", pool_count)?,
        })
    }
}

/// Build the calculator for `workout_code` from its positional sensor data.
pub fn create(workout_code: &str, data: &[f64]) -> Result<Box<dyn Training>, TrackerError> {
    let code: WorkoutCode = workout_code.parse().inspect_err(|_| {
        tracing::warn!(workout_code, "rejected unknown workout type");
    })?;
    tracing::debug!(%code, values = data.len(), "dispatching sensor package");
    let training: Box<dyn Training> = match code {
        WorkoutCode::Swimming => Box::new(Swimming::new(SwimmingInput::try_from(data)?)),
        WorkoutCode::Running => Box::new(Running::new(RunningInput::try_from(data)?)),
        WorkoutCode::SportsWalking => {
            Box::new(SportsWalking::new(WalkingInput::try_from(data)?))
        }
    };
    Ok(training)
}

pub fn read_package(package: &SensorPackage) -> Result<Box<dyn Training>, TrackerError> {
    create(&package.workout_type, &package.data)
}

fn positional<const N: usize>(code: WorkoutCode, data: &[f64]) -> Result<[f64; N], TrackerError> {
    <[f64; N]>::try_from(data).map_err(|_| TrackerError::Arity {
        code: code.to_string(),
        expected: code.arity(),
        actual: data.len(),
    })
}

fn count(field: &'static str, value: f64) -> Result<u32, TrackerError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrackerError::InvalidValue { field, value })
    }
}

fn hours(value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::InvalidDuration(value))
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::InvalidValue { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::InvalidValue { field, value })
    }
}
