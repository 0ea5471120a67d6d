//! Per-activity calculators.
//!
//! Every activity shares the step-based distance and the distance/duration
//! mean speed; each one supplies its own calorie formula. Swimming also
//! replaces the step length and derives speed from pool geometry.

use std::fmt;

use crate::message::InfoMessage;
use crate::package::{RunningInput, SwimmingInput, WalkingInput};

/// Meters covered by one running or walking step.
pub const LEN_STEP: f64 = 0.65;
/// Meters covered by one swimming stroke.
pub const LEN_STROKE: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

pub trait Training: fmt::Debug {
    /// Name shown in the summary line.
    fn training_type(&self) -> &'static str;

    /// Raw count of steps or strokes.
    fn action(&self) -> u32;

    /// Hours.
    fn duration(&self) -> f64;

    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn get_distance(&self) -> f64 {
        f64::from(self.action()) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h over the whole workout.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.duration()
    }

    fn get_spent_calories(&self) -> f64;

    fn workout_time_min(&self) -> f64 {
        self.duration() * MIN_IN_H
    }

    fn show_training_info(&self) -> InfoMessage {
        let info = InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.duration(),
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        };
        tracing::debug!(
            training_type = %info.training_type,
            distance = info.distance,
            speed = info.speed,
            calories = info.calories,
            "workout summarized"
        );
        info
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    input: RunningInput,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(input: RunningInput) -> Self {
        Self { input }
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.input.steps
    }

    fn duration(&self) -> f64 {
        self.input.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.get_mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.input.weight
            / M_IN_KM
            * self.workout_time_min()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    input: WalkingInput,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(input: WalkingInput) -> Self {
        Self { input }
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> u32 {
        self.input.steps
    }

    fn duration(&self) -> f64 {
        self.input.duration
    }

    // Speed squared over height (cm) is floor-divided, so for realistic inputs
    // the second term usually vanishes.
    fn get_spent_calories(&self) -> f64 {
        let weight = self.input.weight;
        let speed_term = floor_div(self.get_mean_speed().powi(2), self.input.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.workout_time_min()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    input: SwimmingInput,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_MULTIPLIER: f64 = 2.0;

    pub fn new(input: SwimmingInput) -> Self {
        Self { input }
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.input.strokes
    }

    fn duration(&self) -> f64 {
        self.input.duration
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    /// Pool length times laps; stroke distance is not used here.
    fn get_mean_speed(&self) -> f64 {
        self.input.pool_length * f64::from(self.input.pool_count) / M_IN_KM / self.input.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_MULTIPLIER
            * self.input.weight
    }
}

/// Floor division that derives the quotient from the floating remainder
/// rather than flooring `lhs / rhs`, which can round up across an integer
/// boundary (`floor(1.0 / 0.1)` is 10, this returns 9).
pub(crate) fn floor_div(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && (rhs < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn running(steps: u32, duration: f64, weight: f64) -> Running {
        Running::new(RunningInput {
            steps,
            duration,
            weight,
        })
    }

    #[test]
    fn running_metrics() {
        let r = running(15000, 1.0, 75.0);
        assert_close(r.get_distance(), 9.75);
        assert_close(r.get_mean_speed(), 9.75);
        assert_close(r.get_spent_calories(), 699.75);
    }

    #[test]
    fn running_speed_scales_with_duration() {
        let r = running(15000, 2.0, 75.0);
        assert_close(r.get_distance(), 9.75);
        assert_close(r.get_mean_speed(), 4.875);
    }

    #[test]
    fn walking_floor_term_vanishes_below_height() {
        let w = SportsWalking::new(WalkingInput {
            steps: 9000,
            duration: 1.0,
            weight: 75.0,
            height: 180.0,
        });
        assert_close(w.get_distance(), 5.85);
        assert_close(w.get_spent_calories(), 157.5);
    }

    #[test]
    fn walking_floor_term_counts_whole_multiples() {
        // 30000 steps in 1h -> 19.5 km/h, 380.25 / 180 floors to 2
        let w = SportsWalking::new(WalkingInput {
            steps: 30000,
            duration: 1.0,
            weight: 75.0,
            height: 180.0,
        });
        let expected = (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0;
        assert_close(w.get_spent_calories(), expected);
    }

    #[test]
    fn swimming_speed_ignores_stroke_distance() {
        let s = Swimming::new(SwimmingInput {
            strokes: 720,
            duration: 1.0,
            weight: 80.0,
            pool_length: 25.0,
            pool_count: 40,
        });
        assert_close(s.get_distance(), 0.9936);
        assert_close(s.get_mean_speed(), 1.0);
        assert_close(s.get_spent_calories(), 336.0);
    }

    #[test]
    fn show_training_info_is_repeatable() {
        let r = running(12000, 1.5, 70.0);
        let first = r.show_training_info();
        assert_eq!(first, r.show_training_info());
        assert_eq!(first.training_type, "Running");
        assert_close(first.duration, 1.5);
    }

    #[test]
    fn floor_div_matches_remainder_based_quotient() {
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
    }
}
