use std::fmt;

use serde::Serialize;

/// Computed metrics for one finished workout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    /// Human-readable summary line, every number with three decimals.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(duration: f64, distance: f64, speed: f64, calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Running".into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[test]
    fn get_message_renders_three_decimals() {
        let m = message(1.0, 9.75, 9.75, 699.75);
        assert_eq!(
            m.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn get_message_pads_and_rounds_regardless_of_magnitude() {
        let m = message(0.5, 0.0, 12345.6789, 0.00049);
        let line = m.get_message();
        assert!(line.contains("Длительность: 0.500 ч."));
        assert!(line.contains("Дистанция: 0.000 км"));
        assert!(line.contains("Ср. скорость: 12345.679 км/ч"));
        assert!(line.contains("Потрачено ккал: 0.000."));
    }

    #[test]
    fn serializes_all_fields() {
        let value = serde_json::to_value(message(1.0, 2.0, 3.0, 4.0)).expect("json");
        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["calories"], 4.0);
    }
}
