//! Info message: the rendered outcome of one workout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Computed metrics for one workout, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoMessage {
    pub training_type: String,

    /// Hours.
    pub duration: f64,

    /// Kilometers.
    pub distance: f64,

    /// Kilometers per hour.
    pub speed: f64,

    /// Kilocalories.
    pub calories: f64,
}

impl InfoMessage {
    /// The one-line summary shown to the athlete.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
