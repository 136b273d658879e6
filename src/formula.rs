//! Distance, speed and calorie formulas per workout type.
//!
//! Coefficients are calibration constants and are reproduced as given.
//! Every function here is pure: the same record always yields the same numbers.

use tracing::debug;

use crate::model::{DomainError, InfoMessage, Modality, Training, Workout};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_HOUR: f64 = 60.0;

/// Meters covered per step.
const LEN_STEP: f64 = 0.65;

/// Meters covered per stroke.
const LEN_STROKE: f64 = 1.38;

mod running {
    pub(super) const COEFF_CALORIE_1: f64 = 18.0;
    pub(super) const COEFF_CALORIE_2: f64 = 20.0;
}

mod walking {
    pub(super) const COEFF_CALORIE_1: f64 = 0.035;
    pub(super) const COEFF_CALORIE_2: f64 = 0.029;
}

mod swimming {
    pub(super) const COEFF_CALORIE_1: f64 = 1.1;
    pub(super) const COEFF_CALORIE_2: f64 = 2.0;
}

/// Distance covered by one unit of action for a modality, in meters.
pub const fn step_length(modality: Modality) -> f64 {
    match modality {
        Modality::Swimming => LEN_STROKE,
        Modality::Running | Modality::SportsWalking => LEN_STEP,
    }
}

impl Training {
    /// Distance in kilometers, from the action count.
    pub fn distance(&self) -> f64 {
        f64::from(self.action()) * step_length(self.modality()) / M_IN_KM
    }

    /// Mean speed in km/h.
    ///
    /// Swimming measures speed from pool laps, not strokes, so its speed
    /// is unrelated to [`Training::distance`].
    pub fn mean_speed(&self) -> f64 {
        match *self.workout() {
            Workout::Swimming {
                length_pool,
                count_pool,
            } => {
                let meters = u64::from(length_pool) * u64::from(count_pool);
                meters as f64 / M_IN_KM / self.duration()
            }
            Workout::Running | Workout::SportsWalking { .. } => self.distance() / self.duration(),
        }
    }

    /// Kilocalories spent.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        let duration_in_min = self.duration() * MIN_IN_HOUR;
        let weight = self.weight();
        match *self.workout() {
            Workout::Running => {
                (running::COEFF_CALORIE_1 * speed - running::COEFF_CALORIE_2) * weight / M_IN_KM
                    * duration_in_min
            }
            // Speed² is floor-divided by height, as calibrated.
            Workout::SportsWalking { height } => {
                (walking::COEFF_CALORIE_1 * weight
                    + floor_div(speed.powi(2), height) * walking::COEFF_CALORIE_2 * weight)
                    * duration_in_min
            }
            Workout::Swimming { .. } => {
                (speed + swimming::COEFF_CALORIE_1) * swimming::COEFF_CALORIE_2 * weight
            }
        }
    }

    /// Rejects readings whose metrics overflow to infinity or `NaN`.
    ///
    /// Speed and its square depend on the duration divisor; calories
    /// additionally scale with weight.
    pub(crate) fn check_metrics(&self) -> Result<(), DomainError> {
        let speed = self.mean_speed();
        if !speed.is_finite() || !speed.powi(2).is_finite() {
            return Err(DomainError {
                field: "duration",
                value: self.duration(),
                reason: "too small for the given readings",
            });
        }
        if !self.spent_calories().is_finite() {
            return Err(DomainError {
                field: "weight",
                value: self.weight(),
                reason: "too large for the given readings",
            });
        }
        Ok(())
    }

    /// Computes every metric and bundles them for display.
    pub fn show_training_info(&self) -> InfoMessage {
        let info = InfoMessage {
            training_type: self.modality().label().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        };
        debug!(
            training_type = %info.training_type,
            distance = info.distance,
            speed = info.speed,
            calories = info.calories,
            "computed training info"
        );
        info
    }
}

/// Floored quotient of a non-negative dividend by a positive divisor.
///
/// Taken from the exact remainder rather than `(a / b).floor()`, which can
/// round up to the next integer when the quotient lands just below it.
fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    ((dividend - rem) / divisor).round()
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

    fn swimming() -> Training {
        Training::new(
            720,
            1.0,
            80.0,
            Workout::Swimming {
                length_pool: 25,
                count_pool: 40,
            },
        )
        .unwrap()
    }

    fn running() -> Training {
        Training::new(15000, 1.0, 75.0, Workout::Running).unwrap()
    }

    fn walking() -> Training {
        Training::new(9000, 1.0, 75.0, Workout::SportsWalking { height: 180.0 }).unwrap()
    }

    #[test]
    fn swimming_metrics() {
        let training = swimming();
        assert_close(training.distance(), 0.9936);
        assert_close(training.mean_speed(), 1.0);
        assert_close(training.spent_calories(), 336.0);
    }

    #[test]
    fn swimming_speed_ignores_strokes() {
        let few = Training::new(
            1,
            2.0,
            80.0,
            Workout::Swimming {
                length_pool: 50,
                count_pool: 20,
            },
        )
        .unwrap();
        assert_close(few.mean_speed(), 0.5);
        assert_close(few.distance(), 0.00138);
    }

    #[test]
    fn running_metrics() {
        let training = running();
        assert_close(training.distance(), 9.75);
        assert_close(training.mean_speed(), 9.75);
        assert_close(training.spent_calories(), 699.75);
    }

    #[test]
    fn walking_metrics() {
        let training = walking();
        assert_close(training.distance(), 5.85);
        assert_close(training.mean_speed(), 5.85);
        assert_close(training.spent_calories(), 157.5);
    }

    #[test]
    fn walking_divides_speed_by_height_with_floor() {
        // 20 km/h over 1h: speed² = 400, 400 // 180 = 2 (real division would give 2.22).
        let training = Training::new(
            30_770,
            1.0,
            60.0,
            Workout::SportsWalking { height: 180.0 },
        )
        .unwrap();
        let speed = training.mean_speed();
        let floored = (speed * speed / 180.0).floor();
        assert_close(floored, 2.0);
        let expected = (0.035 * 60.0 + floored * 0.029 * 60.0) * 60.0;
        assert_close(training.spent_calories(), expected);
    }

    #[test]
    fn floor_div_truncates_towards_zero_for_positive_operands() {
        assert_close(floor_div(34.2225, 180.0), 0.0);
        assert_close(floor_div(400.0, 180.0), 2.0);
        assert_close(floor_div(360.0, 180.0), 2.0);
        assert_close(floor_div(0.0, 180.0), 0.0);
    }

    #[test]
    fn running_calories_scale_with_duration() {
        let training = Training::new(15000, 2.0, 75.0, Workout::Running).unwrap();
        assert_close(training.mean_speed(), 4.875);
        let expected = (18.0 * 4.875 - 20.0) * 75.0 / 1000.0 * 120.0;
        assert_close(training.spent_calories(), expected);
    }

    #[test]
    fn formulas_are_idempotent() {
        for training in [swimming(), running(), walking()] {
            assert_eq!(training.distance().to_bits(), training.distance().to_bits());
            assert_eq!(training.mean_speed().to_bits(), training.mean_speed().to_bits());
            assert_eq!(
                training.spent_calories().to_bits(),
                training.spent_calories().to_bits()
            );
            assert_eq!(training.show_training_info(), training.show_training_info());
        }
    }

    #[test]
    fn distance_and_speed_are_non_negative() {
        let records = [
            Training::new(0, 0.5, 60.0, Workout::Running).unwrap(),
            Training::new(0, 0.5, 60.0, Workout::SportsWalking { height: 170.0 }).unwrap(),
            Training::new(
                0,
                0.5,
                60.0,
                Workout::Swimming {
                    length_pool: 0,
                    count_pool: 0,
                },
            )
            .unwrap(),
            swimming(),
            running(),
            walking(),
        ];
        for training in records {
            assert!(training.distance() >= 0.0);
            assert!(training.mean_speed() >= 0.0);
        }
    }

    #[test]
    fn step_lengths_per_modality() {
        assert_close(step_length(Modality::Running), 0.65);
        assert_close(step_length(Modality::SportsWalking), 0.65);
        assert_close(step_length(Modality::Swimming), 1.38);
    }

    #[test]
    fn show_training_info_renders_expected_summaries() {
        assert_eq!(
            swimming().show_training_info().get_message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
        assert_eq!(
            running().show_training_info().get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
        assert_eq!(
            walking().show_training_info().get_message(),
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
        );
    }
}
