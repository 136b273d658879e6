//! Sensor packages: a workout code plus positional readings.
//!
//! [`read_package`] is the single entry point that turns raw readings into
//! a [`Training`]. Failures are always returned as [`PackageError`]; nothing
//! is printed and nothing is silently skipped here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{DomainError, Modality, Training, Workout};

/// Errors that can occur while reading a sensor package.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageError {
    #[error("unknown workout type '{code}'; available types: {known:?}")]
    UnknownWorkout {
        code: String,
        known: Vec<&'static str>,
    },

    #[error("{modality} expects {expected} parameters, got {actual}")]
    ParameterCount {
        modality: Modality,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type Result<T> = core::result::Result<T, PackageError>;

/// One package as delivered by the sensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout code: `SWM`, `RUN` or `WLK`.
    pub workout: String,

    /// Readings in the order the workout type declares its fields.
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout: workout.into(),
            data: data.into(),
        }
    }

    /// Dispatches this package through [`read_package`].
    pub fn read(&self) -> Result<Training> {
        read_package(&self.workout, &self.data)
    }
}

/// Packages from the original sensor demo, one per workout type.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Builds the training record for a workout code from positional readings.
///
/// Readings are assigned in declaration order:
/// `action, duration, weight` followed by `height` for walking or
/// `length_pool, count_pool` for swimming. The count must match exactly.
pub fn read_package(code: &str, data: &[f64]) -> Result<Training> {
    let modality = Modality::from_code(code).ok_or_else(|| PackageError::UnknownWorkout {
        code: code.to_string(),
        known: Modality::codes(),
    })?;

    if data.len() != modality.arity() {
        return Err(PackageError::ParameterCount {
            modality,
            expected: modality.arity(),
            actual: data.len(),
        });
    }

    let action = count("action", data[0])?;
    let duration = data[1];
    let weight = data[2];

    let workout = match modality {
        Modality::Running => Workout::Running,
        Modality::SportsWalking => Workout::SportsWalking { height: data[3] },
        Modality::Swimming => Workout::Swimming {
            length_pool: count("length_pool", data[3])?,
            count_pool: count("count_pool", data[4])?,
        },
    };

    let training = Training::new(action, duration, weight, workout)?;
    debug!(code, ?training, "read package");
    Ok(training)
}

/// Converts a reading that must be a whole, non-negative count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(field: &'static str, value: f64) -> core::result::Result<u32, DomainError> {
    let reason = if !value.is_finite() {
        "must be a finite number"
    } else if value < 0.0 {
        "must not be negative"
    } else if value.fract() != 0.0 {
        "must be a whole number"
    } else if value > f64::from(u32::MAX) {
        "is too large"
    } else {
        return Ok(value as u32);
    };
    Err(DomainError {
        field,
        value,
        reason,
    })
}
