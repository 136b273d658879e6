//! Training records: the immutable input of one workout.

use std::fmt;

/// One of the supported workout types.
///
/// The set is closed: every modality has a sensor code, a display label,
/// and a fixed number of positional parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Swimming,
    Running,
    SportsWalking,
}

impl Modality {
    /// All modalities, in the order their codes are reported.
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Resolve a sensor code (`SWM`, `RUN`, `WLK`).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// The sensor code for this modality.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// The label shown in training summaries.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Positional field names, in the order sensor data lists them.
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    /// How many parameters a package of this modality carries.
    pub const fn arity(self) -> usize {
        self.fields().len()
    }

    /// The codes of every modality, e.g. for diagnostics.
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.code()).collect()
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Modality-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running,

    SportsWalking {
        /// Athlete height in centimeters. Always positive.
        height: f64,
    },

    Swimming {
        /// Pool length in meters.
        length_pool: u32,

        /// Laps completed.
        count_pool: u32,
    },
}

impl Workout {
    pub const fn modality(&self) -> Modality {
        match self {
            Self::Running => Modality::Running,
            Self::SportsWalking { .. } => Modality::SportsWalking,
            Self::Swimming { .. } => Modality::Swimming,
        }
    }
}

/// One workout as read from the sensors.
///
/// Fields are private so a record can only come out of
/// [`Training::new`], which rejects values the formulas would divide by zero on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    action: u32,
    duration: f64,
    weight: f64,
    workout: Workout,
}

/// A field value outside the range the formulas accept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {field} {value}: {reason}")]
pub struct DomainError {
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl Training {
    /// Builds a record, checking every field against its domain.
    ///
    /// `duration`, `weight` and, for walking, `height` must be finite and
    /// strictly positive, and the metrics derived from them must be finite.
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        workout: Workout,
    ) -> Result<Self, DomainError> {
        positive("duration", duration)?;
        positive("weight", weight)?;
        if let Workout::SportsWalking { height } = workout {
            positive("height", height)?;
        }
        let training = Self {
            action,
            duration,
            weight,
            workout,
        };
        training.check_metrics()?;
        Ok(training)
    }

    /// Steps or strokes taken.
    pub const fn action(&self) -> u32 {
        self.action
    }

    /// Duration in hours.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Weight in kilograms.
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub const fn workout(&self) -> &Workout {
        &self.workout
    }

    pub const fn modality(&self) -> Modality {
        self.workout.modality()
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(DomainError {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}
