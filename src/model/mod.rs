//! Core data model for Stride.
//!
//! Training records as read from the sensors, and the summary
//! message computed from them.

mod message;
mod training;

pub use message::InfoMessage;
pub use training::{DomainError, Modality, Training, Workout};
