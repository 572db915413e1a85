use crate::params::{Field, RateClass};
use crate::section::Part;
use thiserror::Error;

/// An effect cannot be attached: a required element is absent or the
/// tuning would not converge.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("section is missing required element: {0}")]
    MissingElement(Part),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

/// Convergence tuning that would overshoot or never settle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{class:?} rate {rate} must lie in (0, 1]")]
    RateOutOfRange { class: RateClass, rate: f32 },
    #[error("settle tolerance {0} must be positive and finite")]
    Tolerance(f32),
}

/// A timeline segment that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("{field:?}: segment start {start} must be before end {end}")]
    EmptySegment { field: Field, start: f32, end: f32 },
    #[error("{field:?}: segment [{start}, {end}] lies outside progress range [0, 1]")]
    OutOfRange { field: Field, start: f32, end: f32 },
    #[error("{field:?}: segment values must be finite")]
    NonFinite { field: Field },
}
