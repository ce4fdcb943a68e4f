//! Engine error type.

use thiserror::Error;

/// Errors raised at the configurable edges of the engine.
///
/// Scoring itself is total and never returns one of these.
#[derive(Error, Debug)]
pub enum AssessError {
    /// A strictness literal outside `lenient`, `moderate`, `strict`.
    #[error("Unknown strictness level: '{0}'. Must be one of 'lenient', 'moderate', 'strict'")]
    UnknownStrictness(String),
    /// A feedback threshold outside `[0, 1]`.
    #[error("Invalid {name} threshold: {value}. Must be a number between 0 and 1")]
    InvalidThreshold {
        /// `correct` or `partial`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `partial` above `correct`.
    #[error("Partial threshold {partial} must not exceed correct threshold {correct}")]
    ThresholdOrder {
        /// Configured correct threshold.
        correct: f64,
        /// Configured partial threshold.
        partial: f64,
    },
    /// Malformed `ASSESS_*` environment variable.
    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),
}
