//! Mapping a continuous score to a feedback bucket.
//!
//! The thresholds are policy owned by the caller and injected here; the engine
//! ships no defaults.

use serde::{Deserialize, Serialize};

use crate::error::AssessError;

/// Discrete feedback shown to the learner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// At or above the correct threshold.
    Correct,
    /// At or above the partial threshold.
    Partial,
    /// Below both thresholds.
    Incorrect,
}

/// Score cut-offs for [`Feedback`] buckets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeedbackThresholds {
    correct: f64,
    partial: f64,
}

impl FeedbackThresholds {
    /// Validate and build a threshold pair.
    ///
    /// Both values must lie in `[0, 1]` and `partial` must not exceed `correct`.
    pub fn new(correct: f64, partial: f64) -> Result<Self, AssessError> {
        validate_threshold("correct", correct)?;
        validate_threshold("partial", partial)?;

        if partial > correct {
            return Err(AssessError::ThresholdOrder { correct, partial });
        }

        Ok(Self { correct, partial })
    }

    /// Minimum score for [`Feedback::Correct`].
    pub const fn correct(&self) -> f64 {
        self.correct
    }

    /// Minimum score for [`Feedback::Partial`].
    pub const fn partial(&self) -> f64 {
        self.partial
    }

    /// Bucket a score: at or above `correct` is correct, at or above
    /// `partial` is partial, anything lower is incorrect.
    pub fn classify(&self, score: f64) -> Feedback {
        if score >= self.correct {
            Feedback::Correct
        } else if score >= self.partial {
            Feedback::Partial
        } else {
            Feedback::Incorrect
        }
    }
}

fn validate_threshold(name: &'static str, value: f64) -> Result<(), AssessError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AssessError::InvalidThreshold { name, value })
    }
}
