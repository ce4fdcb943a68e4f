//! Environment-driven configuration.
//!
//! Variables are read with the `ASSESS_` prefix:
//!
//! | Variable                   | Default       |
//! |----------------------------|---------------|
//! | `ASSESS_STRICTNESS`        | `moderate`    |
//! | `ASSESS_CORRECT_THRESHOLD` | unset         |
//! | `ASSESS_PARTIAL_THRESHOLD` | unset         |
//! | `ASSESS_ENVIRONMENT`       | `development` |

use serde::{Deserialize, Deserializer};

use crate::{error::AssessError, feedback::FeedbackThresholds, strictness::Strictness};

const ENV_PREFIX: &str = "ASSESS_";

/// Deployment environment, selects the logging profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Pretty logs, engine at debug level.
    #[default]
    Development,
    /// JSON logs at info level.
    Production,
}

/// Just the `ASSESS_ENVIRONMENT` variable, so logging can start before the
/// rest of the configuration is parsed.
#[derive(Deserialize)]
struct EnvironmentOnly {
    #[serde(default)]
    environment: Environment,
}

impl Environment {
    /// Read `ASSESS_ENVIRONMENT` from the process environment.
    pub fn from_env() -> Result<Self, AssessError> {
        Self::from_vars(std::env::vars())
    }

    /// Read `ASSESS_ENVIRONMENT` from an explicit set of `(name, value)` pairs,
    /// ignoring every other variable.
    pub fn from_vars<I>(vars: I) -> Result<Self, AssessError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let only: EnvironmentOnly = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        Ok(only.environment)
    }

    /// Whether this is the development profile.
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Runtime settings for the engine and its driver.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssessConfig {
    /// Default strictness; unknown values fall back to moderate.
    #[serde(default, deserialize_with = "strictness_or_default")]
    pub strictness: Strictness,
    /// Minimum score for [`Feedback::Correct`](crate::Feedback::Correct).
    pub correct_threshold: Option<f64>,
    /// Minimum score for [`Feedback::Partial`](crate::Feedback::Partial).
    pub partial_threshold: Option<f64>,
    /// Deployment environment.
    #[serde(default)]
    pub environment: Environment,
}

impl AssessConfig {
    /// Read `ASSESS_*` variables from the process environment.
    pub fn from_env() -> Result<Self, AssessError> {
        Self::from_vars(std::env::vars())
    }

    /// Build from an explicit set of `(name, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, AssessError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    /// The injected feedback policy, if both thresholds are configured.
    pub fn feedback_thresholds(&self) -> Result<Option<FeedbackThresholds>, AssessError> {
        match (self.correct_threshold, self.partial_threshold) {
            (Some(correct), Some(partial)) => FeedbackThresholds::new(correct, partial).map(Some),
            (None, None) => Ok(None),
            _ => {
                tracing::warn!(
                    correct = ?self.correct_threshold,
                    partial = ?self.partial_threshold,
                    "only one feedback threshold configured, feedback disabled"
                );
                Ok(None)
            }
        }
    }
}

fn strictness_or_default<'de, D>(deserializer: D) -> Result<Strictness, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Strictness::parse_or_default(&raw))
}
