//! Strictness levels and their weighting profiles.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AssessError;

/// How heavily literal wording weighs against meaning in the final score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Meaning first; amplifies the score by 1.3.
    Lenient,
    /// Balanced weights, no multiplier.
    #[default]
    Moderate,
    /// Wording first; damps the score by 0.8.
    Strict,
}

/// Component weights applied to the three sub-scores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    /// Weight of the content-word similarity.
    pub semantic: f64,
    /// Weight of the word alignment score.
    pub word: f64,
    /// Weight of the character edit similarity.
    pub edit: f64,
}

impl Strictness {
    /// All levels, from most to least forgiving.
    pub const ALL: [Self; 3] = [Self::Lenient, Self::Moderate, Self::Strict];

    /// Weighting profile for this level.
    ///
    /// | strictness | semantic | word-based | edit |
    /// |------------|----------|------------|------|
    /// | lenient    | 0.6      | 0.3        | 0.1  |
    /// | moderate   | 0.4      | 0.4        | 0.2  |
    /// | strict     | 0.2      | 0.5        | 0.3  |
    pub const fn weights(self) -> Weights {
        match self {
            Self::Lenient => Weights {
                semantic: 0.6,
                word: 0.3,
                edit: 0.1,
            },
            Self::Moderate => Weights {
                semantic: 0.4,
                word: 0.4,
                edit: 0.2,
            },
            Self::Strict => Weights {
                semantic: 0.2,
                word: 0.5,
                edit: 0.3,
            },
        }
    }

    /// Multiplier applied to the weighted sum before clamping.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Lenient => 1.3,
            Self::Moderate => 1.0,
            Self::Strict => 0.8,
        }
    }

    /// Lowercase literal, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Moderate => "moderate",
            Self::Strict => "strict",
        }
    }

    /// Parse a strictness literal, falling back to [`Strictness::Moderate`]
    /// for anything unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: AssessError| {
            tracing::warn!(error = %err, "falling back to moderate strictness");
            Self::Moderate
        })
    }
}

impl FromStr for Strictness {
    type Err = AssessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "moderate" => Ok(Self::Moderate),
            "strict" => Ok(Self::Strict),
            _ => Err(AssessError::UnknownStrictness(s.to_string())),
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for level in Strictness::ALL {
            let w = level.weights();
            assert!((w.semantic + w.word + w.edit - 1.0).abs() < 1e-9, "{level}");
        }
    }

    #[test]
    fn test_factors() {
        assert!((Strictness::Lenient.factor() - 1.3).abs() < f64::EPSILON);
        assert!((Strictness::Moderate.factor() - 1.0).abs() < f64::EPSILON);
        assert!((Strictness::Strict.factor() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("lenient".parse::<Strictness>().unwrap(), Strictness::Lenient);
        assert_eq!("STRICT".parse::<Strictness>().unwrap(), Strictness::Strict);
        assert_eq!(" moderate ".parse::<Strictness>().unwrap(), Strictness::Moderate);
        assert!(matches!(
            "harsh".parse::<Strictness>(),
            Err(AssessError::UnknownStrictness(s)) if s == "harsh"
        ));
    }

    #[test]
    fn test_parse_or_default_falls_back_to_moderate() {
        assert_eq!(Strictness::parse_or_default("strict"), Strictness::Strict);
        assert_eq!(Strictness::parse_or_default("extreme"), Strictness::Moderate);
        assert_eq!(Strictness::parse_or_default(""), Strictness::Moderate);
    }

    #[test]
    fn test_default_is_moderate() {
        assert_eq!(Strictness::default(), Strictness::Moderate);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Strictness::Lenient).unwrap();
        assert_eq!(json, "\"lenient\"");
        let parsed: Strictness = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(parsed, Strictness::Strict);
    }
}
