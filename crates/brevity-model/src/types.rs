use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named bucket controlling how long a generated summary may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthCategory {
    Short,
    #[default]
    Medium,
    Long,
}

/// Minimum and maximum output length, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: u32,
    pub max: u32,
}

impl LengthCategory {
    pub const ALL: [LengthCategory; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn bounds(self) -> LengthBounds {
        let (min, max) = match self {
            Self::Short => (30, 60),
            Self::Medium => (60, 120),
            Self::Long => (100, 200),
        };
        LengthBounds { min, max }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown length category '{0}'")]
pub struct ParseLengthError(pub String);

impl FromStr for LengthCategory {
    type Err = ParseLengthError;

    /// Matching is exact: `"Short"` or `" short"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(ParseLengthError(other.to_string())),
        }
    }
}

/// Answer extracted by a question-answering model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}
