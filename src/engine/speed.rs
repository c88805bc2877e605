//! Speed tiers

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How long the scheduler waits between two steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    pub fn interval(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1000),
            Speed::Medium => Duration::from_millis(500),
            Speed::Fast => Duration::from_millis(250),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
        }
    }

    /// One tier faster, saturating at [`Speed::Fast`]
    pub fn faster(self) -> Self {
        match self {
            Speed::Slow => Speed::Medium,
            Speed::Medium | Speed::Fast => Speed::Fast,
        }
    }

    /// One tier slower, saturating at [`Speed::Slow`]
    pub fn slower(self) -> Self {
        match self {
            Speed::Fast => Speed::Medium,
            Speed::Medium | Speed::Slow => Speed::Slow,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown speed tier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown speed '{0}' (expected slow, medium or fast)")]
pub struct ParseSpeedError(pub String);

impl FromStr for Speed {
    type Err = ParseSpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(Speed::Slow),
            "medium" => Ok(Speed::Medium),
            "fast" => Ok(Speed::Fast),
            _ => Err(ParseSpeedError(s.to_string())),
        }
    }
}
