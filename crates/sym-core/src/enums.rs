//! Tag enums stored as TEXT columns.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and parse case-insensitively from CSV input through `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EmergencyLevel
// ---------------------------------------------------------------------------

/// Severity classification attached to a condition.
///
/// Variants are declared in ascending severity so the derived `Ord` follows
/// `low < medium < high < critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl EmergencyLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for EmergencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmergencyLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("emergency level", s, &Self::ALL[..], Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// RuleType
// ---------------------------------------------------------------------------

/// Kind of medical decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    Emergency,
    Diagnostic,
    Treatment,
}

impl RuleType {
    pub const ALL: [Self; 3] = [Self::Emergency, Self::Diagnostic, Self::Treatment];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Diagnostic => "diagnostic",
            Self::Treatment => "treatment",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("rule type", s, &Self::ALL[..], Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Urgency verdict attached to a symptom session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
}

impl Urgency {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Emergency];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("urgency", s, &Self::ALL[..], Self::as_str)
    }
}

fn parse_tag<T: Copy>(
    kind: &'static str,
    raw: &str,
    all: &[T],
    as_str: impl Fn(T) -> &'static str,
) -> Result<T, CoreError> {
    let needle = raw.trim();
    all.iter()
        .copied()
        .find(|v| as_str(*v).eq_ignore_ascii_case(needle))
        .ok_or_else(|| CoreError::InvalidTag {
            kind,
            value: raw.to_string(),
            allowed: all.iter().map(|v| as_str(*v)).collect::<Vec<_>>().join(", "),
        })
}
