//! Timeframe Parser — turns a free-form duration and a level into a day count.
//!
//! Never fails: anything unparseable or out of range resolves to the level's
//! default duration and logs a warning.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 365;

pub const DAYS_PER_WEEK: u64 = 7;
/// Flat approximation, not calendar months.
pub const DAYS_PER_MONTH: u64 = 30;

/// Used when the level is not one of the known tiers.
pub const FALLBACK_DAYS: u32 = 7;

/// Proficiency tier. Anything outside these three names is an unknown level,
/// which callers keep as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Exact, case-sensitive match on the canonical name.
    pub fn parse(raw: &str) -> Option<Level> {
        match raw {
            "Beginner" => Some(Level::Beginner),
            "Intermediate" => Some(Level::Intermediate),
            "Advanced" => Some(Level::Advanced),
            _ => None,
        }
    }

    pub fn default_days(&self) -> u32 {
        match self {
            Level::Beginner => 7,
            Level::Intermediate => 14,
            Level::Advanced => 21,
        }
    }
}

/// Default plan length for a level string; unknown levels get `FALLBACK_DAYS`.
pub fn default_days_for(level: &str) -> u32 {
    Level::parse(level)
        .map(|l| l.default_days())
        .unwrap_or(FALLBACK_DAYS)
}

/// Raw timeframe as it arrives from a caller: a JSON number or a string.
/// Any other JSON value is kept so it can fall back instead of failing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timeframe {
    Integer(i64),
    /// Truncated toward zero before range checking.
    Fractional(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<&str> for Timeframe {
    fn from(value: &str) -> Self {
        Timeframe::Text(value.to_string())
    }
}

impl From<i64> for Timeframe {
    fn from(value: i64) -> Self {
        Timeframe::Integer(value)
    }
}

// Each pattern captures the whole-number part; a decimal fraction is accepted
// and dropped ("3.5" -> 3).
static PATTERNS: LazyLock<Vec<(Regex, u64)>> = LazyLock::new(|| {
    [
        (r"^([0-9]+)(?:\.[0-9]+)?$", 1),
        (r"(?i)^([0-9]+)(?:\.[0-9]+)?\s*days?$", 1),
        (r"(?i)^([0-9]+)(?:\.[0-9]+)?\s*weeks?$", DAYS_PER_WEEK),
        (r"(?i)^([0-9]+)(?:\.[0-9]+)?\s*months?$", DAYS_PER_MONTH),
    ]
    .into_iter()
    .filter_map(|(pattern, factor)| Regex::new(pattern).ok().map(|re| (re, factor)))
    .collect()
});

/// Resolves a raw timeframe to a day count in `[MIN_DAYS, MAX_DAYS]`.
///
/// Text is tried against, in order: a bare number, `N day(s)`, `N week(s)`
/// (x7) and `N month(s)` (x30). The first pattern producing an in-range value
/// wins. Absent or blank input yields the level default silently; anything
/// else that does not resolve yields the level default with a warning.
pub fn resolve_day_count(raw: Option<&Timeframe>, level: &str) -> u32 {
    let fallback = default_days_for(level);

    let resolved = match raw {
        None => return fallback,
        Some(Timeframe::Text(text)) if text.trim().is_empty() => return fallback,
        Some(Timeframe::Integer(n)) => in_range(*n),
        Some(Timeframe::Fractional(f)) if f.is_finite() => in_range(f.trunc() as i64),
        Some(Timeframe::Fractional(_)) => None,
        Some(Timeframe::Text(text)) => parse_text(text.trim()),
        Some(Timeframe::Other(_)) => None,
    };

    match resolved {
        Some(days) => days,
        None => {
            warn!(
                "Invalid timeframe {:?} for level '{}', using default of {} days",
                raw, level, fallback
            );
            fallback
        }
    }
}

fn parse_text(text: &str) -> Option<u32> {
    PATTERNS.iter().find_map(|(re, factor)| {
        let digits = re.captures(text)?.get(1)?.as_str();
        // Digit runs too long for u64 are out of range anyway.
        let n: u64 = digits.parse().ok()?;
        let days = n.checked_mul(*factor)?;
        in_range(i64::try_from(days).ok()?)
    })
}

fn in_range(days: i64) -> Option<u32> {
    if (MIN_DAYS as i64..=MAX_DAYS as i64).contains(&days) {
        Some(days as u32)
    } else {
        None
    }
}
