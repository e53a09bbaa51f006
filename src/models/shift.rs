//! Shift code alphabet.
//!
//! A day in a roster carries exactly one shift code. The alphabet is closed
//! for the codes the rule-sets know about, and open for everything else:
//! codes outside it are kept verbatim as [`ShiftCode::Other`].
//!
//! # Unknown Codes
//! `Other` never equals a known code and is "not Rest" for every predicate.
//! Rule guards that test for a specific code therefore never fire on it.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The assignment of one worker on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShiftCode {
    /// No assignment (free day).
    #[default]
    Rest,
    /// Early shift.
    Early,
    /// Late shift.
    Late,
    /// Night shift.
    Night,
    /// Planned leave.
    Vacation,
    /// Sick leave.
    Sick,
    /// Sick leave of another kind (e.g. caring for a sick dependant).
    SickOther,
    /// A code outside the known alphabet, kept as received.
    Other(String),
}

impl ShiftCode {
    /// Every known member of the alphabet.
    pub const CANONICAL: [ShiftCode; 7] = [
        ShiftCode::Rest,
        ShiftCode::Early,
        ShiftCode::Late,
        ShiftCode::Night,
        ShiftCode::Vacation,
        ShiftCode::Sick,
        ShiftCode::SickOther,
    ];

    /// True iff the day is free.
    #[inline]
    pub fn is_rest(&self) -> bool {
        matches!(self, ShiftCode::Rest)
    }

    /// True iff the day is free or an early shift.
    #[inline]
    pub fn is_rest_or_early(&self) -> bool {
        matches!(self, ShiftCode::Rest | ShiftCode::Early)
    }

    /// Negation of [`is_rest`](Self::is_rest). Unknown codes are never free.
    #[inline]
    pub fn is_not_rest(&self) -> bool {
        !self.is_rest()
    }

    /// Shift types a worker can be reassigned to.
    #[inline]
    pub fn is_workable(&self) -> bool {
        matches!(self, ShiftCode::Early | ShiftCode::Late | ShiftCode::Night)
    }

    /// Whether the code belongs to the known alphabet.
    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, ShiftCode::Other(_))
    }

    /// Canonical lowercase name (the raw text for unknown codes).
    pub fn as_str(&self) -> &str {
        match self {
            ShiftCode::Rest => "rest",
            ShiftCode::Early => "early",
            ShiftCode::Late => "late",
            ShiftCode::Night => "night",
            ShiftCode::Vacation => "vacation",
            ShiftCode::Sick => "sick",
            ShiftCode::SickOther => "sick_other",
            ShiftCode::Other(raw) => raw,
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(ShiftCode::Rest);
        }
        Self::CANONICAL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ShiftCode {
    fn from(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| ShiftCode::Other(raw.to_string()))
    }
}

impl From<String> for ShiftCode {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(ShiftCode::Other(raw))
    }
}

impl From<ShiftCode> for String {
    fn from(code: ShiftCode) -> Self {
        match code {
            ShiftCode::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ShiftCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
