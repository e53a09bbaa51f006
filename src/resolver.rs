//! Rule-set lookup by external key.
//!
//! Keys come from roster configuration and are matched case-insensitively
//! after trimming. [`resolve`] never fails: unknown or empty keys select
//! the default 5-shift rule-set. [`RuleSetKind::from_str`] is the strict
//! variant for callers that want to reject unknown keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::rules::{FiveShift, RuleSet, ThreeShift};

/// The compiled-in rule-sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSetKind {
    /// Five-shift rotation (default).
    #[default]
    FiveShift,
    /// Three-shift rotation.
    ThreeShift,
}

/// Normalized key → rule-set.
const KEYS: &[(&str, RuleSetKind)] = &[
    ("roehm_5schicht", RuleSetKind::FiveShift),
    ("5schicht", RuleSetKind::FiveShift),
    ("5-shift", RuleSetKind::FiveShift),
    ("five_shift", RuleSetKind::FiveShift),
    ("3schicht", RuleSetKind::ThreeShift),
    ("3-shift", RuleSetKind::ThreeShift),
    ("three_shift", RuleSetKind::ThreeShift),
];

/// A rule-set key that matches no compiled-in rule-set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rule set key: {0:?}")]
pub struct UnknownRuleSet(pub String);

impl RuleSetKind {
    /// All rule-sets.
    pub const ALL: [RuleSetKind; 2] = [RuleSetKind::FiveShift, RuleSetKind::ThreeShift];

    /// Canonical key.
    pub fn key(self) -> &'static str {
        match self {
            RuleSetKind::FiveShift => "5-shift",
            RuleSetKind::ThreeShift => "3-shift",
        }
    }

    /// The decision procedure for this kind.
    pub fn rule_set(self) -> &'static dyn RuleSet {
        match self {
            RuleSetKind::FiveShift => &FiveShift,
            RuleSetKind::ThreeShift => &ThreeShift,
        }
    }

    /// Looks up a key, `None` if unrecognized.
    pub fn lookup(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase();
        KEYS.iter()
            .find(|(k, _)| *k == normalized)
            .map(|&(_, kind)| kind)
    }
}

impl fmt::Display for RuleSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RuleSetKind {
    type Err = UnknownRuleSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownRuleSet(s.to_string()))
    }
}

/// Resolves a key to its kind, falling back to the default.
pub fn resolve_kind(key: &str) -> RuleSetKind {
    RuleSetKind::lookup(key).unwrap_or_else(|| {
        let fallback = RuleSetKind::default();
        debug!(key, fallback = fallback.key(), "unrecognized rule set key");
        fallback
    })
}

/// Resolves a key to its decision procedure. Never fails.
pub fn resolve(key: &str) -> &'static dyn RuleSet {
    resolve_kind(key).rule_set()
}
