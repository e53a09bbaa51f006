//! Severity tags produced by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of classifying a candidate assignment.
///
/// `Unclassified` means no rule matched. It is a neutral result, distinct
/// from every other tag; callers must not fold it into `Green` or `Red`.
///
/// # Ordering
/// [`rank`](Self::rank) orders the classified tags for display
/// (Red > Amber > Yellow > Green). Rule evaluation never consults it:
/// rule-sets are first-match-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hard conflict; should not normally be assigned.
    Red,
    /// Labour-rule violation, not forbidden.
    Amber,
    /// Acceptable with minor friction.
    Yellow,
    /// Ideal.
    Green,
    /// No rule matched.
    Unclassified,
}

impl Severity {
    /// Every tag, classified ones in descending display rank.
    pub const ALL: [Severity; 5] = [
        Severity::Red,
        Severity::Amber,
        Severity::Yellow,
        Severity::Green,
        Severity::Unclassified,
    ];

    /// Display rank, higher = worse. `None` for `Unclassified`.
    pub fn rank(self) -> Option<u8> {
        match self {
            Severity::Red => Some(3),
            Severity::Amber => Some(2),
            Severity::Yellow => Some(1),
            Severity::Green => Some(0),
            Severity::Unclassified => None,
        }
    }

    /// Whether some rule produced this tag.
    #[inline]
    pub fn is_classified(self) -> bool {
        self != Severity::Unclassified
    }

    /// Lowercase tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Red => "red",
            Severity::Amber => "amber",
            Severity::Yellow => "yellow",
            Severity::Green => "green",
            Severity::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
