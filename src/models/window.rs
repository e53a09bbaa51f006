//! Five-day evaluation window.
//!
//! The window is anchored on the target day and always carries all five
//! slots. Days without an assignment are represented as
//! [`ShiftCode::Rest`]; there is no separate "missing" value.
//!
//! ```text
//!   p2    p1    d0    n1    n2
//!  -2d   -1d  target +1d   +2d
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ShiftCode;

/// Position of a slot relative to the target day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Two days before the target day.
    P2,
    /// One day before the target day.
    P1,
    /// The target day (assignment before the candidate change).
    D0,
    /// One day after the target day.
    N1,
    /// Two days after the target day.
    N2,
}

impl Slot {
    /// All slots in chronological order.
    pub const ALL: [Slot; 5] = [Slot::P2, Slot::P1, Slot::D0, Slot::N1, Slot::N2];

    /// Day offset from the target day.
    #[inline]
    pub fn offset(self) -> i64 {
        match self {
            Slot::P2 => -2,
            Slot::P1 => -1,
            Slot::D0 => 0,
            Slot::N1 => 1,
            Slot::N2 => 2,
        }
    }
}

/// Shift codes around a target day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalWindow {
    /// Two days before.
    pub p2: ShiftCode,
    /// One day before.
    pub p1: ShiftCode,
    /// Target day, as currently assigned.
    pub d0: ShiftCode,
    /// One day after.
    pub n1: ShiftCode,
    /// Two days after.
    pub n2: ShiftCode,
}

impl TemporalWindow {
    /// Creates a window from its five slots in chronological order.
    pub fn new(
        p2: ShiftCode,
        p1: ShiftCode,
        d0: ShiftCode,
        n1: ShiftCode,
        n2: ShiftCode,
    ) -> Self {
        Self { p2, p1, d0, n1, n2 }
    }

    /// A window with no assignments.
    pub fn all_rest() -> Self {
        Self::default()
    }

    /// Returns the code in the given slot.
    pub fn slot(&self, slot: Slot) -> &ShiftCode {
        match slot {
            Slot::P2 => &self.p2,
            Slot::P1 => &self.p1,
            Slot::D0 => &self.d0,
            Slot::N1 => &self.n1,
            Slot::N2 => &self.n2,
        }
    }

    /// Iterates the slots in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftCode> {
        Slot::ALL.into_iter().map(move |s| self.slot(s))
    }

    /// Whether any slot holds a code outside the known alphabet.
    pub fn has_unknown(&self) -> bool {
        self.iter().any(|c| !c.is_known())
    }
}

impl From<[ShiftCode; 5]> for TemporalWindow {
    fn from(slots: [ShiftCode; 5]) -> Self {
        let [p2, p1, d0, n1, n2] = slots;
        Self::new(p2, p1, d0, n1, n2)
    }
}

impl fmt::Display for TemporalWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} ({}) {} {}]",
            self.p2, self.p1, self.d0, self.n1, self.n2
        )
    }
}
