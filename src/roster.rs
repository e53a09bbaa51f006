//! Worker rosters and window assembly.
//!
//! A roster holds one worker's assignments keyed by day number. Day
//! numbers are plain integers relative to an epoch the caller chooses
//! (e.g. days since 1970-01-01). Days without an assignment read as
//! [`ShiftCode::Rest`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ShiftCode, Slot, TemporalWindow};
use crate::rules::{RuleSet, Verdict};

static REST: ShiftCode = ShiftCode::Rest;

/// One stored assignment, as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    /// Day number.
    pub day: i64,
    /// Assigned code.
    pub code: ShiftCode,
}

impl DayAssignment {
    /// Creates an assignment.
    pub fn new(day: i64, code: impl Into<ShiftCode>) -> Self {
        Self {
            day,
            code: code.into(),
        }
    }
}

/// One worker's assignments over time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRoster {
    /// Worker identifier.
    pub worker_id: String,
    days: BTreeMap<i64, ShiftCode>,
}

impl ShiftRoster {
    /// Creates an empty roster.
    pub fn new(worker_id: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            days: BTreeMap::new(),
        }
    }

    /// Builds a roster from stored rows. A later row for the same day
    /// replaces an earlier one.
    pub fn from_assignments(
        worker_id: impl Into<String>,
        assignments: impl IntoIterator<Item = DayAssignment>,
    ) -> Self {
        let mut roster = Self::new(worker_id);
        for a in assignments {
            roster.assign(a.day, a.code);
        }
        roster
    }

    /// Adds an assignment (builder form).
    pub fn with_assignment(mut self, day: i64, code: impl Into<ShiftCode>) -> Self {
        self.assign(day, code.into());
        self
    }

    /// Sets the code for `day`, returning the previous one.
    ///
    /// Assigning `Rest` clears the day.
    pub fn assign(&mut self, day: i64, code: ShiftCode) -> Option<ShiftCode> {
        if code.is_rest() {
            self.days.remove(&day)
        } else {
            self.days.insert(day, code)
        }
    }

    /// Code on `day` (`Rest` if unassigned).
    pub fn get(&self, day: i64) -> &ShiftCode {
        self.days.get(&day).unwrap_or(&REST)
    }

    /// Number of assigned (non-rest) days.
    pub fn assigned_days(&self) -> usize {
        self.days.len()
    }

    /// Assigned days in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &ShiftCode)> {
        self.days.iter().map(|(&day, code)| (day, code))
    }

    /// The five-day window around `day`.
    pub fn window_at(&self, day: i64) -> TemporalWindow {
        let at = |slot: Slot| self.get(day.saturating_add(slot.offset())).clone();
        TemporalWindow::new(
            at(Slot::P2),
            at(Slot::P1),
            at(Slot::D0),
            at(Slot::N1),
            at(Slot::N2),
        )
    }

    /// Evaluates reassigning `day` to `candidate` under `rule_set`.
    pub fn evaluate_candidate(
        &self,
        day: i64,
        candidate: &ShiftCode,
        rule_set: &dyn RuleSet,
    ) -> Verdict {
        rule_set.evaluate(&self.window_at(day), candidate)
    }
}
