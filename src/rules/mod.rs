//! Shift-transition rule-sets.
//!
//! A rule-set maps a five-day window and a candidate shift for the target
//! day to a [`Severity`]. Each rule-set is a compiled-in, ordered decision
//! table evaluated first-match-wins.
//!
//! # Usage
//!
//! ```
//! use shift_rules::models::{Severity, ShiftCode, TemporalWindow};
//! use shift_rules::rules::{FiveShift, RuleSet};
//!
//! let window = TemporalWindow::new(
//!     ShiftCode::Rest,
//!     ShiftCode::Rest,
//!     ShiftCode::Rest,
//!     ShiftCode::Rest,
//!     ShiftCode::Early,
//! );
//! assert_eq!(FiveShift.classify(&window, &ShiftCode::Night), Severity::Yellow);
//! ```

mod five_shift;
mod table;
mod three_shift;

pub use five_shift::FiveShift;
pub use table::{Guard, Rule, RuleGroup};
pub use three_shift::ThreeShift;

use serde::Serialize;
use std::fmt::Debug;
use tracing::trace;

use crate::models::{Severity, ShiftCode, TemporalWindow};

/// Outcome of an evaluation together with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Resulting tag.
    pub severity: Severity,
    /// Id of the deciding rule; `None` when unclassified.
    pub rule_id: Option<&'static str>,
}

impl Verdict {
    /// No rule matched.
    pub const UNCLASSIFIED: Verdict = Verdict {
        severity: Severity::Unclassified,
        rule_id: None,
    };

    /// Verdict decided by `rule`.
    pub fn matched(rule: &Rule) -> Self {
        Self {
            severity: rule.severity,
            rule_id: Some(rule.id),
        }
    }
}

/// A decision procedure over a window and a candidate shift.
///
/// Implementations only supply their tables; evaluation is shared and
/// always first-match-wins across [`groups_for`](Self::groups_for).
pub trait RuleSet: Send + Sync + Debug {
    /// Rule-set name (e.g. "5-shift").
    fn name(&self) -> &'static str;

    /// Rule-set description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Groups consulted for `candidate`, in evaluation order.
    ///
    /// An empty slice means the candidate is never classified.
    fn groups_for(&self, candidate: &ShiftCode) -> &'static [&'static RuleGroup];

    /// Every group of the rule-set.
    fn catalog(&self) -> &'static [&'static RuleGroup];

    /// Evaluates the candidate and reports the deciding rule.
    fn evaluate(&self, window: &TemporalWindow, candidate: &ShiftCode) -> Verdict {
        let verdict = table::first_match(self.groups_for(candidate), window, candidate)
            .map(Verdict::matched)
            .unwrap_or(Verdict::UNCLASSIFIED);
        trace!(
            rule_set = self.name(),
            %window,
            %candidate,
            severity = %verdict.severity,
            rule = ?verdict.rule_id,
            "classified candidate shift"
        );
        verdict
    }

    /// Classifies the candidate. Total: never panics, `Unclassified` when
    /// no rule matches.
    fn classify(&self, window: &TemporalWindow, candidate: &ShiftCode) -> Severity {
        self.evaluate(window, candidate).severity
    }

    /// Every rule whose guard holds, in evaluation order.
    ///
    /// The first element, if any, is the rule [`evaluate`](Self::evaluate) reports.
    fn matching_rules(&self, window: &TemporalWindow, candidate: &ShiftCode) -> Vec<&'static Rule> {
        table::all_matches(self.groups_for(candidate), window, candidate)
    }
}
