//! Ordered decision tables.
//!
//! A rule-set is a list of rule groups; a group is a list of guarded rules.
//! Evaluation walks groups in order and rules top-to-bottom inside each
//! group. The first rule whose guard holds decides the outcome and nothing
//! after it is consulted, regardless of severity.

use std::fmt;

use crate::models::{Severity, ShiftCode, TemporalWindow};

/// A pure predicate over the window and the candidate shift.
pub type Guard = fn(&TemporalWindow, &ShiftCode) -> bool;

/// A guarded rule: if `guard` holds, the outcome is `severity`.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable identifier, `<group>.<order>` (e.g. `night.2a`).
    pub id: &'static str,
    /// Outcome when the guard holds.
    pub severity: Severity,
    /// Condition under which the rule fires.
    pub guard: Guard,
}

impl Rule {
    /// Whether the rule fires for this window and candidate.
    #[inline]
    pub fn matches(&self, window: &TemporalWindow, candidate: &ShiftCode) -> bool {
        (self.guard)(window, candidate)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// A named, ordered block of rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleGroup {
    /// Group name (e.g. `early`).
    pub name: &'static str,
    /// Rules in evaluation order.
    pub rules: &'static [Rule],
}

/// First rule, across `groups` in order, whose guard holds.
pub(crate) fn first_match(
    groups: &[&'static RuleGroup],
    window: &TemporalWindow,
    candidate: &ShiftCode,
) -> Option<&'static Rule> {
    groups
        .iter()
        .flat_map(|group| group.rules.iter())
        .find(|rule| rule.matches(window, candidate))
}

/// Every rule, across `groups` in order, whose guard holds.
pub(crate) fn all_matches(
    groups: &[&'static RuleGroup],
    window: &TemporalWindow,
    candidate: &ShiftCode,
) -> Vec<&'static Rule> {
    groups
        .iter()
        .flat_map(|group| group.rules.iter())
        .filter(|rule| rule.matches(window, candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static OVERLAPPING: RuleGroup = RuleGroup {
        name: "test",
        rules: &[
            Rule {
                id: "test.narrow",
                severity: Severity::Green,
                guard: |w, _| w.p1.is_rest() && w.n1.is_rest(),
            },
            Rule {
                id: "test.broad",
                severity: Severity::Red,
                guard: |w, _| w.p1.is_rest(),
            },
        ],
    };

    static FALLBACK: RuleGroup = RuleGroup {
        name: "fallback",
        rules: &[Rule {
            id: "fallback.any",
            severity: Severity::Amber,
            guard: |_, _| true,
        }],
    };

    #[test]
    fn test_first_match_ignores_severity() {
        let w = TemporalWindow::all_rest();
        let rule = first_match(&[&OVERLAPPING], &w, &ShiftCode::Early).unwrap();
        assert_eq!(rule.id, "test.narrow");
        assert_eq!(rule.severity, Severity::Green);
    }

    #[test]
    fn test_later_groups_not_consulted_after_match() {
        let w = TemporalWindow::all_rest();
        let rule = first_match(&[&OVERLAPPING, &FALLBACK], &w, &ShiftCode::Early).unwrap();
        assert_eq!(rule.id, "test.narrow");
    }

    #[test]
    fn test_falls_through_to_next_group() {
        let mut w = TemporalWindow::all_rest();
        w.p1 = ShiftCode::Night;
        let rule = first_match(&[&OVERLAPPING, &FALLBACK], &w, &ShiftCode::Early).unwrap();
        assert_eq!(rule.id, "fallback.any");
    }

    #[test]
    fn test_no_groups_no_match() {
        let w = TemporalWindow::all_rest();
        assert!(first_match(&[], &w, &ShiftCode::Early).is_none());
        assert!(all_matches(&[], &w, &ShiftCode::Early).is_empty());
    }

    #[test]
    fn test_all_matches_in_order() {
        let w = TemporalWindow::all_rest();
        let ids: Vec<_> = all_matches(&[&OVERLAPPING, &FALLBACK], &w, &ShiftCode::Late)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["test.narrow", "test.broad", "fallback.any"]);
    }
}
