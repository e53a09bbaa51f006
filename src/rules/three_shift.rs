//! Three-shift rotation rule-set.
//!
//! A single flat table whose last rule always matches, so every
//! candidate, including rest and leave, gets a classified tag.

use super::table::{Rule, RuleGroup};
use super::RuleSet;
use crate::models::Severity::{Amber, Green, Red, Yellow};
use crate::models::ShiftCode::{self, Early, Night};

/// Early/late/night rotation without leave context.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeShift;

static FLAT: RuleGroup = RuleGroup {
    name: "flat",
    rules: &[
        Rule {
            id: "flat.1",
            severity: Red,
            guard: |w, candidate| *candidate == Early && w.p1 == Night,
        },
        Rule {
            id: "flat.2",
            severity: Red,
            guard: |w, candidate| *candidate == Night && w.n1 == Early,
        },
        Rule {
            id: "flat.3",
            severity: Green,
            guard: |w, _| w.p1.is_rest() && w.d0.is_rest() && w.n1.is_rest(),
        },
        Rule {
            id: "flat.4",
            severity: Yellow,
            guard: |w, _| w.p1.is_rest() || w.n1.is_rest(),
        },
        Rule {
            id: "flat.5",
            severity: Amber,
            guard: |_, _| true,
        },
    ],
};

static PLAN: [&RuleGroup; 1] = [&FLAT];

impl RuleSet for ThreeShift {
    fn name(&self) -> &'static str {
        "3-shift"
    }

    fn description(&self) -> &'static str {
        "Three-shift rotation with a catch-all amber rule"
    }

    fn groups_for(&self, _candidate: &ShiftCode) -> &'static [&'static RuleGroup] {
        &PLAN
    }

    fn catalog(&self) -> &'static [&'static RuleGroup] {
        &PLAN
    }
}
