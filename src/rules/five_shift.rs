//! Five-shift rotation rule-set (the default).
//!
//! Groups are consulted in this order:
//! 1. `priority`: a vacation on both outer days around a free block.
//! 2. the candidate's own group (`early`, `night` or `late`).
//!
//! Candidates without a group (rest, leave, unknown codes) are never
//! classified; the priority group is not consulted for them either.
//!
//! Rule ids follow the order column of the roster planning table
//! (`early.2a` = second block, first rule).

use super::table::{Rule, RuleGroup};
use super::RuleSet;
use crate::models::Severity::{Amber, Green, Red, Yellow};
use crate::models::ShiftCode::{self, Early, Late, Night, Sick, SickOther, Vacation};

/// Five-shift rotation with vacation and sickness context.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiveShift;

static PRIORITY: RuleGroup = RuleGroup {
    name: "priority",
    rules: &[Rule {
        id: "priority.0",
        severity: Red,
        guard: |w, _| {
            w.p2 == Vacation
                && w.n2 == Vacation
                && ((w.p1.is_rest() && w.d0.is_rest())
                    || (w.p1.is_rest() && w.n1.is_rest())
                    || (w.d0.is_rest() && w.n1.is_rest()))
        },
    }],
};

static EARLY: RuleGroup = RuleGroup {
    name: "early",
    rules: &[
        Rule {
            id: "early.1a",
            severity: Red,
            guard: |w, _| w.n1 == Vacation || w.p2 == Vacation || w.p1 == Night || w.p1 == Vacation,
        },
        Rule {
            id: "early.2a",
            severity: Green,
            guard: |w, _| {
                (w.p1.is_rest() && w.p2.is_rest() && w.n1.is_rest_or_early() && w.n2 == Early)
                    || (w.p1 == Early
                        && w.p2.is_rest()
                        && w.n1.is_rest_or_early()
                        && w.n2 == Early)
                    || (w.p2.is_rest() && w.p1.is_rest() && w.n1.is_rest() && w.n2 == Late)
                    || (w.p2 == Sick && w.p1.is_rest() && w.n1.is_rest() && w.n2 == Late)
                    || (w.p2 == Sick && w.p1.is_rest() && w.n1 == Late && w.n2.is_rest())
                    || (w.p2 == Sick && w.p1 == Sick && w.n1.is_rest() && w.n2 == Late)
                    || (w.p2 == Sick && w.p1.is_rest() && w.n1 == Early && w.n2 == Early)
                    || (w.p2 == Late && w.p1.is_rest() && w.n1 == Early && w.n2 == Early)
            },
        },
        Rule {
            id: "early.3a",
            severity: Yellow,
            guard: |w, _| w.p1.is_rest() && w.p2 == Night,
        },
        Rule {
            id: "early.3b",
            severity: Yellow,
            guard: |w, _| {
                (w.p2.is_rest() && w.p1.is_rest() && w.n1.is_rest() && w.n2 == Vacation)
                    || (w.p2.is_rest() && w.p1.is_rest() && w.n1 == Late && w.n2 == Early)
            },
        },
        Rule {
            id: "early.4a",
            severity: Amber,
            guard: |w, _| w.p1 == Late,
        },
        Rule {
            id: "early.4b",
            severity: Amber,
            guard: |w, _| {
                w.p2.is_not_rest() && w.p1.is_not_rest() && w.n1 == Early && w.n2 == Early
            },
        },
    ],
};

static NIGHT: RuleGroup = RuleGroup {
    name: "night",
    rules: &[
        Rule {
            id: "night.1a",
            severity: Red,
            guard: |w, _| w.p1 == Vacation,
        },
        Rule {
            id: "night.1b",
            severity: Red,
            guard: |w, _| {
                w.n1 == SickOther || w.n1 == Sick || w.n1 == Vacation || w.n1 == Early
            },
        },
        Rule {
            id: "night.2a",
            severity: Red,
            guard: |w, _| {
                (w.p2 == Night && w.p1 == Night && w.n1.is_not_rest() && w.n2.is_not_rest())
                    || (w.p2.is_rest()
                        && w.p1.is_rest()
                        && w.n1.is_not_rest()
                        && w.n2.is_not_rest())
                    || (w.p2 == Night && w.p1.is_rest() && w.n1.is_not_rest() && w.n2.is_not_rest())
                    || (w.p2 == Night && w.p1.is_rest() && w.n1.is_not_rest() && w.n2.is_rest())
            },
        },
        Rule {
            id: "night.3a",
            severity: Green,
            guard: |w, _| {
                (w.p1 == Night && w.n1 == Night)
                    || (w.p1 == Night && w.n1.is_rest() && w.n2.is_rest())
                    || (w.p2 == Night && w.p1.is_rest() && w.n1.is_rest() && w.n2.is_rest())
            },
        },
        Rule {
            id: "night.4a",
            severity: Amber,
            guard: |w, _| {
                w.n1 == Late
                    || (w.p2.is_rest() && w.p1.is_rest() && w.n1.is_rest() && w.n2 == Vacation)
                    || (w.p2 == Vacation && w.p1.is_rest() && w.n1.is_rest() && w.n2.is_rest())
            },
        },
        Rule {
            id: "night.5a",
            severity: Yellow,
            guard: |w, _| {
                (w.n1.is_rest() && w.n2 == Early)
                    || (w.p2 == Night && w.p1 == Night && w.n1.is_rest() && w.n2 == Late)
                    || (w.p2 == Sick && w.p1 == Sick && w.n1.is_rest() && w.n2 == Late)
                    || (w.p2 == Night && w.p1 == Night && w.n1.is_rest() && w.n2.is_not_rest())
            },
        },
    ],
};

static LATE: RuleGroup = RuleGroup {
    name: "late",
    rules: &[
        Rule {
            id: "late.1a",
            severity: Amber,
            guard: |w, _| {
                w.p2 == Late && w.p1.is_rest() && w.d0.is_rest() && w.n1 == Early && w.n2 == Early
            },
        },
        Rule {
            id: "late.2a",
            severity: Red,
            guard: |w, _| w.p1 == Vacation,
        },
        Rule {
            id: "late.3a",
            severity: Amber,
            guard: |w, _| {
                (w.p2.is_rest() && w.p1.is_rest() && w.n1 == Early && w.n2.is_rest())
                    || (w.p2.is_rest() && w.p1.is_rest() && w.n1 == Early && w.n2 == Early)
                    || (w.p2.is_rest() && w.p1 == Night && w.n1.is_rest() && w.n2.is_rest())
                    || (w.p2.is_rest() && w.p1 == Night && w.n1 == Early && w.n2 == Early)
                    || (w.p2 == Night && w.p1 == Night && w.n1 == Early && w.n2 == Early)
                    || (w.p2 == Night && w.p1 == Night && w.n1.is_rest() && w.n2.is_rest())
                    || (w.p2.is_rest() && w.p1.is_not_rest() && w.n1 == Early && w.n2 == Early)
                    || (w.p2 == Late && w.p1 == Late && w.n1 == Early && w.n2 == Early)
                    || (w.p2.is_rest() && w.p1.is_rest() && w.n1 == Vacation && w.n2 == Vacation)
            },
        },
        Rule {
            id: "late.4a",
            severity: Yellow,
            guard: |w, _| {
                (w.p1.is_rest() && w.p2 == Vacation)
                    || (w.p2.is_rest() && w.p1.is_rest() && w.n1 == Vacation && w.n2 == Early)
                    || (w.n1.is_rest() && w.n2 == Early)
            },
        },
        Rule {
            id: "late.5a",
            severity: Green,
            guard: |w, _| {
                (w.p1.is_rest() && w.p2 == Night)
                    || (w.p1.is_rest() && w.n1.is_rest())
                    || (w.p2 == Early && w.p1 == Early && w.n1 == Late && w.n2 == Night)
            },
        },
    ],
};

static EARLY_PLAN: [&RuleGroup; 2] = [&PRIORITY, &EARLY];
static NIGHT_PLAN: [&RuleGroup; 2] = [&PRIORITY, &NIGHT];
static LATE_PLAN: [&RuleGroup; 2] = [&PRIORITY, &LATE];
static CATALOG: [&RuleGroup; 4] = [&PRIORITY, &EARLY, &NIGHT, &LATE];

impl RuleSet for FiveShift {
    fn name(&self) -> &'static str {
        "5-shift"
    }

    fn description(&self) -> &'static str {
        "Five-shift rotation with vacation and sickness context"
    }

    fn groups_for(&self, candidate: &ShiftCode) -> &'static [&'static RuleGroup] {
        match candidate {
            Early => &EARLY_PLAN,
            Night => &NIGHT_PLAN,
            Late => &LATE_PLAN,
            _ => &[],
        }
    }

    fn catalog(&self) -> &'static [&'static RuleGroup] {
        &CATALOG
    }
}
