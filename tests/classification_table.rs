//! Exhaustive checks over every window drawn from the known alphabet.

use shift_rules::models::ShiftCode::{Early, Late, Night, Rest, Sick, Vacation};
use shift_rules::models::{Severity, ShiftCode, TemporalWindow};
use shift_rules::resolver::{self, RuleSetKind};
use shift_rules::rules::{FiveShift, RuleSet, ThreeShift};
use std::collections::{HashMap, HashSet};

/// All 7^5 windows over the canonical codes.
fn all_windows() -> Vec<TemporalWindow> {
    let codes = ShiftCode::CANONICAL;
    let mut out = Vec::with_capacity(codes.len().pow(5));
    for p2 in &codes {
        for p1 in &codes {
            for d0 in &codes {
                for n1 in &codes {
                    for n2 in &codes {
                        out.push(TemporalWindow::new(
                            p2.clone(),
                            p1.clone(),
                            d0.clone(),
                            n1.clone(),
                            n2.clone(),
                        ));
                    }
                }
            }
        }
    }
    out
}

fn distribution(
    rule_set: &dyn RuleSet,
    windows: &[TemporalWindow],
    candidate: &ShiftCode,
) -> HashMap<Severity, usize> {
    let mut counts = HashMap::new();
    for w in windows {
        *counts.entry(rule_set.classify(w, candidate)).or_insert(0) += 1;
    }
    counts
}

fn expect(pairs: &[(Severity, usize)]) -> HashMap<Severity, usize> {
    pairs.iter().copied().collect()
}

#[test]
fn five_shift_documented_scenarios() {
    let rs = resolver::resolve("ROEHM_5SCHICHT");

    let w = TemporalWindow::new(Vacation, Rest, Rest, Rest, Vacation);
    assert_eq!(rs.classify(&w, &Early), Severity::Red);

    let w = TemporalWindow::new(Rest, Rest, Rest, Rest, Early);
    assert_eq!(rs.classify(&w, &Night), Severity::Yellow);

    for d0 in ShiftCode::CANONICAL {
        let w = TemporalWindow::new(Sick, Rest, d0, Rest, Late);
        assert_eq!(rs.classify(&w, &Early), Severity::Green);
    }

    let w = TemporalWindow::new(Night, Rest, Rest, Rest, Rest);
    assert_eq!(rs.classify(&w, &Late), Severity::Green);

    let w = TemporalWindow::all_rest();
    assert_eq!(rs.classify(&w, &Rest), Severity::Unclassified);
}

#[test]
fn three_shift_documented_scenarios() {
    let rs = resolver::resolve("3-shift");
    for d0 in ShiftCode::CANONICAL {
        for n1 in ShiftCode::CANONICAL {
            let w = TemporalWindow::new(Rest, Night, d0.clone(), n1.clone(), Rest);
            assert_eq!(rs.classify(&w, &Early), Severity::Red);

            let expected = if n1.is_rest() {
                Severity::Yellow
            } else {
                Severity::Amber
            };
            assert_eq!(rs.classify(&w, &Late), expected);
        }
    }
}

#[test]
fn five_shift_distribution_is_stable() {
    let windows = all_windows();
    assert_eq!(
        distribution(&FiveShift, &windows, &Early),
        expect(&[
            (Severity::Red, 7987),
            (Severity::Amber, 1869),
            (Severity::Yellow, 308),
            (Severity::Green, 70),
            (Severity::Unclassified, 6573),
        ])
    );
    assert_eq!(
        distribution(&FiveShift, &windows, &Night),
        expect(&[
            (Severity::Red, 10913),
            (Severity::Amber, 1938),
            (Severity::Yellow, 336),
            (Severity::Green, 357),
            (Severity::Unclassified, 3263),
        ])
    );
    assert_eq!(
        distribution(&FiveShift, &windows, &Late),
        expect(&[
            (Severity::Red, 2419),
            (Severity::Amber, 85),
            (Severity::Yellow, 624),
            (Severity::Green, 553),
            (Severity::Unclassified, 13126),
        ])
    );
}

#[test]
fn three_shift_distribution_is_stable() {
    let windows = all_windows();
    let red_sensitive = expect(&[
        (Severity::Red, 2401),
        (Severity::Amber, 10290),
        (Severity::Yellow, 4067),
        (Severity::Green, 49),
    ]);
    let plain = expect(&[
        (Severity::Amber, 12348),
        (Severity::Yellow, 4410),
        (Severity::Green, 49),
    ]);
    assert_eq!(distribution(&ThreeShift, &windows, &Early), red_sensitive);
    assert_eq!(distribution(&ThreeShift, &windows, &Night), red_sensitive);
    for candidate in [Rest, Late, Vacation, Sick] {
        assert_eq!(distribution(&ThreeShift, &windows, &candidate), plain);
    }
}

#[test]
fn five_shift_rest_and_vacation_never_classified() {
    for w in all_windows() {
        assert_eq!(FiveShift.classify(&w, &Rest), Severity::Unclassified);
        assert_eq!(FiveShift.classify(&w, &Vacation), Severity::Unclassified);
    }
}

#[test]
fn three_shift_always_classified() {
    for w in all_windows() {
        for candidate in ShiftCode::CANONICAL {
            assert!(ThreeShift.classify(&w, &candidate).is_classified());
        }
    }
}

#[test]
fn every_rule_decides_some_window() {
    let windows = all_windows();
    for kind in RuleSetKind::ALL {
        let rs = kind.rule_set();
        let mut decided = HashSet::new();
        for w in &windows {
            for candidate in ShiftCode::CANONICAL {
                if let Some(id) = rs.evaluate(w, &candidate).rule_id {
                    decided.insert(id);
                }
            }
        }
        for group in rs.catalog() {
            for rule in group.rules {
                assert!(decided.contains(rule.id), "{} never decides", rule.id);
            }
        }
    }
}

/// Highest-severity matching rule, ignoring table order.
fn severity_ranked(rs: &dyn RuleSet, w: &TemporalWindow, candidate: &ShiftCode) -> Severity {
    rs.matching_rules(w, candidate)
        .iter()
        .map(|r| r.severity)
        .max_by_key(|s| s.rank())
        .unwrap_or(Severity::Unclassified)
}

#[test]
fn five_shift_table_order_agrees_with_severity_ranking() {
    for w in all_windows() {
        for candidate in [Early, Late, Night] {
            assert_eq!(
                FiveShift.classify(&w, &candidate),
                severity_ranked(&FiveShift, &w, &candidate),
                "{w} with {candidate}"
            );
        }
    }
}

#[test]
fn three_shift_table_order_is_load_bearing() {
    // A free block matches the green, yellow and catch-all amber rules.
    let w = TemporalWindow::all_rest();
    assert_eq!(ThreeShift.classify(&w, &Late), Severity::Green);
    assert_eq!(severity_ranked(&ThreeShift, &w, &Late), Severity::Amber);
}

#[test]
fn default_keys_behave_identically() {
    let windows = all_windows();
    let procs = [
        resolver::resolve(""),
        resolver::resolve("bogus"),
        resolver::resolve("ROEHM_5SCHICHT"),
    ];
    for w in &windows {
        for candidate in ShiftCode::CANONICAL {
            let expected = procs[0].evaluate(w, &candidate);
            for rs in &procs[1..] {
                assert_eq!(rs.evaluate(w, &candidate), expected);
            }
        }
    }
}
