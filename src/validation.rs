//! Caller-side input checks.
//!
//! The classifier itself accepts anything. These checks exist for the
//! layers around it: window assembly can reject suspicious backend rows,
//! and the rule catalogs can be verified at startup. Detects:
//! - Duplicate day rows for one worker
//! - Shift codes outside the known alphabet
//! - Duplicate rule ids within a rule-set
//! - Empty rule groups
//! - Rule ids not prefixed by their group name
//!
//! All issues are collected; nothing stops at the first error.

use std::collections::HashSet;

use crate::roster::DayAssignment;
use crate::rules::RuleSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two rows assign the same day.
    DuplicateDay,
    /// A row carries a code outside the known alphabet.
    UnrecognizedCode,
    /// Two rules of one rule-set share an id.
    DuplicateRuleId,
    /// A rule group has no rules.
    EmptyGroup,
    /// A rule id does not start with `<group>.`.
    MisplacedRule,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates one worker's stored rows before building a roster.
///
/// Checks:
/// 1. No day appears twice
/// 2. Every code belongs to the known alphabet
pub fn validate_assignments(assignments: &[DayAssignment]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut days = HashSet::new();

    for a in assignments {
        if !days.insert(a.day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDay,
                format!("Day {} is assigned more than once", a.day),
            ));
        }
        if !a.code.is_known() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnrecognizedCode,
                format!("Day {} has unrecognized shift code '{}'", a.day, a.code),
            ));
        }
    }

    into_result(errors)
}

/// Validates the structure of a rule-set's catalog.
///
/// Checks:
/// 1. Rule ids are unique across the rule-set
/// 2. No group is empty
/// 3. Every rule id is prefixed by its group name
pub fn validate_rule_set(rule_set: &dyn RuleSet) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for group in rule_set.catalog() {
        if group.rules.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyGroup,
                format!("Rule group '{}' in '{}' has no rules", group.name, rule_set.name()),
            ));
        }

        for rule in group.rules {
            if !ids.insert(rule.id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateRuleId,
                    format!("Duplicate rule id '{}' in '{}'", rule.id, rule_set.name()),
                ));
            }
            let in_group = rule
                .id
                .strip_prefix(group.name)
                .is_some_and(|rest| rest.starts_with('.'));
            if !in_group {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MisplacedRule,
                    format!("Rule '{}' is listed under group '{}'", rule.id, group.name),
                ));
            }
        }
    }

    into_result(errors)
}
