//! Classifier configuration.
//!
//! A roster's settings name the rule-set it plans with. The key is resolved
//! leniently by default; `strict` turns an unknown key into an error.
//!
//! ```
//! use shift_rules::config::ClassifierConfig;
//! use shift_rules::resolver::RuleSetKind;
//!
//! let config = ClassifierConfig::new("3-shift");
//! let classifier = config.build().unwrap();
//! assert_eq!(classifier.kind(), RuleSetKind::ThreeShift);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Severity, ShiftCode, TemporalWindow};
use crate::resolver::{self, RuleSetKind, UnknownRuleSet};
use crate::rules::{RuleSet, Verdict};

/// Errors from building a [`Classifier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Strict mode and the rule-set key is not recognized.
    #[error(transparent)]
    UnknownRuleSet(#[from] UnknownRuleSet),
}

/// Classifier settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Rule-set key. Empty selects the default rule-set.
    pub rule_set: String,
    /// Reject unknown keys instead of falling back to the default.
    pub strict: bool,
}

impl ClassifierConfig {
    /// Lenient configuration for the given key.
    pub fn new(rule_set: impl Into<String>) -> Self {
        Self {
            rule_set: rule_set.into(),
            strict: false,
        }
    }

    /// Enables strict key checking.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Resolves the configured rule-set.
    pub fn build(&self) -> Result<Classifier, ConfigError> {
        let kind = if self.strict {
            self.rule_set.parse::<RuleSetKind>()?
        } else {
            resolver::resolve_kind(&self.rule_set)
        };
        Ok(Classifier::new(kind))
    }
}

/// A resolved rule-set ready for evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    kind: RuleSetKind,
    rule_set: &'static dyn RuleSet,
}

impl Classifier {
    /// Classifier for the given rule-set.
    pub fn new(kind: RuleSetKind) -> Self {
        Self {
            kind,
            rule_set: kind.rule_set(),
        }
    }

    /// The selected rule-set kind.
    pub fn kind(&self) -> RuleSetKind {
        self.kind
    }

    /// The underlying decision procedure.
    pub fn rule_set(&self) -> &'static dyn RuleSet {
        self.rule_set
    }

    /// See [`RuleSet::classify`].
    pub fn classify(&self, window: &TemporalWindow, candidate: &ShiftCode) -> Severity {
        self.rule_set.classify(window, candidate)
    }

    /// See [`RuleSet::evaluate`].
    pub fn evaluate(&self, window: &TemporalWindow, candidate: &ShiftCode) -> Verdict {
        self.rule_set.evaluate(window, candidate)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleSetKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let classifier = ClassifierConfig::default().build().unwrap();
        assert_eq!(classifier.kind(), RuleSetKind::FiveShift);
        assert_eq!(Classifier::default().kind(), RuleSetKind::FiveShift);
    }

    #[test]
    fn test_lenient_unknown_key() {
        let classifier = ClassifierConfig::new("weekly").build().unwrap();
        assert_eq!(classifier.kind(), RuleSetKind::FiveShift);
    }

    #[test]
    fn test_strict_unknown_key() {
        let err = ClassifierConfig::new("weekly").strict().build().unwrap_err();
        assert_eq!(err, ConfigError::UnknownRuleSet(UnknownRuleSet("weekly".into())));
        assert_eq!(err.to_string(), "unknown rule set key: \"weekly\"");
    }

    #[test]
    fn test_strict_known_key() {
        let classifier = ClassifierConfig::new("ROEHM_5SCHICHT").strict().build().unwrap();
        assert_eq!(classifier.kind(), RuleSetKind::FiveShift);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClassifierConfig = serde_json::from_str(r#"{"rule_set": "3schicht"}"#).unwrap();
        assert!(!config.strict);
        assert_eq!(config.build().unwrap().kind(), RuleSetKind::ThreeShift);

        let empty: ClassifierConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ClassifierConfig::default());
    }

    #[test]
    fn test_classify_delegates() {
        let w = TemporalWindow::all_rest();
        let classifier = ClassifierConfig::new("3-shift").build().unwrap();
        assert_eq!(classifier.classify(&w, &ShiftCode::Late), Severity::Green);
        assert_eq!(classifier.evaluate(&w, &ShiftCode::Late).rule_id, Some("flat.3"));
    }
}
