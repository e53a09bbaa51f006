//! Shift-transition classifier for roster planning.
//!
//! Given the shift assignments two days either side of a target day and a
//! candidate shift proposed for that day, decides how desirable the
//! assignment is. Planners consult it when reassigning a worker to cover a
//! shortage; the resulting tag drives a colour badge and whether the worker
//! is worth notifying.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ShiftCode`, `TemporalWindow`, `Slot`, `Severity`
//! - **`rules`**: The `RuleSet` trait and the compiled-in rule-sets (`FiveShift`, `ThreeShift`)
//! - **`resolver`**: Rule-set lookup by configuration key, with a default
//! - **`config`**: Serde-loadable classifier settings
//! - **`roster`**: Window assembly from a worker's stored assignments
//! - **`validation`**: Input integrity checks (duplicate days, unknown codes, rule catalogs)
//!
//! # Evaluation
//!
//! Rule-sets are ordered decision tables. The first rule whose guard holds
//! decides the tag; severity never breaks ties. When no rule holds the
//! result is `Severity::Unclassified`, a neutral outcome rather than an
//! error.
//!
//! ```
//! use shift_rules::models::{Severity, ShiftCode, TemporalWindow};
//! use shift_rules::resolver;
//!
//! let window = TemporalWindow::new(
//!     ShiftCode::Sick,
//!     ShiftCode::Rest,
//!     ShiftCode::Rest,
//!     ShiftCode::Rest,
//!     ShiftCode::Late,
//! );
//! let rule_set = resolver::resolve("ROEHM_5SCHICHT");
//! assert_eq!(rule_set.classify(&window, &ShiftCode::Early), Severity::Green);
//! ```

pub mod config;
pub mod models;
pub mod resolver;
pub mod roster;
pub mod rules;
pub mod validation;
