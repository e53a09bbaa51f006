//! Roster domain models.
//!
//! Provides the input and output types of the classifier: the shift code
//! alphabet, the five-day window around a target day, and severity tags.
//!
//! # Domain Mappings
//!
//! | shift-rules | Roster | Generic scheduling |
//! |-------------|--------|--------------------|
//! | ShiftCode | Day assignment | Activity category |
//! | TemporalWindow | Two days either side | Sequence neighbourhood |
//! | Severity | Badge colour | Transition cost class |

mod severity;
mod shift;
mod window;

pub use severity::Severity;
pub use shift::ShiftCode;
pub use window::{Slot, TemporalWindow};
