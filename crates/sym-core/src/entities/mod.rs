//! Entity structs for all symcheck domain objects.
//!
//! Each entity maps to one table in the libSQL database. Relations are held as
//! plain ids; resolving them is an explicit keyed lookup in `sym-db`.

mod api_call;
mod condition;
mod mapping;
mod rule;
mod session;
mod symptom;

pub use api_call::{ApiCall, NewApiCall};
pub use condition::{Condition, NewCondition};
pub use mapping::SymptomConditionMapping;
pub use rule::{MedicalRule, NewMedicalRule};
pub use session::{NewSymptomSession, SymptomSession};
pub use symptom::{NewSymptom, Symptom};

use crate::errors::CoreError;

/// Check that a weight (mapping strength, rule confidence) lies in `[0, 1]`.
///
/// # Errors
///
/// Returns `CoreError::Validation` for values outside the range or NaN.
pub fn check_unit_interval(field: &str, value: f64) -> Result<f64, CoreError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be within [0, 1], got {value}"
        )))
    }
}
