//! Form payloads posted by dashboard screens.

use std::collections::HashMap;

use validator::ValidationErrors;

pub mod applications;
pub mod auth;
pub mod partners;
pub mod settings;

/// Flattens validation output into one message per field so templates can
/// show errors next to the inputs that caused them.
pub fn field_errors(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .iter()
                .filter_map(|error| error.message.as_deref())
                .next()
                .unwrap_or("invalid value")
                .to_string();
            (field.to_string(), message)
        })
        .collect()
}
