// src/services/validation.rs
// DOCUMENTATION: Validation of place payloads
// PURPOSE: Turn a raw request body into a PlaceInput or a per-field error map

use crate::models::{FieldErrors, PlaceInput, PlaceRequest, MAX_FIELD_LENGTH};
use validator::{Validate, ValidationError, ValidationErrors};

/// Validate a create/update payload
/// DOCUMENTATION: Non-string values are rejected per field; string fields are
/// trimmed and blank counts as missing. On failure every offending field is
/// reported, not just the first one.
pub fn validate_place(req: &PlaceRequest) -> Result<PlaceInput, FieldErrors> {
    let (fields, mut errors) = req.fields();
    let normalized = fields.normalized();

    if let Err(rule_errors) = normalized.validate() {
        // A wrong-typed field keeps its type message instead of "required"
        for (field, messages) in to_field_errors(&rule_errors) {
            errors.entry(field).or_insert(messages);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    match (normalized.name, normalized.city, normalized.state) {
        (Some(name), Some(city), Some(state)) => Ok(PlaceInput { name, city, state }),
        (name, city, state) => Err([("city", city), ("name", name), ("state", state)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| (field.to_string(), vec![required_message(field)]))
            .collect()),
    }
}

fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs.iter().map(|e| message_for(field, e)).collect();
            (field.to_string(), messages)
        })
        .collect()
}

fn message_for(field: &str, error: &ValidationError) -> String {
    match &*error.code {
        "required" => required_message(field),
        "length" => format!(
            "The {} field must not be greater than {} characters.",
            field, MAX_FIELD_LENGTH
        ),
        _ => format!("The {} field is invalid.", field),
    }
}

fn required_message(field: &str) -> String {
    format!("The {} field is required.", field)
}
