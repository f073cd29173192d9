//! Field definition validation.
//!
//! Checks a single field definition for completeness and consistency
//! before any of its markup is emitted. A malformed definition is a
//! reportable condition, never a panic; the first problem found is
//! returned and the caller skips that field's markup.

use crate::DiagnosticKind;
use lampcfg_schema::{FieldDefinition, FieldType, FieldValue};

/// Validate one field definition, returning the first problem found.
pub fn validate(def: &FieldDefinition) -> Result<(), DiagnosticKind> {
    if def.label_for.is_empty() {
        return Err(DiagnosticKind::EmptyLabelIdentifier);
    }
    if def.label.is_empty() {
        return Err(DiagnosticKind::MissingLabel);
    }
    check_default_type(def)?;
    check_bounds(def)?;
    Ok(())
}

/// The default's representation must match the declared field type.
fn check_default_type(def: &FieldDefinition) -> Result<(), DiagnosticKind> {
    let matches = matches!(
        (def.field_type, &def.default),
        (FieldType::Bool, FieldValue::Bool(_))
            | (FieldType::Text, FieldValue::Text(_))
            | (FieldType::Password, FieldValue::Text(_))
            | (FieldType::Uint8, FieldValue::Number(_))
            | (FieldType::Uint16, FieldValue::Number(_))
            | (FieldType::Ipv4, FieldValue::Ipv4(_))
    );
    if matches {
        Ok(())
    } else {
        Err(DiagnosticKind::DefaultTypeMismatch {
            expected: def.field_type,
            value: def.default.clone(),
        })
    }
}

/// Numeric fields: the effective range must sit inside the type's bounds
/// and contain the default.
fn check_bounds(def: &FieldDefinition) -> Result<(), DiagnosticKind> {
    let Some((type_lo, type_hi)) = def.field_type.bounds() else {
        return Ok(());
    };
    let min = def.min.unwrap_or(type_lo);
    let max = def.max.unwrap_or(type_hi);
    if min > max || min < type_lo || max > type_hi {
        return Err(DiagnosticKind::InvalidRange {
            field_type: def.field_type,
            min,
            max,
        });
    }
    if let FieldValue::Number(value) = def.default {
        if value < min || value > max {
            return Err(DiagnosticKind::DefaultOutOfRange { value, min, max });
        }
    }
    Ok(())
}
