//! Category validation and the optional semantic pass
//!
//! `check_category` backs the facade's expected-category parameter.
//! `check_semantics` is a separable, opt-in pass over an already-parsed
//! specification; `parse` never runs it, so the structural grammar/AST
//! contract stays minimal and independently testable.

use std::collections::HashSet;
use vellum_core::{
    Category, DefaultValue, ParseError, PrimitiveType, SchemaSpecification, TypeReference,
};

/// Check a parsed specification against the category the caller
/// expects (e.g. a version-edit form for a schema filed under
/// "event"). A mismatch is a document-level error with no location.
pub fn check_category(spec: &SchemaSpecification, expected: Category) -> Option<ParseError> {
    if spec.category == expected {
        return None;
    }
    Some(ParseError::document(format!(
        "Schema type mismatch: Expected \"{}\" but specification uses \"{}\"",
        expected, spec.category
    )))
}

/// Opt-in semantic pass: flags duplicate field names and default
/// values whose shape does not structurally agree with the field's
/// declared type. Returns one document-level error per finding.
pub fn check_semantics(spec: &SchemaSpecification) -> Vec<ParseError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for field in &spec.fields {
        if !seen.insert(field.name.as_str()) {
            errors.push(ParseError::document(format!(
                "Duplicate field name \"{}\"",
                field.name
            )));
        }

        if let Some(default) = &field.default_value {
            if !default_matches(&field.type_ref, default) {
                errors.push(ParseError::document(format!(
                    "Default value for field \"{}\" does not match its declared type \"{}\"",
                    field.name, field.type_ref
                )));
            }
        }
    }

    errors
}

/// Structural agreement between a declared type and a default literal.
/// No DSL literal inhabits special or qualified types, so any default
/// on those is a mismatch.
fn default_matches(type_ref: &TypeReference, default: &DefaultValue) -> bool {
    match (type_ref, default) {
        (TypeReference::Primitive(PrimitiveType::String), DefaultValue::String(_)) => true,
        (TypeReference::Primitive(PrimitiveType::Int), DefaultValue::Integer(_)) => true,
        (TypeReference::Primitive(PrimitiveType::Boolean), DefaultValue::Boolean(_)) => true,
        (TypeReference::Array(inner), DefaultValue::List(items)) => {
            items.iter().all(|item| default_matches(inner, item))
        }
        _ => false,
    }
}
