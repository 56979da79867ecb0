//! Parse-tree to specification conversion
//!
//! Pure structural transform; only called on a conforming parse tree
//! and never fails. Type classification follows an explicit ordered
//! precedence so it can be audited and tested in isolation: reserved
//! special keywords first, then primitive keywords, then qualified
//! names. Default-value shape is intentionally NOT checked here; the
//! separable semantic pass in `validation` covers that.

use crate::parser::cst::{FieldNode, LiteralNode, SchemaNode, TypeNode};
use vellum_core::{
    DefaultValue, Field, PrimitiveType, SchemaSpecification, SpecialType, TypeReference,
};

/// Ordered classifier table for undotted type names. Earlier entries
/// win; anything unclaimed falls through to a qualified reference.
const CLASSIFIERS: &[fn(&str) -> Option<TypeReference>] = &[classify_special, classify_primitive];

fn classify_special(name: &str) -> Option<TypeReference> {
    SpecialType::from_keyword(name).map(TypeReference::Special)
}

fn classify_primitive(name: &str) -> Option<TypeReference> {
    PrimitiveType::from_keyword(name).map(TypeReference::Primitive)
}

/// Flatten a conforming parse tree into the public specification.
pub fn to_specification(node: SchemaNode) -> SchemaSpecification {
    SchemaSpecification {
        category: node.category,
        name: node.name,
        fields: node.fields.into_iter().map(to_field).collect(),
    }
}

fn to_field(node: FieldNode) -> Field {
    Field {
        name: node.name,
        type_ref: to_type_ref(node.type_ref),
        default_value: node.default.map(to_default),
    }
}

fn to_type_ref(node: TypeNode) -> TypeReference {
    let base = match node.member {
        // A dotted name is always a qualified reference.
        Some(member) => TypeReference::Qualified {
            namespace: Some(node.head),
            type_name: member,
        },
        None => classify(node.head),
    };

    if node.is_array {
        TypeReference::array(base)
    } else {
        base
    }
}

/// Classify an undotted type name: special keyword, then primitive
/// keyword, then bare qualified reference.
fn classify(name: String) -> TypeReference {
    for classifier in CLASSIFIERS {
        if let Some(type_ref) = classifier(&name) {
            return type_ref;
        }
    }
    TypeReference::Qualified {
        namespace: None,
        type_name: name,
    }
}

fn to_default(node: LiteralNode) -> DefaultValue {
    match node {
        LiteralNode::String(s) => DefaultValue::String(s),
        LiteralNode::Integer(n) => DefaultValue::Integer(n),
        LiteralNode::Boolean(b) => DefaultValue::Boolean(b),
        LiteralNode::List(items) => {
            DefaultValue::List(items.into_iter().map(to_default).collect())
        }
    }
}
