//! Property-Based Tests for the Schema DSL Parser
//!
//! Properties pinned here:
//! - Any category keyword + any valid identifier parses to an empty
//!   schema with that category and name.
//! - Field declaration order survives parsing exactly.
//! - Parsing is deterministic: equal inputs yield deep-equal results.
//! - The parser never panics, whatever the input; failures always
//!   carry a non-empty message and 1-based locations when positioned.

use proptest::prelude::*;
use vellum_dsl::{parse, Category, DefaultValue, PrimitiveType, TypeReference};

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Command),
        Just(Category::Data),
        Just(Category::Document),
        Just(Category::Envelope),
        Just(Category::Event),
        Just(Category::Query),
    ]
}

/// A valid DSL identifier: a letter, then letters/digits/underscores.
fn arb_identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}"
}

fn arb_primitive() -> impl Strategy<Value = PrimitiveType> {
    prop_oneof![
        Just(PrimitiveType::String),
        Just(PrimitiveType::Int),
        Just(PrimitiveType::Boolean),
    ]
}

proptest! {
    #[test]
    fn prop_category_and_name_round_trip(category in arb_category(), name in arb_identifier()) {
        let source = format!("{} {} {{ }}", category.as_str(), name);
        let result = parse(&source, None);
        prop_assert!(result.success);

        let spec = result.specification.unwrap();
        prop_assert_eq!(spec.category, category);
        prop_assert_eq!(spec.name, name);
        prop_assert!(spec.fields.is_empty());
    }

    #[test]
    fn prop_field_order_is_preserved(
        names in prop::collection::vec(arb_identifier(), 0..24),
        primitive in arb_primitive(),
    ) {
        let mut source = String::from("event Ordered {\n");
        for name in &names {
            source.push_str(&format!("  {} {}\n", primitive.as_str(), name));
        }
        source.push('}');

        let result = parse(&source, None);
        prop_assert!(result.success);

        let spec = result.specification.unwrap();
        let parsed: Vec<&str> = spec.fields.iter().map(|f| f.name.as_str()).collect();
        let declared: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed, declared);
    }

    #[test]
    fn prop_integer_defaults_round_trip(name in arb_identifier(), value in any::<i32>()) {
        let source = format!("event X {{ int {} = {} }}", name, value);
        let result = parse(&source, None);
        prop_assert!(result.success);

        let spec = result.specification.unwrap();
        prop_assert_eq!(
            spec.fields[0].default_value.clone(),
            Some(DefaultValue::Integer(value as i64))
        );
    }

    #[test]
    fn prop_integer_list_defaults_preserve_order(
        values in prop::collection::vec(any::<i16>(), 0..16),
    ) {
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let source = format!("event X {{ int[] xs = {{ {} }} }}", rendered.join(", "));
        let result = parse(&source, None);
        prop_assert!(result.success);

        let expected: Vec<DefaultValue> =
            values.iter().map(|v| DefaultValue::Integer(*v as i64)).collect();
        let spec = result.specification.unwrap();
        prop_assert_eq!(
            spec.fields[0].default_value.clone(),
            Some(DefaultValue::List(expected))
        );
    }

    #[test]
    fn prop_bare_identifiers_classify_by_precedence(name in arb_identifier()) {
        let source = format!("event X {{ {} field0 }}", name);
        let result = parse(&source, None);
        prop_assert!(result.success);

        let spec = result.specification.unwrap();
        let expected = if let Some(special) = vellum_dsl::SpecialType::from_keyword(&name) {
            TypeReference::Special(special)
        } else if let Some(primitive) = PrimitiveType::from_keyword(&name) {
            TypeReference::Primitive(primitive)
        } else {
            TypeReference::Qualified { namespace: None, type_name: name.clone() }
        };
        prop_assert_eq!(spec.fields[0].type_ref.clone(), expected);
    }

    #[test]
    fn prop_parse_is_deterministic(source in ".{0,200}") {
        let first = parse(&source, None);
        let second = parse(&source, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_parser_never_panics_and_errors_are_well_formed(source in "\\PC{0,200}") {
        let result = parse(&source, None);
        if result.success {
            prop_assert!(result.specification.is_some());
            prop_assert!(result.errors.is_empty());
        } else {
            prop_assert!(result.specification.is_none());
            prop_assert_eq!(result.errors.len(), 1);

            let err = &result.errors[0];
            prop_assert!(!err.message.is_empty());
            if let Some(location) = err.location {
                prop_assert!(location.start.line >= 1);
                prop_assert!(location.start.column >= 1);
                prop_assert!(location.end.line >= location.start.line);
            }
        }
    }

    #[test]
    fn prop_structured_garbage_never_panics(
        category in arb_category(),
        junk in "[{}\\[\\],=.\"a-z0-9 ]{0,80}",
    ) {
        let source = format!("{} X {{ {} }}", category.as_str(), junk);
        // Outcome is input-dependent; the property is absence of panics
        // and the one-diagnostic failure shape.
        let result = parse(&source, None);
        prop_assert!(result.errors.len() <= 1);
    }
}
