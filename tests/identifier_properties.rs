//! Property-based tests for eMI3 identifier generation
//!
//! These tests verify the format contract and uniqueness guarantee across
//! arbitrary well-formed and malformed segment inputs.

use ocpi_locations::domain::{Emi3Id, IdentifierGenerator, ObjectIdSource};
use ocpi_locations::InvalidArgument;
use proptest::prelude::*;
use std::collections::HashSet;

fn is_token(s: &str) -> bool {
    s.len() == 24 && s.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

// Property test generators
mod generators {
    use super::*;
    use proptest::string::string_regex;

    /// Segments that never contain the separator
    pub fn segment() -> impl Strategy<Value = String> {
        string_regex("[A-Za-z0-9 _.-]{1,8}").unwrap()
    }

    /// Non-empty strings with at least one separator somewhere
    pub fn segment_with_separator() -> impl Strategy<Value = String> {
        (string_regex("[A-Z]{0,3}").unwrap(), string_regex("[A-Z]{0,3}").unwrap())
            .prop_map(|(head, tail)| format!("{head}*{tail}"))
    }
}

proptest! {
    #[test]
    fn prop_identifier_without_type_has_three_segments(
        country_code in generators::segment(),
        party_id in generators::segment(),
    ) {
        let id = IdentifierGenerator::process_wide()
            .generate_compliant_identifier(&country_code, &party_id, None)
            .unwrap()
            .to_string();

        let prefix = format!("{country_code}*{party_id}*");
        prop_assert!(id.starts_with(&prefix));
        let suffix = &id[prefix.len()..];
        prop_assert!(is_token(suffix), "suffix {} is not 24 upper-case hex", suffix);
        prop_assert_eq!(id.matches('*').count(), 2);
    }

    #[test]
    fn prop_identifier_with_type_has_four_segments(
        country_code in generators::segment(),
        party_id in generators::segment(),
        type_id in generators::segment(),
    ) {
        let id = IdentifierGenerator::process_wide()
            .generate_compliant_identifier(&country_code, &party_id, Some(&type_id))
            .unwrap()
            .to_string();

        let prefix = format!("{country_code}*{party_id}*{type_id}*");
        prop_assert!(id.starts_with(&prefix));
        prop_assert!(is_token(&id[prefix.len()..]));
        prop_assert_eq!(id.matches('*').count(), 3);
    }

    #[test]
    fn prop_rendered_identifier_parses_back(
        country_code in generators::segment(),
        party_id in generators::segment(),
        type_id in prop::option::of(generators::segment()),
    ) {
        let id = IdentifierGenerator::process_wide()
            .generate_compliant_identifier(&country_code, &party_id, type_id.as_deref())
            .unwrap();

        let parsed: Emi3Id = id.to_string().parse().unwrap();
        prop_assert_eq!(&parsed, &id);
        prop_assert_eq!(parsed.country_code().to_string(), country_code);
        prop_assert_eq!(parsed.type_id().map(ToString::to_string), type_id);
    }

    #[test]
    fn prop_separator_in_any_segment_is_rejected(
        valid in generators::segment(),
        invalid in generators::segment_with_separator(),
        position in 0..3usize,
    ) {
        let (country_code, party_id, type_id) = match position {
            0 => (invalid.as_str(), valid.as_str(), None),
            1 => (valid.as_str(), invalid.as_str(), None),
            _ => (valid.as_str(), valid.as_str(), Some(invalid.as_str())),
        };

        let result = IdentifierGenerator::process_wide()
            .generate_compliant_identifier(country_code, party_id, type_id);
        prop_assert!(
            matches!(result, Err(InvalidArgument::SeparatorInSegment { .. })),
            "unexpected result {:?}",
            result
        );
    }

    #[test]
    fn prop_unique_identifiers_never_repeat(n in 1..500usize) {
        let generator = IdentifierGenerator::process_wide();
        let mut seen = HashSet::new();
        for _ in 0..n {
            let token = generator.generate_unique_identifier();
            prop_assert!(is_token(&token.to_string()));
            prop_assert!(seen.insert(token));
        }
    }
}

#[test]
fn empty_country_code_is_invalid_argument() {
    let result = IdentifierGenerator::process_wide().generate_compliant_identifier("", "ABC", None);
    assert_eq!(result, Err(InvalidArgument::MissingCountryCode));
}

#[test]
fn empty_party_id_is_invalid_argument() {
    let result = IdentifierGenerator::process_wide().generate_compliant_identifier("NL", "", None);
    assert_eq!(result, Err(InvalidArgument::MissingPartyId));
}

#[test]
fn ten_thousand_identifiers_are_distinct() {
    let generator = IdentifierGenerator::process_wide();
    let ids: HashSet<String> = (0..10_000)
        .map(|_| {
            generator
                .generate_compliant_identifier("NL", "ABC", Some("E"))
                .unwrap()
                .to_string()
        })
        .collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn evse_example_has_exact_prefix_and_shape() {
    let id = IdentifierGenerator::process_wide()
        .generate_compliant_identifier("DE", "ALD", Some("E"))
        .unwrap()
        .to_string();

    assert!(id.starts_with("DE*ALD*E*"));
    assert!(is_token(&id["DE*ALD*E*".len()..]));
}

#[test]
fn unique_identifiers_differ_and_have_no_separator() {
    let generator = IdentifierGenerator::process_wide();
    let first = generator.generate_unique_identifier().to_string();
    let second = generator.generate_unique_identifier().to_string();

    assert_ne!(first, second);
    assert!(is_token(&first));
    assert!(is_token(&second));
    assert!(!first.contains('*'));
}

#[test]
fn generated_suffix_carries_creation_time() {
    let before = chrono::Utc::now().timestamp();
    let token = IdentifierGenerator::process_wide().generate_unique_identifier();
    let after = chrono::Utc::now().timestamp();

    let embedded = ObjectIdSource::timestamp_of(&token).unwrap().timestamp();
    assert!((before..=after).contains(&embedded));
}
