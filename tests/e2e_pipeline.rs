//! End-to-end pipeline test: Parse → Validate.

use gss_compiler::parse;
use gss_compiler::validate::{self, ValidationOptions};

#[test]
fn end_to_end_mixed_stylesheet_strict() {
    let json = include_str!("fixtures/mixed_stylesheet.json");
    let sheet = parse::parse(json).unwrap();

    let diagnostics = validate::validate_stylesheet(&sheet, &ValidationOptions::strict());
    assert!(diagnostics.has_errors());

    let found: Vec<(String, u32, u32)> = diagnostics
        .iter()
        .map(|d| {
            let loc = d.location.expect("validation findings carry a location");
            (d.code.clone(), loc.begin.line, loc.begin.column)
        })
        .collect();
    assert_eq!(
        found,
        vec![("R001".to_string(), 5, 3), ("R002".to_string(), 6, 3)]
    );
}

#[test]
fn end_to_end_mixed_stylesheet_lenient() {
    let json = include_str!("fixtures/mixed_stylesheet.json");
    let sheet = parse::parse(json).unwrap();

    let diagnostics = validate::validate_stylesheet(&sheet, &ValidationOptions::lenient());
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.warnings().count(), 2);
}

#[test]
fn end_to_end_clean_stylesheet() {
    let json = include_str!("fixtures/clean_stylesheet.json");
    let sheet = parse::parse(json).unwrap();

    let diagnostics = validate::validate_stylesheet(&sheet, &ValidationOptions::strict());
    assert!(diagnostics.is_empty(), "Expected no diagnostics, got: {:?}", diagnostics);
}
