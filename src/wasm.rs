//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::Diagnostic;
use crate::validate::{self, ValidationOptions};

/// Validate a stylesheet AST JSON with the given options JSON (`{}` or
/// `{"lenient": true}`).
/// Returns a JSON object with `status` and the list of `diagnostics`.
#[wasm_bindgen]
pub fn validate_stylesheet(json: &str, options_json: &str) -> JsValue {
    let result = validate_stylesheet_inner(json, options_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_stylesheet_inner(json: &str, options_json: &str) -> ValidateResult {
    let options = match parse_options(options_json) {
        Ok(o) => o,
        Err(error) => return ValidateResult::from_diagnostics(vec![error]),
    };

    let sheet = match crate::parse::parse(json) {
        Ok(s) => s,
        Err(errors) => return ValidateResult::from_diagnostics(errors),
    };

    let diagnostics = validate::validate_stylesheet(&sheet, &options);
    ValidateResult::from_diagnostics(diagnostics.into_vec())
}

fn parse_options(options_json: &str) -> Result<ValidationOptions, Diagnostic> {
    if options_json.trim().is_empty() {
        return Ok(ValidationOptions::default());
    }
    serde_json::from_str::<ValidationOptions>(options_json).map_err(|e| {
        Diagnostic::parse("P002", format!("Failed to parse validation options JSON: {}", e))
    })
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
struct DiagnosticDto {
    code: String,
    phase: String,
    severity: String,
    message: String,
    line: Option<u32>,
    column: Option<u32>,
}

impl From<Diagnostic> for DiagnosticDto {
    fn from(d: Diagnostic) -> Self {
        DiagnosticDto {
            code: d.code,
            phase: d.phase.to_string(),
            severity: d.severity.to_string(),
            message: d.message,
            line: d.location.map(|l| l.begin.line),
            column: d.location.map(|l| l.begin.column),
        }
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "status")]
enum ValidateResult {
    /// Nothing fatal; warnings may still be present.
    #[serde(rename = "ok")]
    Ok { diagnostics: Vec<DiagnosticDto> },
    #[serde(rename = "errors")]
    Errors { diagnostics: Vec<DiagnosticDto> },
}

impl ValidateResult {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let fatal = diagnostics.iter().any(Diagnostic::is_error);
        let diagnostics = diagnostics.into_iter().map(DiagnosticDto::from).collect();
        if fatal {
            ValidateResult::Errors { diagnostics }
        } else {
            ValidateResult::Ok { diagnostics }
        }
    }
}
