//! Unified diagnostic type used across all phases.

use serde::Serialize;

use crate::parse::types::SourceLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Parse,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

/// How a consumer should treat a diagnostic. Whether an error aborts the
/// pipeline is up to whoever drains the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("[{phase}:{code}] {severity}: {message}{}", at_suffix(.location))]
pub struct Diagnostic {
    pub code: String,
    pub phase: Phase,
    pub severity: Severity,
    pub message: String,
    /// Where the offending node starts and ends, if the node carried a location.
    pub location: Option<SourceLocation>,
    /// Innermost runtime conditional enclosing the offending node.
    pub enclosing: Option<SourceLocation>,
}

fn at_suffix(location: &Option<SourceLocation>) -> String {
    match location {
        Some(loc) => format!(" (at {})", loc),
        None => String::new(),
    }
}

impl Diagnostic {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        Diagnostic {
            code: code.into(),
            phase: Phase::Parse,
            severity: Severity::Error,
            message: message.into(),
            location: None,
            enclosing: None,
        }
    }

    pub fn validate(
        code: &str,
        severity: Severity,
        message: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Diagnostic {
            code: code.into(),
            phase: Phase::Validate,
            severity,
            message: message.into(),
            location: Some(location),
            enclosing: None,
        }
    }

    pub fn with_enclosing(mut self, enclosing: Option<SourceLocation>) -> Self {
        self.enclosing = enclosing;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::types::Position;

    #[test]
    fn display_includes_phase_code_and_location() {
        let loc = SourceLocation::new(Position::new(3, 5, 40), Position::new(3, 18, 53));
        let d = Diagnostic::validate("R001", Severity::Warning, "nope", loc);
        assert_eq!(d.to_string(), "[Validate:R001] warning: nope (at 3:5)");
    }

    #[test]
    fn display_without_location() {
        let d = Diagnostic::parse("P001", "bad json");
        assert_eq!(d.to_string(), "[Parse:P001] error: bad json");
        assert!(d.is_error());
    }
}
