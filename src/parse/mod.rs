//! Parse phase: AST JSON → Rust types.

pub mod types;

pub use types::*;

use crate::error::Diagnostic;

/// Deserialize a stylesheet AST JSON string into a `Stylesheet`.
pub fn parse(json: &str) -> Result<Stylesheet, Vec<Diagnostic>> {
    serde_json::from_str::<Stylesheet>(json).map_err(|e| {
        vec![Diagnostic::parse(
            "P001",
            format!("Failed to parse stylesheet JSON: {}", e),
        )]
    })
}
