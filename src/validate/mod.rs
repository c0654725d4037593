//! Validation passes over the stylesheet AST.
//!
//! Passes only observe the tree; findings go to a [`DiagnosticSink`].

pub mod runtime_conditional;
pub mod sink;

pub use runtime_conditional::{ConditionalScopeValidator, RuntimeConditionalFinding};
pub use sink::{DiagnosticSink, Diagnostics};

use serde::Deserialize;

use crate::parse::types::Stylesheet;

/// A single stage of the stylesheet pipeline.
pub trait CompilerPass {
    fn name(&self) -> &'static str;
    fn run_pass(&mut self, sheet: &Stylesheet);
}

/// Options fixed for the lifetime of one validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Report violations as warnings instead of errors.
    pub lenient: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self { lenient: false }
    }

    pub fn lenient() -> Self {
        Self { lenient: true }
    }
}

/// Run every validation pass over the stylesheet. Returns all findings.
pub fn validate_stylesheet(sheet: &Stylesheet, options: &ValidationOptions) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    {
        let mut passes: Vec<Box<dyn CompilerPass + '_>> = vec![Box::new(
            ConditionalScopeValidator::new(&mut diagnostics, options.lenient),
        )];
        for pass in &mut passes {
            tracing::debug!(pass = pass.name(), "running pass");
            pass.run_pass(sheet);
        }
    }
    tracing::debug!(findings = diagnostics.len(), "validation finished");
    diagnostics
}
