//! Rejects constant definitions and `@external` at-rules nested inside
//! conditional blocks that are evaluated at runtime.
//!
//! Compile-time conditionals are gone by the time this pass runs, so every
//! [`ConditionalRule`] in the tree selects its branch at runtime. A constant
//! defined under one cannot have a value independent of the branch taken.

use crate::error::{Diagnostic, Severity};
use crate::parse::types::*;
use crate::visit::{VisitAction, Visitor, walk_stylesheet};

use super::CompilerPass;
use super::sink::DiagnosticSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeConditionalFinding {
    DefinitionInRuntimeConditional,
    ExternalAtRuleInRuntimeConditional,
}

impl RuntimeConditionalFinding {
    pub fn code(self) -> &'static str {
        match self {
            Self::DefinitionInRuntimeConditional => "R001",
            Self::ExternalAtRuleInRuntimeConditional => "R002",
        }
    }

    pub fn message(self, lenient: bool) -> String {
        let what = match self {
            Self::DefinitionInRuntimeConditional => "a constant",
            Self::ExternalAtRuleInRuntimeConditional => "an @external at-rule",
        };
        if lenient {
            format!(
                "You should not define {what} inside a conditional block that will be \
                 evaluated at runtime. This will be disallowed in a future release."
            )
        } else {
            format!(
                "You cannot define {what} inside a conditional block that will be \
                 evaluated at runtime."
            )
        }
    }
}

pub struct ConditionalScopeValidator<'s, S: DiagnosticSink + ?Sized> {
    sink: &'s mut S,
    lenient: bool,
    /// Locations of the runtime conditional rules enclosing the current node,
    /// innermost last.
    scopes: Vec<SourceLocation>,
}

impl<'s, S: DiagnosticSink + ?Sized> ConditionalScopeValidator<'s, S> {
    pub fn new(sink: &'s mut S, lenient: bool) -> Self {
        Self {
            sink,
            lenient,
            scopes: Vec::new(),
        }
    }

    pub fn lenient(&self) -> bool {
        self.lenient
    }

    /// Number of runtime conditionals currently open. Zero outside a run.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Walk the whole stylesheet, reporting every violation found. Never stops
    /// early; whether an error is fatal is for the sink's owner to decide.
    pub fn run(&mut self, sheet: &Stylesheet) {
        self.scopes.clear();
        tracing::debug!(
            source = %sheet.source_name,
            lenient = self.lenient,
            "validating runtime conditional scopes"
        );

        walk_stylesheet(sheet, self);

        assert!(
            self.scopes.is_empty(),
            "{} runtime conditional scope(s) still open after traversal",
            self.scopes.len()
        );
    }

    fn in_conditional_rule(&self) -> bool {
        !self.scopes.is_empty()
    }

    fn report(&mut self, finding: RuntimeConditionalFinding, location: SourceLocation) {
        let severity = if self.lenient {
            Severity::Warning
        } else {
            Severity::Error
        };
        tracing::debug!(code = finding.code(), %severity, at = %location, "runtime conditional violation");

        let diagnostic = Diagnostic::validate(
            finding.code(),
            severity,
            finding.message(self.lenient),
            location,
        )
        .with_enclosing(self.scopes.last().copied());
        self.sink.report(diagnostic);
    }
}

impl<'ast, S: DiagnosticSink + ?Sized> Visitor<'ast> for ConditionalScopeValidator<'_, S> {
    fn enter_conditional_rule(&mut self, node: &'ast ConditionalRule) -> VisitAction {
        self.scopes.push(node.location);
        tracing::trace!(depth = self.scopes.len(), at = %node.location, "enter runtime conditional");
        VisitAction::Descend
    }

    fn leave_conditional_rule(&mut self, node: &'ast ConditionalRule) {
        let Some(top) = self.scopes.pop() else {
            panic!(
                "left conditional rule at {} with no open scope; traversal is unbalanced",
                node.location
            );
        };
        assert_eq!(
            top, node.location,
            "left conditional rule at {} but innermost open scope is at {}",
            node.location, top
        );
        tracing::trace!(depth = self.scopes.len(), at = %node.location, "leave runtime conditional");
    }

    fn enter_definition(&mut self, node: &'ast Definition) -> VisitAction {
        if self.in_conditional_rule() {
            self.report(
                RuntimeConditionalFinding::DefinitionInRuntimeConditional,
                node.location,
            );
        }
        VisitAction::SkipChildren
    }

    fn enter_unknown_at_rule(&mut self, node: &'ast UnknownAtRule) -> VisitAction {
        if self.in_conditional_rule() && node.is_external() {
            self.report(
                RuntimeConditionalFinding::ExternalAtRuleInRuntimeConditional,
                node.location,
            );
        }
        VisitAction::Descend
    }
}

impl<S: DiagnosticSink + ?Sized> CompilerPass for ConditionalScopeValidator<'_, S> {
    fn name(&self) -> &'static str {
        "validate-runtime-conditionals"
    }

    fn run_pass(&mut self, sheet: &Stylesheet) {
        self.run(sheet);
    }
}
