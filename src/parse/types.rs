//! Rust types for the stylesheet AST handed over by the upstream parser.
//!
//! The tree is a closed union: every node kind the compiler still sees after
//! compile-time conditional elimination has a variant in [`Node`]. Only
//! runtime conditionals survive to this stage.

use serde::{Deserialize, Serialize};

// =============================================================================
// SOURCE LOCATIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    /// Byte offset from the start of the source.
    pub offset: u32,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub begin: Position,
    pub end: Position,
}

impl SourceLocation {
    pub fn new(begin: Position, end: Position) -> Self {
        Self { begin, end }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.begin.line, self.begin.column)
    }
}

// =============================================================================
// TOP-LEVEL STYLESHEET
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stylesheet {
    #[serde(default)]
    pub source_name: String,
    pub nodes: Vec<Node>,
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "conditionalBlock")]
    ConditionalBlock(ConditionalBlock),
    #[serde(rename = "definition")]
    Definition(Definition),
    #[serde(rename = "unknownAtRule")]
    UnknownAtRule(UnknownAtRule),
    #[serde(rename = "ruleset")]
    Ruleset(Ruleset),
    #[serde(rename = "declaration")]
    Declaration(Declaration),
}

impl Node {
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::ConditionalBlock(_) => "conditionalBlock",
            Node::Definition(_) => "definition",
            Node::UnknownAtRule(_) => "unknownAtRule",
            Node::Ruleset(_) => "ruleset",
            Node::Declaration(_) => "declaration",
        }
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Node::ConditionalBlock(n) => n.location,
            Node::Definition(n) => Some(n.location),
            Node::UnknownAtRule(n) => Some(n.location),
            Node::Ruleset(n) => n.location,
            Node::Declaration(n) => n.location,
        }
    }
}

/// An `@if` / `@elseif` / `@else` chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalBlock {
    pub rules: Vec<ConditionalRule>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionalKind {
    If,
    Elseif,
    Else,
}

/// One branch of a conditional block whose selection happens at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalRule {
    pub kind: ConditionalKind,
    /// Raw condition text; absent for `@else`.
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
    pub location: SourceLocation,
}

/// `@def NAME value...;`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub name: String,
    #[serde(default)]
    pub values: Vec<Value>,
    pub location: SourceLocation,
}

/// Any `@name params... [{ ... }]` the parser has no dedicated node for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnknownAtRule {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Value>,
    /// Present when the at-rule has a `{ ... }` block.
    #[serde(default)]
    pub block: Option<Vec<Node>>,
    pub location: SourceLocation,
}

impl UnknownAtRule {
    pub const EXTERNAL: &'static str = "external";

    pub fn is_external(&self) -> bool {
        self.name == Self::EXTERNAL
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruleset {
    pub selectors: Vec<String>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

/// A single value term, e.g. `12px` or `RED`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Value {
    pub text: String,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}
