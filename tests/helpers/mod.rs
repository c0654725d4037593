use gss_compiler::parse::*;

// =============================================================================
// Locations
// =============================================================================

/// A one-line location starting at `line:column`.
pub fn at(line: u32, column: u32) -> SourceLocation {
    let offset = (line - 1) * 80 + (column - 1);
    SourceLocation::new(
        Position::new(line, column, offset),
        Position::new(line, column + 10, offset + 10),
    )
}

// =============================================================================
// Node builders
// =============================================================================

pub fn sheet(nodes: Vec<Node>) -> Stylesheet {
    Stylesheet {
        source_name: "test.gss".into(),
        nodes,
    }
}

pub fn value(text: &str) -> Value {
    Value {
        text: text.into(),
        location: None,
    }
}

pub fn def(name: &str, location: SourceLocation) -> Node {
    Node::Definition(Definition {
        name: name.into(),
        values: vec![value("10px")],
        location,
    })
}

pub fn at_rule(name: &str, location: SourceLocation) -> Node {
    Node::UnknownAtRule(UnknownAtRule {
        name: name.into(),
        params: vec![value("FOO")],
        block: None,
        location,
    })
}

pub fn at_rule_with_block(name: &str, location: SourceLocation, block: Vec<Node>) -> Node {
    Node::UnknownAtRule(UnknownAtRule {
        name: name.into(),
        params: vec![],
        block: Some(block),
        location,
    })
}

pub fn decl(property: &str, v: &str) -> Node {
    Node::Declaration(Declaration {
        property: property.into(),
        values: vec![value(v)],
        location: None,
    })
}

pub fn ruleset(selector: &str, children: Vec<Node>) -> Node {
    Node::Ruleset(Ruleset {
        selectors: vec![selector.into()],
        children,
        location: None,
    })
}

pub fn if_rule(condition: &str, location: SourceLocation, children: Vec<Node>) -> ConditionalRule {
    ConditionalRule {
        kind: ConditionalKind::If,
        condition: Some(condition.into()),
        children,
        location,
    }
}

pub fn else_rule(location: SourceLocation, children: Vec<Node>) -> ConditionalRule {
    ConditionalRule {
        kind: ConditionalKind::Else,
        condition: None,
        children,
        location,
    }
}

pub fn cond(rules: Vec<ConditionalRule>) -> Node {
    Node::ConditionalBlock(ConditionalBlock {
        rules,
        location: None,
    })
}

/// `@if (COND) { children }` as a single-branch conditional block.
pub fn if_block(location: SourceLocation, children: Vec<Node>) -> Node {
    cond(vec![if_rule("COND", location, children)])
}

/// `depth` nested `@if` blocks wrapping `inner`.
pub fn nested_ifs(depth: u32, inner: Node) -> Node {
    let mut node = inner;
    for line in (1..=depth).rev() {
        node = if_block(at(line, 1), vec![node]);
    }
    node
}
