//! Depth-first traversal driver over the stylesheet AST.
//!
//! `walk_stylesheet` issues one `enter_*` callback per node in pre-order and,
//! for container nodes, one matching `leave_*` in post-order. A container's
//! `leave_*` fires even when its `enter_*` asked to skip the children, so
//! enter/leave pairs never go out of balance.

use crate::parse::types::*;

/// What the driver should do after an `enter_*` callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    Descend,
    SkipChildren,
}

/// Per-node-kind callbacks. Every `enter_*` defaults to `Descend` and every
/// `leave_*` to a no-op, so a visitor only overrides the kinds it cares about.
pub trait Visitor<'ast> {
    fn enter_conditional_block(&mut self, _node: &'ast ConditionalBlock) -> VisitAction {
        VisitAction::Descend
    }

    fn leave_conditional_block(&mut self, _node: &'ast ConditionalBlock) {}

    fn enter_conditional_rule(&mut self, _node: &'ast ConditionalRule) -> VisitAction {
        VisitAction::Descend
    }

    fn leave_conditional_rule(&mut self, _node: &'ast ConditionalRule) {}

    fn enter_definition(&mut self, _node: &'ast Definition) -> VisitAction {
        VisitAction::Descend
    }

    fn leave_definition(&mut self, _node: &'ast Definition) {}

    fn enter_unknown_at_rule(&mut self, _node: &'ast UnknownAtRule) -> VisitAction {
        VisitAction::Descend
    }

    fn leave_unknown_at_rule(&mut self, _node: &'ast UnknownAtRule) {}

    fn enter_ruleset(&mut self, _node: &'ast Ruleset) -> VisitAction {
        VisitAction::Descend
    }

    fn leave_ruleset(&mut self, _node: &'ast Ruleset) {}

    fn enter_declaration(&mut self, _node: &'ast Declaration) -> VisitAction {
        VisitAction::Descend
    }

    fn leave_declaration(&mut self, _node: &'ast Declaration) {}

    fn enter_value(&mut self, _node: &'ast Value) {}
}

/// Walk every top-level node of the stylesheet in document order.
pub fn walk_stylesheet<'ast, V: Visitor<'ast> + ?Sized>(sheet: &'ast Stylesheet, visitor: &mut V) {
    walk_nodes(&sheet.nodes, visitor);
}

pub fn walk_nodes<'ast, V: Visitor<'ast> + ?Sized>(nodes: &'ast [Node], visitor: &mut V) {
    for node in nodes {
        walk_node(node, visitor);
    }
}

pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(node: &'ast Node, visitor: &mut V) {
    match node {
        Node::ConditionalBlock(block) => {
            if visitor.enter_conditional_block(block) == VisitAction::Descend {
                for rule in &block.rules {
                    walk_conditional_rule(rule, visitor);
                }
            }
            visitor.leave_conditional_block(block);
        }
        Node::Definition(def) => {
            if visitor.enter_definition(def) == VisitAction::Descend {
                walk_values(&def.values, visitor);
            }
            visitor.leave_definition(def);
        }
        Node::UnknownAtRule(rule) => {
            if visitor.enter_unknown_at_rule(rule) == VisitAction::Descend {
                walk_values(&rule.params, visitor);
                if let Some(block) = &rule.block {
                    walk_nodes(block, visitor);
                }
            }
            visitor.leave_unknown_at_rule(rule);
        }
        Node::Ruleset(ruleset) => {
            if visitor.enter_ruleset(ruleset) == VisitAction::Descend {
                walk_nodes(&ruleset.children, visitor);
            }
            visitor.leave_ruleset(ruleset);
        }
        Node::Declaration(decl) => {
            if visitor.enter_declaration(decl) == VisitAction::Descend {
                walk_values(&decl.values, visitor);
            }
            visitor.leave_declaration(decl);
        }
    }
}

fn walk_conditional_rule<'ast, V: Visitor<'ast> + ?Sized>(rule: &'ast ConditionalRule, visitor: &mut V) {
    if visitor.enter_conditional_rule(rule) == VisitAction::Descend {
        walk_nodes(&rule.children, visitor);
    }
    visitor.leave_conditional_rule(rule);
}

fn walk_values<'ast, V: Visitor<'ast> + ?Sized>(values: &'ast [Value], visitor: &mut V) {
    for value in values {
        visitor.enter_value(value);
    }
}
