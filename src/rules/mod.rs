//! Rule infrastructure: registration surface, per-node dispatch, reporting

pub mod prefer_reflect;

use crate::core::{Diagnostic, SourceLocation};
use tree_sitter::{Node, Tree};

/// Static description of a rule, surfaced to hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub id: &'static str,
    pub description: &'static str,
}

/// A single-node lint check. Implementations are stateless across nodes:
/// each `check` call classifies one node and either reports or does nothing.
pub trait Rule {
    fn meta(&self) -> RuleMeta;

    /// Node kinds the rule registers for; every other node is skipped
    fn node_kinds(&self) -> &'static [&'static str];

    fn check(&self, node: Node, ctx: &mut RuleContext);
}

/// Read-only source access plus the reporting channel handed to rules
pub struct RuleContext<'a> {
    source: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RuleContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Text of a node, or "" if the node falls outside the source
    pub fn node_text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Hand one diagnostic to the host
    pub fn report(&mut self, rule: &'static str, node: Node, message: String) {
        self.diagnostics.push(Diagnostic {
            rule,
            location: SourceLocation::from_node(node),
            message,
        });
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Run one rule over a parsed tree, visiting every node exactly once in
/// pre-order
pub fn run_rule(rule: &dyn Rule, tree: &Tree, source: &str) -> Vec<Diagnostic> {
    let mut ctx = RuleContext::new(source);
    visit_node(rule, tree.root_node(), &mut ctx);
    ctx.into_diagnostics()
}

fn visit_node(rule: &dyn Rule, node: Node, ctx: &mut RuleContext) {
    if rule.node_kinds().contains(&node.kind()) {
        rule.check(node, ctx);
    }

    for child in node.children(&mut node.walk()) {
        visit_node(rule, child, ctx);
    }
}
