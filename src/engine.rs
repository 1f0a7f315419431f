//! Host-side harness: parses JavaScript and drives registered rules

use crate::core::Diagnostic;
use crate::rules::{run_rule, Rule};
use anyhow::{Context, Result};
use tree_sitter::Parser;

/// Owns the parser and the set of active rules. Linting is synchronous and
/// visits each node of the tree at most once per rule; rules hold no state
/// between runs, so the same source always yields the same diagnostics.
pub struct Linter {
    parser: Parser,
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    pub fn new_javascript() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .context("Failed to set JavaScript language")?;
        Ok(Self {
            parser,
            rules: Vec::new(),
        })
    }

    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        log::debug!("registering rule '{}'", rule.meta().id);
        self.rules.push(rule);
        self
    }

    pub fn lint(&mut self, source: &str) -> Result<Vec<Diagnostic>> {
        let tree = self
            .parser
            .parse(source, None)
            .context("Failed to parse JavaScript code")?;

        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            diagnostics.extend(run_rule(rule.as_ref(), &tree, source));
        }
        log::debug!(
            "{} diagnostic(s) from {} rule(s)",
            diagnostics.len(),
            self.rules.len()
        );
        Ok(diagnostics)
    }
}
