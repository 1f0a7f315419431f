pub mod errors;

pub use errors::{Error, Result};

use tree_sitter::Node;

/// Location of a finding within a single source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: Option<usize>,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
}

impl SourceLocation {
    pub fn from_node(node: Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();

        SourceLocation {
            line: start.row + 1, // tree-sitter uses 0-based lines
            column: Some(start.column),
            end_line: Some(end.row + 1),
            end_column: Some(end.column),
        }
    }
}

/// One reported violation, anchored at the node it was found on.
/// Diagnostics are handed to the host as they are found; the rule keeps
/// no history of what it reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub location: SourceLocation,
    pub message: String,
}
