//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! The snapshot captures the tree structure with node types, labels, start lines and
//! children, so presentation-only renderers never reimplement AST traversal.

use serde::Serialize;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "block", "assignment", "comment")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// 1-based line the node starts on, when locations were recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// Child nodes in the tree
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    /// Create a new snapshot with the given node type and label
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            line: None,
            children: Vec::new(),
        }
    }

    pub fn at_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    /// Add multiple children
    pub fn with_children(mut self, children: impl IntoIterator<Item = AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    /// Total number of nodes in this subtree, itself included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstSnapshot::node_count).sum::<usize>()
    }
}
