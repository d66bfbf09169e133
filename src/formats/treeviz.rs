//! Treeviz formatter for syntax trees
//!
//! Treeviz is a visual representation of the tree. It features a one line per
//! node format, which enables quick scanning of large trees, and encodes the
//! nesting with box-drawing connectors.
//!
//! So the format is :
//! <prefix><connector> <node type>[: <label>] (label truncated to 30 characters)
//!
//! Example:
//!
//! ```text
//! └─ Module
//!   ├─ FunctionDef: name='main'
//!   │ ├─ arguments
//!   │ └─ Return
//!   │   └─ Constant: value='main_result'
//!   └─ If
//!     ...
//! ```

use super::registry::{FormatError, Formatter};
use crate::ast::AstNode;
use crate::dump::Tree;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(tree: &Tree) -> String {
    let mut result = String::new();
    let roots: Vec<&dyn AstNode> = tree.nodes().iter().map(|n| n as &dyn AstNode).collect();
    append_children(&mut result, &roots, "");
    result
}

fn append_node(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let node_type = node.node_type();

    let label = node.display_label();
    if label.is_empty() {
        result.push_str(&format!("{prefix}{connector} {node_type}\n"));
    } else {
        let display_label = truncate(&label, 30);
        result.push_str(&format!("{prefix}{connector} {node_type}: {display_label}\n"));
    }

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[&dyn AstNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, *child, prefix, is_last);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "One node per line with tree connectors"
    }
}
