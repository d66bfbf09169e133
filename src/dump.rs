//! Tree dumper
//!
//! Turns a node, or an ordered sequence of nodes such as a statement body, into
//! one deterministic string:
//!
//! ```text
//! [Expr(value=Constant(value=1)), Pass()]
//! ```
//!
//! A sequence dumps as its elements joined by `", "` inside square brackets. A
//! single node dumps as whatever its own [`Dump`] implementation produces. The
//! indent mode is handed through to every node; the depth counter is threaded
//! through the recursion but does not affect the output.

pub mod tree;

pub use tree::Tree;

use crate::ast::{Dump, IndentMode, Node};
use log::trace;
use thiserror::Error;

/// The two shapes the dumper accepts
#[derive(Debug)]
pub enum DumpInput<'a, N> {
    Single(&'a N),
    Many(&'a [N]),
}

impl<N> Clone for DumpInput<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for DumpInput<'_, N> {}

/// Error that can occur when a tree reaches the dumper from untyped data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DumpError {
    /// The input was neither a node nor a sequence of nodes
    #[error("Unsupported input kind: expected a node or a sequence of nodes, got {kind}")]
    UnsupportedInputKind { kind: String },
    /// The input had the shape of a node but did not describe a valid one
    #[error("Invalid node: {0}")]
    InvalidNode(String),
    /// The document could not be read as JSON or YAML
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Dump a node or a sequence of nodes.
///
/// `depth` is 0 for the top-level call and one more for the elements of each
/// sequence. It is accepted for interface stability and never changes the output.
pub fn dump<N: Dump>(input: DumpInput<'_, N>, indent: Option<&IndentMode>, depth: usize) -> String {
    match input {
        DumpInput::Single(node) => node.dump(indent),
        DumpInput::Many(nodes) => {
            trace!("dumping {} nodes at depth {}", nodes.len(), depth + 1);
            let dumped: Vec<String> = nodes
                .iter()
                .map(|node| dump(DumpInput::Single(node), indent, depth + 1))
                .collect();
            format!("[{}]", dumped.join(", "))
        }
    }
}

/// Dump untyped data, e.g. a tree decoded from a JSON document.
///
/// Objects are read as a single node and arrays as a sequence of nodes; any
/// other value fails with [`DumpError::UnsupportedInputKind`] before anything
/// is rendered.
pub fn dump_value(
    value: serde_json::Value,
    indent: Option<&IndentMode>,
    depth: usize,
) -> Result<String, DumpError> {
    let tree: Tree<Node> = Tree::from_value(value)?;
    Ok(dump(tree.as_input(), indent, depth))
}
