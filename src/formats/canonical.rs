//! The canonical dump as a registry format
//!
//! Runs the tree dumper over the tree, with every node rendered under the
//! formatter's [`DumpOptions`] instead of the defaults.

use super::registry::{FormatError, Formatter};
use crate::ast::{render, Dump, DumpOptions, IndentMode, Node};
use crate::dump::{dump, DumpInput, Tree};

/// A node paired with the options it should be rendered with
struct Configured<'a> {
    node: &'a Node,
    options: &'a DumpOptions,
}

impl Dump for Configured<'_> {
    fn dump(&self, indent: Option<&IndentMode>) -> String {
        let options = self.options.clone().with_indent(indent.cloned());
        render(self.node, &options)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DumpFormatter {
    options: DumpOptions,
}

impl DumpFormatter {
    pub fn new(options: DumpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DumpOptions {
        &self.options
    }
}

impl Formatter for DumpFormatter {
    fn name(&self) -> &str {
        "dump"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        let configured: Vec<Configured<'_>> = tree
            .nodes()
            .iter()
            .map(|node| Configured {
                node,
                options: &self.options,
            })
            .collect();
        let input = match tree {
            Tree::Single(_) => DumpInput::Single(&configured[0]),
            Tree::Many(_) => DumpInput::Many(&configured),
        };
        Ok(dump(input, self.options.indent.as_ref(), 0))
    }

    fn description(&self) -> &str {
        "Canonical ast.dump-style text"
    }
}
