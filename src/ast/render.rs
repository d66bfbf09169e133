//! Canonical single-node rendering
//!
//! Produces the same text as CPython's `ast.dump`: class name, then the fields
//! in declaration order, optionally keyword-annotated and optionally spread
//! over several indented lines.
//!
//! ```text
//! Module(
//!   body=[
//!     Expr(
//!       value=Constant(value=1))],
//!   type_ignores=[])
//! ```
//!
//! A node stays on one line when it has at most three fields and none of them
//! is a non-empty list or a node with fields of its own.

use super::traits::{AstNode, Field};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a multi-line dump indents nested fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndentMode {
    /// `n` spaces per nesting level
    Spaces(usize),
    /// A literal unit repeated per nesting level, e.g. `"\t"`
    Text(String),
}

impl IndentMode {
    /// The text inserted once per nesting level
    pub fn unit(&self) -> Cow<'_, str> {
        match self {
            IndentMode::Spaces(n) => Cow::Owned(" ".repeat(*n)),
            IndentMode::Text(text) => Cow::Borrowed(text),
        }
    }
}

impl From<usize> for IndentMode {
    fn from(spaces: usize) -> Self {
        IndentMode::Spaces(spaces)
    }
}

impl From<&str> for IndentMode {
    fn from(text: &str) -> Self {
        IndentMode::Text(text.to_string())
    }
}

/// Options for rendering a single node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// `None` keeps the whole dump on one line
    pub indent: Option<IndentMode>,
    /// Prefix field values with `name=`
    pub annotate_fields: bool,
    /// Append `lineno`, `col_offset`, `end_lineno` and `end_col_offset`
    pub include_attributes: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: None,
            annotate_fields: true,
            include_attributes: false,
        }
    }
}

impl DumpOptions {
    pub fn with_indent(mut self, indent: Option<IndentMode>) -> Self {
        self.indent = indent;
        self
    }

    pub fn annotate_fields(mut self, annotate: bool) -> Self {
        self.annotate_fields = annotate;
        self
    }

    pub fn include_attributes(mut self, include: bool) -> Self {
        self.include_attributes = include;
        self
    }
}

/// Render one node and everything below it
pub fn render(node: &dyn AstNode, options: &DumpOptions) -> String {
    let renderer = Renderer {
        unit: options.indent.as_ref().map(IndentMode::unit),
        options,
    };
    renderer.node(node, 0).0
}

struct Renderer<'o> {
    unit: Option<Cow<'o, str>>,
    options: &'o DumpOptions,
}

impl Renderer<'_> {
    /// Every step down, into a node or a list, is one more level.
    fn enter(&self, level: usize) -> (usize, String, String) {
        match &self.unit {
            Some(unit) => {
                let level = level + 1;
                let pad = unit.repeat(level);
                (level, format!("\n{pad}"), format!(",\n{pad}"))
            }
            None => (level, String::new(), ", ".to_string()),
        }
    }

    /// Returns the rendered text and whether it counts as simple.
    fn node(&self, node: &dyn AstNode, level: usize) -> (String, bool) {
        let (level, prefix, sep) = self.enter(level);
        let mut args = Vec::new();
        let mut all_simple = true;
        let mut keywords = self.options.annotate_fields;

        for (name, field) in node.fields() {
            let (value, simple) = match field {
                Field::Absent => {
                    // positions shift once a field is skipped
                    keywords = true;
                    continue;
                }
                other => self.value(other, level),
            };
            all_simple &= simple;
            if keywords {
                args.push(format!("{name}={value}"));
            } else {
                args.push(value);
            }
        }

        if self.options.include_attributes {
            if let Some(location) = node.location() {
                for (name, value) in location.attributes() {
                    args.push(format!("{name}={value}"));
                }
            }
        }

        let class = node.node_type();
        if all_simple && args.len() <= 3 {
            let simple = args.is_empty();
            return (format!("{class}({})", args.join(", ")), simple);
        }
        (format!("{class}({prefix}{})", args.join(&sep)), false)
    }

    /// A field value or list item; an absent list item is Python's `None`.
    fn value(&self, field: Field<'_>, level: usize) -> (String, bool) {
        match field {
            Field::Node(child) => self.node(child, level),
            Field::List(items) => self.list(items, level),
            Field::Scalar(value) => (value, true),
            Field::Absent => ("None".to_string(), true),
        }
    }

    fn list(&self, items: Vec<Field<'_>>, level: usize) -> (String, bool) {
        if items.is_empty() {
            return ("[]".to_string(), true);
        }
        let (level, prefix, sep) = self.enter(level);
        let rendered: Vec<String> = items
            .into_iter()
            .map(|item| self.value(item, level).0)
            .collect();
        (format!("[{prefix}{}]", rendered.join(&sep)), false)
    }
}
