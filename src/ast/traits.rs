//! AST traits - Common interfaces for uniform node access
//!
//! Every node type describes itself as a class name plus an ordered list of
//! named fields. Renderers (the canonical dump, treeviz) walk that description
//! instead of matching on concrete node types.

use super::location::Location;
use super::render::{render, DumpOptions, IndentMode};
use super::repr::repr_str;
use std::fmt::Display;

/// The value held by one field of a node
pub enum Field<'a> {
    /// A single child node
    Node(&'a dyn AstNode),
    /// An ordered sequence; items are nodes, scalars, or `Absent` for `None`
    List(Vec<Field<'a>>),
    /// A scalar, already spelled as a Python `repr`
    Scalar(String),
    /// An optional field that is not set
    Absent,
}

impl<'a> Field<'a> {
    pub fn node<T: AstNode>(node: &'a T) -> Self {
        Field::Node(node)
    }

    pub fn optional<T: AstNode>(node: Option<&'a T>) -> Self {
        match node {
            Some(node) => Field::Node(node),
            None => Field::Absent,
        }
    }

    pub fn list<T: AstNode>(items: &'a [T]) -> Self {
        Field::List(items.iter().map(|item| Field::Node(item)).collect())
    }

    /// A list whose missing items print as `None`, like `Dict.keys`
    pub fn optional_list<T: AstNode>(items: &'a [Option<T>]) -> Self {
        Field::List(items.iter().map(|item| Field::optional(item.as_ref())).collect())
    }

    pub fn str_list(items: &'a [String]) -> Self {
        Field::List(items.iter().map(|item| Field::str(item)).collect())
    }

    pub fn str(value: &str) -> Self {
        Field::Scalar(repr_str(value))
    }

    pub fn optional_str(value: Option<&str>) -> Self {
        value.map_or(Field::Absent, Field::str)
    }

    pub fn int(value: impl Display) -> Self {
        Field::Scalar(value.to_string())
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    /// The class name, e.g. `"FunctionDef"` or `"Load"`
    fn node_type(&self) -> &'static str;

    /// Named fields in declaration order
    fn fields(&self) -> Vec<(&'static str, Field<'_>)>;

    /// Source position, for node kinds that carry one
    fn location(&self) -> Option<&Location> {
        None
    }

    /// Child nodes in field order, sequences flattened
    fn children(&self) -> Vec<&dyn AstNode> {
        fn collect<'a>(field: Field<'a>, children: &mut Vec<&'a dyn AstNode>) {
            match field {
                Field::Node(node) => children.push(node),
                Field::List(items) => items.into_iter().for_each(|item| collect(item, children)),
                Field::Scalar(_) | Field::Absent => {}
            }
        }
        let mut children = Vec::new();
        for (_, field) in self.fields() {
            collect(field, &mut children);
        }
        children
    }

    /// Short label made of the scalar fields, e.g. `id='main'`
    fn display_label(&self) -> String {
        self.fields()
            .into_iter()
            .filter_map(|(name, field)| match field {
                Field::Scalar(value) => Some(format!("{name}={value}")),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render this node with explicit options
    fn dump_with(&self, options: &DumpOptions) -> String
    where
        Self: Sized,
    {
        render(self, options)
    }
}

/// A node that can produce its own canonical dump.
///
/// This is the only capability the tree dumper needs from a node type.
/// Every [`AstNode`] gets it for free; foreign node types can implement it directly.
pub trait Dump {
    fn dump(&self, indent: Option<&IndentMode>) -> String;
}

impl<T: AstNode> Dump for T {
    fn dump(&self, indent: Option<&IndentMode>) -> String {
        render(self, &DumpOptions::default().with_indent(indent.cloned()))
    }
}
