//! Named output formats
//!
//! Every way of printing a loaded [`Tree`] is a [`Formatter`] registered under
//! a short name. The CLI's `--format` flag and the `output.format` config key
//! both resolve through [`FormatRegistry::serialize`].

use crate::ast::DumpOptions;
use crate::dump::Tree;
use log::debug;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Prints a whole tree, a single node or a sequence, as text
pub trait Formatter: Send + Sync {
    /// Registry key, e.g. "dump"
    fn name(&self) -> &str;

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError>;

    /// One line shown by `--list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats at all
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Add `formatter`, replacing any format already registered under its name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        if self.formatters.insert(name.clone(), Box::new(formatter)).is_some() {
            debug!("replaced formatter '{name}'");
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn serialize(&self, tree: &Tree, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tree)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `dump`, `json` and `treeviz`, with `dump` rendering under `options`
    pub fn with_dump_options(options: DumpOptions) -> Self {
        let mut registry = Self::new();

        registry.register(super::DumpFormatter::new(options));
        registry.register(super::JsonFormatter);
        registry.register(super::TreevizFormatter);

        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_dump_options(DumpOptions::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, IndentMode, Location, Node, Stmt};
    use crate::formats::DumpFormatter;

    fn assignment() -> Tree {
        Tree::Single(Node::Stmt(
            Stmt::assign(Expr::store("x"), Expr::constant(10)).at(Location::span(1, 0, 1, 6)),
        ))
    }

    #[test]
    fn test_defaults_are_listed_in_name_order() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["dump", "json", "treeviz"]);
        for name in registry.list_formats() {
            let formatter = registry.get(&name).unwrap();
            assert_eq!(formatter.name(), name);
            assert!(!formatter.description().is_empty());
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
        assert!(registry.get("dump").is_none());
    }

    #[test]
    fn test_serialize_through_each_format() {
        let registry = FormatRegistry::default();
        let tree = assignment();

        assert_eq!(
            registry.serialize(&tree, "dump"),
            Ok("Assign(targets=[Name(id='x', ctx=Store())], value=Constant(value=10))".to_string())
        );

        let json = registry.serialize(&tree, "json").unwrap();
        assert_eq!(Tree::from_json_str(&json), Ok(tree.clone()));

        let treeviz = registry.serialize(&tree, "treeviz").unwrap();
        assert!(treeviz.starts_with("└─ Assign\n"));
        assert!(treeviz.contains("Name: id='x'"));
        assert!(treeviz.contains("Constant: value=10"));
    }

    #[test]
    fn test_serialize_sequence_as_dump() {
        let registry = FormatRegistry::default();
        let tree = Tree::Many(vec![Node::Stmt(Stmt::pass()), Node::Stmt(Stmt::break_())]);
        assert_eq!(
            registry.serialize(&tree, "dump"),
            Ok("[Pass(), Break()]".to_string())
        );
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::default();
        let err = registry.serialize(&Tree::Many(vec![]), "xml").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("xml".to_string()));
        assert_eq!(err.to_string(), "Format 'xml' not found");
    }

    #[test]
    fn test_dump_options_reach_the_dump_format() {
        let tree = assignment();

        let registry =
            FormatRegistry::with_dump_options(DumpOptions::default().include_attributes(true));
        assert_eq!(
            registry.serialize(&tree, "dump"),
            Ok("Assign(targets=[Name(id='x', ctx=Store())], value=Constant(value=10), \
                lineno=1, col_offset=0, end_lineno=1, end_col_offset=6)"
                .to_string())
        );

        let registry = FormatRegistry::with_dump_options(
            DumpOptions::default().with_indent(Some(IndentMode::Spaces(2))),
        );
        assert_eq!(
            registry.serialize(&tree, "dump"),
            Ok("Assign(\n  targets=[\n    Name(id='x', ctx=Store())],\n  value=Constant(value=10))"
                .to_string())
        );
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = FormatRegistry::default();
        registry.register(DumpFormatter::new(DumpOptions::default().annotate_fields(false)));

        assert_eq!(registry.list_formats().len(), 3);
        let tree = Tree::Single(Node::Stmt(Stmt::return_value(Some(Expr::constant(1)))));
        assert_eq!(
            registry.serialize(&tree, "dump"),
            Ok("Return(Constant(1))".to_string())
        );
    }
}
