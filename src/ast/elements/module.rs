//! Root nodes: what a front-end hands back for a whole source unit

use super::super::traits::{AstNode, Field};
use super::expression::Expr;
use super::statement::Stmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Mod {
    /// A file
    Module { body: Vec<Stmt> },
    /// Input from an interactive prompt
    Interactive { body: Vec<Stmt> },
    /// A single expression, as handed to `eval`
    Expression { body: Box<Expr> },
}

impl Mod {
    /// Every `_type` tag a `Mod` can carry
    pub const KINDS: &'static [&'static str] = &["Module", "Interactive", "Expression"];

    pub fn module(body: Vec<Stmt>) -> Self {
        Mod::Module { body }
    }

    /// Top-level statements, empty for `Expression`
    pub fn body(&self) -> &[Stmt] {
        match self {
            Mod::Module { body } | Mod::Interactive { body } => body,
            Mod::Expression { .. } => &[],
        }
    }
}

impl AstNode for Mod {
    fn node_type(&self) -> &'static str {
        match self {
            Mod::Module { .. } => "Module",
            Mod::Interactive { .. } => "Interactive",
            Mod::Expression { .. } => "Expression",
        }
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        match self {
            // type comments are never produced, the list is always empty
            Mod::Module { body } => vec![
                ("body", Field::list(body)),
                ("type_ignores", Field::List(Vec::new())),
            ],
            Mod::Interactive { body } => vec![("body", Field::list(body))],
            Mod::Expression { body } => vec![("body", Field::node(body.as_ref()))],
        }
    }
}
