//! AST element types
//!
//! The node vocabulary follows Python's `ast` module: a root [`Mod`], [`Stmt`]
//! and [`Expr`] nodes carrying a kind plus location, a few helper nodes, and
//! field-less operators.

pub mod arguments;
pub mod constant;
pub mod expression;
pub mod module;
pub mod operators;
pub mod statement;

pub use arguments::{Alias, Arg, Arguments, Keyword};
pub use constant::ConstantValue;
pub use expression::{Expr, ExprKind};
pub use module::Mod;
pub use operators::{BoolOperator, CmpOperator, ExprContext, Operator, UnaryOperator};
pub use statement::{ClassDef, FunctionDef, Stmt, StmtKind};

use super::location::Location;
use super::traits::{AstNode, Field};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Any node a tree document can hold at its top level.
///
/// Documents are routed by their `_type` tag to the module, statement or
/// expression decoder, so a malformed node reports the field that is wrong.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Mod(Mod),
    Stmt(Stmt),
    Expr(Expr),
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tag = match value.get("_type") {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "`_type` must be a string, got {other}"
                )))
            }
            None => return Err(D::Error::missing_field("_type")),
        };

        let node = if Mod::KINDS.contains(&tag.as_str()) {
            Mod::deserialize(value).map(Node::Mod)
        } else if Stmt::KINDS.contains(&tag.as_str()) {
            Stmt::deserialize(value).map(Node::Stmt)
        } else if Expr::KINDS.contains(&tag.as_str()) {
            Expr::deserialize(value).map(Node::Expr)
        } else {
            return Err(D::Error::custom(format!("unknown node type `{tag}`")));
        };
        node.map_err(|e| D::Error::custom(format!("{tag}: {e}")))
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Mod(m) => m.node_type(),
            Node::Stmt(s) => s.node_type(),
            Node::Expr(e) => e.node_type(),
        }
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        match self {
            Node::Mod(m) => m.fields(),
            Node::Stmt(s) => s.fields(),
            Node::Expr(e) => e.fields(),
        }
    }

    fn location(&self) -> Option<&Location> {
        match self {
            Node::Mod(m) => m.location(),
            Node::Stmt(s) => s.location(),
            Node::Expr(e) => e.location(),
        }
    }
}

impl From<Mod> for Node {
    fn from(m: Mod) -> Self {
        Node::Mod(m)
    }
}

impl From<Stmt> for Node {
    fn from(s: Stmt) -> Self {
        Node::Stmt(s)
    }
}

impl From<Expr> for Node {
    fn from(e: Expr) -> Self {
        Node::Expr(e)
    }
}
