//! Owned trees loaded from documents
//!
//! This is the one place where the node/sequence distinction is made at
//! runtime: a document is inspected once, classified, and from then on the
//! dumper works on the typed [`DumpInput`].

use super::{DumpError, DumpInput};
use crate::ast::Node;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A single node or an ordered sequence of nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Tree<N = Node> {
    Single(N),
    Many(Vec<N>),
}

impl<N> Tree<N> {
    pub fn as_input(&self) -> DumpInput<'_, N> {
        match self {
            Tree::Single(node) => DumpInput::Single(node),
            Tree::Many(nodes) => DumpInput::Many(nodes.as_slice()),
        }
    }

    /// Top-level nodes, in order
    pub fn nodes(&self) -> &[N] {
        match self {
            Tree::Single(node) => std::slice::from_ref(node),
            Tree::Many(nodes) => nodes.as_slice(),
        }
    }
}

impl<N: DeserializeOwned> Tree<N> {
    /// Classify and decode untyped data.
    ///
    /// Objects become [`Tree::Single`], arrays of objects become
    /// [`Tree::Many`]. Scalars, and arrays holding anything but objects, fail
    /// with [`DumpError::UnsupportedInputKind`].
    pub fn from_value(value: Value) -> Result<Self, DumpError> {
        match value {
            Value::Object(_) => {
                let node = decode_node(value)?;
                debug!("loaded a single node");
                Ok(Tree::Single(node))
            }
            Value::Array(items) => {
                let nodes = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        Value::Object(_) => decode_node(item),
                        other => Err(DumpError::UnsupportedInputKind {
                            kind: format!("{} at index {index}", kind_of(&other)),
                        }),
                    })
                    .collect::<Result<Vec<N>, DumpError>>()?;
                debug!("loaded a sequence of {} nodes", nodes.len());
                Ok(Tree::Many(nodes))
            }
            other => Err(DumpError::UnsupportedInputKind {
                kind: kind_of(&other).to_string(),
            }),
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self, DumpError> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| DumpError::Parse(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, DumpError> {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|e| DumpError::Parse(e.to_string()))?;
        let value = serde_json::to_value(yaml).map_err(|e| DumpError::Parse(e.to_string()))?;
        Self::from_value(value)
    }
}

fn decode_node<N: DeserializeOwned>(value: Value) -> Result<N, DumpError> {
    serde_json::from_value(value).map_err(|e| DumpError::InvalidNode(e.to_string()))
}

/// Human-readable name of a JSON value's shape
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "node",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Stmt};
    use serde_json::json;

    #[test]
    fn test_from_value_single() {
        let tree: Tree = Tree::from_value(json!({"_type": "Name", "id": "x"})).unwrap();
        assert_eq!(tree, Tree::Single(Node::Expr(Expr::name("x"))));
        assert_eq!(tree.nodes().len(), 1);
    }

    #[test]
    fn test_from_value_many() {
        let tree: Tree = Tree::from_value(json!([{"_type": "Pass"}, {"_type": "Break"}])).unwrap();
        assert_eq!(
            tree,
            Tree::Many(vec![Node::Stmt(Stmt::pass()), Node::Stmt(Stmt::break_())])
        );
    }

    #[test]
    fn test_from_value_rejects_nested_sequence() {
        let result: Result<Tree, _> = Tree::from_value(json!([{"_type": "Pass"}, [1]]));
        assert_eq!(
            result,
            Err(DumpError::UnsupportedInputKind {
                kind: "sequence at index 1".to_string()
            })
        );
    }

    #[test]
    fn test_from_value_invalid_node() {
        let result: Result<Tree, _> = Tree::from_value(json!({"_type": "Name"}));
        match result {
            Err(DumpError::InvalidNode(message)) => {
                assert!(message.contains("missing field `id`"), "{message}")
            }
            other => panic!("expected an invalid node, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_str_empty_f_string() {
        let tree: Tree =
            Tree::from_json_str(r#"{"_type": "Expr", "value": {"_type": "JoinedStr", "values": []}}"#)
                .unwrap();
        assert_eq!(
            tree,
            Tree::Single(Node::Stmt(Stmt::expr(Expr::joined_str(vec![]))))
        );
    }

    #[test]
    fn test_from_json_str_parse_error() {
        let result: Result<Tree, _> = Tree::from_json_str("{not json");
        assert!(matches!(result, Err(DumpError::Parse(_))));
    }

    #[test]
    fn test_from_yaml_str() {
        let source = "
- _type: Expr
  value:
    _type: Constant
    value: 1
- _type: Pass
";
        let tree: Tree = Tree::from_yaml_str(source).unwrap();
        assert_eq!(
            tree,
            Tree::Many(vec![
                Node::Stmt(Stmt::expr(Expr::constant(1))),
                Node::Stmt(Stmt::pass()),
            ])
        );
    }

    #[test]
    fn test_from_yaml_scalar_is_unsupported() {
        let result: Result<Tree, _> = Tree::from_yaml_str("42");
        assert_eq!(
            result,
            Err(DumpError::UnsupportedInputKind {
                kind: "integer".to_string()
            })
        );
    }
}
