//! JSON document output
//!
//! Writes the tree in the same `_type`-tagged shape that
//! [`Tree::from_json_str`](crate::dump::Tree::from_json_str) reads back.

use super::registry::{FormatError, Formatter};
use crate::dump::Tree;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree document as pretty-printed JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Location, Node, Stmt};

    #[test]
    fn test_json_shape() {
        let tree = Tree::Single(Node::Expr(Expr::name("x").at(Location::span(1, 0, 1, 1))));
        let json = JsonFormatter.serialize(&tree).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "_type": "Name",
                "id": "x",
                "ctx": {"_type": "Load"},
                "lineno": 1,
                "col_offset": 0,
                "end_lineno": 1,
                "end_col_offset": 1
            })
        );
    }

    #[test]
    fn test_json_reloads_to_same_tree() {
        let tree = Tree::Many(vec![
            Node::Stmt(Stmt::assign(Expr::store("x"), Expr::constant(10))),
            Node::Stmt(Stmt::expr(Expr::call(
                Expr::name("print"),
                vec![Expr::constant("Step 1: Module starts")],
            ))),
        ]);
        let json = JsonFormatter.serialize(&tree).unwrap();
        assert_eq!(Tree::from_json_str(&json), Ok(tree));
    }
}
