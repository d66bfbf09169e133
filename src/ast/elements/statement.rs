//! Statement nodes

use super::super::identifier::{
    deserialize_identifier, deserialize_identifier_list, deserialize_optional_dotted_name,
};
use super::super::location::Location;
use super::super::traits::{AstNode, Field};
use super::arguments::{Alias, Arguments, Keyword};
use super::expression::Expr;
use super::operators::Operator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    #[serde(flatten)]
    pub kind: StmtKind,
    #[serde(flatten)]
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum StmtKind {
    FunctionDef(FunctionDef),
    AsyncFunctionDef(FunctionDef),
    ClassDef(ClassDef),
    Return {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Expr>,
    },
    Assign {
        targets: Vec<Expr>,
        value: Expr,
    },
    AugAssign {
        target: Expr,
        op: Operator,
        value: Expr,
    },
    For {
        target: Expr,
        iter: Expr,
        body: Vec<Stmt>,
        #[serde(default)]
        orelse: Vec<Stmt>,
    },
    While {
        test: Expr,
        body: Vec<Stmt>,
        #[serde(default)]
        orelse: Vec<Stmt>,
    },
    If {
        test: Expr,
        body: Vec<Stmt>,
        #[serde(default)]
        orelse: Vec<Stmt>,
    },
    Import {
        names: Vec<Alias>,
    },
    ImportFrom {
        #[serde(
            default,
            deserialize_with = "deserialize_optional_dotted_name",
            skip_serializing_if = "Option::is_none"
        )]
        module: Option<String>,
        names: Vec<Alias>,
        #[serde(default)]
        level: usize,
    },
    Global {
        #[serde(deserialize_with = "deserialize_identifier_list")]
        names: Vec<String>,
    },
    Expr {
        value: Expr,
    },
    Pass,
    Break,
    Continue,
}

/// `def` and `async def`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub name: String,
    #[serde(default)]
    pub args: Arguments,
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub decorator_list: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub name: String,
    #[serde(default)]
    pub bases: Vec<Expr>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub decorator_list: Vec<Expr>,
}

impl Stmt {
    /// Every `_type` tag a `Stmt` can carry
    pub const KINDS: &'static [&'static str] = &[
        "FunctionDef",
        "AsyncFunctionDef",
        "ClassDef",
        "Return",
        "Assign",
        "AugAssign",
        "For",
        "While",
        "If",
        "Import",
        "ImportFrom",
        "Global",
        "Expr",
        "Pass",
        "Break",
        "Continue",
    ];

    pub fn new(kind: StmtKind) -> Self {
        Self {
            kind,
            location: Location::default(),
        }
    }

    /// Attach a source location
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn function_def(name: impl Into<String>, args: Arguments, body: Vec<Stmt>) -> Self {
        Self::new(StmtKind::FunctionDef(FunctionDef {
            name: name.into(),
            args,
            body,
            decorator_list: Vec::new(),
            returns: None,
        }))
    }

    pub fn async_function_def(name: impl Into<String>, args: Arguments, body: Vec<Stmt>) -> Self {
        Self::new(StmtKind::AsyncFunctionDef(FunctionDef {
            name: name.into(),
            args,
            body,
            decorator_list: Vec::new(),
            returns: None,
        }))
    }

    pub fn class_def(name: impl Into<String>, bases: Vec<Expr>, body: Vec<Stmt>) -> Self {
        Self::new(StmtKind::ClassDef(ClassDef {
            name: name.into(),
            bases,
            keywords: Vec::new(),
            body,
            decorator_list: Vec::new(),
        }))
    }

    pub fn return_value(value: Option<Expr>) -> Self {
        Self::new(StmtKind::Return { value })
    }

    /// `target = value` with a single target
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::new(StmtKind::Assign {
            targets: vec![target],
            value,
        })
    }

    pub fn aug_assign(target: Expr, op: Operator, value: Expr) -> Self {
        Self::new(StmtKind::AugAssign { target, op, value })
    }

    pub fn for_loop(target: Expr, iter: Expr, body: Vec<Stmt>) -> Self {
        Self::new(StmtKind::For {
            target,
            iter,
            body,
            orelse: Vec::new(),
        })
    }

    pub fn while_loop(test: Expr, body: Vec<Stmt>) -> Self {
        Self::new(StmtKind::While {
            test,
            body,
            orelse: Vec::new(),
        })
    }

    pub fn if_stmt(test: Expr, body: Vec<Stmt>, orelse: Vec<Stmt>) -> Self {
        Self::new(StmtKind::If { test, body, orelse })
    }

    pub fn import(names: Vec<Alias>) -> Self {
        Self::new(StmtKind::Import { names })
    }

    pub fn import_from(module: Option<&str>, names: Vec<Alias>, level: usize) -> Self {
        Self::new(StmtKind::ImportFrom {
            module: module.map(str::to_string),
            names,
            level,
        })
    }

    pub fn global<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::new(StmtKind::Global {
            names: names.into_iter().map(Into::into).collect(),
        })
    }

    /// An expression evaluated for its side effects, e.g. a bare call
    pub fn expr(value: Expr) -> Self {
        Self::new(StmtKind::Expr { value })
    }

    pub fn pass() -> Self {
        Self::new(StmtKind::Pass)
    }

    pub fn break_() -> Self {
        Self::new(StmtKind::Break)
    }

    pub fn continue_() -> Self {
        Self::new(StmtKind::Continue)
    }
}

impl AstNode for Stmt {
    fn node_type(&self) -> &'static str {
        match &self.kind {
            StmtKind::FunctionDef(_) => "FunctionDef",
            StmtKind::AsyncFunctionDef(_) => "AsyncFunctionDef",
            StmtKind::ClassDef(_) => "ClassDef",
            StmtKind::Return { .. } => "Return",
            StmtKind::Assign { .. } => "Assign",
            StmtKind::AugAssign { .. } => "AugAssign",
            StmtKind::For { .. } => "For",
            StmtKind::While { .. } => "While",
            StmtKind::If { .. } => "If",
            StmtKind::Import { .. } => "Import",
            StmtKind::ImportFrom { .. } => "ImportFrom",
            StmtKind::Global { .. } => "Global",
            StmtKind::Expr { .. } => "Expr",
            StmtKind::Pass => "Pass",
            StmtKind::Break => "Break",
            StmtKind::Continue => "Continue",
        }
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        match &self.kind {
            StmtKind::FunctionDef(def) | StmtKind::AsyncFunctionDef(def) => vec![
                ("name", Field::str(&def.name)),
                ("args", Field::node(&def.args)),
                ("body", Field::list(&def.body)),
                ("decorator_list", Field::list(&def.decorator_list)),
                ("returns", Field::optional(def.returns.as_ref())),
            ],
            StmtKind::ClassDef(def) => vec![
                ("name", Field::str(&def.name)),
                ("bases", Field::list(&def.bases)),
                ("keywords", Field::list(&def.keywords)),
                ("body", Field::list(&def.body)),
                ("decorator_list", Field::list(&def.decorator_list)),
            ],
            StmtKind::Return { value } => vec![("value", Field::optional(value.as_ref()))],
            StmtKind::Assign { targets, value } => vec![
                ("targets", Field::list(targets)),
                ("value", Field::node(value)),
            ],
            StmtKind::AugAssign { target, op, value } => vec![
                ("target", Field::node(target)),
                ("op", Field::node(op)),
                ("value", Field::node(value)),
            ],
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
            } => vec![
                ("target", Field::node(target)),
                ("iter", Field::node(iter)),
                ("body", Field::list(body)),
                ("orelse", Field::list(orelse)),
            ],
            StmtKind::While { test, body, orelse } | StmtKind::If { test, body, orelse } => vec![
                ("test", Field::node(test)),
                ("body", Field::list(body)),
                ("orelse", Field::list(orelse)),
            ],
            StmtKind::Import { names } => vec![("names", Field::list(names))],
            StmtKind::ImportFrom {
                module,
                names,
                level,
            } => vec![
                ("module", Field::optional_str(module.as_deref())),
                ("names", Field::list(names)),
                ("level", Field::int(level)),
            ],
            StmtKind::Global { names } => vec![("names", Field::str_list(names))],
            StmtKind::Expr { value } => vec![("value", Field::node(value))],
            StmtKind::Pass | StmtKind::Break | StmtKind::Continue => Vec::new(),
        }
    }

    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CmpOperator, Dump};

    #[test]
    fn test_simple_statements_dump() {
        assert_eq!(Stmt::pass().dump(None), "Pass()");
        assert_eq!(Stmt::break_().dump(None), "Break()");
        assert_eq!(Stmt::return_value(None).dump(None), "Return()");
        assert_eq!(
            Stmt::return_value(Some(Expr::constant("main_result"))).dump(None),
            "Return(value=Constant(value='main_result'))"
        );
    }

    #[test]
    fn test_assign_dump() {
        let assign = Stmt::assign(Expr::store("x"), Expr::constant(10));
        assert_eq!(
            assign.dump(None),
            "Assign(targets=[Name(id='x', ctx=Store())], value=Constant(value=10))"
        );
    }

    #[test]
    fn test_function_def_dump() {
        let def = Stmt::function_def(
            "func",
            Arguments::default(),
            vec![Stmt::return_value(Some(Expr::bin_op(
                Expr::name("x"),
                Operator::Mult,
                Expr::constant(2),
            )))],
        );
        assert_eq!(
            def.dump(None),
            "FunctionDef(name='func', args=arguments(posonlyargs=[], args=[], kwonlyargs=[], kw_defaults=[], defaults=[]), body=[Return(value=BinOp(left=Name(id='x', ctx=Load()), op=Mult(), right=Constant(value=2)))], decorator_list=[])"
        );
    }

    #[test]
    fn test_if_main_guard_dump() {
        let guard = Stmt::if_stmt(
            Expr::compare(
                Expr::name("__name__"),
                CmpOperator::Eq,
                Expr::constant("__main__"),
            ),
            vec![Stmt::expr(Expr::call(Expr::name("main"), vec![]))],
            vec![],
        );
        assert_eq!(
            guard.dump(None),
            "If(test=Compare(left=Name(id='__name__', ctx=Load()), ops=[Eq()], comparators=[Constant(value='__main__')]), body=[Expr(value=Call(func=Name(id='main', ctx=Load()), args=[], keywords=[]))], orelse=[])"
        );
    }

    #[test]
    fn test_import_from_dump() {
        let from = Stmt::import_from(Some("os"), vec![Alias::new("path")], 0);
        assert_eq!(
            from.dump(None),
            "ImportFrom(module='os', names=[alias(name='path')], level=0)"
        );
    }

    #[test]
    fn test_global_dump() {
        let global = Stmt::global(["counter", "total"]);
        assert_eq!(global.dump(None), "Global(names=['counter', 'total'])");
        assert_eq!(global.children().len(), 0);
    }

    #[test]
    fn test_global_rejects_bad_name() {
        let ok: Stmt = serde_json::from_str(r#"{"_type": "Global", "names": ["x"]}"#).unwrap();
        assert_eq!(ok, Stmt::global(["x"]));
        let bad: Result<Stmt, _> =
            serde_json::from_str(r#"{"_type": "Global", "names": ["x", "not valid"]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_deserialize_function_def() {
        let json = r#"{
            "_type": "FunctionDef",
            "name": "main",
            "body": [{"_type": "Pass"}],
            "lineno": 1,
            "col_offset": 0
        }"#;
        let stmt: Stmt = serde_json::from_str(json).unwrap();
        assert_eq!(stmt.node_type(), "FunctionDef");
        assert_eq!(stmt.location.lineno, Some(1));
        match stmt.kind {
            StmtKind::FunctionDef(def) => {
                assert_eq!(def.name, "main");
                assert_eq!(def.args, Arguments::default());
                assert_eq!(def.body, vec![Stmt::pass()]);
            }
            other => panic!("Expected FunctionDef, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_unknown_statement() {
        let result: Result<Stmt, _> = serde_json::from_str(r#"{"_type": "Goto"}"#);
        assert!(result.is_err());
    }
}
