//! Expression nodes
//!
//! An [`Expr`] is an [`ExprKind`] plus an optional source [`Location`]. In
//! documents both are flattened into one object tagged by `_type`:
//!
//! ```text
//! {"_type": "Name", "id": "x", "ctx": {"_type": "Load"}, "lineno": 1, "col_offset": 0}
//! ```

use super::super::identifier::deserialize_identifier;
use super::super::location::Location;
use super::super::traits::{AstNode, Field};
use super::arguments::Keyword;
use super::constant::ConstantValue;
use super::operators::{BoolOperator, CmpOperator, ExprContext, Operator, UnaryOperator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    #[serde(flatten)]
    pub kind: ExprKind,
    #[serde(flatten)]
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ExprKind {
    BoolOp {
        op: BoolOperator,
        values: Vec<Expr>,
    },
    BinOp {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    IfExp {
        test: Box<Expr>,
        body: Box<Expr>,
        orelse: Box<Expr>,
    },
    /// `keys` holds `None` where a `**mapping` is unpacked
    Dict {
        #[serde(default)]
        keys: Vec<Option<Expr>>,
        #[serde(default)]
        values: Vec<Expr>,
    },
    Compare {
        left: Box<Expr>,
        ops: Vec<CmpOperator>,
        comparators: Vec<Expr>,
    },
    Call {
        func: Box<Expr>,
        #[serde(default)]
        args: Vec<Expr>,
        #[serde(default)]
        keywords: Vec<Keyword>,
    },
    Await {
        value: Box<Expr>,
    },
    /// One `{...}` replacement field of an f-string
    FormattedValue {
        value: Box<Expr>,
        /// `-1` for none, otherwise the code point of `s`, `r` or `a`
        #[serde(default = "no_conversion")]
        conversion: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format_spec: Option<Box<Expr>>,
    },
    /// An f-string: constant parts and `FormattedValue`s in order
    JoinedStr {
        #[serde(default)]
        values: Vec<Expr>,
    },
    Constant {
        value: ConstantValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    Attribute {
        value: Box<Expr>,
        #[serde(deserialize_with = "deserialize_identifier")]
        attr: String,
        #[serde(default)]
        ctx: ExprContext,
    },
    Starred {
        value: Box<Expr>,
        #[serde(default)]
        ctx: ExprContext,
    },
    Name {
        #[serde(deserialize_with = "deserialize_identifier")]
        id: String,
        #[serde(default)]
        ctx: ExprContext,
    },
    List {
        elts: Vec<Expr>,
        #[serde(default)]
        ctx: ExprContext,
    },
    Tuple {
        elts: Vec<Expr>,
        #[serde(default)]
        ctx: ExprContext,
    },
}

fn no_conversion() -> i64 {
    -1
}

impl Expr {
    /// Every `_type` tag an `Expr` can carry
    pub const KINDS: &'static [&'static str] = &[
        "BoolOp",
        "BinOp",
        "UnaryOp",
        "IfExp",
        "Dict",
        "Compare",
        "Call",
        "Await",
        "FormattedValue",
        "JoinedStr",
        "Constant",
        "Attribute",
        "Starred",
        "Name",
        "List",
        "Tuple",
    ];

    pub fn new(kind: ExprKind) -> Self {
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

    /// A name being read
    pub fn name(id: impl Into<String>) -> Self {
        Self::new(ExprKind::Name {
            id: id.into(),
            ctx: ExprContext::Load,
        })
    }

    /// A name being assigned
    pub fn store(id: impl Into<String>) -> Self {
        Self::new(ExprKind::Name {
            id: id.into(),
            ctx: ExprContext::Store,
        })
    }

    pub fn constant(value: impl Into<ConstantValue>) -> Self {
        Self::new(ExprKind::Constant {
            value: value.into(),
            kind: None,
        })
    }

    pub fn none() -> Self {
        Self::constant(ConstantValue::None)
    }

    pub fn bin_op(left: Expr, op: Operator, right: Expr) -> Self {
        Self::new(ExprKind::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn bool_op(op: BoolOperator, values: Vec<Expr>) -> Self {
        Self::new(ExprKind::BoolOp { op, values })
    }

    pub fn unary_op(op: UnaryOperator, operand: Expr) -> Self {
        Self::new(ExprKind::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    /// `body if test else orelse`
    pub fn if_exp(test: Expr, body: Expr, orelse: Expr) -> Self {
        Self::new(ExprKind::IfExp {
            test: Box::new(test),
            body: Box::new(body),
            orelse: Box::new(orelse),
        })
    }

    pub fn dict(keys: Vec<Option<Expr>>, values: Vec<Expr>) -> Self {
        Self::new(ExprKind::Dict { keys, values })
    }

    /// A single comparison, `left <op> right`
    pub fn compare(left: Expr, op: CmpOperator, right: Expr) -> Self {
        Self::new(ExprKind::Compare {
            left: Box::new(left),
            ops: vec![op],
            comparators: vec![right],
        })
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Self::call_with_keywords(func, args, Vec::new())
    }

    pub fn call_with_keywords(func: Expr, args: Vec<Expr>, keywords: Vec<Keyword>) -> Self {
        Self::new(ExprKind::Call {
            func: Box::new(func),
            args,
            keywords,
        })
    }

    pub fn await_(value: Expr) -> Self {
        Self::new(ExprKind::Await {
            value: Box::new(value),
        })
    }

    pub fn joined_str(values: Vec<Expr>) -> Self {
        Self::new(ExprKind::JoinedStr { values })
    }

    /// A replacement field with no conversion and no format spec
    pub fn formatted_value(value: Expr) -> Self {
        Self::new(ExprKind::FormattedValue {
            value: Box::new(value),
            conversion: no_conversion(),
            format_spec: None,
        })
    }

    /// `*value`
    pub fn starred(value: Expr) -> Self {
        Self::new(ExprKind::Starred {
            value: Box::new(value),
            ctx: ExprContext::Load,
        })
    }

    pub fn attribute(value: Expr, attr: impl Into<String>) -> Self {
        Self::new(ExprKind::Attribute {
            value: Box::new(value),
            attr: attr.into(),
            ctx: ExprContext::Load,
        })
    }

    pub fn list(elts: Vec<Expr>) -> Self {
        Self::new(ExprKind::List {
            elts,
            ctx: ExprContext::Load,
        })
    }

    pub fn tuple(elts: Vec<Expr>) -> Self {
        Self::new(ExprKind::Tuple {
            elts,
            ctx: ExprContext::Load,
        })
    }

    /// Switch a `Name`, `Attribute`, `Starred`, `List` or `Tuple` to another context.
    /// Other kinds are returned unchanged.
    pub fn with_ctx(mut self, new_ctx: ExprContext) -> Self {
        match &mut self.kind {
            ExprKind::Name { ctx, .. }
            | ExprKind::Attribute { ctx, .. }
            | ExprKind::Starred { ctx, .. }
            | ExprKind::List { ctx, .. }
            | ExprKind::Tuple { ctx, .. } => *ctx = new_ctx,
            _ => {}
        }
        self
    }
}

impl AstNode for Expr {
    fn node_type(&self) -> &'static str {
        match &self.kind {
            ExprKind::BoolOp { .. } => "BoolOp",
            ExprKind::BinOp { .. } => "BinOp",
            ExprKind::UnaryOp { .. } => "UnaryOp",
            ExprKind::IfExp { .. } => "IfExp",
            ExprKind::Dict { .. } => "Dict",
            ExprKind::Compare { .. } => "Compare",
            ExprKind::Call { .. } => "Call",
            ExprKind::Await { .. } => "Await",
            ExprKind::FormattedValue { .. } => "FormattedValue",
            ExprKind::JoinedStr { .. } => "JoinedStr",
            ExprKind::Constant { .. } => "Constant",
            ExprKind::Attribute { .. } => "Attribute",
            ExprKind::Starred { .. } => "Starred",
            ExprKind::Name { .. } => "Name",
            ExprKind::List { .. } => "List",
            ExprKind::Tuple { .. } => "Tuple",
        }
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        match &self.kind {
            ExprKind::BoolOp { op, values } => {
                vec![("op", Field::node(op)), ("values", Field::list(values))]
            }
            ExprKind::BinOp { left, op, right } => vec![
                ("left", Field::node(left.as_ref())),
                ("op", Field::node(op)),
                ("right", Field::node(right.as_ref())),
            ],
            ExprKind::UnaryOp { op, operand } => vec![
                ("op", Field::node(op)),
                ("operand", Field::node(operand.as_ref())),
            ],
            ExprKind::IfExp { test, body, orelse } => vec![
                ("test", Field::node(test.as_ref())),
                ("body", Field::node(body.as_ref())),
                ("orelse", Field::node(orelse.as_ref())),
            ],
            ExprKind::Dict { keys, values } => vec![
                ("keys", Field::optional_list(keys)),
                ("values", Field::list(values)),
            ],
            ExprKind::Compare {
                left,
                ops,
                comparators,
            } => vec![
                ("left", Field::node(left.as_ref())),
                ("ops", Field::list(ops)),
                ("comparators", Field::list(comparators)),
            ],
            ExprKind::Call {
                func,
                args,
                keywords,
            } => vec![
                ("func", Field::node(func.as_ref())),
                ("args", Field::list(args)),
                ("keywords", Field::list(keywords)),
            ],
            ExprKind::Await { value } => vec![("value", Field::node(value.as_ref()))],
            ExprKind::FormattedValue {
                value,
                conversion,
                format_spec,
            } => vec![
                ("value", Field::node(value.as_ref())),
                ("conversion", Field::int(conversion)),
                ("format_spec", Field::optional(format_spec.as_deref())),
            ],
            ExprKind::JoinedStr { values } => vec![("values", Field::list(values))],
            ExprKind::Constant { value, kind } => vec![
                ("value", Field::Scalar(value.to_string())),
                ("kind", Field::optional_str(kind.as_deref())),
            ],
            ExprKind::Attribute { value, attr, ctx } => vec![
                ("value", Field::node(value.as_ref())),
                ("attr", Field::str(attr)),
                ("ctx", Field::node(ctx)),
            ],
            ExprKind::Starred { value, ctx } => vec![
                ("value", Field::node(value.as_ref())),
                ("ctx", Field::node(ctx)),
            ],
            ExprKind::Name { id, ctx } => vec![("id", Field::str(id)), ("ctx", Field::node(ctx))],
            ExprKind::List { elts, ctx } | ExprKind::Tuple { elts, ctx } => {
                vec![("elts", Field::list(elts)), ("ctx", Field::node(ctx))]
            }
        }
    }

    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}
