//! Field-less node kinds: operators and expression contexts
//!
//! They dump as a bare class call (`Add()`, `Load()`) and serialize as
//! `{"_type": "Add"}`.

use super::super::traits::{AstNode, Field};
use serde::{Deserialize, Serialize};

macro_rules! field_less_nodes {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(tag = "_type")]
        pub enum $name {
            $($variant),+
        }

        impl AstNode for $name {
            fn node_type(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
                Vec::new()
            }
        }
    };
}

field_less_nodes!(
    /// Binary operators used by `BinOp` and `AugAssign`
    Operator {
        Add,
        Sub,
        Mult,
        MatMult,
        Div,
        Mod,
        Pow,
        LShift,
        RShift,
        BitOr,
        BitXor,
        BitAnd,
        FloorDiv,
    }
);

field_less_nodes!(
    /// Short-circuit operators used by `BoolOp`
    BoolOperator { And, Or }
);

field_less_nodes!(UnaryOperator {
    Invert,
    Not,
    UAdd,
    USub,
});

field_less_nodes!(
    /// Comparison operators used by `Compare`
    CmpOperator {
        Eq,
        NotEq,
        Lt,
        LtE,
        Gt,
        GtE,
        Is,
        IsNot,
        In,
        NotIn,
    }
);

field_less_nodes!(
    /// Whether a name, attribute or collection is read, assigned or deleted
    ExprContext { Load, Store, Del }
);

impl Default for ExprContext {
    fn default() -> Self {
        ExprContext::Load
    }
}
