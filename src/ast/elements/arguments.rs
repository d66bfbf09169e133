//! Helper nodes: parameter lists, call keywords and import aliases
//!
//! These use lowercase class names (`arguments`, `arg`, `keyword`, `alias`),
//! like the rest of the `ast` vocabulary they mirror. All but `arguments`
//! carry a source [`Location`].

use super::super::identifier::{
    deserialize_dotted_name, deserialize_identifier, deserialize_optional_identifier,
};
use super::super::location::Location;
use super::super::traits::{AstNode, Field};
use super::expression::Expr;
use serde::{Deserialize, Serialize};

/// The parameter list of a function definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub posonlyargs: Vec<Arg>,
    #[serde(default)]
    pub args: Vec<Arg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vararg: Option<Arg>,
    #[serde(default)]
    pub kwonlyargs: Vec<Arg>,
    #[serde(default)]
    pub kw_defaults: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwarg: Option<Arg>,
    #[serde(default)]
    pub defaults: Vec<Expr>,
}

impl Arguments {
    /// Plain positional parameters, no defaults
    pub fn positional<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            args: names.into_iter().map(Arg::new).collect(),
            ..Default::default()
        }
    }
}

impl AstNode for Arguments {
    fn node_type(&self) -> &'static str {
        "arguments"
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("posonlyargs", Field::list(&self.posonlyargs)),
            ("args", Field::list(&self.args)),
            ("vararg", Field::optional(self.vararg.as_ref())),
            ("kwonlyargs", Field::list(&self.kwonlyargs)),
            ("kw_defaults", Field::list(&self.kw_defaults)),
            ("kwarg", Field::optional(self.kwarg.as_ref())),
            ("defaults", Field::list(&self.defaults)),
        ]
    }
}

/// A single parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub arg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Expr>,
    #[serde(flatten)]
    pub location: Location,
}

impl Arg {
    pub fn new(arg: impl Into<String>) -> Self {
        Self {
            arg: arg.into(),
            annotation: None,
            location: Location::default(),
        }
    }

    pub fn annotated(arg: impl Into<String>, annotation: Expr) -> Self {
        Self {
            annotation: Some(annotation),
            ..Self::new(arg)
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Arg {
    fn node_type(&self) -> &'static str {
        "arg"
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("arg", Field::str(&self.arg)),
            ("annotation", Field::optional(self.annotation.as_ref())),
        ]
    }

    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}

/// A keyword argument in a call; `arg` is `None` for `**kwargs` splats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_identifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub arg: Option<String>,
    pub value: Expr,
    #[serde(flatten)]
    pub location: Location,
}

impl Keyword {
    pub fn new(arg: Option<&str>, value: Expr) -> Self {
        Self {
            arg: arg.map(str::to_string),
            value,
            location: Location::default(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Keyword {
    fn node_type(&self) -> &'static str {
        "keyword"
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("arg", Field::optional_str(self.arg.as_deref())),
            ("value", Field::node(&self.value)),
        ]
    }

    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}

/// One name in an `import` or `from ... import` statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    #[serde(deserialize_with = "deserialize_dotted_name")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_identifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub asname: Option<String>,
    #[serde(flatten)]
    pub location: Location,
}

impl Alias {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asname: None,
            location: Location::default(),
        }
    }

    pub fn renamed(name: impl Into<String>, asname: impl Into<String>) -> Self {
        Self {
            asname: Some(asname.into()),
            ..Self::new(name)
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Alias {
    fn node_type(&self) -> &'static str {
        "alias"
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("name", Field::str(&self.name)),
            ("asname", Field::optional_str(self.asname.as_deref())),
        ]
    }

    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Dump;

    #[test]
    fn test_empty_arguments_dump() {
        assert_eq!(
            Arguments::default().dump(None),
            "arguments(posonlyargs=[], args=[], kwonlyargs=[], kw_defaults=[], defaults=[])"
        );
    }

    #[test]
    fn test_positional_arguments_dump() {
        assert_eq!(
            Arguments::positional(["a", "b"]).dump(None),
            "arguments(posonlyargs=[], args=[arg(arg='a'), arg(arg='b')], kwonlyargs=[], kw_defaults=[], defaults=[])"
        );
    }

    #[test]
    fn test_alias_dump() {
        assert_eq!(Alias::new("os.path").dump(None), "alias(name='os.path')");
        assert_eq!(
            Alias::renamed("numpy", "np").dump(None),
            "alias(name='numpy', asname='np')"
        );
    }

    #[test]
    fn test_keyword_splat_dump() {
        let splat = Keyword::new(None, Expr::name("kwargs"));
        assert_eq!(
            splat.dump(None),
            "keyword(value=Name(id='kwargs', ctx=Load()))"
        );
    }

    #[test]
    fn test_alias_rejects_bad_dotted_name() {
        let result: Result<Alias, _> = serde_json::from_str(r#"{"name": "os..path"}"#);
        assert!(result.is_err());
        let ok: Alias = serde_json::from_str(r#"{"name": "os.path", "asname": "p"}"#).unwrap();
        assert_eq!(ok, Alias::renamed("os.path", "p"));
    }

    #[test]
    fn test_alias_attributes() {
        let json = r#"{"_type": "alias", "name": "sys", "lineno": 2, "col_offset": 7, "end_lineno": 2, "end_col_offset": 10}"#;
        let alias: Alias = serde_json::from_str(json).unwrap();
        assert_eq!(alias, Alias::new("sys").at(Location::span(2, 7, 2, 10)));
        let options = crate::ast::DumpOptions::default().include_attributes(true);
        assert_eq!(
            alias.dump_with(&options),
            "alias(name='sys', lineno=2, col_offset=7, end_lineno=2, end_col_offset=10)"
        );
    }
}
