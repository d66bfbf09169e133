//! Source positions attached to statements and expressions

use serde::{Deserialize, Serialize};

/// Start and end position of a node in its source file.
///
/// Every part is optional: trees built by hand, or by front-ends that do not
/// track positions, simply leave them out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineno: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_offset: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_lineno: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_col_offset: Option<usize>,
}

impl Location {
    /// A location spanning `(lineno, col_offset)` to `(end_lineno, end_col_offset)`
    pub fn span(lineno: usize, col_offset: usize, end_lineno: usize, end_col_offset: usize) -> Self {
        Self {
            lineno: Some(lineno),
            col_offset: Some(col_offset),
            end_lineno: Some(end_lineno),
            end_col_offset: Some(end_col_offset),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lineno.is_none()
            && self.col_offset.is_none()
            && self.end_lineno.is_none()
            && self.end_col_offset.is_none()
    }

    /// The attributes in `ast` order, skipping the missing ones
    pub fn attributes(&self) -> Vec<(&'static str, usize)> {
        [
            ("lineno", self.lineno),
            ("col_offset", self.col_offset),
            ("end_lineno", self.end_lineno),
            ("end_col_offset", self.end_col_offset),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    /// Build a diagnostic pointing at this location, e.g. `"bad call main.py:Some(3):Some(4)"`.
    pub fn error_message(&self, module: impl AsRef<str>, message: impl AsRef<str>) -> String {
        format!(
            "{} {}:{:?}:{:?}",
            message.as_ref(),
            module.as_ref(),
            self.lineno,
            self.col_offset
        )
    }
}
