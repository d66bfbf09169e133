//! Output format implementations for tree serialization
//!
//! This module contains the named output formats a tree can be written in:
//! - dump: the canonical `ast.dump`-style text
//! - json: the serde document form, the same shape trees are loaded from
//! - treeviz: one node per line, for scanning large trees by eye

pub mod canonical;
pub mod json;
pub mod registry;
pub mod treeviz;

pub use canonical::DumpFormatter;
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
