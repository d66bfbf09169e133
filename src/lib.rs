//! # astdump
//!
//! Canonical textual dumps of Python-style syntax trees.
//!
//! Give it a node, or a sequence of nodes such as a statement body, and it
//! returns one deterministic string, ready for snapshot tests or for diffing
//! the output of two front-ends:
//!
//! ```text
//! [Expr(value=Call(func=Name(id='main', ctx=Load()), args=[], keywords=[]))]
//! ```
//!
//! - [`ast`]: the node types and the single-node renderer
//! - [`dump`]: the tree dumper and the document boundary
//! - [`formats`]: named output formats (`dump`, `json`, `treeviz`)
//! - [`config`]: layered TOML configuration for the dump options

pub mod ast;
pub mod config;
pub mod dump;
pub mod formats;

pub use ast::{AstNode, Dump, DumpOptions, IndentMode, Node};
pub use dump::{dump, dump_value, DumpError, DumpInput, Tree};
