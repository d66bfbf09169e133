//! Python-style syntax trees
//!
//! The node types mirror Python's `ast` module closely enough that a dump of a
//! tree matches what `ast.dump` prints for the same program. Trees are built
//! in Rust with the constructors on [`Stmt`] and [`Expr`], or loaded from JSON
//! and YAML documents through serde.

pub mod elements;
pub mod identifier;
pub mod location;
pub mod render;
pub mod repr;
pub mod traits;

pub use elements::*;
pub use location::Location;
pub use render::{render, DumpOptions, IndentMode};
pub use traits::{AstNode, Dump, Field};
