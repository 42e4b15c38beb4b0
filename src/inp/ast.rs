//! AST definitions and utilities for the .inp format
//!
//! This module provides the Abstract Syntax Tree (AST) node types, along with the
//! location types used to tie nodes and errors back to the source text.
//!
//! ## Modules
//!
//! - `elements` - AST node type definitions organized by family
//! - `range` - Position and range types, and byte offset conversion
//! - `error` - The syntax error raised by the grammar
//! - `snapshot` / `snapshot_visitor` - A normalized tree used by the tree renderer

pub mod elements;
pub mod error;
pub mod range;
pub mod snapshot;
pub mod snapshot_visitor;

// Re-export commonly used types at module root
pub use elements::*;
pub use error::{format_source_context, SyntaxError};
pub use range::{Position, Range, SourceLocation};
pub use snapshot::AstSnapshot;
pub use snapshot_visitor::snapshot_from_program;
