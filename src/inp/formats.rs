//! Output format implementations for the AST
//!
//! This module contains the renderings of a parsed [Program](crate::inp::ast::Program):
//! - `inp`: the serializer back to canonical source
//! - `structured`: JSON and YAML
//! - `treeviz`: one line per node, for eyeballing a parse
//!
//! All of them are available by name through the [FormatRegistry].

pub mod inp;
pub mod registry;
pub mod structured;
pub mod treeviz;

pub use inp::{serialize, InpFormatter, ToInpString};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
