//! Main module for maap-inp functionality
//!
//!     The pipeline is deliberately short: [lexing] turns text into `(Token, Range<usize>)`
//!     pairs, [parsing] runs the grammar over them and builds the [ast], and
//!     [formats] walks the AST back into text. [safe_mode] and [facade] sit on top of the
//!     parser and are what most callers use.

pub mod ast;
pub mod config;
pub mod facade;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod options;
pub mod parsing;
pub mod safe_mode;
pub mod testing;
