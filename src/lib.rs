//! # maap-inp
//!
//! A parser for MAAP `.inp` input files.
//!
//! The crate is a round-trip compiler for the input-file language of the MAAP simulation
//! code: source text is tokenized, parsed into a typed AST, optionally salvaged by the
//! safe-mode recovery controller, and rendered back into canonical source by the serializer.
//!
//! File Layout
//!
//! src/inp
//!   ├── lexing      Token definitions and the tokenizer
//!   ├── parsing     Combinator grammar over the token stream
//!   ├── ast         Node types, locations and errors
//!   ├── safe_mode   Line-neutralizing recovery controller
//!   ├── formats     Serializer and alternative renderings
//!   ├── facade      The caller-facing parser entry point
//!   └── config      Layered configuration
//!
//! For testing guidelines, see the [testing module](inp::testing).

pub mod inp;

pub use inp::{
    ast::{Program, SyntaxError},
    facade::{create_parser, InpParser},
    formats::serialize,
    options::{OptionOverrides, ParserOptions},
    safe_mode::ParseOutput,
};
