//! Parser module for the .inp format
//!
//!     The grammar is a set of chumsky combinators over the `(Token, Range<usize>)` pairs the
//!     lexer produces. It is single-pass and whole-input: the first failure aborts the
//!     parse with one [SyntaxError]. Partial recovery is the job of
//!     [safe_mode](crate::inp::safe_mode), which edits the text and parses again.
//!
//!     The [Grammar] trait is the seam between the two: the recovery controller and the
//!     facade accept any grammar, and [InpGrammar] is the one this crate ships.
//!
//! Module Organization
//!
//!     - `combinators`: token-level helpers shared by the rest of the grammar
//!     - `expressions`: literals, names, calls, chains and `IS` expressions
//!     - `statements`: keyword-led statements and blocks
//!     - `program`: source elements and the program root

pub mod combinators;
pub mod expressions;
pub mod program;
pub mod statements;

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::Stream;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::inp::ast::{Program, SyntaxError};
use crate::inp::lexing::tokenize;
use crate::inp::options::ParserOptions;
use combinators::{ParserError, SourceContext};

/// Anything that turns source text into a [Program]
pub trait Grammar {
    fn parse(&self, source: &str, options: &ParserOptions) -> Result<Program, SyntaxError>;
}

/// The .inp grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct InpGrammar;

impl Grammar for InpGrammar {
    fn parse(&self, source: &str, options: &ParserOptions) -> Result<Program, SyntaxError> {
        parse_program(source, options.emit_location)
    }
}

impl<F> Grammar for F
where
    F: Fn(&str, &ParserOptions) -> Result<Program, SyntaxError>,
{
    fn parse(&self, source: &str, options: &ParserOptions) -> Result<Program, SyntaxError> {
        self(source, options)
    }
}

/// Parse source text into a [Program]
///
/// With `emit_location` off, every node's `location` is `None`. Syntax errors are always
/// located.
#[instrument(level = "trace", skip(source), fields(len = source.len()))]
pub fn parse_program(source: &str, emit_location: bool) -> Result<Program, SyntaxError> {
    let tokens = tokenize(source);
    debug!(tokens = tokens.len(), "tokenized");

    let ctx = Arc::new(SourceContext::new(source, emit_location));
    let eoi = source.len();
    let stream = Stream::from_iter(
        eoi..eoi,
        tokens.into_iter().map(|(t, s)| ((t, s.clone()), s)),
    );

    program::program(&ctx).parse(stream).map_err(|errors| {
        match errors.into_iter().next() {
            Some(error) => to_syntax_error(&error, &ctx),
            None => SyntaxError::new("Unknown syntax error", ctx.error_range(&(0..0))),
        }
    })
}

fn to_syntax_error(error: &ParserError, ctx: &SourceContext) -> SyntaxError {
    let message = match error.reason() {
        SimpleReason::Custom(message) => message.clone(),
        SimpleReason::Unclosed { delimiter, .. } => format!("Unclosed {}", delimiter.0),
        SimpleReason::Unexpected => unexpected_message(error),
    };
    SyntaxError::new(message, ctx.error_range(&error.span()))
}

fn unexpected_message(error: &ParserError) -> String {
    let found = error
        .found()
        .map(|(token, _)| token.to_string())
        .unwrap_or_else(|| "end of input".to_string());

    if let Some(label) = error.label() {
        return format!("Expected {} but {} found.", label, found);
    }

    let mut expected: Vec<String> = error
        .expected()
        .map(|token| match token {
            Some((token, _)) => token.to_string(),
            None => "end of input".to_string(),
        })
        .collect();
    expected.sort();
    expected.dedup();

    match expected.split_last() {
        None => format!("Unexpected {} found.", found),
        Some((last, [])) => format!("Expected {} but {} found.", last, found),
        Some((last, rest)) => format!(
            "Expected {} or {} but {} found.",
            rest.join(", "),
            last,
            found
        ),
    }
}
