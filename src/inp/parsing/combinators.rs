//! Parser combinator functions shared by the expression and statement grammars.

use chumsky::error::Error as _;
use chumsky::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::ops::Range;

use crate::inp::ast::range::{Range as AstRange, SourceLocation};
use crate::inp::lexing::Token;

/// Type alias for token with location
pub(crate) type TokenLocation = (Token, Range<usize>);

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenLocation>;

/// Words that never start or continue a name
static RESERVED_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["IS", "AS", "AND", "OR"].into_iter().collect());

pub(crate) fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(word.to_ascii_uppercase().as_str())
}

/// Source text and location settings shared by every parser built for one input
pub(crate) struct SourceContext {
    source: String,
    locations: SourceLocation,
    emit_location: bool,
}

impl SourceContext {
    pub(crate) fn new(source: &str, emit_location: bool) -> Self {
        Self {
            source: source.to_string(),
            locations: SourceLocation::new(source),
            emit_location,
        }
    }

    /// Node location for a byte span, or `None` when locations are off
    pub(crate) fn locate(&self, span: &Range<usize>) -> Option<AstRange> {
        self.emit_location
            .then(|| self.locations.byte_range_to_range(span))
    }

    /// Location for diagnostics; always computed
    pub(crate) fn error_range(&self, span: &Range<usize>) -> AstRange {
        self.locations.byte_range_to_range(span)
    }

    pub(crate) fn len(&self) -> usize {
        self.source.len()
    }

    /// Verbatim source for a byte span
    pub(crate) fn slice(&self, span: &Range<usize>) -> String {
        self.source.get(span.clone()).unwrap_or_default().to_string()
    }

    /// Verbatim source from the first token's start to the last token's end
    pub(crate) fn text_of(&self, tokens: &[TokenLocation]) -> Option<String> {
        span_of(tokens).map(|span| self.slice(&span))
    }
}

/// Byte span covering a run of tokens
pub(crate) fn span_of(tokens: &[TokenLocation]) -> Option<Range<usize>> {
    let (_, first) = tokens.first()?;
    let (_, last) = tokens.last()?;
    Some(first.start..last.end)
}

pub(crate) fn unexpected(span: Range<usize>, found: TokenLocation) -> ParserError {
    Simple::expected_input_found(span, Vec::<Option<TokenLocation>>::new(), Some(found))
}

/// Helper: match a specific token type, ignoring the location
pub(crate) fn token(t: Token) -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenLocation| tok == &t).ignored()
}

/// Match a specific token and keep its byte range
pub(crate) fn token_span(
    t: Token,
) -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenLocation| tok == &t).map(|(_, span)| span)
}

/// A keyword, matched case-insensitively against a word token
pub(crate) fn keyword(
    name: &'static str,
) -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenLocation| tok.is_word(name))
        .map(|(_, span)| span)
        .labelled(name)
}

pub(crate) fn newline() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    token(Token::Newline).labelled("end of line")
}

/// One or more line breaks (blank lines included)
pub(crate) fn newlines() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    newline().repeated().at_least(1).ignored()
}

/// A line break or the end of input
pub(crate) fn line_end() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    newline().or(end())
}

/// A word usable as an identifier: not reserved and not a bare `END`
pub(crate) fn word() -> impl Parser<TokenLocation, (String, Range<usize>), Error = ParserError> + Clone
{
    filter_map(|span, (tok, range): TokenLocation| match tok {
        Token::Word(word) if !is_reserved(&word) && !word.eq_ignore_ascii_case("END") => {
            Ok((word, range))
        }
        other => Err(unexpected(span, (other, range))),
    })
    .labelled("identifier")
}

/// A word that may appear inside a multi-word parameter name
pub(crate) fn name_word() -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenLocation| match tok {
        Token::Word(word) if !is_reserved(&word) => Ok(range),
        other => Err(unexpected(span, (other, range))),
    })
}

/// A word or a number inside a parameter name, after its first word
pub(crate) fn name_part() -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenLocation| match tok {
        Token::Word(word) if !is_reserved(&word) => Ok(range),
        Token::Number(_) => Ok(range),
        other => Err(unexpected(span, (other, range))),
    })
}

/// An unsigned integer such as a column count, an index or a timer number
pub(crate) fn integer() -> impl Parser<TokenLocation, u32, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, (tok, range): TokenLocation| match tok {
        Token::Number(text) => text
            .parse::<u32>()
            .map_err(|_| Simple::custom(span, format!("Expected an integer but \"{}\" found.", text))),
        other => Err(unexpected(span, (other, range))),
    })
    .labelled("integer")
}

/// Binary operator, symbolic or `AND`/`OR`
pub(crate) fn operator() -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenLocation| {
        if let Some(op) = tok.operator() {
            Ok(op.to_string())
        } else if tok.is_word("AND") {
            Ok("AND".to_string())
        } else if tok.is_word("OR") {
            Ok("OR".to_string())
        } else {
            Err(unexpected(span, (tok, range)))
        }
    })
}

/// Every remaining token on the current line; at least one
pub(crate) fn rest_of_line(
) -> impl Parser<TokenLocation, Vec<TokenLocation>, Error = ParserError> + Clone {
    filter(|(tok, _): &TokenLocation| !tok.is_newline())
        .repeated()
        .at_least(1)
}

/// The elements of a block: a line break after the header, items each followed by line
/// breaks, then a line holding only `END`
pub(crate) fn block_body<T, P>(item: P) -> impl Parser<TokenLocation, Vec<T>, Error = ParserError> + Clone
where
    P: Parser<TokenLocation, T, Error = ParserError> + Clone,
{
    newlines()
        .ignore_then(item.then_ignore(newlines()).repeated())
        .then_ignore(keyword("END"))
        .then_ignore(line_end().rewind())
}

/// A verbatim body: every token from the header's line break up to the `END` line.
///
/// The returned tokens include line breaks so callers can split rows.
pub(crate) fn free_text_body(
) -> impl Parser<TokenLocation, Vec<TokenLocation>, Error = ParserError> + Clone {
    let end_line = newline()
        .then(keyword("END"))
        .then(line_end().rewind())
        .ignored();

    newline()
        .rewind()
        .ignore_then(take_until(end_line))
        .map(|(tokens, ())| tokens)
}

/// Split body tokens into rows of tokens, dropping empty rows
pub(crate) fn split_rows(tokens: Vec<TokenLocation>) -> Vec<Vec<TokenLocation>> {
    let mut rows = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        if token.0.is_newline() {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    rows
}
