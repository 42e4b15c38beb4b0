//! Lexer
//!
//!     Tokenization is a single logos pass. Spaces, tabs and carriage returns are skipped;
//!     newlines survive as tokens because the grammar is line-structured.
//!
//!     Every token keeps the byte range of its source text. The parser never looks at
//!     whitespace, but free-text bodies (`TITLE`, `LOOKUP VARIABLE`, file names, user event
//!     parameter names) are recovered verbatim by slicing the source between token ranges,
//!     so those ranges must reach the parser untouched.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;
use std::ops::Range as ByteRange;

/// Tokenize source text into `(Token, byte range)` pairs
pub fn tokenize(source: &str) -> Vec<(Token, ByteRange<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
