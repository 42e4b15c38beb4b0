//! Token definitions for the .inp format
//!
//! Keywords are not tokens of their own: MAAP keywords double as ordinary names
//! (`SENSITIVITY` alone is an identifier), so they are lexed as [Token::Word] and
//! recognized by the parser in context.
use logos::Logos;
use std::fmt;

/// All possible tokens in the .inp format
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    // Line breaks are significant: statements are line-structured
    #[token("\n")]
    Newline,

    // Whole-line comment; carries the text after the marker minus one leading space
    #[regex(r"//[^\n]*", comment_body)]
    Comment(String),

    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string(), priority = 3)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string(), priority = 3)]
    Number(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_.$]*", |lex| lex.slice().to_string(), priority = 3)]
    Word(String),

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[token("#")]
    Hash,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    Power,
    #[token("/")]
    Slash,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("==")]
    EqualEqual,
    #[token("<>")]
    NotEqual,

    // Anything else; only meaningful inside free-text bodies
    #[regex(r"[^ \t\r\f\n]", |lex| lex.slice().to_string(), priority = 1)]
    Symbol(String),
}

fn comment_body(lex: &mut logos::Lexer<Token>) -> String {
    let body = &lex.slice()[2..];
    body.strip_prefix(' ').unwrap_or(body).to_string()
}

impl Token {
    /// The operator text for binary operator tokens
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Token::Plus => Some("+"),
            Token::Minus => Some("-"),
            Token::Star => Some("*"),
            Token::Power => Some("**"),
            Token::Slash => Some("/"),
            Token::Less => Some("<"),
            Token::Greater => Some(">"),
            Token::LessEqual => Some("<="),
            Token::GreaterEqual => Some(">="),
            Token::EqualEqual => Some("=="),
            Token::NotEqual => Some("<>"),
            _ => None,
        }
    }

    /// Case-insensitive keyword check
    pub fn is_word(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(word) if word.eq_ignore_ascii_case(keyword))
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Newline => write!(f, "end of line"),
            Token::Comment(_) => write!(f, "comment"),
            Token::Number(text) | Token::Word(text) | Token::Symbol(text) => {
                write!(f, "\"{}\"", text)
            }
            Token::OpenParen => write!(f, "\"(\""),
            Token::CloseParen => write!(f, "\")\""),
            Token::Comma => write!(f, "\",\""),
            Token::Equals => write!(f, "\"=\""),
            Token::Hash => write!(f, "\"#\""),
            other => match other.operator() {
                Some(op) => write!(f, "\"{}\"", op),
                None => write!(f, "{:?}", other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(Result::ok).collect()
    }

    #[test]
    fn test_words_and_newlines() {
        assert_eq!(
            lex("SENSITIVITY ON\n"),
            vec![
                Token::Word("SENSITIVITY".into()),
                Token::Word("ON".into()),
                Token::Newline
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            lex("1 0.005 .5 1E-3 2.5e+2"),
            vec![
                Token::Number("1".into()),
                Token::Number("0.005".into()),
                Token::Number(".5".into()),
                Token::Number("1E-3".into()),
                Token::Number("2.5e+2".into()),
            ]
        );
    }

    #[test]
    fn test_number_followed_by_unit() {
        assert_eq!(
            lex("1HR"),
            vec![Token::Number("1".into()), Token::Word("HR".into())]
        );
    }

    #[test]
    fn test_comment_strips_one_space() {
        assert_eq!(lex("// When empty"), vec![Token::Comment("When empty".into())]);
        assert_eq!(lex("//  indented"), vec![Token::Comment(" indented".into())]);
        assert_eq!(lex("//tight"), vec![Token::Comment("tight".into())]);
    }

    #[test]
    fn test_operators_prefer_longest_match() {
        assert_eq!(
            lex("** <= >= == <> < > = / -"),
            vec![
                Token::Power,
                Token::LessEqual,
                Token::GreaterEqual,
                Token::EqualEqual,
                Token::NotEqual,
                Token::Less,
                Token::Greater,
                Token::Equals,
                Token::Slash,
                Token::Minus,
            ]
        );
    }

    #[test]
    fn test_call_tokens() {
        assert_eq!(
            lex("I(J)"),
            vec![
                Token::Word("I".into()),
                Token::OpenParen,
                Token::Word("J".into()),
                Token::CloseParen
            ]
        );
    }

    #[test]
    fn test_file_names_are_single_words() {
        assert_eq!(
            lex("parameter_file.PAR"),
            vec![Token::Word("parameter_file.PAR".into())]
        );
    }

    #[test]
    fn test_unknown_characters_become_symbols() {
        assert_eq!(
            lex("a: \"b\""),
            vec![
                Token::Word("a".into()),
                Token::Symbol(":".into()),
                Token::Symbol("\"".into()),
                Token::Word("b".into()),
                Token::Symbol("\"".into()),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Word("END".into()).to_string(), "\"END\"");
        assert_eq!(Token::Newline.to_string(), "end of line");
        assert_eq!(Token::NotEqual.to_string(), "\"<>\"");
    }
}
