//! Source loading
//!
//! `InpLoader` is the entry point for callers that start from a path rather than a string.
//! String-based methods are the core; file-based methods read the file and delegate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use maap_inp::inp::loader::InpLoader;
//!
//! let loader = InpLoader::new();
//! let result = loader.parse("SENSITIVITY ON")?;
//! let result = loader.load_and_parse("plant.INP")?;
//! let tokens = loader.load_and_tokenize("plant.INP")?;
//! ```

use std::fs;
use std::io::{self, Read};
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::inp::ast::SyntaxError;
use crate::inp::facade::InpParser;
use crate::inp::lexing::{tokenize, Token};
use crate::inp::options::OptionOverrides;
use crate::inp::parsing::{Grammar, InpGrammar};
use crate::inp::safe_mode::ParseOutput;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Read a source file; `-` reads standard input
pub fn read_source(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(io_error)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(io_error)
    }
}

/// Loads and parses .inp sources through a parser facade
#[derive(Debug, Clone)]
pub struct InpLoader<G = InpGrammar> {
    parser: InpParser<G>,
}

impl InpLoader<InpGrammar> {
    pub fn new() -> Self {
        Self::with_parser(InpParser::new())
    }
}

impl Default for InpLoader<InpGrammar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Grammar> InpLoader<G> {
    pub fn with_parser(parser: InpParser<G>) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &InpParser<G> {
        &self.parser
    }

    // ===== STRING-BASED PROCESSING =====

    pub fn parse(&self, source: &str) -> Result<ParseOutput, SyntaxError> {
        self.parser.parse(source)
    }

    pub fn parse_with(
        &self,
        source: &str,
        overrides: &OptionOverrides,
    ) -> Result<ParseOutput, SyntaxError> {
        self.parser.parse_with(source, overrides)
    }

    pub fn tokenize(&self, source: &str) -> Vec<(Token, Range<usize>)> {
        tokenize(source)
    }

    // ===== FILE-BASED PROCESSING =====

    pub fn load_and_parse(&self, path: impl AsRef<Path>) -> Result<ParseOutput, LoadError> {
        let source = read_source(path)?;
        Ok(self.parse(&source)?)
    }

    pub fn load_and_parse_with(
        &self,
        path: impl AsRef<Path>,
        overrides: &OptionOverrides,
    ) -> Result<ParseOutput, LoadError> {
        let source = read_source(path)?;
        Ok(self.parse_with(&source, overrides)?)
    }

    pub fn load_and_tokenize(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<(Token, Range<usize>)>, LoadError> {
        let source = read_source(path)?;
        Ok(self.tokenize(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let error = InpLoader::new()
            .load_and_parse("/nonexistent/plant.INP")
            .unwrap_err();
        assert!(matches!(error, LoadError::Io { .. }));
        assert!(error.to_string().contains("/nonexistent/plant.INP"));
    }

    #[test]
    fn test_syntax_errors_convert() {
        let loader = InpLoader::new();
        let error = loader
            .parse_with("A = )", &OptionOverrides::new().safe_mode(false))
            .map_err(LoadError::from)
            .unwrap_err();
        assert!(matches!(error, LoadError::Syntax(_)));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(InpLoader::new().tokenize("A = 1").len(), 3);
    }
}
