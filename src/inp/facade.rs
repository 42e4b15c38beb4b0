//! Parser facade
//!
//! [InpParser] binds a grammar to a set of default options and runs every parse through
//! the safe-mode controller. Each facade owns its options; nothing is shared between
//! instances.
//!
//! ```rust,ignore
//! use maap_inp::{InpParser, OptionOverrides};
//!
//! let parser = InpParser::new();
//! let result = parser.parse("SENSITIVITY ON")?;
//! let strict = parser.parse_with(text, &OptionOverrides::new().safe_mode(false))?;
//! ```

use tracing::instrument;

use crate::inp::ast::SyntaxError;
use crate::inp::options::{OptionOverrides, ParserOptions};
use crate::inp::parsing::{Grammar, InpGrammar};
use crate::inp::safe_mode::{safe_parse, ParseOutput};

/// A grammar plus its default options
#[derive(Debug, Clone)]
pub struct InpParser<G = InpGrammar> {
    grammar: G,
    options: ParserOptions,
}

impl InpParser<InpGrammar> {
    pub fn new() -> Self {
        Self::with_grammar(InpGrammar)
    }
}

impl Default for InpParser<InpGrammar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Grammar> InpParser<G> {
    pub fn with_grammar(grammar: G) -> Self {
        Self {
            grammar,
            options: ParserOptions::default(),
        }
    }

    /// Replace the default options
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ParserOptions {
        &mut self.options
    }

    /// Parse with the default options
    pub fn parse(&self, text: &str) -> Result<ParseOutput, SyntaxError> {
        self.parse_with(text, &OptionOverrides::default())
    }

    /// Parse with `overrides` layered over the default options
    #[instrument(level = "debug", skip_all)]
    pub fn parse_with(
        &self,
        text: &str,
        overrides: &OptionOverrides,
    ) -> Result<ParseOutput, SyntaxError> {
        let options = self.options.merged(overrides);
        safe_parse(&self.grammar, text, &options)
    }
}

/// A facade over `grammar` with the default options
pub fn create_parser<G: Grammar>(grammar: G) -> InpParser<G> {
    InpParser::with_grammar(grammar)
}
