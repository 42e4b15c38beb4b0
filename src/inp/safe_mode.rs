//! Safe mode: line-neutralizing recovery
//!
//!     When the grammar rejects the input, the line the error starts on is turned into a
//!     comment (`// ` is prefixed) and the whole text is parsed again. Every suppressed
//!     error is kept, in order, alongside the final text that did parse.
//!
//!     Recovery stops, and the last error is returned, when:
//!
//!         - safe mode is off
//!         - the recovery budget is spent (`max_recoveries`, by default the line count)
//!         - the offending line is blank or already a comment, so commenting it out would
//!           not change the input
//!
//!     Nothing else is modified: the returned `input` differs from the source only in the
//!     commented-out lines.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::inp::ast::{Program, SyntaxError};
use crate::inp::options::ParserOptions;
use crate::inp::parsing::Grammar;

/// Result of a (possibly recovered) parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutput {
    /// Errors suppressed by recovery, in the order they were raised
    pub errors: Vec<SyntaxError>,
    /// The text that finally parsed
    pub input: String,
    pub output: Program,
}

impl ParseOutput {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse `source`, neutralizing offending lines while `options.safe_mode` is on
pub fn safe_parse<G>(
    grammar: &G,
    source: &str,
    options: &ParserOptions,
) -> Result<ParseOutput, SyntaxError>
where
    G: Grammar + ?Sized,
{
    safe_parse_with(grammar, source, options, Vec::new())
}

/// [safe_parse], continuing from errors already suppressed by an earlier pass
#[instrument(level = "debug", skip_all, fields(len = source.len(), safe_mode = options.safe_mode))]
pub fn safe_parse_with<G>(
    grammar: &G,
    source: &str,
    options: &ParserOptions,
    accumulated: Vec<SyntaxError>,
) -> Result<ParseOutput, SyntaxError>
where
    G: Grammar + ?Sized,
{
    let budget = options
        .max_recoveries
        .unwrap_or_else(|| source.split('\n').count());
    let mut input = source.to_string();
    let mut errors = accumulated;
    let mut recoveries = 0;

    loop {
        let error = match grammar.parse(&input, options) {
            Ok(output) => {
                if recoveries > 0 {
                    debug!(recoveries, "recovered");
                }
                return Ok(ParseOutput {
                    errors,
                    input,
                    output,
                });
            }
            Err(error) => error,
        };

        if !options.safe_mode {
            return Err(error);
        }
        if recoveries >= budget {
            warn!(budget, error = %error, "recovery budget spent");
            return Err(error);
        }

        let line = error.line();
        match neutralize_line(&input, line) {
            Some(next) => {
                debug!(line, message = %error.message, "neutralized line");
                input = next;
                errors.push(error);
                recoveries += 1;
            }
            None => {
                warn!(line, error = %error, "line cannot be neutralized");
                return Err(error);
            }
        }
    }
}

/// Prefix the 1-based `line` of `text` with `// `
///
/// Returns `None` if the line does not exist, is blank, or is already a comment.
pub fn neutralize_line(text: &str, line: usize) -> Option<String> {
    let index = line.checked_sub(1)?;
    let lines: Vec<&str> = text.split('\n').collect();
    let target = lines.get(index)?.trim();
    if target.is_empty() || target.starts_with("//") {
        return None;
    }

    let rewritten: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, content)| {
            if i == index {
                format!("// {}", content)
            } else {
                content.to_string()
            }
        })
        .collect();
    Some(rewritten.join("\n"))
}
