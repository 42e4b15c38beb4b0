//! Loader for the sample files under `tests/data/`
//!
//! Samples are addressed by file stem: `Samples::load("plotfil")` reads
//! `tests/data/plotfil.INP`. Parsing through a [Sample] is strict (safe mode off) and drops
//! locations, so expectations stay independent of byte offsets.

use std::fs;
use std::path::PathBuf;

use crate::inp::ast::Program;
use crate::inp::facade::InpParser;
use crate::inp::lexing::{tokenize, Token};
use crate::inp::loader::{read_source, LoadError};
use crate::inp::options::OptionOverrides;
use crate::inp::safe_mode::ParseOutput;

const EXTENSION: &str = "INP";

/// Entry point for the sample library
pub struct Samples;

impl Samples {
    /// `tests/data/` of this crate
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(format!("{}.{}", name, EXTENSION))
    }

    /// Stems of every sample, sorted
    pub fn names() -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(Self::dir())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.path())
                    .filter(|path| {
                        path.extension()
                            .map_or(false, |ext| ext.eq_ignore_ascii_case(EXTENSION))
                    })
                    .filter_map(|path| Some(path.file_stem()?.to_str()?.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    pub fn load(name: &str) -> Sample {
        Sample {
            name: name.to_string(),
            path: Self::path(name),
        }
    }
}

/// One sample file, ready to be read in several forms
#[derive(Debug, Clone)]
pub struct Sample {
    name: String,
    path: PathBuf,
}

impl Sample {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw text; panics if the file is missing
    pub fn source(&self) -> String {
        read_source(&self.path)
            .unwrap_or_else(|e| panic!("Sample \"{}\" could not be read: {}", self.name, e))
    }

    pub fn tokenize(&self) -> Vec<(Token, std::ops::Range<usize>)> {
        tokenize(&self.source())
    }

    /// Strict parse without locations
    pub fn parse(&self) -> Result<Program, LoadError> {
        let result = self.parse_with(&OptionOverrides::new().safe_mode(false))?;
        Ok(result.output)
    }

    /// Parse through the default facade with `overrides` applied; locations stay off
    /// unless `overrides` turns them on
    pub fn parse_with(&self, overrides: &OptionOverrides) -> Result<ParseOutput, LoadError> {
        let overrides = OptionOverrides {
            emit_location: overrides.emit_location.or(Some(false)),
            ..*overrides
        };
        let source = read_source(&self.path)?;
        Ok(InpParser::new().parse_with(&source, &overrides)?)
    }
}
