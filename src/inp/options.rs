//! Parse options
//!
//! [ParserOptions] is a plain value: the facade owns one as its defaults and each call may
//! layer an [OptionOverrides] on top. Only the fields an override sets replace the default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Neutralize offending lines and retry instead of failing
    pub safe_mode: bool,
    /// Record source ranges on AST nodes
    pub emit_location: bool,
    /// Cap on recoveries per parse; `None` means the number of input lines
    pub max_recoveries: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            safe_mode: true,
            emit_location: true,
            max_recoveries: None,
        }
    }
}

impl ParserOptions {
    /// These options with every field `overrides` sets replaced
    pub fn merged(&self, overrides: &OptionOverrides) -> Self {
        Self {
            safe_mode: overrides.safe_mode.unwrap_or(self.safe_mode),
            emit_location: overrides.emit_location.unwrap_or(self.emit_location),
            max_recoveries: overrides.max_recoveries.or(self.max_recoveries),
        }
    }
}

/// Per-call option overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub safe_mode: Option<bool>,
    pub emit_location: Option<bool>,
    pub max_recoveries: Option<usize>,
}

impl OptionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn safe_mode(mut self, enabled: bool) -> Self {
        self.safe_mode = Some(enabled);
        self
    }

    pub fn emit_location(mut self, enabled: bool) -> Self {
        self.emit_location = Some(enabled);
        self
    }

    pub fn max_recoveries(mut self, limit: usize) -> Self {
        self.max_recoveries = Some(limit);
        self
    }
}
