//! JSON and YAML renderings of the AST
//!
//! Both are the serde form of the tree: every node is an object tagged with `type`, and
//! absent locations and optional fields are omitted.

use crate::inp::ast::Program;

use super::registry::{FormatError, Formatter};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        let output = if self.pretty {
            serde_json::to_string_pretty(program)?
        } else {
            serde_json::to_string(program)?
        };
        Ok(output)
    }

    fn description(&self) -> &str {
        "The AST as JSON"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(program)?)
    }

    fn description(&self) -> &str {
        "The AST as YAML"
    }
}
