//! Literal values
//!
//!     Literals are the terminal values of the language: numbers (optionally followed by a
//!     unit word, as in `1 HR`), the booleans `T` and `F`, and timer references written
//!     `TIMER #n`.

use super::super::range::Range;
use serde::Serialize;

/// A numeric literal such as `144000`, `0.005` or `1 HR`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "number")]
pub struct NumericLiteral {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl NumericLiteral {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            units: None,
            location: None,
        }
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn at(mut self, location: Option<Range>) -> Self {
        self.location = location;
        self
    }
}

/// `T` or `F`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "boolean")]
pub struct BooleanLiteral {
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            location: None,
        }
    }

    pub fn at(mut self, location: Option<Range>) -> Self {
        self.location = location;
        self
    }
}

/// `TIMER #n`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "timer")]
pub struct TimerLiteral {
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl TimerLiteral {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            location: None,
        }
    }

    pub fn at(mut self, location: Option<Range>) -> Self {
        self.location = location;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(NumericLiteral),
    Boolean(BooleanLiteral),
    Timer(TimerLiteral),
}

impl From<NumericLiteral> for Literal {
    fn from(literal: NumericLiteral) -> Self {
        Literal::Number(literal)
    }
}

impl From<BooleanLiteral> for Literal {
    fn from(literal: BooleanLiteral) -> Self {
        Literal::Boolean(literal)
    }
}

impl From<TimerLiteral> for Literal {
    fn from(literal: TimerLiteral) -> Self {
        Literal::Timer(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_literal_json_omits_absent_fields() {
        let json = serde_json::to_string(&NumericLiteral::new(0.005)).unwrap();
        assert_eq!(json, r#"{"type":"number","value":0.005}"#);
    }

    #[test]
    fn test_numeric_literal_json_with_units() {
        let json = serde_json::to_string(&NumericLiteral::new(1.0).with_units("HR")).unwrap();
        assert_eq!(json, r#"{"type":"number","value":1.0,"units":"HR"}"#);
    }
}
