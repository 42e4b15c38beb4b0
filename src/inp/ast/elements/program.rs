//! Program root, source elements and comments

use super::expressions::{AsExpression, Assignment, Expression};
use super::statements::Statement;
use super::super::range::Range;
use serde::Serialize;

/// A `//` comment line. `value` is the text after the marker, minus one leading space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "comment")]
pub struct Comment {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl Comment {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            location: None,
        }
    }
}

/// Anything that may appear on its own line at the top level or inside a block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceElement {
    Statement(Statement),
    Assignment(Assignment),
    As(AsExpression),
    Expression(Expression),
    Comment(Comment),
}

impl From<Statement> for SourceElement {
    fn from(statement: Statement) -> Self {
        SourceElement::Statement(statement)
    }
}

impl From<Expression> for SourceElement {
    fn from(expression: Expression) -> Self {
        SourceElement::Expression(expression)
    }
}

impl From<Assignment> for SourceElement {
    fn from(assignment: Assignment) -> Self {
        SourceElement::Assignment(assignment)
    }
}

impl From<AsExpression> for SourceElement {
    fn from(expression: AsExpression) -> Self {
        SourceElement::As(expression)
    }
}

impl From<Comment> for SourceElement {
    fn from(comment: Comment) -> Self {
        SourceElement::Comment(comment)
    }
}

/// Root node of a parsed file
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "program")]
pub struct Program {
    pub value: Vec<SourceElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl Program {
    pub fn new(value: Vec<SourceElement>) -> Self {
        Self {
            value,
            location: None,
        }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
