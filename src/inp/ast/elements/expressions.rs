//! Expression forms
//!
//!     Expressions are mutually recursive: call arguments are full expressions, blocks wrap
//!     a binary chain, and `IS` expressions carry any expression as their value. Each family
//!     is a closed enum so every consumer matches exhaustively.
//!
//!     Binary chains are right-associated: `A + B * C` is `A + (B * C)` structurally, with no
//!     precedence between operators. The right-hand side of a chain is either a plain
//!     operand or another chain ([RightOperand]).

use super::literals::{Literal, NumericLiteral};
use super::super::range::Range;
use serde::Serialize;

/// A single-word name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "identifier")]
pub struct Identifier {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: Option<Range>) -> Self {
        self.location = location;
        self
    }
}

/// A multi-word name such as `START TIME`, kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "parameter_name")]
pub struct ParameterName {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl ParameterName {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
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
pub enum ExpressionMember {
    Literal(Literal),
    Identifier(Identifier),
    ParameterName(ParameterName),
}

/// `Name(a,b,c)`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "call_expression")]
pub struct CallExpression {
    pub value: Identifier,
    pub arguments: Vec<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl CallExpression {
    pub fn new(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            value: Identifier::new(name),
            arguments,
            location: None,
        }
    }

    pub fn at(mut self, location: Option<Range>) -> Self {
        self.location = location;
        self
    }
}

/// The `left op right` triple of a [PureExpression]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOperation {
    pub left: Box<Operand>,
    pub op: String,
    pub right: Box<RightOperand>,
}

/// A binary chain such as `1 + 1` or `A > B AND C < D`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "expression")]
pub struct PureExpression {
    pub value: BinaryOperation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl PureExpression {
    pub fn new(left: impl Into<Operand>, op: impl Into<String>, right: RightOperand) -> Self {
        Self {
            value: BinaryOperation {
                left: Box::new(left.into()),
                op: op.into(),
                right: Box::new(right),
            },
            location: None,
        }
    }

    pub fn at(mut self, location: Option<Range>) -> Self {
        self.location = location;
        self
    }
}

/// A parenthesized chain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "expression_block")]
pub struct ExpressionBlock {
    pub value: PureExpression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

/// Anything that can stand on either side of an operator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Member(ExpressionMember),
    Call(CallExpression),
    Block(ExpressionBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RightOperand {
    Operand(Operand),
    Chain(PureExpression),
}

/// Left-hand side of `=`, `IS` and `AS`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Target {
    Identifier(Identifier),
    ParameterName(ParameterName),
    Call(CallExpression),
}

/// `TARGET IS value`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "is_expression")]
pub struct IsExpression {
    pub target: Target,
    pub value: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl IsExpression {
    pub fn new(target: Target, value: impl Into<Expression>) -> Self {
        Self {
            target,
            value: Box::new(value.into()),
            location: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Operand(Operand),
    Pure(PureExpression),
    Is(IsExpression),
}

/// `TARGET AS value`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "as_expression")]
pub struct AsExpression {
    pub target: Target,
    pub value: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl AsExpression {
    pub fn new(target: Target, value: Identifier) -> Self {
        Self {
            target,
            value,
            location: None,
        }
    }
}

/// `TARGET = value`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "assignment")]
pub struct Assignment {
    pub target: Target,
    pub value: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl Assignment {
    pub fn new(target: Target, value: impl Into<Expression>) -> Self {
        Self {
            target,
            value: value.into(),
            location: None,
        }
    }
}

// Conversions up the expression families, so builders and tests can write
// `Expression::from(NumericLiteral::new(1.0))`.

impl From<Literal> for ExpressionMember {
    fn from(literal: Literal) -> Self {
        ExpressionMember::Literal(literal)
    }
}

impl From<Identifier> for ExpressionMember {
    fn from(identifier: Identifier) -> Self {
        ExpressionMember::Identifier(identifier)
    }
}

impl From<ParameterName> for ExpressionMember {
    fn from(name: ParameterName) -> Self {
        ExpressionMember::ParameterName(name)
    }
}

impl From<ExpressionMember> for Operand {
    fn from(member: ExpressionMember) -> Self {
        Operand::Member(member)
    }
}

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Operand::Member(literal.into())
    }
}

impl From<NumericLiteral> for Operand {
    fn from(literal: NumericLiteral) -> Self {
        Operand::Member(literal.into())
    }
}

impl From<Identifier> for Operand {
    fn from(identifier: Identifier) -> Self {
        Operand::Member(identifier.into())
    }
}

impl From<ParameterName> for Operand {
    fn from(name: ParameterName) -> Self {
        Operand::Member(name.into())
    }
}

impl From<CallExpression> for Operand {
    fn from(call: CallExpression) -> Self {
        Operand::Call(call)
    }
}

impl From<NumericLiteral> for ExpressionMember {
    fn from(literal: NumericLiteral) -> Self {
        ExpressionMember::Literal(literal.into())
    }
}

impl From<CallExpression> for Expression {
    fn from(call: CallExpression) -> Self {
        Expression::Operand(call.into())
    }
}

impl From<Operand> for Expression {
    fn from(operand: Operand) -> Self {
        Expression::Operand(operand)
    }
}

impl From<PureExpression> for Expression {
    fn from(expression: PureExpression) -> Self {
        Expression::Pure(expression)
    }
}

impl From<IsExpression> for Expression {
    fn from(expression: IsExpression) -> Self {
        Expression::Is(expression)
    }
}

impl From<NumericLiteral> for Expression {
    fn from(literal: NumericLiteral) -> Self {
        Expression::Operand(literal.into())
    }
}

impl From<Identifier> for Expression {
    fn from(identifier: Identifier) -> Self {
        Expression::Operand(identifier.into())
    }
}

impl From<RightOperand> for Expression {
    fn from(operand: RightOperand) -> Self {
        match operand {
            RightOperand::Operand(operand) => Expression::Operand(operand),
            RightOperand::Chain(chain) => Expression::Pure(chain),
        }
    }
}

impl From<Operand> for RightOperand {
    fn from(operand: Operand) -> Self {
        RightOperand::Operand(operand)
    }
}

impl From<PureExpression> for RightOperand {
    fn from(expression: PureExpression) -> Self {
        RightOperand::Chain(expression)
    }
}
