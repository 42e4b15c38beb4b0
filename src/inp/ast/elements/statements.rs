//! Statement forms
//!
//!     Statements are keyword-led. Most of them open a block that runs until a line holding
//!     only `END`; `SENSITIVITY`, file statements, `FUNCTION` and `SET TIMER` are single-line.
//!     `TITLE` and `LOOKUP VARIABLE` bodies are free text and are kept verbatim.

use super::expressions::{AsExpression, CallExpression, Expression, Identifier, Operand, ParameterName};
use super::literals::{BooleanLiteral, TimerLiteral};
use super::program::SourceElement;
use super::super::range::Range;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sensitivity {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl Sensitivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sensitivity::On => "ON",
            Sensitivity::Off => "OFF",
        }
    }
}

/// `SENSITIVITY ON|OFF`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "sensitivity")]
pub struct SensitivityStatement {
    pub value: Sensitivity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

/// `TITLE` block. The body is `None` when it holds no text at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "title")]
pub struct TitleStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileType {
    #[serde(rename = "PARAMETER FILE")]
    ParameterFile,
    #[serde(rename = "INCLUDE")]
    Include,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::ParameterFile => "PARAMETER FILE",
            FileType::Include => "INCLUDE",
        }
    }
}

/// `PARAMETER FILE path` or `INCLUDE path`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "file", rename_all = "camelCase")]
pub struct FileStatement {
    pub file_type: FileType,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

/// A named block such as `PARAMETER CHANGE` or `INITIATORS`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "block", rename_all = "camelCase")]
pub struct BlockStatement {
    pub block_type: String,
    pub value: Vec<SourceElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConditionalKind {
    #[serde(rename = "IF")]
    If,
    #[serde(rename = "WHEN")]
    When,
}

impl ConditionalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionalKind::If => "IF",
            ConditionalKind::When => "WHEN",
        }
    }
}

/// `IF test` / `WHEN test` block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "conditional_block", rename_all = "camelCase")]
pub struct ConditionalBlockStatement {
    pub block_type: ConditionalKind,
    pub test: Expression,
    pub value: Vec<SourceElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "alias")]
pub struct AliasStatement {
    pub value: Vec<AsExpression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

/// `PLOTFIL n` followed by comma-separated rows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "plotfil")]
pub struct PlotFilStatement {
    /// Declared column count
    pub n: u32,
    pub value: Vec<Vec<Operand>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "user_evt")]
pub struct UserEvtStatement {
    pub value: Vec<UserEvtElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

/// `index [T|F] name` inside a user event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "parameter")]
pub struct ParameterStatement {
    pub index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<BooleanLiteral>,
    pub value: ParameterName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

/// `ACTION #i` block inside a user event; nests freely
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "action")]
pub struct ActionStatement {
    pub index: u32,
    pub value: Vec<UserEvtElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserEvtElement {
    Parameter(ParameterStatement),
    Action(ActionStatement),
    Source(SourceElement),
}

/// `FUNCTION name = expression`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "function")]
pub struct FunctionStatement {
    pub name: Identifier,
    pub value: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

/// `SET TIMER #n`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "set_timer")]
pub struct TimerStatement {
    pub value: TimerLiteral,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableName {
    Identifier(Identifier),
    Call(CallExpression),
}

/// `LOOKUP VARIABLE name` followed by free-text rows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "lookup_variable")]
pub struct LookupStatement {
    pub name: VariableName,
    pub value: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Sensitivity(SensitivityStatement),
    Title(TitleStatement),
    File(FileStatement),
    Block(BlockStatement),
    ConditionalBlock(ConditionalBlockStatement),
    Alias(AliasStatement),
    PlotFil(PlotFilStatement),
    UserEvt(UserEvtStatement),
    Function(FunctionStatement),
    Timer(TimerStatement),
    Lookup(LookupStatement),
}
