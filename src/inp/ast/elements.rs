//! AST node types, organized by family
//!
//!     - [literals]: numbers, booleans and timers
//!     - [expressions]: names, calls, binary chains and the `IS`/`AS`/`=` forms
//!     - [statements]: keyword-led statements and blocks
//!     - [program]: the root node, source elements and comments
//!
//!     Every node carries an optional `location`; it is `None` when the parser runs with
//!     location tracking off. Nodes serialize to objects tagged with a `type` field.

pub mod expressions;
pub mod literals;
pub mod program;
pub mod statements;

pub use expressions::{
    AsExpression, Assignment, BinaryOperation, CallExpression, Expression, ExpressionBlock,
    ExpressionMember, Identifier, IsExpression, Operand, ParameterName, PureExpression,
    RightOperand, Target,
};
pub use literals::{BooleanLiteral, Literal, NumericLiteral, TimerLiteral};
pub use program::{Comment, Program, SourceElement};
pub use statements::{
    ActionStatement, AliasStatement, BlockStatement, ConditionalBlockStatement, ConditionalKind,
    FileStatement, FileType, FunctionStatement, LookupStatement, ParameterStatement,
    PlotFilStatement, Sensitivity, SensitivityStatement, Statement, TimerStatement,
    TitleStatement, UserEvtElement, UserEvtStatement, VariableName,
};
