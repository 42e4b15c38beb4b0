//! Serializer back to .inp source
//!
//! Every node renders to its canonical source form through [ToInpString]. The output is
//! canonical rather than faithful: spacing inside expressions is normalized, numbers are
//! printed in their shortest form and keywords come out upper-case. Parsing the output
//! gives back the same tree, minus locations.
//!
//! Block bodies are one element per line between the header and `END`; an empty body
//! renders as a single blank line.

use crate::inp::ast::{
    ActionStatement, AliasStatement, AsExpression, Assignment, BlockStatement, BooleanLiteral,
    CallExpression, Comment, ConditionalBlockStatement, Expression, ExpressionBlock,
    ExpressionMember, FileStatement, FunctionStatement, Identifier, IsExpression, Literal,
    LookupStatement, NumericLiteral, Operand, ParameterName, ParameterStatement,
    PlotFilStatement, Program, PureExpression, RightOperand, SensitivityStatement, SourceElement,
    Statement, Target, TimerLiteral, TimerStatement, TitleStatement, UserEvtElement,
    UserEvtStatement, VariableName,
};

use super::registry::{FormatError, Formatter};

/// Trait for converting a node to its .inp source representation
pub trait ToInpString {
    fn to_inp_string(&self) -> String;
}

/// Serialize a whole program; elements are joined by line breaks
pub fn serialize(program: &Program) -> String {
    program.to_inp_string()
}

/// Formatter implementation for canonical .inp source
#[derive(Debug, Clone, Copy, Default)]
pub struct InpFormatter;

impl Formatter for InpFormatter {
    fn name(&self) -> &str {
        "inp"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(serialize(program))
    }

    fn description(&self) -> &str {
        "Canonical .inp source"
    }
}

fn lines<T: ToInpString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToInpString::to_inp_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block(header: &str, body: &str) -> String {
    format!("{}\n{}\nEND", header, body)
}

impl ToInpString for Program {
    fn to_inp_string(&self) -> String {
        lines(&self.value)
    }
}

impl ToInpString for SourceElement {
    fn to_inp_string(&self) -> String {
        match self {
            SourceElement::Statement(statement) => statement.to_inp_string(),
            SourceElement::Assignment(assignment) => assignment.to_inp_string(),
            SourceElement::As(expression) => expression.to_inp_string(),
            SourceElement::Expression(expression) => expression.to_inp_string(),
            SourceElement::Comment(comment) => comment.to_inp_string(),
        }
    }
}

impl ToInpString for Comment {
    fn to_inp_string(&self) -> String {
        format!("// {}", self.value)
    }
}

// Literals and names

impl ToInpString for NumericLiteral {
    fn to_inp_string(&self) -> String {
        match &self.units {
            Some(units) => format!("{} {}", self.value, units),
            None => self.value.to_string(),
        }
    }
}

impl ToInpString for BooleanLiteral {
    fn to_inp_string(&self) -> String {
        let text = if self.value { "T" } else { "F" };
        text.to_string()
    }
}

impl ToInpString for TimerLiteral {
    fn to_inp_string(&self) -> String {
        format!("TIMER #{}", self.value)
    }
}

impl ToInpString for Literal {
    fn to_inp_string(&self) -> String {
        match self {
            Literal::Number(number) => number.to_inp_string(),
            Literal::Boolean(boolean) => boolean.to_inp_string(),
            Literal::Timer(timer) => timer.to_inp_string(),
        }
    }
}

impl ToInpString for Identifier {
    fn to_inp_string(&self) -> String {
        self.value.clone()
    }
}

impl ToInpString for ParameterName {
    fn to_inp_string(&self) -> String {
        self.value.clone()
    }
}

// Expressions

impl ToInpString for ExpressionMember {
    fn to_inp_string(&self) -> String {
        match self {
            ExpressionMember::Literal(literal) => literal.to_inp_string(),
            ExpressionMember::Identifier(identifier) => identifier.to_inp_string(),
            ExpressionMember::ParameterName(name) => name.to_inp_string(),
        }
    }
}

impl ToInpString for CallExpression {
    fn to_inp_string(&self) -> String {
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_inp_string()).collect();
        format!("{}({})", self.value.value, arguments.join(","))
    }
}

impl ToInpString for PureExpression {
    fn to_inp_string(&self) -> String {
        format!(
            "{} {} {}",
            self.value.left.to_inp_string(),
            self.value.op,
            self.value.right.to_inp_string()
        )
    }
}

impl ToInpString for ExpressionBlock {
    fn to_inp_string(&self) -> String {
        format!("({})", self.value.to_inp_string())
    }
}

impl ToInpString for Operand {
    fn to_inp_string(&self) -> String {
        match self {
            Operand::Member(member) => member.to_inp_string(),
            Operand::Call(call) => call.to_inp_string(),
            Operand::Block(block) => block.to_inp_string(),
        }
    }
}

impl ToInpString for RightOperand {
    fn to_inp_string(&self) -> String {
        match self {
            RightOperand::Operand(operand) => operand.to_inp_string(),
            RightOperand::Chain(chain) => chain.to_inp_string(),
        }
    }
}

impl ToInpString for Target {
    fn to_inp_string(&self) -> String {
        match self {
            Target::Identifier(identifier) => identifier.to_inp_string(),
            Target::ParameterName(name) => name.to_inp_string(),
            Target::Call(call) => call.to_inp_string(),
        }
    }
}

impl ToInpString for IsExpression {
    fn to_inp_string(&self) -> String {
        format!(
            "{} IS {}",
            self.target.to_inp_string(),
            self.value.to_inp_string()
        )
    }
}

impl ToInpString for Expression {
    fn to_inp_string(&self) -> String {
        match self {
            Expression::Operand(operand) => operand.to_inp_string(),
            Expression::Pure(chain) => chain.to_inp_string(),
            Expression::Is(expression) => expression.to_inp_string(),
        }
    }
}

impl ToInpString for AsExpression {
    fn to_inp_string(&self) -> String {
        format!(
            "{} AS {}",
            self.target.to_inp_string(),
            self.value.to_inp_string()
        )
    }
}

impl ToInpString for Assignment {
    fn to_inp_string(&self) -> String {
        format!(
            "{} = {}",
            self.target.to_inp_string(),
            self.value.to_inp_string()
        )
    }
}

// Statements

impl ToInpString for Statement {
    fn to_inp_string(&self) -> String {
        match self {
            Statement::Sensitivity(statement) => statement.to_inp_string(),
            Statement::Title(statement) => statement.to_inp_string(),
            Statement::File(statement) => statement.to_inp_string(),
            Statement::Block(statement) => statement.to_inp_string(),
            Statement::ConditionalBlock(statement) => statement.to_inp_string(),
            Statement::Alias(statement) => statement.to_inp_string(),
            Statement::PlotFil(statement) => statement.to_inp_string(),
            Statement::UserEvt(statement) => statement.to_inp_string(),
            Statement::Function(statement) => statement.to_inp_string(),
            Statement::Timer(statement) => statement.to_inp_string(),
            Statement::Lookup(statement) => statement.to_inp_string(),
        }
    }
}

impl ToInpString for SensitivityStatement {
    fn to_inp_string(&self) -> String {
        format!("SENSITIVITY {}", self.value.as_str())
    }
}

impl ToInpString for TitleStatement {
    fn to_inp_string(&self) -> String {
        block("TITLE", self.value.as_deref().unwrap_or_default())
    }
}

impl ToInpString for FileStatement {
    fn to_inp_string(&self) -> String {
        format!("{} {}", self.file_type.as_str(), self.value)
    }
}

impl ToInpString for BlockStatement {
    fn to_inp_string(&self) -> String {
        block(&self.block_type, &lines(&self.value))
    }
}

impl ToInpString for ConditionalBlockStatement {
    fn to_inp_string(&self) -> String {
        let header = format!("{} {}", self.block_type.as_str(), self.test.to_inp_string());
        block(&header, &lines(&self.value))
    }
}

impl ToInpString for AliasStatement {
    fn to_inp_string(&self) -> String {
        block("ALIAS", &lines(&self.value))
    }
}

impl ToInpString for PlotFilStatement {
    fn to_inp_string(&self) -> String {
        let rows: Vec<String> = self
            .value
            .iter()
            .map(|row| {
                row.iter()
                    .map(ToInpString::to_inp_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        block(&format!("PLOTFIL {}", self.n), &rows.join("\n"))
    }
}

impl ToInpString for UserEvtElement {
    fn to_inp_string(&self) -> String {
        match self {
            UserEvtElement::Parameter(parameter) => parameter.to_inp_string(),
            UserEvtElement::Action(action) => action.to_inp_string(),
            UserEvtElement::Source(element) => element.to_inp_string(),
        }
    }
}

impl ToInpString for UserEvtStatement {
    fn to_inp_string(&self) -> String {
        block("USEREVT", &lines(&self.value))
    }
}

impl ToInpString for ParameterStatement {
    fn to_inp_string(&self) -> String {
        match &self.flag {
            Some(flag) => format!(
                "{} {} {}",
                self.index,
                flag.to_inp_string(),
                self.value.to_inp_string()
            ),
            None => format!("{} {}", self.index, self.value.to_inp_string()),
        }
    }
}

impl ToInpString for ActionStatement {
    fn to_inp_string(&self) -> String {
        block(&format!("ACTION #{}", self.index), &lines(&self.value))
    }
}

impl ToInpString for FunctionStatement {
    fn to_inp_string(&self) -> String {
        format!(
            "FUNCTION {} = {}",
            self.name.to_inp_string(),
            self.value.to_inp_string()
        )
    }
}

impl ToInpString for TimerStatement {
    fn to_inp_string(&self) -> String {
        format!("SET {}", self.value.to_inp_string())
    }
}

impl ToInpString for VariableName {
    fn to_inp_string(&self) -> String {
        match self {
            VariableName::Identifier(identifier) => identifier.to_inp_string(),
            VariableName::Call(call) => call.to_inp_string(),
        }
    }
}

impl ToInpString for LookupStatement {
    fn to_inp_string(&self) -> String {
        let header = format!("LOOKUP VARIABLE {}", self.name.to_inp_string());
        block(&header, &self.value.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_use_shortest_form() {
        assert_eq!(NumericLiteral::new(144000.0).to_inp_string(), "144000");
        assert_eq!(NumericLiteral::new(0.005).to_inp_string(), "0.005");
        assert_eq!(
            NumericLiteral::new(1.0).with_units("HR").to_inp_string(),
            "1 HR"
        );
    }

    #[test]
    fn test_empty_block_has_blank_body_line() {
        let block = BlockStatement {
            block_type: "PARAMETER CHANGE".to_string(),
            value: Vec::new(),
            location: None,
        };
        assert_eq!(block.to_inp_string(), "PARAMETER CHANGE\n\nEND");
    }

    #[test]
    fn test_parameter_flag() {
        let parameter = ParameterStatement {
            index: 100,
            flag: Some(BooleanLiteral::new(true)),
            value: ParameterName::new("Parameter Name"),
            location: None,
        };
        assert_eq!(parameter.to_inp_string(), "100 T Parameter Name");
    }
}
