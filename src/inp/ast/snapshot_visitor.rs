//! Snapshot building for AST nodes
//!
//! This module provides the canonical AST traversal that creates a normalized snapshot
//! of the tree. Renderers consume the output of [snapshot_from_program] rather than
//! walking the AST themselves.
//!
//! Leaf labels are the node's canonical source text. Block nodes are labelled with their
//! header line and carry their body as children.

use super::range::Range;
use super::snapshot::AstSnapshot;
use super::{
    Expression, ExpressionMember, Literal, Operand, Program, SourceElement, Statement,
    UserEvtElement,
};
use crate::inp::formats::inp::ToInpString;

fn line_of(location: &Option<Range>) -> Option<usize> {
    location.as_ref().map(|range| range.start.line)
}

/// Build a snapshot for the program root
pub fn snapshot_from_program(program: &Program) -> AstSnapshot {
    AstSnapshot::new("program", format!("{} elements", program.len()))
        .at_line(line_of(&program.location))
        .with_children(program.value.iter().map(snapshot_from_element))
}

pub fn snapshot_from_element(element: &SourceElement) -> AstSnapshot {
    match element {
        SourceElement::Statement(statement) => snapshot_from_statement(statement),
        SourceElement::Assignment(assignment) => {
            AstSnapshot::new("assignment", assignment.to_inp_string())
                .at_line(line_of(&assignment.location))
        }
        SourceElement::As(expression) => AstSnapshot::new("as_expression", expression.to_inp_string())
            .at_line(line_of(&expression.location)),
        SourceElement::Expression(expression) => snapshot_from_expression(expression),
        SourceElement::Comment(comment) => {
            AstSnapshot::new("comment", comment.value.clone()).at_line(line_of(&comment.location))
        }
    }
}

fn snapshot_from_expression(expression: &Expression) -> AstSnapshot {
    let (node_type, location) = match expression {
        Expression::Is(is) => ("is_expression", &is.location),
        Expression::Pure(chain) => ("expression", &chain.location),
        Expression::Operand(Operand::Call(call)) => ("call_expression", &call.location),
        Expression::Operand(Operand::Block(block)) => ("expression_block", &block.location),
        Expression::Operand(Operand::Member(member)) => match member {
            ExpressionMember::Identifier(identifier) => ("identifier", &identifier.location),
            ExpressionMember::ParameterName(name) => ("parameter_name", &name.location),
            ExpressionMember::Literal(Literal::Number(number)) => ("number", &number.location),
            ExpressionMember::Literal(Literal::Boolean(boolean)) => ("boolean", &boolean.location),
            ExpressionMember::Literal(Literal::Timer(timer)) => ("timer", &timer.location),
        },
    };
    AstSnapshot::new(node_type, expression.to_inp_string()).at_line(line_of(location))
}

fn snapshot_from_statement(statement: &Statement) -> AstSnapshot {
    match statement {
        Statement::Sensitivity(s) => {
            AstSnapshot::new("sensitivity", s.to_inp_string()).at_line(line_of(&s.location))
        }
        Statement::Title(s) => AstSnapshot::new("title", s.value.clone().unwrap_or_default())
            .at_line(line_of(&s.location)),
        Statement::File(s) => {
            AstSnapshot::new("file", s.to_inp_string()).at_line(line_of(&s.location))
        }
        Statement::Block(s) => AstSnapshot::new("block", s.block_type.clone())
            .at_line(line_of(&s.location))
            .with_children(s.value.iter().map(snapshot_from_element)),
        Statement::ConditionalBlock(s) => AstSnapshot::new(
            "conditional_block",
            format!("{} {}", s.block_type.as_str(), s.test.to_inp_string()),
        )
        .at_line(line_of(&s.location))
        .with_children(s.value.iter().map(snapshot_from_element)),
        Statement::Alias(s) => AstSnapshot::new("alias", format!("{} aliases", s.value.len()))
            .at_line(line_of(&s.location))
            .with_children(s.value.iter().map(|alias| {
                AstSnapshot::new("as_expression", alias.to_inp_string())
                    .at_line(line_of(&alias.location))
            })),
        Statement::PlotFil(s) => AstSnapshot::new("plotfil", format!("PLOTFIL {}", s.n))
            .at_line(line_of(&s.location))
            .with_children(s.value.iter().map(|row| {
                let cells: Vec<String> = row.iter().map(ToInpString::to_inp_string).collect();
                AstSnapshot::new("row", cells.join(","))
            })),
        Statement::UserEvt(s) => AstSnapshot::new("user_evt", "USEREVT")
            .at_line(line_of(&s.location))
            .with_children(s.value.iter().map(snapshot_from_user_evt_element)),
        Statement::Function(s) => {
            AstSnapshot::new("function", s.to_inp_string()).at_line(line_of(&s.location))
        }
        Statement::Timer(s) => {
            AstSnapshot::new("set_timer", s.to_inp_string()).at_line(line_of(&s.location))
        }
        Statement::Lookup(s) => AstSnapshot::new("lookup_variable", s.name.to_inp_string())
            .at_line(line_of(&s.location))
            .with_children(s.value.iter().map(|row| AstSnapshot::new("row", row.clone()))),
    }
}

fn snapshot_from_user_evt_element(element: &UserEvtElement) -> AstSnapshot {
    match element {
        UserEvtElement::Parameter(parameter) => {
            AstSnapshot::new("parameter", parameter.to_inp_string())
                .at_line(line_of(&parameter.location))
        }
        UserEvtElement::Action(action) => {
            AstSnapshot::new("action", format!("ACTION #{}", action.index))
                .at_line(line_of(&action.location))
                .with_children(action.value.iter().map(snapshot_from_user_evt_element))
        }
        UserEvtElement::Source(element) => snapshot_from_element(element),
    }
}
