//! Source elements and the program root
//!
//!     element := statement | comment | expression (= expression | AS identifier)?
//!     program := element (newline+ element)*
//!
//! Blank lines anywhere between elements are ignored. Assignments and `AS` lines share
//! their leading expression with plain expression lines; a trailing `=` or `AS` then
//! requires that expression to be a single name or call.

use chumsky::prelude::*;
use std::sync::Arc;

use super::combinators::{
    keyword, newline, newlines, token, ParserError, SourceContext, TokenLocation,
};
use super::expressions::{operand_target, Boxed, ExpressionParsers, NOT_A_TARGET};
use super::statements::{comment, statement};
use crate::inp::ast::{AsExpression, Assignment, Expression, Identifier, Program, SourceElement};
use crate::inp::lexing::Token;

/// What follows the leading expression of a line
enum Tail {
    Assign(Expression),
    As(Identifier),
}

/// Any element that may stand on its own line
pub(crate) fn source_element(ctx: &Arc<SourceContext>) -> Boxed<SourceElement> {
    let exprs = ExpressionParsers::new(ctx);
    let mut element: Recursive<'static, TokenLocation, SourceElement, ParserError> =
        Recursive::declare();

    let expression_line = {
        let ctx = ctx.clone();
        let tail = choice((
            token(Token::Equals)
                .ignore_then(exprs.expression.clone())
                .map(Tail::Assign),
            keyword("AS")
                .ignore_then(exprs.identifier.clone())
                .map(Tail::As),
        ));

        exprs
            .expression
            .clone()
            .then(tail.or_not())
            .try_map(move |(head, tail), span| {
                let Some(tail) = tail else {
                    return Ok(SourceElement::Expression(head));
                };
                let target = match head {
                    Expression::Operand(operand) => operand_target(operand),
                    Expression::Pure(_) | Expression::Is(_) => None,
                }
                .ok_or_else(|| Simple::custom(span.clone(), NOT_A_TARGET))?;
                let location = ctx.locate(&span);
                Ok(match tail {
                    Tail::Assign(value) => SourceElement::Assignment(Assignment {
                        target,
                        value,
                        location,
                    }),
                    Tail::As(value) => SourceElement::As(AsExpression {
                        target,
                        value,
                        location,
                    }),
                })
            })
    };

    element.define(choice((
        statement(ctx, &exprs, element.clone()).map(SourceElement::Statement),
        comment(ctx.clone()).map(SourceElement::Comment),
        expression_line,
    )));

    element.boxed()
}

/// The whole input: leading blank lines, then elements separated by line breaks
pub(crate) fn program(ctx: &Arc<SourceContext>) -> Boxed<Program> {
    let ctx = ctx.clone();
    let element = source_element(&ctx);

    newline()
        .repeated()
        .ignore_then(element.then_ignore(newlines().or(end())).repeated())
        .then_ignore(end())
        .map(move |value| Program {
            value,
            location: ctx.locate(&(0..ctx.len())),
        })
        .boxed()
}
