//! Expression grammar
//!
//!     operand      := number | timer | call | parameter_name | boolean | identifier | block
//!     chain        := operand (operator chain)?
//!     expression   := chain (IS expression)?
//!     target       := call | parameter_name | identifier
//!
//!     Alternatives are tried in that order, so `Name(1)` is a call before it can be an
//!     identifier and `START TIME` is a parameter name before `START` alone is taken.
//!     Chains nest to the right with no operator precedence.
//!
//!     A chain is parsed once and only then checked as the target of a trailing `IS`.
//!     Call arguments are expressions themselves, so trying `target IS` first and
//!     re-reading the call as a chain would repeat work at every level of nesting.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use super::combinators::{
    integer, keyword, name_part, name_word, operator, token, token_span, unexpected, word,
    ParserError, SourceContext, TokenLocation,
};
use crate::inp::ast::{
    BooleanLiteral, CallExpression, Expression, ExpressionBlock, ExpressionMember, Identifier,
    IsExpression, Literal, NumericLiteral, Operand, ParameterName, PureExpression,
    RightOperand, Target, TimerLiteral,
};
use crate::inp::lexing::Token;

pub(crate) type Boxed<T> = BoxedParser<'static, TokenLocation, T, ParserError>;

/// The expression-level parsers statements are built from
pub(crate) struct ExpressionParsers {
    pub expression: Boxed<Expression>,
    pub operand: Boxed<Operand>,
    pub target: Boxed<Target>,
    pub identifier: Boxed<Identifier>,
    pub call: Boxed<CallExpression>,
    pub boolean: Boxed<BooleanLiteral>,
    pub timer: Boxed<TimerLiteral>,
}

impl ExpressionParsers {
    pub(crate) fn new(ctx: &Arc<SourceContext>) -> Self {
        let mut expression: Recursive<'static, TokenLocation, Expression, ParserError> =
            Recursive::declare();
        let mut chain: Recursive<'static, TokenLocation, RightOperand, ParserError> =
            Recursive::declare();

        let identifier = identifier(ctx.clone()).boxed();
        let boolean = boolean(ctx.clone()).boxed();
        let timer = timer(ctx.clone()).boxed();
        let parameter_name = parameter_name(ctx.clone()).boxed();

        let call = {
            let ctx = ctx.clone();
            word()
                .then_ignore(token(Token::OpenParen))
                .then(expression.clone().separated_by(token(Token::Comma)))
                .then_ignore(token(Token::CloseParen))
                .map_with_span(move |((name, name_span), arguments), span| CallExpression {
                    value: Identifier::new(name).at(ctx.locate(&name_span)),
                    arguments,
                    location: ctx.locate(&span),
                })
                .boxed()
        };

        let block = {
            let ctx = ctx.clone();
            token(Token::OpenParen)
                .ignore_then(chain.clone())
                .then_ignore(token(Token::CloseParen))
                .try_map(|inner, span| match inner {
                    RightOperand::Chain(value) => Ok(value),
                    RightOperand::Operand(_) => Err(Simple::custom(
                        span,
                        "Expected an operator inside parentheses",
                    )),
                })
                .map_with_span(move |value, span| ExpressionBlock {
                    value,
                    location: ctx.locate(&span),
                })
        };

        let operand = choice((
            numeric_literal(ctx.clone()).map(Operand::from),
            timer.clone().map(|t| Operand::from(Literal::Timer(t))),
            call.clone().map(Operand::Call),
            parameter_name.clone().map(Operand::from),
            boolean.clone().map(|b| Operand::from(Literal::Boolean(b))),
            identifier.clone().map(Operand::from),
            block.map(Operand::Block),
        ))
        .boxed();

        let target = choice((
            call.clone().map(Target::Call),
            parameter_name.map(Target::ParameterName),
            identifier.clone().map(Target::Identifier),
        ))
        .boxed();

        {
            let ctx = ctx.clone();
            chain.define(
                operand
                    .clone()
                    .then(operator().then(chain.clone()).or_not())
                    .map_with_span(move |(left, rest), span| match rest {
                        None => RightOperand::Operand(left),
                        Some((op, right)) => RightOperand::Chain(
                            PureExpression::new(left, op, right).at(ctx.locate(&span)),
                        ),
                    }),
            );
        }

        {
            let ctx = ctx.clone();
            expression.define(
                chain
                    .then(keyword("IS").ignore_then(expression.clone()).or_not())
                    .try_map(move |(head, value), span| match value {
                        None => Ok(Expression::from(head)),
                        Some(value) => {
                            let target = match head {
                                RightOperand::Operand(operand) => operand_target(operand),
                                RightOperand::Chain(_) => None,
                            }
                            .ok_or_else(|| Simple::custom(span.clone(), NOT_A_TARGET))?;
                            Ok(Expression::Is(IsExpression {
                                target,
                                value: Box::new(value),
                                location: ctx.locate(&span),
                            }))
                        }
                    }),
            );
        }

        Self {
            expression: expression.boxed(),
            operand,
            target,
            identifier,
            call,
            boolean,
            timer,
        }
    }
}

pub(crate) const NOT_A_TARGET: &str =
    "Expected a name or a call before \"IS\", \"AS\" or \"=\"";

/// The target an already parsed operand stands for, if it can be one
///
/// `T` and `F` read as booleans in operand position but are plain names as targets.
pub(crate) fn operand_target(operand: Operand) -> Option<Target> {
    match operand {
        Operand::Call(call) => Some(Target::Call(call)),
        Operand::Member(ExpressionMember::Identifier(identifier)) => {
            Some(Target::Identifier(identifier))
        }
        Operand::Member(ExpressionMember::ParameterName(name)) => {
            Some(Target::ParameterName(name))
        }
        Operand::Member(ExpressionMember::Literal(Literal::Boolean(flag))) => {
            let name = if flag.value { "T" } else { "F" };
            Some(Target::Identifier(Identifier::new(name).at(flag.location)))
        }
        Operand::Member(ExpressionMember::Literal(_)) | Operand::Block(_) => None,
    }
}

pub(crate) fn identifier(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, Identifier, Error = ParserError> + Clone {
    word().map(move |(name, span)| Identifier::new(name).at(ctx.locate(&span)))
}

/// Two or more words on one line, kept as the verbatim source slice
fn parameter_name(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, ParameterName, Error = ParserError> + Clone {
    name_word()
        .then(name_part().repeated().at_least(1))
        .map_with_span(move |_, span| ParameterName::new(ctx.slice(&span)).at(ctx.locate(&span)))
        .labelled("parameter name")
}

/// `T` or `F`, exactly
fn boolean(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, BooleanLiteral, Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenLocation| match &tok {
        Token::Word(word) if word == "T" => Ok(true),
        Token::Word(word) if word == "F" => Ok(false),
        _ => Err(unexpected(span, (tok, range))),
    })
    .map_with_span(move |value, span| BooleanLiteral::new(value).at(ctx.locate(&span)))
}

/// `TIMER #n`
fn timer(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, TimerLiteral, Error = ParserError> + Clone {
    keyword("TIMER")
        .ignore_then(token(Token::Hash))
        .ignore_then(integer())
        .map_with_span(move |value, span| TimerLiteral::new(value).at(ctx.locate(&span)))
}

/// A number with an optional adjacent sign and an optional unit word
fn numeric_literal(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, NumericLiteral, Error = ParserError> + Clone {
    let digits = filter_map(|span, (tok, range): TokenLocation| match tok {
        Token::Number(text) => Ok((text, range)),
        other => Err(unexpected(span, (other, range))),
    });

    token_span(Token::Minus)
        .or_not()
        .then(digits)
        .try_map(
            |(minus, (text, range)): (Option<Range<usize>>, (String, Range<usize>)), span| {
                if minus.as_ref().map_or(false, |minus| minus.end != range.start) {
                    return Err(Simple::custom(span, "Expected a number after \"-\""));
                }
                let value = text
                    .parse::<f64>()
                    .map_err(|_| Simple::custom(span, format!("Invalid number \"{}\"", text)))?;
                Ok(if minus.is_some() { -value } else { value })
            },
        )
        .then(word().or_not())
        .map_with_span(move |(value, units), span| {
            let literal = NumericLiteral::new(value).at(ctx.locate(&span));
            match units {
                Some((units, _)) => literal.with_units(units),
                None => literal,
            }
        })
        .labelled("number")
}

#[cfg(test)]
mod tests {
    use crate::inp::ast::{
        Expression, ExpressionMember, Literal, Operand, RightOperand, SourceElement, Target,
    };
    use crate::inp::formats::serialize;
    use crate::inp::parsing::parse_program;
    use std::time::{Duration, Instant};

    fn expression(source: &str) -> Expression {
        let program = parse_program(source, false).unwrap();
        match program.value.into_iter().next() {
            Some(SourceElement::Expression(expression)) => expression,
            other => panic!("Expected an expression, got {:?}", other),
        }
    }

    fn number(expression: &Expression) -> (f64, Option<String>) {
        match expression {
            Expression::Operand(Operand::Member(ExpressionMember::Literal(Literal::Number(n)))) => {
                (n.value, n.units.clone())
            }
            other => panic!("Expected a number, got {:?}", other),
        }
    }

    #[test]
    fn test_numbers_and_units() {
        assert_eq!(number(&expression("0.005")), (0.005, None));
        assert_eq!(number(&expression("-2")), (-2.0, None));
        assert_eq!(number(&expression("1 HR")), (1.0, Some("HR".to_string())));
    }

    #[test]
    fn test_detached_minus_is_rejected() {
        assert!(parse_program("- 2", false).is_err());
    }

    #[test]
    fn test_chain_nests_to_the_right() {
        let Expression::Pure(outer) = expression("A + B * C") else {
            panic!("Expected a chain");
        };
        assert_eq!(outer.value.op, "+");
        let RightOperand::Chain(inner) = outer.value.right.as_ref() else {
            panic!("Expected a nested chain");
        };
        assert_eq!(inner.value.op, "*");
    }

    #[test]
    fn test_word_operators() {
        let Expression::Pure(chain) = expression("A > 1 and B < 2") else {
            panic!("Expected a chain");
        };
        let RightOperand::Chain(inner) = chain.value.right.as_ref() else {
            panic!("Expected a nested chain");
        };
        assert_eq!(inner.value.op, "AND");
    }

    #[test]
    fn test_block_requires_operator() {
        assert!(matches!(
            expression("(A + 1) * 2"),
            Expression::Pure(_)
        ));
        assert!(parse_program("(A)", false).is_err());
    }

    #[test]
    fn test_is_expression_with_parameter_name_target() {
        let Expression::Is(is) = expression("START TIME IS 0") else {
            panic!("Expected an IS expression");
        };
        assert!(matches!(&is.target, Target::ParameterName(name) if name.value == "START TIME"));
        assert_eq!(number(&is.value), (0.0, None));
    }

    #[test]
    fn test_nested_calls() {
        let Expression::Operand(Operand::Call(call)) = expression("Name(Of(A(Function())))") else {
            panic!("Expected a call");
        };
        assert_eq!(call.value.value, "Name");
        assert_eq!(call.arguments.len(), 1);
    }

    #[test]
    fn test_deeply_nested_calls_parse_in_linear_time() {
        let depth = 30;
        let nested = format!("{}A{}", "F(".repeat(depth), ")".repeat(depth));
        let source = format!("{}\n{} = 1\nX = {}\n{} IS T", nested, nested, nested, nested);

        let started = Instant::now();
        let program = parse_program(&source, false).unwrap();
        assert!(
            started.elapsed() < Duration::from_secs(5),
            "took {:?}",
            started.elapsed()
        );

        assert_eq!(program.len(), 4);
        assert!(matches!(
            &program.value[1],
            SourceElement::Assignment(assignment) if matches!(assignment.target, Target::Call(_))
        ));
        let mut call = match &program.value[0] {
            SourceElement::Expression(Expression::Operand(Operand::Call(call))) => call,
            other => panic!("Expected a call, got {:?}", other),
        };
        let mut levels = 1;
        while let Some(Expression::Operand(Operand::Call(inner))) = call.arguments.first() {
            call = inner;
            levels += 1;
        }
        assert_eq!(levels, depth);
    }

    #[test]
    fn test_is_chains_nest_to_the_right() {
        let Expression::Is(outer) = expression("A IS B IS C") else {
            panic!("Expected an IS expression");
        };
        assert!(matches!(&outer.target, Target::Identifier(name) if name.value == "A"));
        let Expression::Is(inner) = outer.value.as_ref() else {
            panic!("Expected a nested IS expression");
        };
        assert!(matches!(&inner.target, Target::Identifier(name) if name.value == "B"));
        assert_eq!(
            serialize(&parse_program("A IS B IS C", false).unwrap()),
            "A IS B IS C"
        );
    }

    #[test]
    fn test_only_names_and_calls_take_is_and_assignments() {
        assert!(parse_program("A + B IS C", false).is_err());
        assert!(parse_program("1 IS C", false).is_err());
        assert!(parse_program("A IS B = 1", false).is_err());

        let Expression::Is(is) = expression("T IS 1") else {
            panic!("Expected an IS expression");
        };
        assert!(matches!(&is.target, Target::Identifier(name) if name.value == "T"));
    }

    #[test]
    fn test_timer_and_boolean() {
        assert!(matches!(
            expression("TIMER #3"),
            Expression::Operand(Operand::Member(ExpressionMember::Literal(Literal::Timer(t)))) if t.value == 3
        ));
        assert!(matches!(
            expression("F"),
            Expression::Operand(Operand::Member(ExpressionMember::Literal(Literal::Boolean(b)))) if !b.value
        ));
        assert!(matches!(
            expression("TIMER"),
            Expression::Operand(Operand::Member(ExpressionMember::Identifier(_)))
        ));
    }
}
