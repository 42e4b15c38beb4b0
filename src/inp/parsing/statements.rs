//! Statement grammar
//!
//!     Every statement starts with a keyword. Single-line statements must end their line;
//!     block statements run until a line holding only `END` and contain source elements
//!     (or, for `ALIAS`, `PLOTFIL` and `USEREVT`, their own item forms). `TITLE` and
//!     `LOOKUP VARIABLE` bodies are free text, captured verbatim.
//!
//!     A statement whose keyword is present but whose form is incomplete simply fails, and
//!     the source element grammar falls back to reading the line as an expression.

use chumsky::prelude::*;
use std::sync::Arc;

use super::combinators::{
    block_body, free_text_body, integer, keyword, line_end, rest_of_line, span_of, split_rows,
    token, unexpected, ParserError, SourceContext, TokenLocation,
};
use super::expressions::{Boxed, ExpressionParsers};
use crate::inp::ast::{
    ActionStatement, AliasStatement, AsExpression, BlockStatement, Comment,
    ConditionalBlockStatement, ConditionalKind, FileStatement, FileType, FunctionStatement,
    LookupStatement, ParameterName, ParameterStatement, PlotFilStatement, Sensitivity,
    SensitivityStatement, SourceElement, Statement, TimerStatement, TitleStatement,
    UserEvtElement, UserEvtStatement, VariableName,
};
use crate::inp::lexing::Token;

/// `// text`
pub(crate) fn comment(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, Comment, Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenLocation| match tok {
        Token::Comment(text) => Ok(text),
        other => Err(unexpected(span, (other, range))),
    })
    .map_with_span(move |value, span| Comment {
        value,
        location: ctx.locate(&span),
    })
}

/// `TARGET AS name`
pub(crate) fn as_expression(
    ctx: Arc<SourceContext>,
    exprs: &ExpressionParsers,
) -> impl Parser<TokenLocation, AsExpression, Error = ParserError> + Clone {
    exprs
        .target
        .clone()
        .then_ignore(keyword("AS"))
        .then(exprs.identifier.clone())
        .map_with_span(move |(target, value), span| AsExpression {
            target,
            value,
            location: ctx.locate(&span),
        })
}

/// All statement forms, tried in order
pub(crate) fn statement<E>(
    ctx: &Arc<SourceContext>,
    exprs: &ExpressionParsers,
    element: E,
) -> Boxed<Statement>
where
    E: Parser<TokenLocation, SourceElement, Error = ParserError> + Clone + 'static,
{
    choice((
        sensitivity(ctx.clone()).map(Statement::Sensitivity),
        title(ctx.clone()).map(Statement::Title),
        file(ctx.clone()).map(Statement::File),
        block(ctx.clone(), element.clone()).map(Statement::Block),
        conditional_block(ctx.clone(), exprs, element.clone()).map(Statement::ConditionalBlock),
        alias(ctx.clone(), exprs).map(Statement::Alias),
        plotfil(ctx.clone(), exprs).map(Statement::PlotFil),
        user_evt(ctx.clone(), exprs, element).map(Statement::UserEvt),
        function(ctx.clone(), exprs).map(Statement::Function),
        set_timer(ctx.clone(), exprs).map(Statement::Timer),
        lookup_variable(ctx.clone(), exprs).map(Statement::Lookup),
    ))
    .boxed()
}

fn sensitivity(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, SensitivityStatement, Error = ParserError> + Clone {
    keyword("SENSITIVITY")
        .ignore_then(choice((
            keyword("ON").to(Sensitivity::On),
            keyword("OFF").to(Sensitivity::Off),
        )))
        .then_ignore(line_end().rewind())
        .map_with_span(move |value, span| SensitivityStatement {
            value,
            location: ctx.locate(&span),
        })
}

fn title(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, TitleStatement, Error = ParserError> + Clone {
    keyword("TITLE")
        .ignore_then(free_text_body())
        .map_with_span(move |tokens, span| {
            let text: Vec<TokenLocation> = tokens
                .into_iter()
                .filter(|(tok, _)| !tok.is_newline())
                .collect();
            TitleStatement {
                value: ctx.text_of(&text),
                location: ctx.locate(&span),
            }
        })
}

/// `PARAMETER FILE path` / `INCLUDE path`; the path is the rest of the line, verbatim
fn file(
    ctx: Arc<SourceContext>,
) -> impl Parser<TokenLocation, FileStatement, Error = ParserError> + Clone {
    choice((
        keyword("PARAMETER")
            .then(keyword("FILE"))
            .to(FileType::ParameterFile),
        keyword("INCLUDE").to(FileType::Include),
    ))
    .then(rest_of_line())
    .map_with_span(move |(file_type, tokens), span| FileStatement {
        file_type,
        value: ctx.text_of(&tokens).unwrap_or_default(),
        location: ctx.locate(&span),
    })
}

fn block<E>(
    ctx: Arc<SourceContext>,
    element: E,
) -> impl Parser<TokenLocation, BlockStatement, Error = ParserError> + Clone
where
    E: Parser<TokenLocation, SourceElement, Error = ParserError> + Clone,
{
    choice((
        keyword("PARAMETER")
            .then(keyword("CHANGE"))
            .to("PARAMETER CHANGE"),
        keyword("INITIATORS").to("INITIATORS"),
    ))
    .then(block_body(element))
    .map_with_span(move |(block_type, value), span| BlockStatement {
        block_type: block_type.to_string(),
        value,
        location: ctx.locate(&span),
    })
}

fn conditional_block<E>(
    ctx: Arc<SourceContext>,
    exprs: &ExpressionParsers,
    element: E,
) -> impl Parser<TokenLocation, ConditionalBlockStatement, Error = ParserError> + Clone
where
    E: Parser<TokenLocation, SourceElement, Error = ParserError> + Clone,
{
    choice((
        keyword("IF").to(ConditionalKind::If),
        keyword("WHEN").to(ConditionalKind::When),
    ))
    .then(exprs.expression.clone())
    .then(block_body(element))
    .map_with_span(move |((block_type, test), value), span| ConditionalBlockStatement {
        block_type,
        test,
        value,
        location: ctx.locate(&span),
    })
}

/// `ALIAS` block of `TARGET AS name` lines; comment lines are dropped
fn alias(
    ctx: Arc<SourceContext>,
    exprs: &ExpressionParsers,
) -> impl Parser<TokenLocation, AliasStatement, Error = ParserError> + Clone {
    let item = as_expression(ctx.clone(), exprs)
        .map(Some)
        .or(comment(ctx.clone()).to(None));

    keyword("ALIAS")
        .ignore_then(block_body(item))
        .map_with_span(move |items, span| AliasStatement {
            value: items.into_iter().flatten().collect(),
            location: ctx.locate(&span),
        })
}

/// `PLOTFIL n` block of comma-separated operand rows; comment lines are dropped
fn plotfil(
    ctx: Arc<SourceContext>,
    exprs: &ExpressionParsers,
) -> impl Parser<TokenLocation, PlotFilStatement, Error = ParserError> + Clone {
    let row = exprs
        .operand
        .clone()
        .separated_by(token(Token::Comma))
        .at_least(1);
    let item = row.map(Some).or(comment(ctx.clone()).to(None));

    keyword("PLOTFIL")
        .ignore_then(integer())
        .then(block_body(item))
        .map_with_span(move |(n, rows), span| PlotFilStatement {
            n,
            value: rows.into_iter().flatten().collect(),
            location: ctx.locate(&span),
        })
}

/// `USEREVT` block: parameter lines, nested `ACTION #i` blocks and ordinary elements
fn user_evt<E>(
    ctx: Arc<SourceContext>,
    exprs: &ExpressionParsers,
    element: E,
) -> impl Parser<TokenLocation, UserEvtStatement, Error = ParserError> + Clone
where
    E: Parser<TokenLocation, SourceElement, Error = ParserError> + Clone + 'static,
{
    let boolean = exprs.boolean.clone();
    let item_ctx = ctx.clone();

    let user_evt_element = recursive(move |user_evt_element| {
        let parameter = {
            let ctx = item_ctx.clone();
            // `100 T` has no room for a flag: `T` is the name
            let flagged = boolean
                .then(rest_of_line())
                .map(|(flag, tokens)| (Some(flag), tokens));
            let unflagged = rest_of_line().map(|tokens| (None, tokens));

            integer()
                .then(flagged.or(unflagged))
                .map_with_span(move |(index, (flag, tokens)), span| {
                    let name_location = span_of(&tokens).and_then(|name| ctx.locate(&name));
                    ParameterStatement {
                        index,
                        flag,
                        value: ParameterName::new(ctx.text_of(&tokens).unwrap_or_default())
                            .at(name_location),
                        location: ctx.locate(&span),
                    }
                })
        };

        let action = {
            let ctx = item_ctx.clone();
            keyword("ACTION")
                .ignore_then(token(Token::Hash))
                .ignore_then(integer())
                .then(block_body(user_evt_element))
                .map_with_span(move |(index, value), span| ActionStatement {
                    index,
                    value,
                    location: ctx.locate(&span),
                })
        };

        choice((
            parameter.map(UserEvtElement::Parameter),
            action.map(UserEvtElement::Action),
            element.map(UserEvtElement::Source),
        ))
    });

    keyword("USEREVT")
        .ignore_then(block_body(user_evt_element))
        .map_with_span(move |value, span| UserEvtStatement {
            value,
            location: ctx.locate(&span),
        })
}

/// `FUNCTION name = expression`
fn function(
    ctx: Arc<SourceContext>,
    exprs: &ExpressionParsers,
) -> impl Parser<TokenLocation, FunctionStatement, Error = ParserError> + Clone {
    keyword("FUNCTION")
        .ignore_then(exprs.identifier.clone())
        .then_ignore(token(Token::Equals))
        .then(exprs.expression.clone())
        .map_with_span(move |(name, value), span| FunctionStatement {
            name,
            value,
            location: ctx.locate(&span),
        })
}

/// `SET TIMER #n`
fn set_timer(
    ctx: Arc<SourceContext>,
    exprs: &ExpressionParsers,
) -> impl Parser<TokenLocation, TimerStatement, Error = ParserError> + Clone {
    keyword("SET")
        .ignore_then(exprs.timer.clone())
        .then_ignore(line_end().rewind())
        .map_with_span(move |value, span| TimerStatement {
            value,
            location: ctx.locate(&span),
        })
}

/// `LOOKUP VARIABLE name` followed by free-text rows; blank rows are dropped
fn lookup_variable(
    ctx: Arc<SourceContext>,
    exprs: &ExpressionParsers,
) -> impl Parser<TokenLocation, LookupStatement, Error = ParserError> + Clone {
    let name = choice((
        exprs.call.clone().map(VariableName::Call),
        exprs.identifier.clone().map(VariableName::Identifier),
    ));

    keyword("LOOKUP")
        .ignore_then(keyword("VARIABLE"))
        .ignore_then(name)
        .then(free_text_body())
        .map_with_span(move |(name, tokens), span| LookupStatement {
            name,
            value: split_rows(tokens)
                .iter()
                .filter_map(|row| ctx.text_of(row))
                .collect(),
            location: ctx.locate(&span),
        })
}
