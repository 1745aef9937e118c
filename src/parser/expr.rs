//! Expression rules.
//!
//! The binary levels of the ladder share one routine: parse an operand at
//! the next tighter level, then keep folding `(operator operand)` pairs
//! while the current token is one of this level's operators. Operators
//! therefore associate to the left and bind by level order.

use crate::lexer::tokens::TokenKind;

use super::{
    lookups::{first_expression, first_target, is_primitive_type, BindingPower, UNARY_OPERATORS},
    parser::{PResult, Parser},
    stack::ensure_sufficient_stack,
    types::parse_array_suffix,
    decl::parse_qualified_name,
};

/// Parenthesized sub-expressions recurse through here, so the stack is
/// grown on demand.
pub fn parse_expr(parser: &mut Parser) -> PResult<()> {
    ensure_sufficient_stack(|| {
        parser.enter("expression");
        parse_binary_expr(parser, BindingPower::LogicalOr)
    })
}

fn parse_operand(parser: &mut Parser, bp: BindingPower) -> PResult<()> {
    match bp.next() {
        Some(next) => parse_binary_expr(parser, next),
        None => parse_prefix_expr(parser),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> PResult<()> {
    parser.enter(bp.label());
    parse_operand(parser, bp)?;

    while parser
        .current_token()
        .is_one_of_many(TokenKind::Operator, bp.operators())
    {
        parser.advance();
        parse_operand(parser, bp)?;
    }

    Ok(())
}

/// `( '-' | '!' ) unary | primary`
pub fn parse_prefix_expr(parser: &mut Parser) -> PResult<()> {
    ensure_sufficient_stack(|| {
        if parser
            .current_token()
            .is_one_of_many(TokenKind::Operator, UNARY_OPERATORS)
        {
            parser.advance();
            return parse_prefix_expr(parser);
        }

        parse_primary_expr(parser)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> PResult<()> {
    let token = parser.current_token();

    if first_target(token) {
        parse_target(parser)?;
        return parse_call_chain(parser);
    }

    if token.kind.is_literal() {
        parser.advance();
        return Ok(());
    }

    if token.is_punctuation("(") {
        return parse_grouping_expr(parser);
    }

    if token.is_keyword("new") {
        return parse_new_expr(parser);
    }

    Err(parser.fail("expression"))
}

/// `( ID | 'this' | 'super' ) ( '.' ID )*`
pub fn parse_target(parser: &mut Parser) -> PResult<()> {
    if parser.check_keyword("this") || parser.check_keyword("super") {
        parser.advance();
        while parser.check_punct(".") && parser.peek(1).kind == TokenKind::Identifier {
            parser.advance();
            parser.advance();
        }
        return Ok(());
    }

    parse_qualified_name(parser)?;
    Ok(())
}

/// `args? ( '.' ID args? )*` after a name.
pub fn parse_call_chain(parser: &mut Parser) -> PResult<()> {
    if parser.check_punct("(") {
        parse_args(parser)?;
    }

    while parser.eat_punct(".") {
        parser.expect_identifier("member name")?;
        if parser.check_punct("(") {
            parse_args(parser)?;
        }
    }

    Ok(())
}

/// `'(' ( expr ( ',' expr )* )? ')'`
pub fn parse_args(parser: &mut Parser) -> PResult<()> {
    parser.expect_punct("(")?;

    if first_expression(parser.current_token()) {
        parse_expr(parser)?;
        while parser.eat_punct(",") {
            parse_expr(parser)?;
        }
    }

    parser.expect_punct(")")?;
    Ok(())
}

pub fn parse_grouping_expr(parser: &mut Parser) -> PResult<()> {
    parser.expect_punct("(")?;
    parse_expr(parser)?;
    parser.expect_punct(")")?;
    Ok(())
}

/// `'new' type_name ( args | '[' expr ']' ( '[' ']' )* )`
///
/// Primitive element types only allow the array form.
pub fn parse_new_expr(parser: &mut Parser) -> PResult<()> {
    parser.enter("new");
    parser.expect_keyword("new")?;

    let primitive = is_primitive_type(parser.current_token());
    if primitive {
        parser.advance();
    } else {
        parse_qualified_name(parser)?;
    }

    if !primitive && parser.check_punct("(") {
        return parse_args(parser);
    }

    if parser.eat_punct("[") {
        parse_expr(parser)?;
        parser.expect_punct("]")?;
        return parse_array_suffix(parser);
    }

    Err(parser.fail(if primitive { "[" } else { "( or [" }))
}
