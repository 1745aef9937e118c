use crate::lexer::tokens::TokenKind;

use super::{
    decl::parse_declarators,
    expr::{parse_args, parse_call_chain, parse_expr, parse_target},
    lookups::{first_expression, first_statement, is_primitive_type, ASSIGNMENT_OPERATORS, INCREMENT_OPERATORS},
    parser::{PResult, Parser},
    stack::ensure_sufficient_stack,
    types::parse_type,
};

/// `'{' stmt* '}'`
pub fn parse_block(parser: &mut Parser) -> PResult<()> {
    ensure_sufficient_stack(|| {
        parser.enter("block");
        parser.expect_punct("{")?;

        while !parser.check_punct("}") && first_statement(parser.current_token()) {
            parse_stmt(parser)?;
        }

        parser.expect_punct("}")?;
        Ok(())
    })
}

/// Statements whose first token decides the rule are dispatched directly;
/// everything else goes through [`parse_simple_or_expr_stmt`].
pub fn parse_stmt(parser: &mut Parser) -> PResult<()> {
    ensure_sufficient_stack(|| {
        parser.enter("statement");
        let token = parser.current_token().clone();

        match token.kind {
            TokenKind::Keyword => match token.value.as_str() {
                "if" => parse_if_stmt(parser),
                "while" => parse_while_stmt(parser),
                "for" => parse_for_stmt(parser),
                "return" => parse_return_stmt(parser),
                "break" | "continue" => parse_jump_stmt(parser),
                "throw" => parse_throw_stmt(parser),
                "try" => parse_try_stmt(parser),
                "final" => parse_var_decl_stmt(parser),
                _ if is_primitive_type(&token) => parse_var_decl_stmt(parser),
                _ => parse_simple_or_expr_stmt(parser),
            },
            TokenKind::Punctuation if token.value == "{" => parse_block(parser),
            TokenKind::Punctuation if token.value == ";" => {
                parser.advance();
                Ok(())
            }
            _ => parse_simple_or_expr_stmt(parser),
        }
    })
}

/// A statement that can only be told apart by trying it: a local variable
/// declaration (`Foo x = ...;`), an assignment, increment or call
/// (`x = ...;`, `x++;`, `f(...);`), or a bare expression (`x;`).
///
/// Each alternative runs from the same checkpoint. When all of them fail the
/// cursor is back at the first token and the failure is reported there.
pub fn parse_simple_or_expr_stmt(parser: &mut Parser) -> PResult<()> {
    let checkpoint = parser.mark();

    let alternatives: [fn(&mut Parser) -> PResult<()>; 3] = [
        parse_var_decl_stmt,
        |p| {
            parse_simple_stmt(p)?;
            p.expect_punct(";")?;
            Ok(())
        },
        |p| {
            parse_expr(p)?;
            p.expect_punct(";")?;
            Ok(())
        },
    ];

    for alternative in alternatives {
        if parser.attempt(alternative).is_ok() {
            return Ok(());
        }
    }

    parser.restore(checkpoint);
    Err(parser.fail("statement"))
}

/// `'final'? type declarator ( ',' declarator )*` without the terminator.
pub fn parse_var_decl(parser: &mut Parser) -> PResult<()> {
    parser.enter("variable declaration");
    parser.eat_keyword("final");
    parse_declarators(parser, "variable name")
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> PResult<()> {
    parse_var_decl(parser)?;
    parser.expect_punct(";")?;
    Ok(())
}

/// Assignment, increment or call, without the terminator.
pub fn parse_simple_stmt(parser: &mut Parser) -> PResult<()> {
    parser.enter("assignment or call");

    if parser
        .current_token()
        .is_one_of_many(TokenKind::Operator, INCREMENT_OPERATORS)
    {
        parser.advance();
        return parse_target(parser);
    }

    parse_target(parser)?;

    if parser
        .current_token()
        .is_one_of_many(TokenKind::Operator, ASSIGNMENT_OPERATORS)
    {
        parser.advance();
        return parse_expr(parser);
    }

    if parser
        .current_token()
        .is_one_of_many(TokenKind::Operator, INCREMENT_OPERATORS)
    {
        parser.advance();
        return Ok(());
    }

    if parser.check_punct("(") {
        parse_args(parser)?;
        return parse_call_chain(parser);
    }

    Err(parser.fail("assignment or call"))
}

/// `'if' '(' expr ')' stmt ( 'else' stmt )?`
///
/// The nested statement is parsed before looking for `else`, so an `else`
/// always attaches to the innermost `if` still missing one.
pub fn parse_if_stmt(parser: &mut Parser) -> PResult<()> {
    parser.expect_keyword("if")?;
    parser.expect_punct("(")?;
    parse_expr(parser)?;
    parser.expect_punct(")")?;
    parse_stmt(parser)?;

    if parser.eat_keyword("else") {
        parse_stmt(parser)?;
    }

    Ok(())
}

pub fn parse_while_stmt(parser: &mut Parser) -> PResult<()> {
    parser.expect_keyword("while")?;
    parser.expect_punct("(")?;
    parse_expr(parser)?;
    parser.expect_punct(")")?;
    parse_stmt(parser)
}

/// `'for' '(' for_init? ';' expr? ';' simple? ')' stmt`
pub fn parse_for_stmt(parser: &mut Parser) -> PResult<()> {
    parser.expect_keyword("for")?;
    parser.expect_punct("(")?;

    if !parser.check_punct(";") && parser.attempt(parse_var_decl).is_err() {
        parse_simple_stmt(parser)?;
    }
    parser.expect_punct(";")?;

    if !parser.check_punct(";") {
        parse_expr(parser)?;
    }
    parser.expect_punct(";")?;

    if !parser.check_punct(")") {
        parse_simple_stmt(parser)?;
    }
    parser.expect_punct(")")?;

    parse_stmt(parser)
}

pub fn parse_return_stmt(parser: &mut Parser) -> PResult<()> {
    parser.expect_keyword("return")?;

    if first_expression(parser.current_token()) {
        parse_expr(parser)?;
    }

    parser.expect_punct(";")?;
    Ok(())
}

/// `break ;` and `continue ;`
pub fn parse_jump_stmt(parser: &mut Parser) -> PResult<()> {
    parser.advance();
    parser.expect_punct(";")?;
    Ok(())
}

pub fn parse_throw_stmt(parser: &mut Parser) -> PResult<()> {
    parser.expect_keyword("throw")?;
    parse_expr(parser)?;
    parser.expect_punct(";")?;
    Ok(())
}

/// `'try' block ( 'catch' '(' type ID ')' block )* ( 'finally' block )?`
/// with at least one handler.
pub fn parse_try_stmt(parser: &mut Parser) -> PResult<()> {
    parser.expect_keyword("try")?;
    parse_block(parser)?;

    let mut handlers = 0;
    while parser.eat_keyword("catch") {
        parser.expect_punct("(")?;
        parse_type(parser)?;
        parser.expect_identifier("exception name")?;
        parser.expect_punct(")")?;
        parse_block(parser)?;
        handlers += 1;
    }

    if parser.eat_keyword("finally") {
        parse_block(parser)?;
        handlers += 1;
    }

    if handlers == 0 {
        return Err(parser.fail("catch or finally"));
    }

    Ok(())
}
