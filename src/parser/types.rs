//! Type recognition.
//!
//! A type is a primitive keyword or a qualified class name, followed by any
//! number of `[]` pairs.

use crate::lexer::tokens::TokenKind;

use super::{
    decl::parse_qualified_name,
    lookups::is_primitive_type,
    parser::{PResult, Parser},
};

pub fn parse_type(parser: &mut Parser) -> PResult<()> {
    parser.enter("type");

    if is_primitive_type(parser.current_token()) {
        parser.advance();
    } else if parser.check_kind(TokenKind::Identifier) {
        parse_qualified_name(parser)?;
    } else {
        return Err(parser.fail("type"));
    }

    parse_array_suffix(parser)
}

/// `( '[' ']' )*`
pub fn parse_array_suffix(parser: &mut Parser) -> PResult<()> {
    while parser.eat_punct("[") {
        parser.expect_punct("]")?;
    }
    Ok(())
}

/// `type | 'void'`
pub fn parse_return_type(parser: &mut Parser) -> PResult<()> {
    if parser.eat_keyword("void") {
        Ok(())
    } else {
        parse_type(parser)
    }
}

/// Lookahead helper: consumes a type if one starts here.
pub fn skip_type(parser: &mut Parser) -> bool {
    parse_type(parser).is_ok()
}
