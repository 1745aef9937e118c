//! FIRST-set predicates and operator tables.
//!
//! Every repetition in the grammar checks one of these predicates before it
//! parses another item, so a loop only continues when the next token can
//! actually start one.

use crate::lexer::tokens::{Token, TokenKind};

pub const MODIFIERS: &[&str] = &["public", "private", "protected", "static", "final", "abstract"];
pub const PRIMITIVE_TYPES: &[&str] = &["int", "double", "char", "boolean", "string"];
pub const ASSIGNMENT_OPERATORS: &[&str] = &["=", "<<=", ">>="];
pub const INCREMENT_OPERATORS: &[&str] = &["++", "--"];
pub const UNARY_OPERATORS: &[&str] = &["-", "!"];

/// Levels of the expression ladder, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl BindingPower {
    pub fn operators(&self) -> &'static [&'static str] {
        match self {
            BindingPower::LogicalOr => &["||"],
            BindingPower::LogicalAnd => &["&&"],
            BindingPower::Equality => &["==", "!="],
            BindingPower::Relational => &["<", ">", "<=", ">="],
            BindingPower::Additive => &["+", "-"],
            BindingPower::Multiplicative => &["*", "/", "%"],
        }
    }

    /// The next tighter level, or `None` when operands are unary expressions.
    pub fn next(&self) -> Option<BindingPower> {
        match self {
            BindingPower::LogicalOr => Some(BindingPower::LogicalAnd),
            BindingPower::LogicalAnd => Some(BindingPower::Equality),
            BindingPower::Equality => Some(BindingPower::Relational),
            BindingPower::Relational => Some(BindingPower::Additive),
            BindingPower::Additive => Some(BindingPower::Multiplicative),
            BindingPower::Multiplicative => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BindingPower::LogicalOr => "logical-or expression",
            BindingPower::LogicalAnd => "logical-and expression",
            BindingPower::Equality => "equality expression",
            BindingPower::Relational => "relational expression",
            BindingPower::Additive => "additive expression",
            BindingPower::Multiplicative => "multiplicative expression",
        }
    }
}

pub fn is_modifier(token: &Token) -> bool {
    token.is_one_of_many(TokenKind::Keyword, MODIFIERS)
}

pub fn is_primitive_type(token: &Token) -> bool {
    token.is_one_of_many(TokenKind::Keyword, PRIMITIVE_TYPES)
}

pub fn first_type(token: &Token) -> bool {
    is_primitive_type(token) || token.kind == TokenKind::Identifier
}

pub fn first_import(token: &Token) -> bool {
    token.is_keyword("import")
}

pub fn first_class(token: &Token) -> bool {
    is_modifier(token) || token.is_keyword("class")
}

pub fn first_member(token: &Token) -> bool {
    is_modifier(token) || first_type(token) || token.is_keyword("void")
}

/// Tokens that may begin a name used as a call target or assignment target.
pub fn first_target(token: &Token) -> bool {
    token.kind == TokenKind::Identifier || token.is_keyword("this") || token.is_keyword("super")
}

pub fn first_expression(token: &Token) -> bool {
    first_target(token)
        || token.kind.is_literal()
        || token.is_keyword("new")
        || token.is_punctuation("(")
        || token.is_one_of_many(TokenKind::Operator, UNARY_OPERATORS)
}

pub fn first_statement(token: &Token) -> bool {
    match token.kind {
        TokenKind::Keyword => matches!(
            token.value.as_str(),
            "if" | "while" | "for" | "return" | "break" | "continue" | "throw" | "try" | "final"
        ) || is_primitive_type(token)
            || first_expression(token),
        TokenKind::Punctuation => token.value == "{" || token.value == ";" || first_expression(token),
        TokenKind::Operator => {
            token.is_one_of_many(TokenKind::Operator, INCREMENT_OPERATORS) || first_expression(token)
        }
        _ => first_expression(token),
    }
}
