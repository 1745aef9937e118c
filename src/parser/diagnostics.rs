//! Syntax diagnostics.
//!
//! A diagnostic names the construct the parser expected, the lexeme it found
//! instead (or the end of input) and the line of that token.

use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Lexeme(String),
    EndOfInput,
}

impl Found {
    pub fn from_token(token: &Token) -> Self {
        if token.kind == TokenKind::EOF {
            Found::EndOfInput
        } else {
            Found::Lexeme(token.value.clone())
        }
    }
}

impl Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Found::Lexeme(lexeme) => write!(f, "'{}'", lexeme),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A token or sub-rule was missing where the grammar required it.
    Expectation,
    MissingEntryClass,
    DuplicateEntryClass(String),
    EntryClassNotLast(String),
    TrailingTokens,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub expected: String,
    pub found: Found,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn expected(expected: impl Into<String>, token: &Token) -> Self {
        Diagnostic {
            line: token.line,
            expected: expected.into(),
            found: Found::from_token(token),
            kind: DiagnosticKind::Expectation,
        }
    }

    pub fn structural(kind: DiagnosticKind, expected: impl Into<String>, token: &Token) -> Self {
        Diagnostic {
            kind,
            ..Diagnostic::expected(expected, token)
        }
    }

    pub fn is_structural(&self) -> bool {
        self.kind != DiagnosticKind::Expectation
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SYNTAX ERROR at line {}: Expected '{}' but found {}",
            self.line, self.expected, self.found
        )
    }
}
