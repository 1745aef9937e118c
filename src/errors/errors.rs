use std::{fmt::Display, path::Path};

use thiserror::Error;

use crate::parser::diagnostics::{Diagnostic, DiagnosticKind, Found};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Error::new(
            ErrorImpl::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            },
            0,
        )
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingEntryClass { .. } => "MissingEntryClass",
            ErrorImpl::DuplicateEntryClass { .. } => "DuplicateEntryClass",
            ErrorImpl::EntryClassNotLast { .. } => "EntryClassNotLast",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ErrorImpl::MalformedRecord { .. } => "MalformedRecord",
            ErrorImpl::RecordAfterEof { .. } => "RecordAfterEof",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidIdentifier { token } => ErrorTip::Suggestion(format!(
                "Identifier `{}` starts with a digit, identifiers must start with a letter or `_`",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found {}",
                expected, found
            )),
            ErrorImpl::MissingEntryClass { .. } => ErrorTip::Suggestion(String::from(
                "Add a class containing `public static void main(String[] args)`",
            )),
            ErrorImpl::DuplicateEntryClass { name } => ErrorTip::Suggestion(format!(
                "Class `{}` declares a second entry method, only one is allowed",
                name
            )),
            ErrorImpl::EntryClassNotLast { name } => ErrorTip::Suggestion(format!(
                "Move the entry class `{}` after every other class",
                name
            )),
            ErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "Unexpected {} after the last class",
                token
            )),
            ErrorImpl::MalformedRecord { .. } => ErrorTip::Suggestion(String::from(
                "Records must have the shape <line,category,lexeme>",
            )),
            ErrorImpl::RecordAfterEof { .. } => ErrorTip::Suggestion(String::from(
                "Only one EOF record is allowed and it must come last",
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
    fn from(diagnostic: Diagnostic) -> Self {
        let error_impl = match diagnostic.kind {
            DiagnosticKind::Expectation => ErrorImpl::UnexpectedToken {
                expected: diagnostic.expected,
                found: diagnostic.found,
            },
            DiagnosticKind::MissingEntryClass => ErrorImpl::MissingEntryClass { found: diagnostic.found },
            DiagnosticKind::DuplicateEntryClass(name) => ErrorImpl::DuplicateEntryClass { name },
            DiagnosticKind::EntryClassNotLast(name) => ErrorImpl::EntryClassNotLast { name },
            DiagnosticKind::TrailingTokens => ErrorImpl::TrailingTokens { token: diagnostic.found.to_string() },
        };

        Error::new(error_impl, diagnostic.line)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid identifier: {token:?}")]
    InvalidIdentifier { token: String },
    #[error("expected {expected:?} but found {found}")]
    UnexpectedToken { expected: String, found: Found },
    #[error("expected an entry class but found {found}")]
    MissingEntryClass { found: Found },
    #[error("class {name:?} is a second entry class")]
    DuplicateEntryClass { name: String },
    #[error("entry class {name:?} must be the last class")]
    EntryClassNotLast { name: String },
    #[error("unexpected {token} after the last class")]
    TrailingTokens { token: String },
    #[error("malformed token record: {record:?}")]
    MalformedRecord { record: String },
    #[error("token record after EOF: {record:?}")]
    RecordAfterEof { record: String },
    #[error("{path}: {message}")]
    Io { path: String, message: String },
}
