//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored entry of the lexer's pattern table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's raw lexeme
/// * `$line` - The source line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a pattern table entry whose regex is anchored at the start of
/// the remaining input.
///
/// The pattern table is built once from constant patterns; a pattern that
/// fails to compile is a programming error, not an input condition.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Newline, r"\n")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $pattern:expr) => {
        RegexPattern {
            kind: $kind,
            regex: Regex::new(&format!("^(?:{})", $pattern)).unwrap(),
        }
    };
}
