//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for the recognizer. It handles:
//!
//! - Longest-match tokenization over an ordered regex pattern table
//! - Keywords, literals, operators and digit-leading invalid identifiers
//! - Line tracking across newlines and multi-line comments
//! - The `<line,category,lexeme>` interchange format

pub mod interchange;
pub mod lexer;
pub mod tokens;
