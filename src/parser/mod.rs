//! Grammar recognizer for the class-based language.
//!
//! This module decides whether a token stream forms a valid compilation
//! unit. It is a backtracking recursive-descent recognizer:
//!
//! - One routine per non-terminal, all sharing one cursor
//! - FIRST-set dispatch where alternatives start differently
//! - Checkpoint/restore trial parsing where they do not
//! - Furthest-failure diagnostics on rejection
//!
//! No tree is built; rules return `Ok(())` or the diagnostic that stopped them.

pub mod decl;
pub mod diagnostics;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stack;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
