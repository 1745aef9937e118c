//! Error types and error handling for the front end.
//!
//! This module defines the error types used by every stage:
//!
//! - Error structures carrying the source line they refer to
//! - Specific error variants for lexing, parsing and token interchange
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
