#![allow(clippy::module_inception)]

use std::path::Path;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse, ParseResult},
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Tokenizes and recognizes `source` in one step.
pub fn check_source(source: &str) -> ParseResult {
    parse(tokenize(source))
}

/// Returns the text of the 1-based `line` of `content`, without its line
/// terminator.
pub fn get_line(content: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    content.lines().nth(index)
}


pub fn display_error(error: &Error, content: &str, file: &Path) -> String {
    /*
        Error: name (tip)
        -> file.src
           |
        20 | int x = ;
           |
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    match get_line(content, line) {
        Some(text) => {
            out.push_str(&format!("{:>padding$}\n", "|"));
            out.push_str(&format!("{} | {}\n", line_string, text.trim()));
            out.push_str(&format!("{:>padding$}\n", "|"));
        }
        None => out.push_str(&format!("{}\n", error)),
    }

    out
}
