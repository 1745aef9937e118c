//! Text interchange format for token streams.
//!
//! One record per line, `<line,category,lexeme>`. The lexeme is everything
//! after the second comma, so records for `,` or string literals containing
//! commas survive the trip. A stream is closed by an `EOF` record.

use std::{fs, path::Path};

use tracing::{debug, warn};

use crate::errors::errors::{Error, ErrorImpl};

use super::tokens::{Token, TokenKind};

/// Tokens recovered from an interchange text, plus the records that had to
/// be skipped.
#[derive(Debug, Default)]
pub struct Records {
    pub tokens: Vec<Token>,
    pub skipped: Vec<Error>,
}

pub fn serialize_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }

    if tokens.last().map_or(true, |token| token.kind != TokenKind::EOF) {
        let line = tokens.last().map_or(1, |token| token.line);
        out.push_str(&format!("<{},{},EOF>\n", line, TokenKind::EOF));
    }

    out
}

fn parse_record(record: &str) -> Option<Token> {
    let inner = record.strip_prefix('<')?.strip_suffix('>')?;
    let mut fields = inner.splitn(3, ',');

    let line = fields.next()?.trim().parse::<u32>().ok()?;
    let kind = TokenKind::from_interchange_name(fields.next()?.trim())?;
    let value = fields.next()?;

    if value.is_empty() {
        return None;
    }

    Some(Token { kind, value: value.to_string(), line })
}

/// Reads interchange records. Malformed records are skipped and reported;
/// an `EOF` token is appended if the text does not contain one.
///
/// The first `EOF` record ends the stream. Every record after it is
/// reported as `RecordAfterEof` and dropped.
pub fn parse_records(text: &str) -> Records {
    let mut records = Records::default();
    let mut ended = false;

    for (index, raw) in text.lines().enumerate() {
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }

        if ended {
            let line = index as u32 + 1;
            warn!(line, record, "skipping token record after EOF");
            records.skipped.push(Error::new(
                ErrorImpl::RecordAfterEof { record: record.to_string() },
                line,
            ));
            continue;
        }

        match parse_record(record) {
            Some(token) => {
                ended = token.kind == TokenKind::EOF;
                records.tokens.push(token);
            }
            None => {
                let line = index as u32 + 1;
                warn!(line, record, "skipping malformed token record");
                records.skipped.push(Error::new(
                    ErrorImpl::MalformedRecord { record: record.to_string() },
                    line,
                ));
            }
        }
    }

    if records.tokens.last().map_or(true, |token| token.kind != TokenKind::EOF) {
        let line = records.tokens.last().map_or(1, |token| token.line);
        records.tokens.push(Token { kind: TokenKind::EOF, value: String::from("EOF"), line });
    }

    debug!(tokens = records.tokens.len(), skipped = records.skipped.len(), "read token records");
    records
}

pub fn write_token_file(path: &Path, tokens: &[Token]) -> Result<(), Error> {
    fs::write(path, serialize_tokens(tokens)).map_err(|err| Error::io(path, err))
}

pub fn read_token_file(path: &Path) -> Result<Records, Error> {
    let text = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    Ok(parse_records(&text))
}
