use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_PATTERN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_WORDS};

#[derive(Clone)]
pub struct RegexPattern {
    kind: TokenKind,
    regex: Regex,
}

lazy_static! {
    /// Category patterns in priority order. When two patterns match the same
    /// number of characters the earlier one wins. Word boundaries are ASCII
    /// to agree with the ASCII identifier classes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(TokenKind::MultiLineComment, r"/\*~[\s\S]*?~\*/"),
        MK_PATTERN!(TokenKind::SingleLineComment, r"#[^\n]*"),
        MK_PATTERN!(TokenKind::Keyword, format!(r"(?-u:\b)(?:{})(?-u:\b)", RESERVED_WORDS.join("|"))),
        MK_PATTERN!(TokenKind::BooleanLiteral, r"(?-u:\b)(?:true|false)(?-u:\b)"),
        // Longer operators first so the alternation never stops at a prefix
        MK_PATTERN!(TokenKind::Operator, r"<<=|>>=|<<|>>|<=>|<>|=>|\+\+|--|==|!=|<=|>=|&&|\|\||\+|-|\*|/|%|=|<|>|!"),
        MK_PATTERN!(TokenKind::FloatLiteral, r"(?-u:\b)[0-9]*\.[0-9]+(?-u:\b)"),
        MK_PATTERN!(TokenKind::IntLiteral, r"(?-u:\b)[0-9]+(?-u:\b)"),
        MK_PATTERN!(TokenKind::Identifier, r"(?-u:\b)[a-zA-Z_][a-zA-Z0-9_]*(?-u:\b)"),
        MK_PATTERN!(TokenKind::InvalidIdentifier, r"(?-u:\b)[0-9]+[a-zA-Z0-9_]*(?-u:\b)"),
        MK_PATTERN!(TokenKind::StringLiteral, r#""(?:[^"\\\n]|\\.)*""#),
        MK_PATTERN!(TokenKind::CharLiteral, r"'(?:[^'\\\n]|\\.)*'"),
        MK_PATTERN!(TokenKind::Punctuation, r"[(){}\[\];,.:@#]"),
        MK_PATTERN!(TokenKind::Newline, r"\n"),
        MK_PATTERN!(TokenKind::Whitespace, r"[ \t\r]+"),
        MK_PATTERN!(TokenKind::Invalid, r"."),
    ];
}

/// What the lexer does when it produces an invalid token.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexPolicy {
    /// Keep invalid tokens in the stream and let the parser report them.
    #[default]
    CollectInvalid,
    /// Stop at the first invalid or invalid-identifier token.
    AbortOnInvalid,
}

pub struct Lexer<'a> {
    patterns: &'a [RegexPattern],
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            patterns: &PATTERNS,
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    /// Consumes `lexeme` and moves the line counter past any newlines in it.
    pub fn advance_over(&mut self, lexeme: &str) {
        self.pos += lexeme.len();
        self.line += lexeme.matches('\n').count() as u32;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Finds the longest match at the current position.
    ///
    /// Returns the winning category with its lexeme. Ties on length go to the
    /// pattern listed first. When nothing matches, exactly one character is
    /// returned as `Invalid`, so every call makes progress.
    pub fn next_match(&self) -> (TokenKind, &'a str) {
        let remaining = self.remainder();
        let mut best: Option<(TokenKind, &'a str)> = None;

        for pattern in self.patterns {
            if let Some(found) = pattern.regex.find(remaining) {
                let longer = best.map_or(true, |(_, lexeme)| found.end() > lexeme.len());
                if found.end() > 0 && longer {
                    best = Some((pattern.kind, found.as_str()));
                }
            }
        }

        best.unwrap_or_else(|| {
            let width = remaining.chars().next().map_or(1, char::len_utf8);
            (TokenKind::Invalid, &remaining[..width])
        })
    }

    /// Returns the next significant token, or `None` once the source is
    /// exhausted. Trivia is consumed silently.
    pub fn next_token(&mut self) -> Option<Token> {
        while !self.at_eof() {
            let line = self.line;
            let (kind, lexeme) = self.next_match();
            self.advance_over(lexeme);

            if !kind.is_trivia() {
                return Some(MK_TOKEN!(kind, lexeme.to_string(), line));
            }
        }

        None
    }

    fn finish(mut self) -> Vec<Token> {
        let line = self.line;
        self.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), line));
        debug!(tokens = self.tokens.len(), lines = line, "tokenized source");
        self.tokens
    }
}

/// Tokenizes `source`, keeping invalid tokens in the output.
///
/// Never fails: unknown characters become `Invalid` tokens. Whitespace,
/// newlines and comments are dropped but still advance the line counter.
/// The returned stream always ends with a single `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);

    while let Some(token) = lexer.next_token() {
        lexer.push(token);
    }

    lexer.finish()
}

/// Tokenizes `source` under the given invalid-token policy.
pub fn tokenize_with_policy(source: &str, policy: LexPolicy) -> Result<Vec<Token>, Error> {
    if policy == LexPolicy::CollectInvalid {
        return Ok(tokenize(source));
    }

    let mut lexer = Lexer::new(source);

    while let Some(token) = lexer.next_token() {
        match token.kind {
            TokenKind::Invalid => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token: token.value }, token.line));
            }
            TokenKind::InvalidIdentifier => {
                return Err(Error::new(ErrorImpl::InvalidIdentifier { token: token.value }, token.line));
            }
            _ => lexer.push(token),
        }
    }

    Ok(lexer.finish())
}
