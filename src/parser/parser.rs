//! Parser state and the recognizer entry point.
//!
//! The parser owns the token stream, a cursor into it and the expectation
//! failures recorded so far. Grammar rules live in `decl`, `stmt`, `expr` and
//! `types`; they share this state through `&mut Parser` and report failure
//! as `Err(Diagnostic)`.
//!
//! Backtracking goes through [`Parser::mark`] / [`Parser::restore`], or the
//! [`Parser::attempt`] and [`Parser::look_ahead`] wrappers built on them.

use tracing::{debug, trace};

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    decl::{parse_compilation_unit, ClassHeader},
    diagnostics::{Diagnostic, DiagnosticKind},
};

pub type PResult<T> = Result<T, Diagnostic>;

/// A saved cursor position. Only produced by [`Parser::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

pub struct Parser {
    /// The token stream, always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Furthest token index at which an expectation failed
    furthest: usize,
    /// Distinct failures recorded at `furthest`, in recording order
    failures: Vec<Diagnostic>,
    /// Nesting depth of `look_ahead` calls; failures are not recorded inside
    lookahead_depth: u32,
}

impl Parser {
    /// Creates a parser over `tokens`, which always end in exactly one EOF
    /// token. An EOF before the end is dropped so the tokens after it are
    /// still parsed.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let line = tokens.last().map_or(1, |token| token.line);
        tokens.retain(|token| token.kind != TokenKind::EOF);
        tokens.push(Token {
            kind: TokenKind::EOF,
            value: String::from("EOF"),
            line,
        });

        Parser {
            tokens,
            pos: 0,
            furthest: 0,
            failures: vec![],
            lookahead_depth: 0,
        }
    }

    /// Returns the current token without advancing. Past the end this is
    /// the EOF token.
    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the token `n` places after the current one, clamped to EOF.
    pub fn peek(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the consumed one. The cursor
    /// never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Returns true while the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn mark(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        if checkpoint.0 != self.pos {
            debug!(from = self.pos, to = checkpoint.0, "backtrack");
        }
        self.pos = checkpoint.0;
    }

    /// Runs `rule`; on failure the cursor is put back where it started.
    pub fn attempt<T>(&mut self, rule: impl FnOnce(&mut Parser) -> PResult<T>) -> PResult<T> {
        let checkpoint = self.mark();
        let result = rule(self);
        if result.is_err() {
            self.restore(checkpoint);
        }
        result
    }

    /// Evaluates `predicate` against the upcoming tokens without consuming
    /// any of them, whatever the outcome.
    pub fn look_ahead<T>(&mut self, predicate: impl FnOnce(&mut Parser) -> T) -> T {
        let checkpoint = self.mark();
        self.lookahead_depth += 1;
        let result = predicate(self);
        self.lookahead_depth -= 1;
        self.restore(checkpoint);
        result
    }

    pub fn enter(&self, rule: &'static str) {
        trace!(rule, pos = self.pos, token = %self.current_token().value, "enter");
    }

    /// Builds a diagnostic for the current token and records it.
    pub fn fail(&mut self, expected: &str) -> Diagnostic {
        let diagnostic = Diagnostic::expected(expected, self.current_token());
        if self.lookahead_depth > 0 {
            return diagnostic;
        }

        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.failures.clear();
        }
        if self.pos == self.furthest && !self.failures.iter().any(|d| d.expected == expected) {
            debug!(pos = self.pos, expected, found = %diagnostic.found, "expectation failed");
            self.failures.push(diagnostic.clone());
        }

        diagnostic
    }

    pub fn check(&self, kind: TokenKind, value: &str) -> bool {
        self.current_token().is(kind, value)
    }

    pub fn check_keyword(&self, value: &str) -> bool {
        self.current_token().is_keyword(value)
    }

    pub fn check_operator(&self, value: &str) -> bool {
        self.current_token().is_operator(value)
    }

    pub fn check_punct(&self, value: &str) -> bool {
        self.current_token().is_punctuation(value)
    }

    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Consumes the current token if it is `kind` spelled `value`.
    pub fn eat(&mut self, kind: TokenKind, value: &str) -> bool {
        if self.check(kind, value) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_keyword(&mut self, value: &str) -> bool {
        self.eat(TokenKind::Keyword, value)
    }

    pub fn eat_operator(&mut self, value: &str) -> bool {
        self.eat(TokenKind::Operator, value)
    }

    pub fn eat_punct(&mut self, value: &str) -> bool {
        self.eat(TokenKind::Punctuation, value)
    }

    /// Expects a token of `kind` spelled `value`; the diagnostic names `value`.
    pub fn expect(&mut self, kind: TokenKind, value: &str) -> PResult<Token> {
        if self.check(kind, value) {
            Ok(self.advance())
        } else {
            Err(self.fail(value))
        }
    }

    pub fn expect_keyword(&mut self, value: &str) -> PResult<Token> {
        self.expect(TokenKind::Keyword, value)
    }

    pub fn expect_operator(&mut self, value: &str) -> PResult<Token> {
        self.expect(TokenKind::Operator, value)
    }

    pub fn expect_punct(&mut self, value: &str) -> PResult<Token> {
        self.expect(TokenKind::Punctuation, value)
    }

    /// Expects any identifier; `label` describes it in the diagnostic.
    pub fn expect_identifier(&mut self, label: &str) -> PResult<Token> {
        if self.check_kind(TokenKind::Identifier) {
            Ok(self.advance())
        } else {
            Err(self.fail(label))
        }
    }

    /// Expects the identifier spelled `value`, e.g. `main` or `String`.
    pub fn expect_named(&mut self, value: &str) -> PResult<Token> {
        self.expect(TokenKind::Identifier, value)
    }

    /// The failures recorded at the furthest point the parse reached.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.failures
    }
}

/// Outcome of recognizing one token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub accepted: bool,
    pub diagnostics: Vec<Diagnostic>,
    /// Name of the class holding the entry method, when one was recognized.
    pub entry_class: Option<String>,
}

impl ParseResult {
    fn accept(entry_class: String) -> Self {
        ParseResult {
            accepted: true,
            diagnostics: vec![],
            entry_class: Some(entry_class),
        }
    }

    fn reject(diagnostics: Vec<Diagnostic>) -> Self {
        ParseResult {
            accepted: false,
            diagnostics,
            entry_class: None,
        }
    }
}

fn check_structure(parser: &Parser, classes: &[ClassHeader]) -> Result<String, Diagnostic> {
    let mut entries = classes.iter().enumerate().filter(|(_, class)| class.entry_methods > 0);

    let Some((index, entry)) = entries.next() else {
        return Err(Diagnostic::structural(
            DiagnosticKind::MissingEntryClass,
            "entry class",
            parser.current_token(),
        ));
    };

    if entry.entry_methods > 1 {
        return Err(entry.diagnostic(DiagnosticKind::DuplicateEntryClass(entry.name.value.clone())));
    }

    if let Some((_, second)) = entries.next() {
        return Err(second.diagnostic(DiagnosticKind::DuplicateEntryClass(second.name.value.clone())));
    }

    if let Some(next) = classes.get(index + 1) {
        return Err(next.diagnostic(DiagnosticKind::EntryClassNotLast(entry.name.value.clone())));
    }

    if parser.has_tokens() {
        return Err(Diagnostic::structural(
            DiagnosticKind::TrailingTokens,
            "end of input",
            parser.current_token(),
        ));
    }

    Ok(entry.name.value.clone())
}

/// Decides whether `tokens` form a compilation unit.
///
/// On rejection the diagnostics are either the single structural failure
/// (missing, duplicate or misplaced entry class, trailing tokens) or every
/// distinct expectation that failed at the furthest token reached.
pub fn parse(tokens: Vec<Token>) -> ParseResult {
    let mut parser = Parser::new(tokens);

    let result = match parse_compilation_unit(&mut parser) {
        Ok(classes) => match check_structure(&parser, &classes) {
            Ok(entry) => ParseResult::accept(entry),
            Err(diagnostic) => ParseResult::reject(vec![diagnostic]),
        },
        Err(diagnostic) => {
            let mut diagnostics = parser.diagnostics().to_vec();
            if diagnostics.is_empty() {
                diagnostics.push(diagnostic);
            }
            ParseResult::reject(diagnostics)
        }
    };

    debug!(accepted = result.accepted, diagnostics = result.diagnostics.len(), "parse finished");
    result
}
