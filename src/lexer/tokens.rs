use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Words the lexer classifies as keywords. Matched as whole words only.
pub const RESERVED_WORDS: &[&str] = &[
    "class", "function", "if", "else", "return", "int", "double", "char", "boolean", "void",
    "const", "static", "enum", "break", "continue", "for", "while", "public", "private",
    "protected", "interface", "extends", "implements", "this", "super", "new", "abstract", "try",
    "catch", "finally", "throw", "final", "string", "import",
];

lazy_static! {
    /// Interchange spelling -> category.
    pub static ref CATEGORY_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for kind in TokenKind::EMITTED {
            map.insert(kind.interchange_name(), kind);
        }
        map
    };
}

/// Token categories.
///
/// The first block is the closed vocabulary handed to the parser. The trivia
/// kinds are matched by the lexer to keep line numbers exact and are never
/// emitted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    InvalidIdentifier,
    Punctuation,
    Operator,
    StringLiteral,
    CharLiteral,
    BooleanLiteral,
    IntLiteral,
    FloatLiteral,
    Invalid,
    EOF,

    // Trivia
    MultiLineComment,
    SingleLineComment,
    Newline,
    Whitespace,
}

impl TokenKind {
    /// Every category that can appear in the lexer's output.
    pub const EMITTED: [TokenKind; 12] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::InvalidIdentifier,
        TokenKind::Punctuation,
        TokenKind::Operator,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::BooleanLiteral,
        TokenKind::IntLiteral,
        TokenKind::FloatLiteral,
        TokenKind::Invalid,
        TokenKind::EOF,
    ];

    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::MultiLineComment
                | TokenKind::SingleLineComment
                | TokenKind::Newline
                | TokenKind::Whitespace
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::CharLiteral
                | TokenKind::BooleanLiteral
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
        )
    }

    /// The spelling used in `<line,category,lexeme>` records.
    pub fn interchange_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::InvalidIdentifier => "Invalid_Identifier",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Operator => "Operator",
            TokenKind::StringLiteral => "string_const",
            TokenKind::CharLiteral => "char_const",
            TokenKind::BooleanLiteral => "boolean_const",
            TokenKind::IntLiteral => "int_const",
            TokenKind::FloatLiteral => "float_const",
            TokenKind::Invalid => "INVALID",
            TokenKind::EOF => "EOF",
            TokenKind::MultiLineComment => "multi_line_comment",
            TokenKind::SingleLineComment => "single_line_comment",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Whitespace => "WHITESPACE",
        }
    }

    pub fn from_interchange_name(name: &str) -> Option<TokenKind> {
        CATEGORY_LOOKUP.get(name).copied()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.interchange_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{},{},{}>", self.line, self.kind, self.value)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    pub fn is_keyword(&self, value: &str) -> bool {
        self.is(TokenKind::Keyword, value)
    }

    pub fn is_operator(&self, value: &str) -> bool {
        self.is(TokenKind::Operator, value)
    }

    pub fn is_punctuation(&self, value: &str) -> bool {
        self.is(TokenKind::Punctuation, value)
    }

    pub fn is_one_of_many(&self, kind: TokenKind, values: &[&str]) -> bool {
        self.kind == kind && values.contains(&self.value.as_str())
    }
}
