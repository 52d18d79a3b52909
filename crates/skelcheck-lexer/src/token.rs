use std::fmt;

use serde::Serialize;

/// A position in source text, tracking line and column for error reporting.
///
/// `start` and `end` are character offsets, not byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Words resolved through the reserved-word table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Include,
    Iostream,
    Using,
    Namespace,
    Return,
}

impl Keyword {
    /// Look up a lexeme in the reserved-word table.
    pub fn lookup(word: &str) -> Option<Keyword> {
        match word {
            "include" => Some(Keyword::Include),
            "iostream" => Some(Keyword::Iostream),
            "using" => Some(Keyword::Using),
            "namespace" => Some(Keyword::Namespace),
            "return" => Some(Keyword::Return),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Keyword::Include => "INCLUDE",
            Keyword::Iostream => "IOSTREAM",
            Keyword::Using => "USING",
            Keyword::Namespace => "NAMESPACE",
            Keyword::Return => "RETURN",
        }
    }
}

/// Token classification.
///
/// Only the kind takes part in structural comparison; the lexeme lives in
/// [`TokenValue`] so two programs that differ only in names or numbers
/// compare equal kind-by-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Reserved-word table
    Reserved(Keyword),

    // Fixed literal keywords
    Int,       // type keyword
    Cout,      // output stream
    Count,     // counter literal
    UsingName, // using directive

    // Literals
    Identifier,
    Number,
    StringLiteral,

    // Operators
    Assign,
    Plus,
    Minus,
    Star,
    Slash,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
}

impl TokenKind {
    /// Resolve an identifier-shaped lexeme.
    ///
    /// Fixed literal keywords win over the reserved-word table, which wins
    /// over a plain identifier.
    pub fn from_word(word: &str) -> TokenKind {
        match word {
            "int" => TokenKind::Int,
            "cout" => TokenKind::Cout,
            "count" => TokenKind::Count,
            "usingname" => TokenKind::UsingName,
            _ => Keyword::lookup(word).map_or(TokenKind::Identifier, TokenKind::Reserved),
        }
    }

    /// Map a single-character token. Returns `None` for anything else.
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            _ => return None,
        };
        Some(kind)
    }

    /// Upper-case kind name used in diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Reserved(keyword) => keyword.name(),
            TokenKind::Int => "INT",
            TokenKind::Cout => "COUT",
            TokenKind::Count => "COUNT",
            TokenKind::UsingName => "USINGNAME",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Source text of the lexeme. String literals keep their quotes.
    Text(String),
    Number(u64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Self { kind, value, span }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    /// Lexeme as shown to users (numbers are rendered from their value).
    pub fn lexeme(&self) -> String {
        self.value.to_string()
    }
}
