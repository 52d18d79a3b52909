use std::fmt::Write as _;

use log::debug;
use serde::Serialize;

use crate::token::{Span, Token, TokenKind, TokenValue};
use crate::LexerError;

/// Source scanner.
///
/// Yields tokens lazily, left to right. Illegal characters are reported as
/// `Err` items and skipped, so iteration always runs to the end of input.
/// The line counter starts at 1 for every scanner; a fresh scanner per
/// analysis is all the reset discipline callers need.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    pending: Option<LexerError>,
}

/// Everything one scanning pass produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexerError>,
}

impl Tokenized {
    /// Raw token dump, one `Token: KIND, Value: VALUE, Line: N` line per token.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            let _ = writeln!(
                out,
                "Token: {}, Value: {}, Line: {}",
                token.kind,
                token.value,
                token.line()
            );
        }
        out
    }
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            pending: None,
        }
    }

    /// Scan the whole source, separating tokens from diagnostics.
    pub fn tokenize(source: &str) -> Tokenized {
        let mut out = Tokenized::default();
        for item in Scanner::new(source) {
            match item {
                Ok(token) => out.tokens.push(token),
                Err(err) => out.errors.push(err),
            }
        }
        out
    }

    // --- Trivia ---

    /// Skip blanks and newline runs. Each newline advances the line counter.
    fn skip_trivia(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\t' | '\r' => self.advance(),
                '\n' => self.newline(),
                _ => break,
            }
        }
    }

    // --- Scanners ---

    /// Scan the next token. Called with at least one character left.
    fn scan_token(&mut self) -> Result<Token, LexerError> {
        let ch = self.peek();

        match ch {
            '"' => self.scan_string(),
            '0'..='9' => Ok(self.scan_number()),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.scan_word()),
            c => match TokenKind::from_symbol(c) {
                Some(kind) => {
                    let span = Span::new(self.pos, self.pos + 1, self.line, self.column);
                    self.advance();
                    Ok(Token::new(kind, TokenValue::Text(c.to_string()), span))
                }
                None => Err(self.illegal()),
            },
        }
    }

    /// Scan `"..."`. No escapes: the literal ends at the next quote, and a
    /// quote that is never closed is itself an illegal character.
    fn scan_string(&mut self) -> Result<Token, LexerError> {
        let closing = self.chars[self.pos + 1..]
            .iter()
            .position(|&c| c == '"')
            .map(|offset| self.pos + 1 + offset);

        let Some(closing) = closing else {
            return Err(self.illegal());
        };

        let start_pos = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let mut text = String::new();
        while self.pos <= closing {
            let c = self.peek();
            text.push(c);
            if c == '\n' {
                self.newline();
            } else {
                self.advance();
            }
        }

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        Ok(Token::new(TokenKind::StringLiteral, TokenValue::Text(text), span))
    }

    /// Scan a run of digits as an unsigned integer.
    fn scan_number(&mut self) -> Token {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let mut digits = String::new();
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            digits.push(self.peek());
            self.advance();
        }

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        let value = match digits.parse::<u64>() {
            Ok(n) => TokenValue::Number(n),
            Err(_) => {
                let err = LexerError::NumberOutOfRange {
                    digits: digits.clone(),
                    line: start_line,
                    column: start_col,
                };
                debug!("{err}");
                self.pending = Some(err);
                TokenValue::Text(digits)
            }
        };
        Token::new(TokenKind::Number, value, span)
    }

    /// Scan an identifier-shaped word and resolve it to its kind.
    fn scan_word(&mut self) -> Token {
        let start_pos = self.pos;
        let start_col = self.column;

        let mut word = String::new();
        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '_') {
            word.push(self.peek());
            self.advance();
        }

        let span = Span::new(start_pos, self.pos, self.line, start_col);
        Token::new(TokenKind::from_word(&word), TokenValue::Text(word), span)
    }

    /// Report and skip the current character.
    fn illegal(&mut self) -> LexerError {
        let err = LexerError::IllegalCharacter {
            character: self.peek(),
            line: self.line,
            column: self.column,
        };
        debug!("{err}");
        self.advance();
        err
    }

    // --- Helpers ---

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
            self.column += 1;
        }
    }

    fn newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.column = 1;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return Some(Err(err));
        }

        self.skip_trivia();
        if self.is_at_end() {
            return None;
        }
        Some(self.scan_token())
    }
}
