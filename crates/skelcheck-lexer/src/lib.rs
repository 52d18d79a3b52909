//! skelcheck Lexer
//!
//! Tokenizes the restricted C++-like program skeleton accepted by skelcheck.
//! Resolves identifier-shaped words into fixed literal keywords or reserved
//! words, tracks line numbers, and recovers from illegal characters by
//! skipping them and carrying on.
//!
//! # Example
//!
//! ```
//! use skelcheck_lexer::{Scanner, TokenKind};
//!
//! let out = Scanner::tokenize("int x;");
//! assert!(out.errors.is_empty());
//! assert_eq!(out.tokens[0].kind, TokenKind::Int);
//! assert_eq!(out.tokens.len(), 3);
//! ```

pub mod scanner;
pub mod token;

use serde::Serialize;

pub use scanner::{Scanner, Tokenized};
pub use token::{Keyword, Span, Token, TokenKind, TokenValue};

/// Lexical diagnostic. Never aborts scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum LexerError {
    #[error("Illegal character '{character}' at line {line}, column {column}")]
    IllegalCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    #[error("Number '{digits}' at line {line}, column {column} does not fit in 64 bits")]
    NumberOutOfRange {
        digits: String,
        line: usize,
        column: usize,
    },
}

impl LexerError {
    pub fn line(&self) -> usize {
        match self {
            LexerError::IllegalCharacter { line, .. } | LexerError::NumberOutOfRange { line, .. } => {
                *line
            }
        }
    }
}
