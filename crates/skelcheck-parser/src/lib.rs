//! skelcheck Parser
//!
//! Decides whether a token stream is made of the statement forms the
//! checker understands: declarations, arithmetic statements and print
//! statements. No tree is built; the only output is accept or the first
//! syntax error.
//!
//! # Example
//!
//! ```
//! use skelcheck_parser::{Acceptor, SyntaxError};
//!
//! assert!(Acceptor::accept("int x; x + 1; cout(\"hi\");").is_ok());
//! assert_eq!(Acceptor::accept("int x"), Err(SyntaxError::UnexpectedEof));
//! ```

pub mod acceptor;

use serde::Serialize;
use skelcheck_lexer::TokenKind;

pub use acceptor::Acceptor;

/// First syntax error found by the acceptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SyntaxError {
    #[error("Syntax error at token '{kind}' on line {line}")]
    UnexpectedToken {
        kind: TokenKind,
        lexeme: String,
        line: usize,
        column: usize,
    },

    #[error("Syntax error at end of input")]
    UnexpectedEof,
}

impl SyntaxError {
    /// Line of the offending token. End of input has no location.
    pub fn line(&self) -> Option<usize> {
        match self {
            SyntaxError::UnexpectedToken { line, .. } => Some(*line),
            SyntaxError::UnexpectedEof => None,
        }
    }
}
