//! Template validator.
//!
//! Compares a candidate program against the reference skeleton token by
//! token. Only kinds are compared, never lexemes, so renaming an identifier
//! or changing a number keeps a program structurally valid.

use log::debug;
use serde::Serialize;
use skelcheck_lexer::{Scanner, Token};

/// The canonical program every submission is checked against.
pub const REFERENCE_SKELETON: &str = "#include <iostream>
usingname namespace std;
int main() {
   count << \"Hello, World!\";
   return 0;
}";

/// First structural discrepancy between a candidate and the reference.
///
/// `TypeMismatch` and `UnexpectedToken` carry the candidate's line;
/// `MissingToken` carries the line the reference records for the missing
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum Mismatch {
    #[error("Error: expected token '{expected}' at line {line}")]
    TypeMismatch { expected: String, line: usize },

    #[error("Error: missing token '{expected}' at line {line}")]
    MissingToken { expected: String, line: usize },

    #[error("Error: token '{found}' at line {line} is not expected")]
    UnexpectedToken { found: String, line: usize },
}

/// Compare two token sequences by kind. `None` means structural match.
pub fn compare(expected: &[Token], actual: &[Token]) -> Option<Mismatch> {
    if let Some((want, got)) = expected
        .iter()
        .zip(actual)
        .find(|(want, got)| want.kind != got.kind)
    {
        debug!("kind mismatch: expected {}, found {}", want.kind, got.kind);
        return Some(Mismatch::TypeMismatch {
            expected: want.lexeme(),
            line: got.line(),
        });
    }

    if let Some(missing) = expected.get(actual.len()) {
        return Some(Mismatch::MissingToken {
            expected: missing.lexeme(),
            line: missing.line(),
        });
    }

    actual.get(expected.len()).map(|surplus| Mismatch::UnexpectedToken {
        found: surplus.lexeme(),
        line: surplus.line(),
    })
}

/// Scan both sources independently and compare them.
pub fn validate(reference: &str, source: &str) -> Option<Mismatch> {
    let expected = Scanner::tokenize(reference).tokens;
    let actual = Scanner::tokenize(source).tokens;
    compare(&expected, &actual)
}
