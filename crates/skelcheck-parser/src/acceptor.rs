//! Grammar acceptor.
//!
//! Recognizes, in any order and any number of times:
//!
//! ```text
//! declaration := INT IDENTIFIER ';'
//! statement   := expression ';'
//! expression  := (NUMBER | IDENTIFIER) (('+' | '-' | '*' | '/') (NUMBER | IDENTIFIER))*
//! print       := (COUT | COUNT) '(' STRING ')' ';'
//! ```
//!
//! Operators group strictly left to right with no precedence, which for a
//! recognizer means an expression is just an operand/operator alternation.

use log::debug;
use skelcheck_lexer::{Scanner, Token, TokenKind};

use crate::SyntaxError;

/// Position inside the production currently being recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between statements.
    Start,
    /// `int` seen, expecting the declared name.
    DeclType,
    /// `int name` seen, expecting `;`.
    DeclName,
    /// Operand seen, expecting an operator or `;`.
    Operand,
    /// Operator seen, expecting an operand.
    Operator,
    /// `cout` / `count` seen, expecting `(`.
    PrintStream,
    /// Expecting the string literal.
    PrintOpen,
    /// Expecting `)`.
    PrintString,
    /// Expecting `;`.
    PrintClose,
}

impl State {
    /// Transition on one token kind. `None` means the token cannot extend
    /// the pending production.
    fn step(self, kind: TokenKind) -> Option<State> {
        use TokenKind::*;

        let next = match (self, kind) {
            (State::Start, Int) => State::DeclType,
            (State::Start, Number | Identifier) => State::Operand,
            (State::Start, Cout | Count) => State::PrintStream,

            (State::DeclType, Identifier) => State::DeclName,
            (State::DeclName, Semicolon) => State::Start,

            (State::Operand, Plus | Minus | Star | Slash) => State::Operator,
            (State::Operand, Semicolon) => State::Start,
            (State::Operator, Number | Identifier) => State::Operand,

            (State::PrintStream, LParen) => State::PrintOpen,
            (State::PrintOpen, StringLiteral) => State::PrintString,
            (State::PrintString, RParen) => State::PrintClose,
            (State::PrintClose, Semicolon) => State::Start,

            _ => return None,
        };
        Some(next)
    }
}

/// Lookahead state machine over token kinds.
pub struct Acceptor<'a> {
    tokens: &'a [Token],
    pos: usize,
    state: State,
}

impl<'a> Acceptor<'a> {
    /// Create an acceptor over already scanned tokens.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            state: State::Start,
        }
    }

    /// Scan and check source text. Illegal characters are skipped by the
    /// scanner and never reach the acceptor.
    pub fn accept(source: &str) -> Result<(), SyntaxError> {
        let scanned = Scanner::tokenize(source);
        Acceptor::new(&scanned.tokens).run()
    }

    /// Consume every token, stopping at the first one that does not fit.
    pub fn run(&mut self) -> Result<(), SyntaxError> {
        while let Some(token) = self.tokens.get(self.pos) {
            self.state = self.state.step(token.kind).ok_or_else(|| {
                let err = SyntaxError::UnexpectedToken {
                    kind: token.kind,
                    lexeme: token.lexeme(),
                    line: token.span.line,
                    column: token.span.column,
                };
                debug!("{err}");
                err
            })?;
            self.pos += 1;
        }

        if self.state != State::Start {
            debug!("input ended in {:?}", self.state);
            return Err(SyntaxError::UnexpectedEof);
        }

        debug!("accepted {} tokens", self.tokens.len());
        Ok(())
    }
}
