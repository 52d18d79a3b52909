//! skelcheck Analyzer
//!
//! Runs one full analysis over a submitted program: scanning, grammar
//! acceptance, structural validation against the reference skeleton, and
//! category reporting.
//!
//! ```text
//! source ─ Scanner ─┬─ Acceptor  → syntax_error
//!                   ├─ template  → mismatch → verdict
//!                   └─ report    → entries + tally
//! ```
//!
//! The displayed verdict comes from the structural check alone. Lexical and
//! grammar findings are reported next to it and never replace it.
//!
//! # Example
//!
//! ```
//! use skelcheck_analyzer::{analyze, REFERENCE_SKELETON, SUCCESS};
//!
//! let analysis = analyze(REFERENCE_SKELETON);
//! assert_eq!(analysis.verdict, SUCCESS);
//! assert!(analysis.is_valid());
//! ```

pub mod report;
pub mod template;

use log::{debug, warn};
use serde::Serialize;
use skelcheck_lexer::{LexerError, Scanner, Token};
use skelcheck_parser::{Acceptor, SyntaxError};

pub use report::{Category, Entry, Report, Tally};
pub use template::{Mismatch, REFERENCE_SKELETON};

/// Verdict shown when the program matches the reference structurally.
pub const SUCCESS: &str = "analysis completed successfully";

/// Result of analysing one program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub lexical_errors: Vec<LexerError>,
    pub syntax_error: Option<SyntaxError>,
    pub mismatch: Option<Mismatch>,
    pub report: Report,
    pub verdict: String,
}

impl Analysis {
    /// True when the program matches the reference skeleton.
    pub fn is_valid(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Analysis settings. Holds the reference program submissions are compared
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analyzer {
    reference: String,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_reference(REFERENCE_SKELETON)
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different reference program.
    pub fn with_reference(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Analyse one program.
    ///
    /// Every call scans from scratch with fresh line counters, so calls are
    /// independent of each other and safe to run concurrently.
    pub fn analyze(&self, source: &str) -> Analysis {
        let scanned = Scanner::tokenize(source);
        for err in &scanned.errors {
            warn!("{err}");
        }

        let syntax_error = Acceptor::new(&scanned.tokens).run().err();

        let reference = Scanner::tokenize(&self.reference).tokens;
        let mismatch = template::compare(&reference, &scanned.tokens);

        let report = report::classify(&scanned.tokens);

        let verdict = match &mismatch {
            Some(mismatch) => mismatch.to_string(),
            None => SUCCESS.to_string(),
        };
        debug!(
            "analysed {} tokens ({} lexical errors): {verdict}",
            scanned.tokens.len(),
            scanned.errors.len()
        );

        Analysis {
            tokens: scanned.tokens,
            lexical_errors: scanned.errors,
            syntax_error,
            mismatch,
            report,
            verdict,
        }
    }
}

/// Analyse a program against the default reference skeleton.
pub fn analyze(source: &str) -> Analysis {
    Analyzer::default().analyze(source)
}
