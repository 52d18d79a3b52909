//! WASM bindings for skelcheck.
//!
//! Exposes `analyze()` to JavaScript via wasm-bindgen. A page passes the
//! text of its form field and renders the returned plain object.

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Analyse a program against the reference skeleton.
///
/// Returns a JS object shaped like the Rust `Analysis`:
/// `{ tokens, lexical_errors, syntax_error, mismatch, report: { entries, tally }, verdict }`.
/// Never fails on program text; throws only if serialization does.
#[wasm_bindgen]
pub fn analyze(source: &str) -> Result<JsValue, JsError> {
    let analysis = skelcheck_analyzer::analyze(source);

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    analysis
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// The reference program submissions are checked against.
#[wasm_bindgen(js_name = referenceSkeleton)]
pub fn reference_skeleton() -> String {
    skelcheck_analyzer::REFERENCE_SKELETON.to_string()
}

/// Get the checker version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use skelcheck_analyzer::{Analysis, Category, SUCCESS};

    // =========================================================================
    // Native tests (non-WASM): verify the analysis pipeline the bindings wrap
    // =========================================================================

    fn native_analyze(source: &str) -> Analysis {
        skelcheck_analyzer::analyze(source)
    }

    #[test]
    fn test_empty_form_field() {
        let analysis = native_analyze("");
        assert!(analysis.tokens.is_empty());
        assert_eq!(analysis.verdict, "Error: missing token 'include' at line 1");
    }

    #[test]
    fn test_reference_round_trip() {
        let analysis = native_analyze(&reference_skeleton());
        assert_eq!(analysis.verdict, SUCCESS);
        assert_eq!(analysis.report.tally.get(Category::Parenthesis), 2);
    }

    #[test]
    fn test_windows_line_endings_from_forms() {
        let crlf = reference_skeleton().replace('\n', "\r\n");
        let analysis = native_analyze(&crlf);
        assert_eq!(analysis.verdict, SUCCESS);
        assert_eq!(analysis.lexical_errors.len(), 5);
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_multiple_analyses() {
        // No line-counter leakage between requests
        let first = native_analyze("\n\n\nfoo");
        let second = native_analyze("foo");
        assert_eq!(first.verdict, "Error: expected token 'include' at line 4");
        assert_eq!(second.verdict, "Error: expected token 'include' at line 1");
    }
}
