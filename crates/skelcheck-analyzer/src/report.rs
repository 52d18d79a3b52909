//! Classification reporter.
//!
//! Buckets tokens into the eight display categories and tallies them.
//! Kinds outside the partition (`int`, `cout`, `count`, `usingname`, `=`
//! and `,`) are left out of the report entirely.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use skelcheck_lexer::{Token, TokenKind};

/// Display category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Category {
    Reserved,
    Identifier,
    Parenthesis,
    Delimiter,
    Operator,
    StatementEnd,
    Number,
    StringLiteral,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 8] = [
        Category::Reserved,
        Category::Identifier,
        Category::Parenthesis,
        Category::Delimiter,
        Category::Operator,
        Category::StatementEnd,
        Category::Number,
        Category::StringLiteral,
    ];

    /// Category of a token kind, if it has one.
    pub fn of(kind: TokenKind) -> Option<Category> {
        let category = match kind {
            TokenKind::Reserved(_) => Category::Reserved,
            TokenKind::Identifier => Category::Identifier,
            TokenKind::LParen | TokenKind::RParen => Category::Parenthesis,
            TokenKind::LBrace | TokenKind::RBrace => Category::Delimiter,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
                Category::Operator
            }
            TokenKind::Semicolon => Category::StatementEnd,
            TokenKind::Number => Category::Number,
            TokenKind::StringLiteral => Category::StringLiteral,
            TokenKind::Int
            | TokenKind::Cout
            | TokenKind::Count
            | TokenKind::UsingName
            | TokenKind::Assign
            | TokenKind::Comma => return None,
        };
        Some(category)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Reserved => "reserved word",
            Category::Identifier => "identifier",
            Category::Parenthesis => "parenthesis",
            Category::Delimiter => "delimiter",
            Category::Operator => "operator",
            Category::StatementEnd => "statement end",
            Category::Number => "number",
            Category::StringLiteral => "string literal",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified token.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Entry {
    pub category: Category,
    pub lexeme: String,
    pub line: usize,
}

/// Per-category token counts, all starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [usize; 8],
}

impl Tally {
    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(category, count)` pairs in display order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    fn record(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }
}

// Serialized as `{ "Reserved": n, ... }` so shells can index by name.
impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(&category, &count)?;
        }
        map.end()
    }
}

/// Classified tokens in source order plus their tally.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
    pub tally: Tally,
}

/// Classify a token sequence.
pub fn classify(tokens: &[Token]) -> Report {
    let mut report = Report::default();
    for token in tokens {
        let Some(category) = Category::of(token.kind) else {
            continue;
        };
        report.tally.record(category);
        report.entries.push(Entry {
            category,
            lexeme: token.lexeme(),
            line: token.line(),
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::REFERENCE_SKELETON;
    use pretty_assertions::assert_eq;
    use skelcheck_lexer::Scanner;

    fn report(source: &str) -> Report {
        classify(&Scanner::tokenize(source).tokens)
    }

    #[test]
    fn test_empty_report() {
        let r = report("");
        assert!(r.entries.is_empty());
        assert_eq!(r.tally, Tally::default());
        assert!(r.tally.iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn test_reference_tally() {
        let r = report(REFERENCE_SKELETON);
        let counts: Vec<(Category, usize)> = r.tally.iter().collect();
        assert_eq!(
            counts,
            vec![
                (Category::Reserved, 4),
                (Category::Identifier, 2),
                (Category::Parenthesis, 2),
                (Category::Delimiter, 2),
                (Category::Operator, 0),
                (Category::StatementEnd, 3),
                (Category::Number, 1),
                (Category::StringLiteral, 1),
            ]
        );
        assert_eq!(r.tally.total(), 15);
    }

    #[test]
    fn test_fixed_keywords_and_assign_are_dropped() {
        let r = report("int x = 5 + 3;");
        assert_eq!(
            r.entries,
            vec![
                Entry {
                    category: Category::Identifier,
                    lexeme: "x".into(),
                    line: 1,
                },
                Entry {
                    category: Category::Number,
                    lexeme: "5".into(),
                    line: 1,
                },
                Entry {
                    category: Category::Operator,
                    lexeme: "+".into(),
                    line: 1,
                },
                Entry {
                    category: Category::Number,
                    lexeme: "3".into(),
                    line: 1,
                },
                Entry {
                    category: Category::StatementEnd,
                    lexeme: ";".into(),
                    line: 1,
                },
            ]
        );
    }

    #[test]
    fn test_comma_and_output_keywords_are_dropped() {
        let r = report("cout count usingname a, b");
        assert_eq!(r.tally.get(Category::Identifier), 2);
        assert_eq!(r.tally.total(), 2);
    }

    #[test]
    fn test_all_operators() {
        let r = report("+ - * /");
        assert_eq!(r.tally.get(Category::Operator), 4);
    }

    #[test]
    fn test_tally_matches_entries() {
        let source = "#include <iostream>\nint a, b = (1 + 2) * 3;\n{ cout \"s\"; }";
        let tokens = Scanner::tokenize(source).tokens;
        let r = classify(&tokens);
        assert_eq!(r.tally.total(), r.entries.len());
        assert!(r.tally.total() < tokens.len());
        for category in Category::ALL {
            let listed = r.entries.iter().filter(|e| e.category == category).count();
            assert_eq!(r.tally.get(category), listed);
        }
    }

    #[test]
    fn test_string_keeps_quotes_in_entry() {
        let r = report("\"hi\"");
        assert_eq!(r.entries[0].lexeme, "\"hi\"");
        assert_eq!(r.entries[0].category.to_string(), "string literal");
    }
}
