use clap::{Parser, Subcommand};
use log::debug;
use skelcheck_analyzer::{Analysis, Analyzer, REFERENCE_SKELETON};
use skelcheck_lexer::Scanner;
use std::fmt::Write as _;
use std::path::Path;

#[derive(Parser)]
#[command(name = "skelcheck")]
#[command(about = "skelcheck: tokenize a C++ skeleton and check it against the reference program")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify tokens and check the program against the reference skeleton
    Analyze {
        /// Input file (stdin when omitted or `-`)
        path: Option<String>,

        /// Compare against this program instead of the built-in skeleton
        #[arg(long)]
        reference: Option<String>,
    },

    /// Print the raw token stream
    Tokens {
        /// Input file (stdin when omitted or `-`)
        path: Option<String>,
    },

    /// Print the built-in reference skeleton
    Skeleton,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { path, reference } => {
            cmd_analyze(path.as_deref(), reference.as_deref())
        }
        Command::Tokens { path } => cmd_tokens(path.as_deref()),
        Command::Skeleton => println!("{REFERENCE_SKELETON}"),
    }
}

fn read_source(path: Option<&str>) -> String {
    let path = match path {
        None | Some("-") => {
            debug!("reading program from stdin");
            return match std::io::read_to_string(std::io::stdin()) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("Error reading stdin: {e}");
                    std::process::exit(1);
                }
            };
        }
        Some(path) => path,
    };

    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_analyze(path: Option<&str>, reference: Option<&str>) {
    let source = read_source(path);

    let analyzer = match reference {
        Some(reference) => Analyzer::with_reference(read_source(Some(reference))),
        None => Analyzer::default(),
    };

    let analysis = analyzer.analyze(&source);
    print!("{}", render(&analysis));

    if !analysis.is_valid() {
        std::process::exit(1);
    }
}

fn cmd_tokens(path: Option<&str>) {
    let source = read_source(path);
    let scanned = Scanner::tokenize(&source);

    print!("{}", scanned.dump());
    for err in &scanned.errors {
        eprintln!("{err}");
    }
}

/// Render an analysis as the plain-text report printed by `analyze`.
fn render(analysis: &Analysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Tokens");
    let _ = writeln!(out, "  {:>4}  {:<16}  LEXEME", "LINE", "CATEGORY");
    for entry in &analysis.report.entries {
        let _ = writeln!(
            out,
            "  {:>4}  {:<16}  {}",
            entry.line,
            entry.category.label(),
            entry.lexeme
        );
    }

    let _ = writeln!(out, "\nTally");
    for (category, count) in analysis.report.tally.iter() {
        let _ = writeln!(out, "  {:<16}  {count}", category.label());
    }

    if !analysis.lexical_errors.is_empty() {
        let _ = writeln!(out, "\nLexical errors");
        for err in &analysis.lexical_errors {
            let _ = writeln!(out, "  {err}");
        }
    }

    if let Some(err) = &analysis.syntax_error {
        let _ = writeln!(out, "\nGrammar\n  {err}");
    }

    let _ = writeln!(out, "\nVerdict: {}", analysis.verdict);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use skelcheck_analyzer::analyze;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_reference() {
        let cli = Cli::try_parse_from([
            "skelcheck",
            "analyze",
            "main.cpp",
            "--reference",
            "ref.cpp",
        ])
        .unwrap();
        match cli.command {
            Command::Analyze { path, reference } => {
                assert_eq!(path.as_deref(), Some("main.cpp"));
                assert_eq!(reference.as_deref(), Some("ref.cpp"));
            }
            _ => panic!("Expected Analyze"),
        }
    }

    #[test]
    fn test_parse_tokens_without_path() {
        let cli = Cli::try_parse_from(["skelcheck", "tokens"]).unwrap();
        assert!(matches!(cli.command, Command::Tokens { path: None }));
    }

    #[test]
    fn test_render_simple_program() {
        let out = render(&analyze("x;"));
        assert_eq!(
            out,
            "Tokens\n\
             \x20 LINE  CATEGORY          LEXEME\n\
             \x20    1  identifier        x\n\
             \x20    1  statement end     ;\n\
             \n\
             Tally\n\
             \x20 reserved word     0\n\
             \x20 identifier        1\n\
             \x20 parenthesis       0\n\
             \x20 delimiter         0\n\
             \x20 operator          0\n\
             \x20 statement end     1\n\
             \x20 number            0\n\
             \x20 string literal    0\n\
             \n\
             Verdict: Error: expected token 'include' at line 1\n"
        );
    }

    #[test]
    fn test_render_lists_diagnostics() {
        let out = render(&analyze(REFERENCE_SKELETON));
        assert!(out.contains("Lexical errors\n  Illegal character '#' at line 1, column 1\n"));
        assert!(out.contains("Grammar\n  Syntax error at token 'INCLUDE' on line 1\n"));
        assert!(out.ends_with("Verdict: analysis completed successfully\n"));
    }
}
