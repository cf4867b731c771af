//! Command-line interface for semiotic
//! This binary parses semiotic notation files and prints tokens, ASTs, or
//! interpretive session traces.
//!
//! Usage:
//!   semiotic parse `<path>` [--format `<format>`]  - Parse a file and print it in a format
//!   semiotic session `<path>`                    - Run a file through an interpretive session
//!   semiotic list-formats                      - List all available formats

use clap::{Arg, Command};
use semiotic::semiotic::parser::ExprParser;
use semiotic::semiotic::processor::{available_formats, process_file, ProcessingSpec};
use semiotic::semiotic::state::InterpretiveState;

fn main() {
    let matches = Command::new("semiotic")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting semiotic notation files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a file containing one expression and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-json', 'token-simple')")
                        .default_value("ast-notation"),
                ),
        )
        .subcommand(
            Command::new("session")
                .about("Parse one expression per line and trace drift through a session")
                .arg(
                    Arg::new("path")
                        .help("Path to the session file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // The grammar is compiled once here and passed down; nothing below
    // constructs parsers on its own
    let parser = ExprParser::compile();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(&parser, path, format);
        }
        Some(("session", session_matches)) => {
            let path = session_matches.get_one::<String>("path").unwrap();
            handle_session_command(&parser, path);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(parser: &ExprParser, path: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(parser, path, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the session command
fn handle_session_command(parser: &ExprParser, path: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let mut state = InterpretiveState::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let expr = parser.parse(line).unwrap_or_else(|e| {
            eprintln!("Error on line {}: {}", index + 1, e);
            std::process::exit(1);
        });

        let drift = state.update(expr);
        println!("{:>4}  drift={:<8} {}", index + 1, drift, line);
    }

    println!("session complete: {} expressions in history", state.len());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
