//! Command-line interface for quiz normalization
//! This binary reads quiz sources (plain text, HTML pages with embedded quiz data) and prints
//! them as JSON payloads or as canonical text.
//!
//! Usage:
//!   quiz parse `<file>`                        - Topic quiz from one file, as JSON
//!   quiz compose `<file>=<section>`...         - Full quiz, one section per file, as JSON
//!   quiz normalize `<file>`                    - Any supported source as canonical text
//!   quiz formats                               - List the registered formats
//!
//! Global options: --config `<toml>` layers a configuration file over the built-in defaults,
//! --log-level sets the log filter (RUST_LOG takes precedence).

use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;
use log::debug;
use quiz_babel::{compose_full, compose_topic, FormatRegistry, QuizPayload, SourceFile};
use quiz_config::{Loader, QuizConfig};
use std::fs;

fn build_cli() -> Command {
    Command::new("quiz")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for normalizing quiz sources")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Log filter (error, warn, info, debug, trace)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse one file into a topic quiz and print it as JSON")
                .arg(Arg::new("path").help("Path to a .txt, .html or .htm file").required(true)),
        )
        .subcommand(
            Command::new("compose")
                .about("Compose a full quiz, one section per file, and print it as JSON")
                .arg(
                    Arg::new("sources")
                        .help("Files with their section names, as <file>=<section>")
                        .required(true)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print any supported source as canonical quiz text")
                .arg(Arg::new("path").help("Path to a .txt, .html or .htm file").required(true)),
        )
        .subcommand(Command::new("formats").about("List the registered formats"))
}

fn main() {
    let matches = build_cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = load_config(matches.get_one::<String>("config").map(String::as_str));
    let registry =
        FormatRegistry::with_options(config.parse_options(), config.serialize_options());

    match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(&registry, required(sub, "path")),
        Some(("compose", sub)) => {
            let sources: Vec<&String> = sub
                .get_many::<String>("sources")
                .unwrap_or_default()
                .collect();
            handle_compose_command(&registry, &sources);
        }
        Some(("normalize", sub)) => handle_normalize_command(&registry, required(sub, "path")),
        Some(("formats", _)) => handle_formats_command(&registry),
        _ => {
            eprintln!("Unknown command. Run `quiz --help` for usage.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| {
            eprintln!("Missing argument <{}>", name);
            std::process::exit(1);
        })
}

fn load_config(path: Option<&str>) -> QuizConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Read a file as text. Invalid UTF-8 sequences are dropped, never fatal.
fn read_source(path: &str) -> String {
    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        std::process::exit(1);
    });
    decode_ignoring_invalid(path, &bytes)
}

fn decode_ignoring_invalid(path: &str, bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }
    if dropped > 0 {
        debug!("[Read] Dropped {} invalid UTF-8 bytes from {}", dropped, path);
    }
    text
}

/// Split a `<file>=<section>` argument at the first `=`. A missing section is left empty.
fn split_source(arg: &str) -> (&str, &str) {
    arg.split_once('=').unwrap_or((arg, ""))
}

fn print_payload(payload: &QuizPayload) {
    let json = serde_json::to_string_pretty(payload).unwrap_or_else(|e| {
        eprintln!("Error formatting payload: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

/// Handle the parse command
fn handle_parse_command(registry: &FormatRegistry, path: &str) {
    let content = read_source(path);
    let payload = compose_topic(registry, path, &content).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print_payload(&payload);
}

/// Handle the compose command
fn handle_compose_command(registry: &FormatRegistry, sources: &[&String]) {
    let files: Vec<SourceFile> = sources
        .iter()
        .map(|arg| {
            let (path, section) = split_source(arg);
            SourceFile::new(path, read_source(path), section)
        })
        .collect();
    let payload = compose_full(registry, &files).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print_payload(&payload);
}

/// Handle the normalize command
fn handle_normalize_command(registry: &FormatRegistry, path: &str) {
    let content = read_source(path);
    let text = registry
        .parse_file(path, &content)
        .and_then(|questions| registry.serialize(&questions, "txt"))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    print!("{}", text);
}

/// Handle the formats command
fn handle_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut directions = Vec::new();
        if format.supports_parsing() {
            directions.push("parse");
        }
        if format.supports_serialization() {
            directions.push("serialize");
        }
        println!(
            "  {} (.{}) [{}]",
            name,
            format.file_extensions().join(", ."),
            directions.join(", ")
        );
        println!("    {}", format.description());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_invalid_utf8_bytes_are_dropped() {
        assert_eq!(decode_ignoring_invalid("a.txt", b"Caf\xe9 \xff\xfemenu"), "Caf menu");
        assert_eq!(decode_ignoring_invalid("a.txt", "Café \u{fffd}".as_bytes()), "Café \u{fffd}");
        assert_eq!(decode_ignoring_invalid("a.txt", b""), "");
    }

    #[test]
    fn test_split_source() {
        assert_eq!(split_source("maths.txt=Maths"), ("maths.txt", "Maths"));
        assert_eq!(split_source("gk.txt=General Knowledge"), ("gk.txt", "General Knowledge"));
        assert_eq!(split_source("maths.txt"), ("maths.txt", ""));
        assert_eq!(split_source("maths.txt="), ("maths.txt", ""));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["quiz", "parse", "a.txt", "--log-level", "debug"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("log-level").map(String::as_str),
            Some("debug")
        );
    }
}
