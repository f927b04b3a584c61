//! Command-line interface for ling-gloss
//! Parses a gloss markup file (or stdin) and prints the rendered result.
//!
//! Usage:
//!   ling-gloss `<path>` [--nlevel] [--format `<format>`]
//!   cat block.gloss | ling-gloss --format json

use std::io::Read;

use clap::{Arg, ArgAction, Command};

use ling_gloss::gloss::parsing::ParserOptions;
use ling_gloss::gloss::processor::{parse_text, process_text};

fn main() {
    let matches = Command::new("ling-gloss")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse interlinear gloss markup and render it")
        .arg(
            Arg::new("path")
                .help("Path to the markup file (stdin when absent)")
                .index(1),
        )
        .arg(
            Arg::new("nlevel")
                .long("nlevel")
                .help("Accept the combined \\gl command instead of the fixed tiers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["html", "json"])
                .default_value("html"),
        )
        .get_matches();

    let source = read_source(matches.get_one::<String>("path"));
    let options = ParserOptions {
        nlevel: matches.get_flag("nlevel"),
    };

    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");
    let output = match format.as_str() {
        "html" => process_text(&source, options),
        "json" => {
            let outcome = parse_text(&source, options);
            serde_json::to_string_pretty(&outcome).unwrap_or_else(|error| {
                eprintln!("Error serializing output: {}", error);
                std::process::exit(1);
            })
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            std::process::exit(1);
        }
    };

    println!("{}", output);
}

fn read_source(path: Option<&String>) -> String {
    match path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|error| {
            eprintln!("Error reading {}: {}", path, error);
            std::process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            if let Err(error) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", error);
                std::process::exit(1);
            }
            buffer
        }
    }
}
