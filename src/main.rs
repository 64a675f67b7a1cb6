//! graph-visualizer CLI entry point.
//!
//! Reads a `{ "nodes": [...], "edges": [...] }` JSON document and writes
//! either the structured graph description (JSON) or a rendered PNG.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use graph_visualizer::{export_png, generate, GraphInput};

/// Directed-graph layout with JSON and PNG export.
#[derive(Parser, Debug)]
#[command(
    name = "graph-visualizer",
    about = "Directed-graph layout with JSON and PNG export"
)]
struct Cli {
    /// Input JSON file (reads from stdin if not provided)
    input: Option<String>,

    /// Render a PNG to this file instead of printing the JSON description
    #[arg(long = "png")]
    png: Option<String>,

    /// Write the JSON description to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    // A document missing `nodes` or `edges` fails right here, before any
    // layout work.
    let input: GraphInput = match serde_json::from_str(&text) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: invalid graph payload: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.png {
        let bytes = match export_png(&input.nodes, &input.edges) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        };
        if let Err(e) = fs::write(path, bytes) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
        return;
    }

    let description = generate(&input.nodes, &input.edges);
    let json = match serde_json::to_string_pretty(&description) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot serialize description: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, json) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", json);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
