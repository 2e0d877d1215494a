use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wml_rust::{from_json, render_with, RenderOptions};

/// Render a JSON-encoded configuration tree as WML.
#[derive(Parser, Debug)]
#[command(name = "wml", version, about)]
struct Cli {
    /// JSON input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Indent raw block payloads to match their enclosing tag
    #[arg(long)]
    reindent_raw: bool,
}

fn read_input(cli: &Cli) -> io::Result<String> {
    match &cli.input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let input = read_input(cli).map_err(|e| format!("reading input: {}", e))?;
    let data = from_json(&input).map_err(|e| e.to_string())?;
    let options = RenderOptions::default().reindent_raw_blocks(cli.reindent_raw);
    let text = render_with(&data, 0, options);
    io::stdout()
        .write_all(text.as_bytes())
        .map_err(|e| format!("writing output: {}", e))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(message) = run(&cli) {
        eprintln!("error: {}", message);
        std::process::exit(1);
    }
}
