//! `qtok` CLI — scan, reformat, and pack qtok token-line files.
//!
//! ## Usage
//!
//! ```sh
//! # Scan text and print the token matrix as JSON (stdin → stdout)
//! echo 'host localhost # comment' | qtok tokens
//!
//! # Canonically requote a file
//! qtok fmt -i config.qtok
//!
//! # Pack text into the binary form, and back
//! qtok pack -i config.qtok -o config.qtb
//! qtok unpack -i config.qtb
//!
//! # Size report
//! qtok stats -i config.qtok
//! ```
//!
//! Scan diagnostics go to stderr. A scan that recorded diagnostics makes the
//! command fail unless `--lenient` is given; either way the matrix covers
//! all content the diagnostics did not touch.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qtok_core::{scan_str, writer, TokenMatrix};
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(name = "qtok", version, about = "Quoted token line format CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Keep going when the scanner records diagnostics (still printed to stderr)
    #[arg(long, global = true)]
    lenient: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text and print the token matrix as JSON
    Tokens {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Scan text and re-emit it canonically quoted
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Scan text and write the binary form
    Pack {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Read the binary form and write canonical text
    Unpack {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Report line/token counts and text vs binary sizes
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { input, output } => {
            let text = read_input(input.as_deref())?;
            let matrix = scan_checked(&text, cli.lenient)?;
            let json =
                serde_json::to_string_pretty(&matrix).context("Failed to render tokens as JSON")?;
            write_output(output.as_deref(), json.as_bytes())?;
        }
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let matrix = scan_checked(&text, cli.lenient)?;
            let mut out = Vec::new();
            writer::write_matrix_text(&mut out, &matrix).context("Failed to write token lines")?;
            write_output(output.as_deref(), &out)?;
        }
        Commands::Pack { input, output } => {
            let text = read_input(input.as_deref())?;
            let matrix = scan_checked(&text, cli.lenient)?;
            let bytes = qtok_core::binary::encode_to_vec(&matrix)
                .context("Failed to encode the token matrix")?;
            write_output(output.as_deref(), &bytes)?;
        }
        Commands::Unpack { input, output } => {
            let bytes = read_input_bytes(input.as_deref())?;
            let matrix = qtok_core::binary::decode_slice(&bytes)
                .context("Failed to decode the binary token matrix")?;
            let mut out = Vec::new();
            writer::write_matrix_text(&mut out, &matrix).context("Failed to write token lines")?;
            write_output(output.as_deref(), &out)?;
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let matrix = scan_checked(&text, cli.lenient)?;
            let packed = qtok_core::binary::encode_to_vec(&matrix)
                .context("Failed to encode the token matrix")?;
            let token_count: usize = matrix.iter().map(|line| line.len()).sum();
            println!("Lines:       {}", matrix.len());
            println!("Tokens:      {}", token_count);
            println!("Text size:   {} bytes", text.len());
            println!("Packed size: {} bytes", packed.len());
        }
    }

    Ok(())
}

/// Scan text, print any diagnostics to stderr, and fail (unless lenient)
/// when the scanner recorded errors.
fn scan_checked(text: &str, lenient: bool) -> Result<TokenMatrix> {
    let outcome = scan_str(text);
    for err in &outcome.errors {
        eprintln!("{err}");
    }
    if outcome.had_error() && !lenient {
        anyhow::bail!(
            "input contained {} scan error(s); pass --lenient to continue anyway",
            outcome.errors.len()
        );
    }
    Ok(outcome.lines)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn read_input_bytes(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            io::stdout()
                .write_all(content)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
