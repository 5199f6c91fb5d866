/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line driver: token stream in, syntax tree out.
 *
 * Usage:
 *   loxparse tokens.json [--config limits.json] [--format json|sexpr]
 *
 * The input is a JSON array of tokens as produced by any Lox scanner. The
 * tree goes to stdout, diagnostics go to stderr, and the process exits
 * with status 65 (data error) if anything was reported.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the LOXPARSE project.
 *
 * LOXPARSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use loxparse::{parse_with_config, Diagnostics, ParserConfig, Stmt, Token};

/// Exit status for malformed input, as in sysexits.h.
const EX_DATAERR: u8 = 65;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Serialized syntax tree.
    Json,
    /// Parenthesized prefix notation, one declaration per line.
    Sexpr,
}

#[derive(ClapParser)]
#[command(name = "loxparse")]
#[command(about = "Parse a Lox token stream into a syntax tree")]
struct Args {
    /// JSON file holding the token array
    tokens: PathBuf,

    /// JSON file overriding parser limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ParserConfig> {
    let Some(path) = path else {
        return Ok(ParserConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ParserConfig::from_json(&text).with_context(|| format!("decoding config {}", path.display()))
}

fn render(statements: &[Option<Stmt>], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(statements).context("serializing syntax tree")
        }
        Format::Sexpr => Ok(statements
            .iter()
            .map(|stmt| match stmt {
                Some(stmt) => stmt.to_string(),
                None => "<error>".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn run(args: &Args) -> Result<bool> {
    let config = load_config(args.config.as_ref())?;

    let text = fs::read_to_string(&args.tokens)
        .with_context(|| format!("reading tokens {}", args.tokens.display()))?;
    let tokens: Vec<Token> = serde_json::from_str(&text)
        .with_context(|| format!("decoding tokens {}", args.tokens.display()))?;

    info!(tokens = tokens.len(), "parsing");

    let mut diagnostics = Diagnostics::new();
    let statements = parse_with_config(&tokens, &config, &mut diagnostics);

    println!("{}", render(&statements, args.format)?);

    let clean = !diagnostics.has_errors();
    for diagnostic in diagnostics.into_vec() {
        eprintln!("{}", diagnostic);
    }

    Ok(clean)
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EX_DATAERR),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
