/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  `maple` command line front-end: parse a file, report
 *           diagnostics, optionally dump tokens or the syntax tree.
 *
 * License:
 * This file is part of the MAPLE programming language project.
 *
 * MAPLE is dual-licensed under the terms of:
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

use maple::config::ParseOptions;
use maple::diagnostics::DiagnosticPrinter;
use maple::error::MapleError;
use maple::lexer;
use std::fs;
use std::process::ExitCode;

const USAGE: &str = "usage: maple [--json] [--tokens] [--config FILE] [--max-depth N] [--token-limit N] <file>";

struct Args {
    path: String,
    json: bool,
    tokens: bool,
    config: Option<String>,
    max_depth: Option<usize>,
    token_limit: Option<usize>,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(true)` when the file parsed without errors.
fn run() -> Result<bool, MapleError> {
    let args = parse_args(std::env::args().skip(1).collect())?;

    let mut options = match &args.config {
        Some(path) => load_config(path)?,
        None => ParseOptions::default(),
    };
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }
    if let Some(limit) = args.token_limit {
        options.token_limit = Some(limit);
    }
    if options.source_name.is_none() {
        options.source_name = Some(args.path.clone());
    }

    let source = fs::read_to_string(&args.path).map_err(|source| MapleError::Io {
        path: args.path.clone(),
        source,
    })?;

    if args.tokens {
        for token in lexer::tokenize(&source).tokens {
            println!(
                "{:>4}:{:<3} {:<28} {:?}",
                token.span.line,
                token.span.column + 1,
                format!("{:?}", token.kind),
                token.lexeme
            );
        }
    }

    let output = maple::parse_with(&source, &options);

    let printer = DiagnosticPrinter::new(args.path.as_str(), source.as_str());
    for diagnostic in &output.diagnostics {
        printer.print(diagnostic);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    let errors = output.errors().count();
    if errors > 0 {
        eprintln!(
            "error: could not parse '{}' due to {} previous error{}",
            args.path,
            errors,
            if errors == 1 { "" } else { "s" }
        );
    }

    Ok(errors == 0)
}

fn load_config(path: &str) -> Result<ParseOptions, MapleError> {
    let text = fs::read_to_string(path).map_err(|source| MapleError::Io {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| MapleError::Config {
        path: path.to_string(),
        source,
    })
}

fn parse_args(args: Vec<String>) -> Result<Args, MapleError> {
    let mut parsed = Args {
        path: String::new(),
        json: false,
        tokens: false,
        config: None,
        max_depth: None,
        token_limit: None,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--tokens" => parsed.tokens = true,
            "--config" => parsed.config = Some(flag_value(&mut iter, "--config")?),
            "--max-depth" => {
                parsed.max_depth = Some(number_flag(&mut iter, "--max-depth")?);
            }
            "--token-limit" => {
                parsed.token_limit = Some(number_flag(&mut iter, "--token-limit")?);
            }
            "-h" | "--help" => return Err(MapleError::Usage(USAGE.to_string())),
            flag if flag.starts_with("--") => {
                return Err(MapleError::Usage(format!("unknown flag '{}'\n{}", flag, USAGE)));
            }
            _ if parsed.path.is_empty() => parsed.path = arg,
            _ => return Err(MapleError::Usage(USAGE.to_string())),
        }
    }

    if parsed.path.is_empty() {
        return Err(MapleError::Usage(USAGE.to_string()));
    }

    Ok(parsed)
}

fn flag_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, MapleError> {
    iter.next()
        .ok_or_else(|| MapleError::Usage(format!("missing value for {}", flag)))
}

fn number_flag(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<usize, MapleError> {
    let value = flag_value(iter, flag)?;
    value
        .parse()
        .map_err(|_| MapleError::Usage(format!("{} expects a number, got '{}'", flag, value)))
}
