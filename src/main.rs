//! strkit - text normalization toolkit
//!
//! Main entry point for the command-line application.

use anyhow::Context;
use clap::Parser;
use colored::*;
use std::process;

use strkit::cli::{Args, CheckKind, Command};
use strkit::FilterOptions;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  {} {}", "Caused by:".red(), err);
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Filter {
            text,
            mode,
            punctuation,
            space,
        } => {
            let options = FilterOptions {
                mode: mode.into(),
                punctuation,
                space,
            };
            log::debug!("filtering with {options:?}");
            println!("{}", strkit::filter(&text, options));
        }

        Command::Slugify {
            text,
            allow,
            placeholder,
        } => {
            println!("{}", strkit::slugify_with(&text, &allow, placeholder));
        }

        Command::Case { text, to } => {
            println!("{}", strkit::convert_case(&text, to.into()));
        }

        Command::Codepoint { character } => {
            let code = strkit::codepoint_of(&character)?;
            println!("U+{code:04X} ({code})");
        }

        Command::Char { codepoint } => {
            let code = parse_codepoint(&codepoint)?;
            println!("{}", strkit::character_of(code)?);
        }

        Command::Roman { number } => {
            println!("{}", strkit::int_to_roman(number));
        }

        Command::Token { length } => {
            println!("{}", strkit::generate_token(length)?);
        }

        Command::Random { length, charset } => {
            println!("{}", strkit::random_string(length, &charset)?);
        }

        Command::Check {
            kind,
            value,
            require_scheme,
            length,
        } => {
            let valid = match kind {
                CheckKind::Url => strkit::is_url(&value, require_scheme),
                CheckKind::Email => strkit::is_email(&value),
                CheckKind::Hash => strkit::is_hash(&value, length),
            };
            if valid {
                println!("{}", "valid".green());
            } else {
                println!("{}", "invalid".red());
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Parse a codepoint given as decimal, `0x` hex or `U+` hex.
fn parse_codepoint(input: &str) -> anyhow::Result<u32> {
    if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("U+"))
        .or_else(|| input.strip_prefix("u+"))
    {
        u32::from_str_radix(hex, 16).with_context(|| format!("invalid hex codepoint '{input}'"))
    } else {
        input
            .parse()
            .with_context(|| format!("invalid codepoint '{input}'"))
    }
}
