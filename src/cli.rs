//! Command-line interface definition for strkit
//!
//! Provides argument parsing for the text-normalization toolkit.

use clap::{Parser, Subcommand, ValueEnum};

use crate::case::CaseConvention;
use crate::filter::BaseMode;

/// Text normalization toolkit
///
/// Unicode filtering, slug generation, naming-convention conversion and
/// string validation from the command line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "strkit",
    version,
    about = "Text normalization toolkit",
    long_about = r#"
Unicode filtering, slug generation, naming-convention conversion and string
validation from the command line.

EXAMPLES:
    # Strip everything outside the text whitelist
    strkit filter "Hi! ©"

    # Escape disallowed codepoints as HTML entities, collapse whitespace
    strkit filter --mode html --space "Hi!   ©"

    # URL-safe slug from Cyrillic text
    strkit slugify "длинное название чего-либо"

    # Convert an identifier to snake_case
    strkit case loadHTMLFile --to snake-lower

    # Validate an email address
    strkit check email user@example.com
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose mode - detailed logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Toolkit subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sanitize text against the Unicode whitelist
    Filter {
        /// Text to filter
        text: String,

        /// Base output mode
        #[arg(short, long, value_enum, default_value_t = ModeArg::Text)]
        mode: ModeArg,

        /// Normalize look-alike punctuation first
        #[arg(short, long)]
        punctuation: bool,

        /// Collapse whitespace runs and trim
        #[arg(short, long)]
        space: bool,
    },

    /// Generate a URL-safe slug
    Slugify {
        /// Text to slugify
        text: String,

        /// Extra characters to keep verbatim
        #[arg(short, long, value_name = "CHARS", default_value = "")]
        allow: String,

        /// Placeholder character
        #[arg(long, value_name = "CHAR", default_value_t = crate::slug::PLACEHOLDER)]
        placeholder: char,
    },

    /// Convert an identifier between naming conventions
    Case {
        /// Identifier to convert
        text: String,

        /// Target convention
        #[arg(short, long, value_enum)]
        to: ConventionArg,
    },

    /// Print the numeric codepoint of a single character
    Codepoint {
        /// Exactly one character
        character: String,
    },

    /// Print the character for a codepoint (decimal, 0x... or U+...)
    Char {
        /// Codepoint value
        codepoint: String,
    },

    /// Render a number as a roman numeral
    Roman {
        /// Number to render (above 4999 prints the decimal unchanged)
        number: u32,
    },

    /// Generate a URL-safe random token
    Token {
        /// Number of random bytes
        #[arg(short, long, value_name = "BYTES", default_value_t = 32)]
        length: usize,
    },

    /// Generate a random string
    Random {
        /// Output length in characters
        #[arg(short, long, value_name = "NUM", default_value_t = 32)]
        length: usize,

        /// Characters to draw from
        #[arg(short, long, value_name = "CHARS", default_value_t = crate::random::DEFAULT_CHARSET.to_string())]
        charset: String,
    },

    /// Validate the shape of a value (exit code 1 on mismatch)
    Check {
        /// What to validate against
        #[arg(value_enum)]
        kind: CheckKind,

        /// Value to validate
        value: String,

        /// Require an explicit http(s) scheme (url only)
        #[arg(long)]
        require_scheme: bool,

        /// Expected number of hex digits (hash only)
        #[arg(short = 'n', long, value_name = "NUM", default_value_t = 32)]
        length: usize,
    },
}

/// CLI spelling of [`BaseMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Text,
    Html,
    Code,
}

impl From<ModeArg> for BaseMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Text => Self::Text,
            ModeArg::Html => Self::Html,
            ModeArg::Code => Self::Code,
        }
    }
}

/// CLI spelling of [`CaseConvention`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConventionArg {
    CamelLower,
    CamelUpper,
    SnakeLower,
    SnakeUpper,
    KebabLower,
    KebabUpper,
}

impl From<ConventionArg> for CaseConvention {
    fn from(convention: ConventionArg) -> Self {
        match convention {
            ConventionArg::CamelLower => Self::CamelLower,
            ConventionArg::CamelUpper => Self::CamelUpper,
            ConventionArg::SnakeLower => Self::SnakeLower,
            ConventionArg::SnakeUpper => Self::SnakeUpper,
            ConventionArg::KebabLower => Self::KebabLower,
            ConventionArg::KebabUpper => Self::KebabUpper,
        }
    }
}

/// Validators available to `strkit check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    Url,
    Email,
    Hash,
}
