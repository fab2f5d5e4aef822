//! # strkit
//!
//! Text normalization toolkit: pure, stateless transformations over Unicode
//! strings.
//!
//! ## Features
//!
//! - **Codepoint codec**: single character <-> numeric codepoint
//! - **Text filtering**: whitelist-based sanitization with strip, HTML-entity
//!   and codepoint-escape output modes, plus punctuation and whitespace
//!   normalization passes
//! - **Slugs**: lowercased, Cyrillic-transliterated, URL-safe identifiers
//! - **Naming conventions**: camel/snake/kebab conversion with acronym-aware
//!   word splitting
//! - **Validators**: URL, email and hex-hash shape checks
//! - **Extras**: roman numerals, secure random strings and tokens, opaque
//!   pack/unpack serialization, padding and interpolation helpers
//!
//! Everything operates on complete in-memory strings; the only shared state
//! is immutable static tables, so all functions are safe to call from any
//! number of threads.
//!
//! ## Example
//!
//! ```rust
//! use strkit::{convert_case, filter, slugify, CaseConvention, FilterOptions};
//!
//! assert_eq!(filter("Hi! ©", FilterOptions::html()), "Hi! &#169;");
//! assert_eq!(slugify("длинное название чего-либо", ""), "dlinnoe_nazvanie_chego_libo");
//! assert_eq!(convert_case("loadHTMLFile", CaseConvention::SnakeLower), "load_html_file");
//! ```

pub mod case;
pub mod classify;
pub mod cli;
pub mod codepoint;
pub mod error;
pub mod filter;
pub mod fmt;
pub mod pack;
pub mod random;
pub mod roman;
pub mod slug;
pub mod validate;

pub use case::{convert_case, CaseConvention};
pub use classify::{classify, Category};
pub use codepoint::{character_of, codepoint_of};
pub use error::Error;
pub use filter::{filter, filter_punctuation, filter_title, BaseMode, FilterOptions};
pub use fmt::{cache_key, interpolate, pad, short_type_name, PadSide};
pub use pack::{pack, unpack};
pub use random::{generate_token, random_string, DEFAULT_CHARSET};
pub use roman::{int_to_roman, ROMAN_MAX};
pub use slug::{slugify, slugify_with, PLACEHOLDER};
pub use validate::{is_email, is_hash, is_url};
