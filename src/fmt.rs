//! Small formatting helpers
//!
//! Character-count padding, `{key}` message interpolation, cache-key
//! sanitization and short type names.

/// Which side of the input [`pad`] fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadSide {
    /// Fill on the right (left-align the input).
    #[default]
    Right,
    /// Fill on the left (right-align the input).
    Left,
    /// Fill both sides; the extra character goes on the right.
    Both,
}

/// Pad `input` with `fill` up to `length` characters (not bytes). Inputs at
/// or above the target length come back unchanged.
///
/// ```
/// use strkit::{pad, PadSide};
///
/// assert_eq!(pad("абв", 6, ' ', PadSide::Right), "абв   ");
/// assert_eq!(pad("1", 5, '0', PadSide::Left), "00001");
/// ```
pub fn pad(input: &str, length: usize, fill: char, side: PadSide) -> String {
    let current = input.chars().count();
    if current >= length {
        return input.to_string();
    }

    let missing = length - current;
    let (left, right) = match side {
        PadSide::Right => (0, missing),
        PadSide::Left => (missing, 0),
        PadSide::Both => (missing / 2, missing - missing / 2),
    };

    let mut out = String::with_capacity(input.len() + missing * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(input);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Replace `{key}` placeholders in `message` with the paired values.
/// Unknown placeholders stay in place.
pub fn interpolate(message: &str, context: &[(&str, &str)]) -> String {
    let mut out = message.to_string();
    for (key, value) in context {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// Sanitize a cache key: `/` and `-` become `.`, anything outside
/// `[A-Za-z0-9_.]` becomes `_`, and the result is lowercased. Safe for
/// PSR-6-style cache backends that reserve those characters.
pub fn cache_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '-' => '.',
            c if c.is_ascii_alphanumeric() || c == '_' || c == '.' => c.to_ascii_lowercase(),
            _ => '_',
        })
        .collect()
}

/// The unqualified name of `T`, without module path.
///
/// ```
/// assert_eq!(strkit::short_type_name::<std::net::Ipv4Addr>(), "Ipv4Addr");
/// ```
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
