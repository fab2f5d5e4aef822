//! Slug generation
//!
//! Turns arbitrary Unicode text into URL-safe identifiers: lowercase,
//! Cyrillic transliterated to Latin, everything else collapsed to a
//! placeholder character.

/// Placeholder used by [`slugify`].
pub const PLACEHOLDER: char = '_';

/// Cyrillic-to-Latin transliteration table, applied after lowercasing.
/// Keyed by lowercase character, sorted by codepoint for binary search.
/// Empty targets delete the character (hard/soft signs, apostrophe).
static TRANSLITERATION: &[(char, &str)] = &[
    ('\'', ""),
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('ё', "yo"),
];

#[inline]
fn transliterate(c: char) -> Option<&'static str> {
    TRANSLITERATION
        .binary_search_by_key(&c, |&(from, _)| from)
        .ok()
        .map(|i| TRANSLITERATION[i].1)
}

/// Slugify with the default `_` placeholder.
///
/// `extra` lists additional characters to keep verbatim, taken literally
/// (never as pattern syntax).
///
/// ```
/// assert_eq!(strkit::slugify("длинное название чего-либо", ""), "dlinnoe_nazvanie_chego_libo");
/// assert_eq!(strkit::slugify("fileName.txt", "."), "filename.txt");
/// ```
pub fn slugify(input: &str, extra: &str) -> String {
    slugify_with(input, extra, PLACEHOLDER)
}

/// Slugify with a caller-chosen placeholder character.
///
/// Steps, in order: Unicode-aware lowercasing, transliteration, replacement
/// of every maximal run outside `{a-z, 0-9}` ∪ `extra` ∪ `{placeholder}` by
/// one placeholder, collapse of doubled placeholders, and trimming of the
/// placeholder at both ends.
pub fn slugify_with(input: &str, extra: &str, placeholder: char) -> String {
    let lowered = input.to_lowercase();

    let mut latin = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match transliterate(c) {
            Some(replacement) => latin.push_str(replacement),
            None => latin.push(c),
        }
    }

    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || extra.contains(c);

    // Replacement and placeholder collapse in one pass: anything disallowed,
    // and the placeholder itself, only lands when the previous output
    // character was not already the placeholder.
    let mut out = String::with_capacity(latin.len());
    for c in latin.chars() {
        if c != placeholder && allowed(c) {
            out.push(c);
        } else if !out.ends_with(placeholder) {
            out.push(placeholder);
        }
    }

    out.trim_matches(placeholder).to_string()
}
