//! Text filtering module
//!
//! Sanitizes untrusted Unicode text against the whitelisted categories in
//! [`crate::classify`], with three base output modes (strip, HTML entities,
//! codepoint escapes) plus optional punctuation and whitespace normalization
//! passes.

use crate::classify::Category;

/// Base output mode of [`filter`]. Exactly one applies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseMode {
    /// Delete disallowed codepoints outright.
    #[default]
    Text,
    /// Strip disallowed controls, escape the rest as decimal HTML entities.
    Html,
    /// Escape every disallowed codepoint as `[%XXXX]`. Short-circuits the
    /// punctuation and space passes.
    Code,
}

/// Filter configuration: one base mode plus two additive passes.
///
/// The default is plain [`BaseMode::Text`] with no extra passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// Base escaping behavior.
    pub mode: BaseMode,
    /// Normalize look-alike punctuation before the base mode runs.
    pub punctuation: bool,
    /// Collapse whitespace variants before, and doubled spaces after,
    /// the base mode.
    pub space: bool,
}

impl FilterOptions {
    /// Plain text mode.
    pub fn text() -> Self {
        Self::default()
    }

    /// HTML entity mode.
    pub fn html() -> Self {
        Self {
            mode: BaseMode::Html,
            ..Self::default()
        }
    }

    /// Codepoint escape mode.
    pub fn code() -> Self {
        Self {
            mode: BaseMode::Code,
            ..Self::default()
        }
    }

    /// Enable the punctuation normalization pass.
    pub fn with_punctuation(mut self) -> Self {
        self.punctuation = true;
        self
    }

    /// Enable the whitespace collapse passes.
    pub fn with_space(mut self) -> Self {
        self.space = true;
        self
    }
}

/// Filter `input` according to `options`.
///
/// The processing order is fixed: codepoint-escape mode returns immediately;
/// otherwise the punctuation pass, the whitespace collapse, the base mode,
/// and finally the double-space squeeze and trim.
///
/// ```
/// use strkit::{filter, FilterOptions};
///
/// assert_eq!(filter("Hi! ©", FilterOptions::text()), "Hi! ");
/// assert_eq!(filter("Hi! ©", FilterOptions::html()), "Hi! &#169;");
/// assert_eq!(filter("Hi! ©", FilterOptions::code()), "Hi! [%00A9]");
/// ```
pub fn filter(input: &str, options: FilterOptions) -> String {
    if options.mode == BaseMode::Code {
        return escape_codepoints(input);
    }

    let mut text = if options.punctuation {
        filter_punctuation(input)
    } else {
        input.to_string()
    };

    if options.space {
        text = collapse_space_variants(&text);
    }

    text = match options.mode {
        BaseMode::Text => strip_disallowed(&text),
        BaseMode::Html => escape_html(&text),
        BaseMode::Code => unreachable!("handled above"),
    };

    if options.space {
        text = squeeze_spaces(&text);
        text = trim_ascii_whitespace(&text).to_string();
    }

    text
}

/// Replace look-alike punctuation with its plain ASCII equivalent:
/// dash variants become `-`, single-quote variants `'`, double-quote and
/// guillemet variants `"`, and the numero sign `#`.
pub fn filter_punctuation(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if Category::Dash.contains_char(c) {
                '-'
            } else if Category::SingleQuote.contains_char(c) {
                '\''
            } else if Category::DoubleQuote.contains_char(c) {
                '"'
            } else if Category::Numero.contains_char(c) {
                '#'
            } else {
                c
            }
        })
        .collect()
}

/// Sanitize a document title: decode HTML entities, normalize punctuation,
/// turn every run outside the printable whitelist (minus `<` and `>`) into a
/// space, and collapse the result to single-spaced trimmed text.
pub fn filter_title(input: &str) -> String {
    let decoded = decode_entities(input);
    let text = filter_punctuation(&decoded);

    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if title_allowed(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push(' ');
            in_run = true;
        }
    }

    trim_ascii_whitespace(&squeeze_spaces(&out)).to_string()
}

/// Codepoints that survive [`BaseMode::Text`] filtering.
#[inline]
fn text_allowed(c: char) -> bool {
    c == '\n'
        || c == '\t'
        || Category::BasicLatin.contains_char(c)
        || Category::NoBreakSpace.contains_char(c)
        || Category::CyrillicSubset.contains_char(c)
}

/// Codepoints that survive [`BaseMode::Html`] filtering unescaped. Unlike
/// text mode the no-break space is escaped like any other entity.
#[inline]
fn html_allowed(c: char) -> bool {
    c == '\n'
        || c == '\t'
        || Category::BasicLatin.contains_char(c)
        || Category::CyrillicSubset.contains_char(c)
}

/// Codepoints that pass [`BaseMode::Code`] unescaped: tab, LF, VT and the
/// text-mode whitelist.
#[inline]
fn code_allowed(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0B') || text_allowed(c)
}

/// Printable whitelist for [`filter_title`]: text-mode set minus `<`/`>`
/// so markup cannot survive.
#[inline]
fn title_allowed(c: char) -> bool {
    !matches!(c, '<' | '>' | '\n' | '\t') && text_allowed(c)
}

fn escape_codepoints(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if code_allowed(c) {
            out.push(c);
        } else {
            out.push_str(&format!("[%{:04X}]", c as u32));
        }
    }
    out
}

fn strip_disallowed(input: &str) -> String {
    input.chars().filter(|&c| text_allowed(c)).collect()
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        // Disallowed controls and the RTL override are dropped, never escaped.
        if Category::Control.contains_char(c) || Category::RtlOverride.contains_char(c) {
            continue;
        }
        if html_allowed(c) {
            out.push(c);
        } else {
            out.push_str(&format!("&#{};", c as u32));
        }
    }
    out
}

/// Collapse every run of whitespace variants (tab through CR, NEL, the wide
/// space block, line/paragraph separators) into a single ASCII space.
fn collapse_space_variants(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if is_space_variant(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[inline]
fn is_space_variant(c: char) -> bool {
    Category::AsciiWhitespace.contains_char(c)
        || Category::LineSeparator.contains_char(c)
        || Category::WideSpace.contains_char(c)
}

/// Collapse runs of two or more ASCII spaces into one. Single spaces and all
/// other characters pass through untouched.
fn squeeze_spaces(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_space = false;
    for c in input.chars() {
        if c == ' ' && prev_space {
            continue;
        }
        prev_space = c == ' ';
        out.push(c);
    }
    out
}

fn trim_ascii_whitespace(input: &str) -> &str {
    input.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

/// Named HTML entities recognized by [`filter_title`], beyond the numeric
/// `&#N;` / `&#xN;` forms: punctuation plus the Latin-1 letter set, both
/// cases. Sorted by name (byte order) for binary search.
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("AElig", 'Æ'),
    ("Aacute", 'Á'),
    ("Acirc", 'Â'),
    ("Agrave", 'À'),
    ("Aring", 'Å'),
    ("Atilde", 'Ã'),
    ("Auml", 'Ä'),
    ("Ccedil", 'Ç'),
    ("ETH", 'Ð'),
    ("Eacute", 'É'),
    ("Ecirc", 'Ê'),
    ("Egrave", 'È'),
    ("Euml", 'Ë'),
    ("Iacute", 'Í'),
    ("Icirc", 'Î'),
    ("Igrave", 'Ì'),
    ("Iuml", 'Ï'),
    ("Ntilde", 'Ñ'),
    ("Oacute", 'Ó'),
    ("Ocirc", 'Ô'),
    ("Ograve", 'Ò'),
    ("Oslash", 'Ø'),
    ("Otilde", 'Õ'),
    ("Ouml", 'Ö'),
    ("THORN", 'Þ'),
    ("Uacute", 'Ú'),
    ("Ucirc", 'Û'),
    ("Ugrave", 'Ù'),
    ("Uuml", 'Ü'),
    ("Yacute", 'Ý'),
    ("aacute", 'á'),
    ("acirc", 'â'),
    ("aelig", 'æ'),
    ("agrave", 'à'),
    ("amp", '&'),
    ("apos", '\''),
    ("aring", 'å'),
    ("atilde", 'ã'),
    ("auml", 'ä'),
    ("ccedil", 'ç'),
    ("copy", '©'),
    ("deg", '°'),
    ("eacute", 'é'),
    ("ecirc", 'ê'),
    ("egrave", 'è'),
    ("eth", 'ð'),
    ("euml", 'ë'),
    ("gt", '>'),
    ("hellip", '…'),
    ("iacute", 'í'),
    ("icirc", 'î'),
    ("igrave", 'ì'),
    ("iuml", 'ï'),
    ("laquo", '«'),
    ("lt", '<'),
    ("mdash", '—'),
    ("middot", '·'),
    ("nbsp", '\u{A0}'),
    ("ndash", '–'),
    ("ntilde", 'ñ'),
    ("oacute", 'ó'),
    ("ocirc", 'ô'),
    ("ograve", 'ò'),
    ("oslash", 'ø'),
    ("otilde", 'õ'),
    ("ouml", 'ö'),
    ("quot", '"'),
    ("raquo", '»'),
    ("reg", '®'),
    ("sect", '§'),
    ("szlig", 'ß'),
    ("thorn", 'þ'),
    ("trade", '™'),
    ("uacute", 'ú'),
    ("ucirc", 'û'),
    ("ugrave", 'ù'),
    ("uuml", 'ü'),
    ("yacute", 'ý'),
    ("yuml", 'ÿ'),
];

/// Longest entity body we bother to parse (`&...;` without the delimiters).
const MAX_ENTITY_LEN: usize = 8;

/// Decode numeric and common named HTML entities. Anything unrecognized is
/// left in place verbatim.
fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let Some(end) = rest[1..].find(';').filter(|&i| i <= MAX_ENTITY_LEN).map(|i| i + 1)
        else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };

        match decode_entity(&rest[1..end]) {
            Some(c) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = if let Some(hex) = numeric.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            numeric.parse::<u32>().ok()?
        };
        return char::from_u32(code);
    }

    NAMED_ENTITIES
        .binary_search_by_key(&body, |&(name, _)| name)
        .ok()
        .map(|i| NAMED_ENTITIES[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> FilterOptions {
        FilterOptions::text()
    }

    fn html() -> FilterOptions {
        FilterOptions::html()
    }

    #[test]
    fn test_filter_ascii_passthrough() {
        assert_eq!(filter("Hello world!", text()), "Hello world!");
        assert_eq!(filter("Hello world!", html()), "Hello world!");
    }

    #[test]
    fn test_filter_base_modes() {
        assert_eq!(filter("Hi! ©", text()), "Hi! ");
        assert_eq!(filter("Hi! ©", html()), "Hi! &#169;");
        assert_eq!(filter("Hi! ©", FilterOptions::code()), "Hi! [%00A9]");
    }

    #[test]
    fn test_filter_space_pass() {
        assert_eq!(filter("Hi! ©", text().with_space()), "Hi!");
        assert_eq!(filter("Hi! ©", html().with_space()), "Hi! &#169;");

        assert_eq!(filter(" Hi! ©\nHello! ", text()), " Hi! \nHello! ");
        assert_eq!(filter(" Hi! ©\nHello! ", html()), " Hi! &#169;\nHello! ");
        assert_eq!(filter(" Hi! ©\nHello! ", text().with_space()), "Hi! Hello!");
        assert_eq!(
            filter(" Hi! ©\nHello! ", html().with_space()),
            "Hi! &#169; Hello!"
        );
    }

    #[test]
    fn test_filter_russian_title() {
        let input = "Почти «Сталкер»:  впечатления — обзор";

        assert_eq!(filter(input, text()), "Почти Сталкер:  впечатления  обзор");
        assert_eq!(
            filter(input, html()),
            "Почти &#171;Сталкер&#187;:  впечатления &#8212; обзор"
        );
        assert_eq!(
            filter(input, text().with_space()),
            "Почти Сталкер: впечатления обзор"
        );
        assert_eq!(
            filter(input, html().with_space()),
            "Почти &#171;Сталкер&#187;: впечатления &#8212; обзор"
        );
        assert_eq!(
            filter(input, text().with_punctuation()),
            "Почти \"Сталкер\":  впечатления - обзор"
        );
        assert_eq!(
            filter(input, html().with_punctuation()),
            "Почти \"Сталкер\":  впечатления - обзор"
        );
        assert_eq!(
            filter(input, text().with_punctuation().with_space()),
            "Почти \"Сталкер\": впечатления - обзор"
        );
        assert_eq!(
            filter(input, html().with_punctuation().with_space()),
            "Почти \"Сталкер\": впечатления - обзор"
        );
    }

    #[test]
    fn test_filter_code_short_circuits() {
        let options = FilterOptions::code().with_punctuation().with_space();
        // The em dash is escaped, not normalized; wide spaces stay escaped.
        assert_eq!(filter("a — b", options), "a [%2014] b");
        assert_eq!(filter("a\u{2003}b", options), "a[%2003]b");
    }

    #[test]
    fn test_filter_code_allows_controls() {
        assert_eq!(
            filter("a\tb\nc\x0Bd\u{A0}e", FilterOptions::code()),
            "a\tb\nc\x0Bd\u{A0}e"
        );
        assert_eq!(filter("a\rb", FilterOptions::code()), "a[%000D]b");
    }

    #[test]
    fn test_filter_html_strips_controls() {
        assert_eq!(filter("a\x01b\x1Fc", html()), "abc");
        assert_eq!(filter("a\u{202E}b", html()), "ab");
        // Carriage return is a stripped control in html mode.
        assert_eq!(filter("a\r\nb", html()), "a\nb");
    }

    #[test]
    fn test_filter_text_keeps_nbsp_html_escapes_it() {
        assert_eq!(filter("a\u{A0}b", text()), "a\u{A0}b");
        assert_eq!(filter("a\u{A0}b", html()), "a&#160;b");
    }

    #[test]
    fn test_filter_empty() {
        assert_eq!(filter("", text()), "");
        assert_eq!(filter("", html()), "");
        assert_eq!(filter("", FilterOptions::code()), "");
    }

    #[test]
    fn test_filter_idempotent() {
        let inputs = [
            "Hi! ©",
            " Hi! ©\nHello! ",
            "Почти «Сталкер»:  впечатления — обзор",
            "emoji \u{1F600} and \u{202E} override",
        ];
        for input in inputs {
            let once = filter(input, text());
            assert_eq!(filter(&once, text()), once);
            let once = filter(input, html());
            assert_eq!(filter(&once, html()), once);
        }
    }

    #[test]
    fn test_filter_punctuation_mappings() {
        assert_eq!(
            filter_punctuation("‘quoted’ and `ticked´"),
            "'quoted' and 'ticked'"
        );
        assert_eq!(
            filter_punctuation("“double” and «guillemets»"),
            "\"double\" and \"guillemets\""
        );
        assert_eq!(filter_punctuation("dash – — ‒"), "dash - - -");
        assert_eq!(filter_punctuation("№5"), "#5");
    }

    #[test]
    fn test_filter_title() {
        assert_eq!(
            filter_title("Почти &#171;Сталкер&#187; &mdash; обзор"),
            "Почти \"Сталкер\" - обзор"
        );
        assert_eq!(filter_title("A <b>bold</b>  title"), "A b bold /b title");
        // Decoded accents fall outside the printable whitelist and collapse.
        assert_eq!(filter_title("Caf&eacute; du  monde"), "Caf du monde");
        assert_eq!(filter_title("5 &gt; 3 &amp; 2 &lt; 4"), "5 3 & 2 4");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("&#169;&#xA9;&copy;"), "©©©");
        assert_eq!(decode_entities("&nbsp;"), "\u{A0}");
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(decode_entities("&unknown;"), "&unknown;");
        assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn test_decode_entities_latin1_letters() {
        assert_eq!(decode_entities("Caf&eacute;"), "Café");
        assert_eq!(decode_entities("&Eacute;l&egrave;ve"), "Élève");
        assert_eq!(decode_entities("Gr&ouml;&szlig;e"), "Größe");
        assert_eq!(decode_entities("Se&ntilde;or &Oslash;"), "Señor Ø");
        assert_eq!(decode_entities("&AElig;&aelig;"), "Ææ");
    }

    #[test]
    fn test_named_entities_sorted_for_binary_search() {
        for pair in NAMED_ENTITIES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} out of order", pair[1].0);
        }
    }
}
