//! Naming-convention conversion
//!
//! Segments an identifier into words (case, digit and acronym transitions
//! plus any non-alphanumeric separator) and reassembles it under one of six
//! naming conventions.

/// A naming convention: camel, snake or kebab, each in a lower and an upper
/// flavor. Each variant carries its own casing, word-capitalization and
/// separator behavior, so no invalid combination can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseConvention {
    /// `loadHtmlFile`
    CamelLower,
    /// `LoadHtmlFile`
    CamelUpper,
    /// `load_html_file`
    SnakeLower,
    /// `LOAD_HTML_FILE`
    SnakeUpper,
    /// `load-html-file`
    KebabLower,
    /// `Load-Html-File`
    KebabUpper,
}

impl CaseConvention {
    /// Whether the whole identifier is forced to uppercase.
    fn all_uppercase(self) -> bool {
        matches!(self, Self::SnakeUpper)
    }

    /// Whether each word gets a capitalized first letter.
    fn capitalize_words(self) -> bool {
        matches!(self, Self::CamelLower | Self::CamelUpper | Self::KebabUpper)
    }

    /// Separator joining the words, if any.
    fn separator(self) -> Option<char> {
        match self {
            Self::CamelLower | Self::CamelUpper => None,
            Self::SnakeLower | Self::SnakeUpper => Some('_'),
            Self::KebabLower | Self::KebabUpper => Some('-'),
        }
    }

    /// Whether the final result starts lowercase regardless of word styling.
    fn lower_first(self) -> bool {
        matches!(self, Self::CamelLower)
    }
}

/// Convert an identifier to the given naming convention.
///
/// ```
/// use strkit::{convert_case, CaseConvention};
///
/// assert_eq!(convert_case("loadHTMLFile", CaseConvention::SnakeLower), "load_html_file");
/// assert_eq!(convert_case("load_html_file", CaseConvention::CamelLower), "loadHtmlFile");
/// ```
pub fn convert_case(input: &str, convention: CaseConvention) -> String {
    let words = split_words(input);

    let styled: Vec<String> = words
        .into_iter()
        .map(|word| {
            let mut word = if convention.all_uppercase() {
                word.to_ascii_uppercase()
            } else {
                word.to_ascii_lowercase()
            };
            if convention.capitalize_words() {
                if let Some(first) = word.get_mut(..1) {
                    first.make_ascii_uppercase();
                }
            }
            word
        })
        .collect();

    let mut result = match convention.separator() {
        Some(sep) => styled.join(&sep.to_string()),
        None => styled.concat(),
    };

    if convention.lower_first() {
        if let Some(first) = result.get_mut(..1) {
            first.make_ascii_lowercase();
        }
    }

    result
}

/// Split an identifier into word fragments. Boundaries are judged against
/// the original characters in a single left-to-right scan, never against
/// already-split output:
/// - lowercase letter followed by uppercase letter
/// - uppercase run ending before an (uppercase, lowercase) pair
/// - ASCII letter followed by a digit, and digit followed by a letter
/// - any non-ASCII-alphanumeric character (dropped, acts as a separator)
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }
        if i > 0 && is_boundary(&chars, i) {
            flush(&mut words, &mut current);
        }
        current.push(c);
    }
    flush(&mut words, &mut current);

    words
}

#[inline]
fn is_boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let c = chars[i];

    if prev.is_ascii_lowercase() && c.is_ascii_uppercase() {
        return true;
    }
    // Acronym end: HTMLFile splits before File. A caps run followed by a
    // digit does not split here; only the letter<->digit rules below apply.
    if prev.is_ascii_uppercase()
        && c.is_ascii_uppercase()
        && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase())
    {
        return true;
    }
    if prev.is_ascii_alphabetic() && c.is_ascii_digit() {
        return true;
    }
    if prev.is_ascii_digit() && c.is_ascii_alphabetic() {
        return true;
    }

    false
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CaseConvention::*;

    const CONVENTIONS: [CaseConvention; 6] = [
        CamelLower, CamelUpper, SnakeLower, SnakeUpper, KebabLower, KebabUpper,
    ];

    // source, then the six canonical renderings in CONVENTIONS order.
    const TABLE: &[[&str; 7]] = &[
        ["simple", "simple", "Simple", "simple", "SIMPLE", "simple", "Simple"],
        ["two words", "twoWords", "TwoWords", "two_words", "TWO_WORDS", "two-words", "Two-Words"],
        ["some number 1", "someNumber1", "SomeNumber1", "some_number_1", "SOME_NUMBER_1", "some-number-1", "Some-Number-1"],
        ["1 first digit", "1FirstDigit", "1FirstDigit", "1_first_digit", "1_FIRST_DIGIT", "1-first-digit", "1-First-Digit"],
        ["me 1 in mid", "me1InMid", "Me1InMid", "me_1_in_mid", "ME_1_IN_MID", "me-1-in-mid", "Me-1-In-Mid"],
        ["HTML", "html", "Html", "html", "HTML", "html", "Html"],
        ["image.jpg", "imageJpg", "ImageJpg", "image_jpg", "IMAGE_JPG", "image-jpg", "Image-Jpg"],
        ["simpleXML", "simpleXml", "SimpleXml", "simple_xml", "SIMPLE_XML", "simple-xml", "Simple-Xml"],
        ["PDFLoad", "pdfLoad", "PdfLoad", "pdf_load", "PDF_LOAD", "pdf-load", "Pdf-Load"],
        ["loadHTMLFile", "loadHtmlFile", "LoadHtmlFile", "load_html_file", "LOAD_HTML_FILE", "load-html-file", "Load-Html-File"],
        ["PHP_INT_MAX", "phpIntMax", "PhpIntMax", "php_int_max", "PHP_INT_MAX", "php-int-max", "Php-Int-Max"],
        ["ICar", "iCar", "ICar", "i_car", "I_CAR", "i-car", "I-Car"],
        ["Disk:C", "diskC", "DiskC", "disk_c", "DISK_C", "disk-c", "Disk-C"],
        ["one_TwoThree", "oneTwoThree", "OneTwoThree", "one_two_three", "ONE_TWO_THREE", "one-two-three", "One-Two-Three"],
        [" _some--MIX-", "someMix", "SomeMix", "some_mix", "SOME_MIX", "some-mix", "Some-Mix"],
        ["UP123low", "up123Low", "Up123Low", "up_123_low", "UP_123_LOW", "up-123-low", "Up-123-Low"],
    ];

    #[test]
    fn test_convert_case_table() {
        for row in TABLE {
            for (t, &convention) in CONVENTIONS.iter().enumerate() {
                let expected = row[t + 1];
                assert_eq!(
                    convert_case(row[0], convention),
                    expected,
                    "{:?} from source {:?}",
                    convention,
                    row[0]
                );
            }
        }
    }

    #[test]
    fn test_convert_case_converges_from_any_canonical_form() {
        // Any canonical rendering converts to any other, regardless of which
        // convention it came from.
        for row in TABLE {
            for (t, &convention) in CONVENTIONS.iter().enumerate() {
                let expected = row[t + 1];
                for source in &row[1..] {
                    assert_eq!(
                        convert_case(source, convention),
                        expected,
                        "{:?} from {:?}",
                        convention,
                        source
                    );
                }
            }
        }
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("loadHTMLFile"), ["load", "HTML", "File"]);
        assert_eq!(split_words("UP123low"), ["UP", "123", "low"]);
        assert_eq!(split_words("one_TwoThree"), ["one", "Two", "Three"]);
        assert_eq!(split_words("HTML"), ["HTML"]);
        assert!(split_words("").is_empty());
        assert!(split_words("__--  ").is_empty());
    }

    #[test]
    fn test_non_ascii_acts_as_separator() {
        assert_eq!(convert_case("fooБароBaz", SnakeLower), "foo_baz");
    }

    #[test]
    fn test_empty_input() {
        for convention in CONVENTIONS {
            assert_eq!(convert_case("", convention), "");
        }
    }
}
