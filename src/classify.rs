//! Unicode character classification
//!
//! Classifies codepoints into the named categories the text filter is built
//! on. Each category owns an ordered table of closed codepoint intervals;
//! membership is an interval lookup, so adding a category or widening a range
//! is a table edit, not new code.

/// A closed codepoint interval.
type Range = (u32, u32);

/// Named codepoint categories used by [`crate::filter`].
///
/// Categories are tested independently; a codepoint may belong to several
/// (`0x0B` is both [`Category::Control`] and [`Category::AsciiWhitespace`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// C0 controls except tab and newline (00-08, 0B-1F).
    Control,
    /// Tab through carriage return (09-0D).
    AsciiWhitespace,
    /// Printable ASCII (20-7E).
    BasicLatin,
    /// No-break space (A0).
    NoBreakSpace,
    /// The Cyrillic block subset used by the filter (400-45F).
    CyrillicSubset,
    /// Fixed-width space variants (2000-200A).
    WideSpace,
    /// NEL and the line/paragraph separators (85, 2028-2029).
    LineSeparator,
    /// Dash look-alikes (2010-2015, 2053).
    Dash,
    /// Single-quote, backtick and acute look-alikes.
    SingleQuote,
    /// Double-quote and guillemet look-alikes.
    DoubleQuote,
    /// Numero sign (2116).
    Numero,
    /// Right-to-left override (202E).
    RtlOverride,
}

/// All categories, in table order.
const ALL: &[Category] = &[
    Category::Control,
    Category::AsciiWhitespace,
    Category::BasicLatin,
    Category::NoBreakSpace,
    Category::CyrillicSubset,
    Category::WideSpace,
    Category::LineSeparator,
    Category::Dash,
    Category::SingleQuote,
    Category::DoubleQuote,
    Category::Numero,
    Category::RtlOverride,
];

impl Category {
    /// The interval table for this category. Intervals are sorted and never
    /// overlap within a category.
    pub fn ranges(self) -> &'static [Range] {
        match self {
            Self::Control => &[(0x00, 0x08), (0x0B, 0x1F)],
            Self::AsciiWhitespace => &[(0x09, 0x0D)],
            Self::BasicLatin => &[(0x20, 0x7E)],
            Self::NoBreakSpace => &[(0xA0, 0xA0)],
            Self::CyrillicSubset => &[(0x400, 0x45F)],
            Self::WideSpace => &[(0x2000, 0x200A)],
            Self::LineSeparator => &[(0x85, 0x85), (0x2028, 0x2029)],
            Self::Dash => &[(0x2010, 0x2015), (0x2053, 0x2053)],
            Self::SingleQuote => &[
                (0x60, 0x60),
                (0xB4, 0xB4),
                (0x2B9, 0x2B9),
                (0x2BB, 0x2BF),
                (0x2018, 0x201B),
            ],
            Self::DoubleQuote => &[
                (0xAB, 0xAB),
                (0xBB, 0xBB),
                (0x2BA, 0x2BA),
                (0x201C, 0x201F),
                (0x2039, 0x203A),
            ],
            Self::Numero => &[(0x2116, 0x2116)],
            Self::RtlOverride => &[(0x202E, 0x202E)],
        }
    }

    /// Whether `code` falls inside this category.
    #[inline]
    pub fn contains(self, code: u32) -> bool {
        self.ranges().iter().any(|&(lo, hi)| lo <= code && code <= hi)
    }

    /// Convenience form taking a character.
    #[inline]
    pub fn contains_char(self, c: char) -> bool {
        self.contains(c as u32)
    }
}

/// All categories containing `code`. Total: unknown codepoints simply belong
/// to no category and yield an empty vector.
pub fn classify(code: u32) -> Vec<Category> {
    ALL.iter().copied().filter(|cat| cat.contains(code)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_latin() {
        assert!(Category::BasicLatin.contains(0x20));
        assert!(Category::BasicLatin.contains(0x7E));
        assert!(!Category::BasicLatin.contains(0x7F));
        assert!(!Category::BasicLatin.contains(0x1F));
    }

    #[test]
    fn test_classify_multi_category() {
        // Vertical tab is both a control and ASCII whitespace.
        let cats = classify(0x0B);
        assert!(cats.contains(&Category::Control));
        assert!(cats.contains(&Category::AsciiWhitespace));
    }

    #[test]
    fn test_classify_unknown_is_empty() {
        assert!(classify(0x1F600).is_empty()); // emoji
        assert!(classify(0x4E00).is_empty()); // CJK
    }

    #[test]
    fn test_punctuation_lookalikes() {
        assert!(Category::Dash.contains('—' as u32)); // em dash U+2014
        assert!(Category::SingleQuote.contains('’' as u32)); // U+2019
        assert!(Category::DoubleQuote.contains('«' as u32)); // U+00AB
        assert!(Category::DoubleQuote.contains('»' as u32)); // U+00BB
        assert!(Category::Numero.contains('№' as u32)); // U+2116
    }

    #[test]
    fn test_cyrillic_subset() {
        assert!(Category::CyrillicSubset.contains_char('А'));
        assert!(Category::CyrillicSubset.contains_char('ы'));
        assert!(Category::CyrillicSubset.contains_char('ё')); // U+0451
        assert!(!Category::CyrillicSubset.contains_char('Ѡ')); // U+0460
    }

    #[test]
    fn test_ranges_sorted_and_disjoint() {
        for cat in ALL {
            let ranges = cat.ranges();
            for pair in ranges.windows(2) {
                assert!(pair[0].1 < pair[1].0, "{cat:?} ranges overlap or unsorted");
            }
            for &(lo, hi) in ranges {
                assert!(lo <= hi, "{cat:?} has an inverted range");
            }
        }
    }
}
