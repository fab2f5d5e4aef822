//! Roman numeral rendering

/// Largest value rendered as a roman numeral.
pub const ROMAN_MAX: u32 = 4999;

/// Descending (value, symbol) table including the subtractive pairs.
static ROMAN_NUMERALS: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Render `n` as a roman numeral using the greedy subtractive algorithm.
///
/// Values above [`ROMAN_MAX`] fall back to the plain decimal string; this is
/// deliberate boundary behavior, not an error. Zero renders as the empty
/// string.
///
/// ```
/// assert_eq!(strkit::int_to_roman(1994), "MCMXCIV");
/// assert_eq!(strkit::int_to_roman(5000), "5000");
/// ```
pub fn int_to_roman(mut n: u32) -> String {
    if n > ROMAN_MAX {
        return n.to_string();
    }

    let mut out = String::new();
    for &(value, symbol) in ROMAN_NUMERALS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}
