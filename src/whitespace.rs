//! Typographic widths of the whitespace characters the line breaker knows
//! about, expressed as a fraction of the em.

/// Relative width of each recognised whitespace character
pub static WHITESPACE_WEIGHTS: [(char, f32); 22] = [
    ('\u{000A}', 0.28),
    ('\u{000D}', 0.28),
    ('\u{0020}', 0.28), // space
    ('\u{00A0}', 0.28), // no-break space
    ('\u{1680}', 0.28), // ogham space mark
    ('\u{180E}', 0.00), // mongolian vowel separator
    ('\u{2000}', 0.50), // en quad
    ('\u{2001}', 1.00), // em quad
    ('\u{2002}', 0.50), // en space
    ('\u{2003}', 1.00), // em space
    ('\u{2004}', 0.33), // three-per-em space
    ('\u{2005}', 0.25), // four-per-em space
    ('\u{2006}', 0.16), // six-per-em space
    ('\u{2007}', 0.56), // figure space
    ('\u{2008}', 0.28), // punctuation space
    ('\u{2009}', 0.20), // thin space
    ('\u{200A}', 0.15), // hair space
    ('\u{200B}', 0.00), // zero width space
    ('\u{202F}', 0.16), // narrow no-break space
    ('\u{205F}', 0.22), // medium mathematical space
    ('\u{3000}', 1.00), // ideographic space
    ('\u{FEFF}', 0.00), // zero width no-break space
];

/// Look up the em-relative width of a whitespace character. Returns `None`
/// for anything the table doesn't list, including tabs.
pub fn whitespace_weight(ch: char) -> Option<f32> {
    WHITESPACE_WEIGHTS
        .binary_search_by(|(c, _)| c.cmp(&ch))
        .ok()
        .map(|i| WHITESPACE_WEIGHTS[i].1)
}

/// A token value counts as whitespace only when it is exactly one listed
/// character; `"  "` or `" a"` are not whitespace tokens.
pub fn is_whitespace(value: &str) -> bool {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => whitespace_weight(ch).is_some(),
        _ => false,
    }
}
