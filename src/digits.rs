//! Numeral normalization for text that arrives from OCR, extraction
//! services or Persian keyboards.

use std::borrow::Cow;

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

fn to_ascii_digit(c: char) -> Option<char> {
    let offset = match c {
        '\u{06F0}'..='\u{06F9}' => u32::from(c) - PERSIAN_ZERO,
        '\u{0660}'..='\u{0669}' => u32::from(c) - ARABIC_INDIC_ZERO,
        _ => return None,
    };
    char::from_digit(offset, 10)
}

/// Replaces Persian and Arabic-Indic digits with ASCII digits.
///
/// Borrows the input when it contains no such digits.
pub fn normalize_digits(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| to_ascii_digit(c).is_some()) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .map(|c| to_ascii_digit(c).unwrap_or(c))
            .collect(),
    )
}

/// Replaces ASCII digits with Persian digits, for display.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| char::from_u32(PERSIAN_ZERO + d))
                .unwrap_or(c)
        })
        .collect()
}
