//! Character classification helpers used by the scanner.

/// Sentinel returned by the lookahead primitives at end of input.
pub const NULL_CHARACTER: char = '\0';

/// Check if a character is a decimal digit, `'0'..='9'` exactly.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier (ASCII letter or `_`).
#[inline]
pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_alpha_numeric(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}

/// Check if a character is whitespace that does not advance the line
/// counter. `\n` is handled by the dispatch loop itself.
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(ch, ' ' | '\r' | '\t')
}
