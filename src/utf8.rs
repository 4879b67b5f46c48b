//! Conversions between codepoint offsets and byte offsets.
//!
//! Every place in the crate that needs to go from runes to bytes (or count
//! the runes in a string) goes through the functions in this module, so that
//! the two position spaces are always reconciled the same way.

use str_indices::chars;

/// Returns the number of Unicode scalar values in `s`.
#[inline]
pub(crate) fn count(s: &str) -> usize {
    chars::count(s)
}

/// Returns the byte offset of the `rune_offset`-th codepoint of `s`.
///
/// Offsets equal to or past the number of codepoints in `s` are clipped to
/// `s.len()`.
#[inline]
pub(crate) fn byte_of_rune(s: &str, rune_offset: usize) -> usize {
    let byte_offset = chars::to_byte_idx(s, rune_offset);
    debug_assert!(s.is_char_boundary(byte_offset));
    byte_offset
}

/// Decodes the codepoint starting at `byte_offset`, returning it together
/// with its width in bytes.
///
/// Returns `None` if `byte_offset` is at or past the end of `s` or if it's
/// not a char boundary.
#[inline]
pub(crate) fn decode(s: &str, byte_offset: usize) -> Option<(char, usize)> {
    if !s.is_char_boundary(byte_offset) {
        return None;
    }
    let ch = s[byte_offset..].chars().next()?;
    Some((ch, ch.len_utf8()))
}
