use core::ops::Range;

/// The backing buffer a [`Piece`] slices into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// The immutable buffer holding the table's initial content.
    Original,

    /// The append-only buffer holding every string inserted since.
    Add,
}

/// A span of one of the two backing buffers of a
/// [`PieceTable`](crate::PieceTable).
///
/// Both the byte range and the rune range are relative to the start of the
/// buffer, not to the start of the document. The byte range never splits a
/// codepoint, and the rune range always covers exactly the codepoints in the
/// byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    buffer: BufferKind,
    byte_start: usize,
    byte_len: usize,
    rune_start: usize,
    rune_len: usize,
}

impl Piece {
    #[inline]
    pub fn buffer(&self) -> BufferKind {
        self.buffer
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// The byte range of this piece inside its buffer.
    #[inline]
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_start + self.byte_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.byte_len == 0
    }

    #[inline]
    pub fn is_original(&self) -> bool {
        self.buffer == BufferKind::Original
    }

    #[inline]
    pub fn rune_len(&self) -> usize {
        self.rune_len
    }

    /// The rune range of this piece inside its buffer.
    #[inline]
    pub fn rune_range(&self) -> Range<usize> {
        self.rune_start..self.rune_start + self.rune_len
    }

    /// Drops the first `bytes`/`runes` of the piece.
    #[inline]
    pub(super) fn advance(&mut self, bytes: usize, runes: usize) {
        debug_assert!(bytes <= self.byte_len && runes <= self.rune_len);
        debug_assert_eq!(bytes == self.byte_len, runes == self.rune_len);
        self.byte_start += bytes;
        self.byte_len -= bytes;
        self.rune_start += runes;
        self.rune_len -= runes;
    }

    /// Returns whether the piece's buffer span ends exactly at `byte_offset`
    /// of the add buffer.
    #[inline]
    pub(super) fn ends_at_add(&self, byte_offset: usize) -> bool {
        self.buffer == BufferKind::Add
            && self.byte_start + self.byte_len == byte_offset
    }

    /// Grows the piece to cover the next `bytes`/`runes` of its buffer.
    #[inline]
    pub(super) fn extend(&mut self, bytes: usize, runes: usize) {
        self.byte_len += bytes;
        self.rune_len += runes;
    }

    #[inline]
    pub(super) fn new(
        buffer: BufferKind,
        byte_start: usize,
        byte_len: usize,
        rune_start: usize,
        rune_len: usize,
    ) -> Self {
        debug_assert_eq!(byte_len == 0, rune_len == 0);
        Self { buffer, byte_start, byte_len, rune_start, rune_len }
    }

    /// Keeps the first `bytes`/`runes` of the piece, returning a new piece
    /// for the rest.
    #[inline]
    pub(super) fn split_off(&mut self, bytes: usize, runes: usize) -> Self {
        let mut right = *self;
        right.advance(bytes, runes);
        self.truncate(bytes, runes);
        right
    }

    /// Keeps the first `bytes`/`runes` of the piece.
    #[inline]
    pub(super) fn truncate(&mut self, bytes: usize, runes: usize) {
        debug_assert!(bytes <= self.byte_len && runes <= self.rune_len);
        debug_assert_eq!(bytes == 0, runes == 0);
        self.byte_len = bytes;
        self.rune_len = runes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "aç日" in some buffer, starting at byte 4 / rune 2.
    fn piece() -> Piece {
        Piece::new(BufferKind::Add, 4, 6, 2, 3)
    }

    #[test]
    fn ranges() {
        let p = piece();
        assert_eq!(4..10, p.byte_range());
        assert_eq!(2..5, p.rune_range());
        assert!(!p.is_original());
        assert!(!p.is_empty());
    }

    #[test]
    fn split_off_keeps_continuity() {
        let mut left = piece();
        let right = left.split_off(3, 2);

        assert_eq!(4..7, left.byte_range());
        assert_eq!(2..4, left.rune_range());
        assert_eq!(7..10, right.byte_range());
        assert_eq!(4..5, right.rune_range());
        assert_eq!(left.buffer(), right.buffer());
    }

    #[test]
    fn advance_to_empty() {
        let mut p = piece();
        p.advance(6, 3);
        assert!(p.is_empty());
        assert_eq!(0, p.rune_len());
        assert_eq!(10..10, p.byte_range());
    }

    #[test]
    fn ends_at_add() {
        let p = piece();
        assert!(p.ends_at_add(10));
        assert!(!p.ends_at_add(9));

        let original = Piece::new(BufferKind::Original, 0, 10, 0, 10);
        assert!(!original.ends_at_add(10));
    }

    #[test]
    fn extend() {
        let mut p = piece();
        p.extend(4, 1);
        assert_eq!(4..14, p.byte_range());
        assert_eq!(2..6, p.rune_range());
    }
}
