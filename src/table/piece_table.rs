use core::fmt;

use super::iterators::{Chars, Chunks, Pieces, Runes};
use super::piece::{BufferKind, Piece};
use super::utils::{chunks_eq_chunks, chunks_eq_str, debug_chunks};
use crate::list::PieceList;
use crate::{Error, Result, utf8};

/// A UTF-8 text buffer stored as a sequence of pieces referencing two
/// append-only buffers.
///
/// Every position and length taken or returned by its methods is measured in
/// Unicode scalar values ("runes"), unless the method name says otherwise.
#[derive(Clone, Default)]
pub struct PieceTable {
    pub(super) original: String,
    pub(super) add: String,
    pub(super) add_rune_len: usize,
    pub(super) pieces: PieceList<Piece>,
    pub(super) byte_len: usize,
    pub(super) rune_len: usize,
}

impl PieceTable {
    /// Checks the piece bookkeeping against the contents of the buffers,
    /// panicking if anything is off.
    ///
    /// This walks the whole table and is meant to be used in tests.
    #[track_caller]
    #[inline]
    pub fn assert_invariants(&self) {
        self.pieces.assert_invariants();

        let (mut byte_len, mut rune_len) = (0, 0);

        for piece in self.pieces() {
            assert!(!piece.is_empty(), "empty piece: {piece:?}");

            let buffer = self.buffer(piece.buffer());
            let range = piece.byte_range();

            assert!(range.end <= buffer.len(), "{piece:?} out of its buffer");
            assert!(buffer.is_char_boundary(range.start), "{piece:?}");
            assert!(buffer.is_char_boundary(range.end), "{piece:?}");

            assert_eq!(
                utf8::count(&buffer[range.clone()]),
                piece.rune_len(),
                "{piece:?}"
            );

            assert_eq!(
                utf8::count(&buffer[..range.start]),
                piece.rune_range().start,
                "{piece:?}"
            );

            byte_len += piece.byte_len();
            rune_len += piece.rune_len();
        }

        assert_eq!(byte_len, self.byte_len);
        assert_eq!(rune_len, self.rune_len);
        assert_eq!(utf8::count(&self.add), self.add_rune_len);
    }

    /// Returns the byte offset in the document of the rune at `position`.
    ///
    /// The end of the document maps to [`byte_len`](Self::byte_len()).
    #[inline]
    pub fn byte_of_rune(&self, position: usize) -> Result<usize> {
        self.find_piece(position).map(|found| found.byte_position)
    }

    /// Returns the byte length of the document.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Returns an iterator over the `char`s of the document.
    #[inline]
    pub fn chars(&self) -> Chars<'_> {
        Chars::from(self)
    }

    /// Returns an iterator over the text of each piece, in document order.
    #[inline]
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks::from(self)
    }

    /// Creates a table from a byte vector, failing if it isn't valid UTF-8.
    #[inline]
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self> {
        String::from_utf8(bytes)
            .map(Self::from)
            .map_err(|err| Error::from(err.utf8_error()))
    }

    /// Returns the rune at `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use piece_table::PieceTable;
    /// let table = PieceTable::from("çğ日本語");
    /// assert_eq!(Ok('日'), table.get_at(2));
    /// assert!(table.get_at(5).is_err());
    /// ```
    #[inline]
    pub fn get_at(&self, position: usize) -> Result<char> {
        if position >= self.rune_len {
            return Err(Error::OffsetOutOfBounds {
                offset: position,
                len: self.rune_len,
            });
        }

        let (sequence, _) = self.get_sequence(position, 1)?;

        utf8::decode(&sequence, 0).map(|(ch, _)| ch).ok_or_else(|| {
            Error::inconsistency("an in-bounds rune resolved to no text")
        })
    }

    /// Returns the text in the rune range `position..position + length`,
    /// together with the rune offset in the document where the first piece
    /// covering that range starts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use piece_table::PieceTable;
    /// let mut table = PieceTable::from("hello world");
    /// table.insert(5, " there").unwrap();
    ///
    /// let (text, piece_start) = table.get_sequence(3, 6).unwrap();
    /// assert_eq!("lo the", text);
    /// assert_eq!(0, piece_start);
    /// ```
    pub fn get_sequence(
        &self,
        position: usize,
        length: usize,
    ) -> Result<(String, usize)> {
        let found = self.find_pieces(position, length)?;

        let mut sequence = String::with_capacity(found.byte_len);

        if length > 0 {
            let from = found.byte_position;
            let to = from + found.byte_len;
            let mut piece_start = found.byte_start;

            for &id in &found.pieces {
                let piece = &self.pieces[id];
                let text = self.piece_text(piece);
                let start = from.saturating_sub(piece_start).min(text.len());
                let end = to.saturating_sub(piece_start).min(text.len());
                sequence.push_str(&text[start..end]);
                piece_start += piece.byte_len();
            }
        }

        if sequence.len() != found.byte_len {
            return Err(Error::inconsistency(
                "the pieces yielded a different number of bytes than resolved",
            ));
        }

        Ok((sequence, found.rune_start))
    }

    /// Returns `true` if the document contains no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rune_len == 0
    }

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of pieces the document is currently made of.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Returns an iterator over the pieces of the document, in order.
    #[inline]
    pub fn pieces(&self) -> Pieces<'_> {
        Pieces::from(self)
    }

    /// Returns the rune length of the document.
    #[inline]
    pub fn rune_len(&self) -> usize {
        self.rune_len
    }

    /// Returns an iterator over the `(position, char)` pairs of the
    /// document.
    ///
    /// Every call starts from the beginning of the document.
    #[inline]
    pub fn runes(&self) -> Runes<'_> {
        Runes::from(self)
    }

    #[inline]
    pub(super) fn buffer(&self, kind: BufferKind) -> &str {
        match kind {
            BufferKind::Original => &self.original,
            BufferKind::Add => &self.add,
        }
    }

    #[inline]
    pub(super) fn from_buffers(original: String, add: String) -> Self {
        let byte_len = original.len();
        let rune_len = utf8::count(&original);

        let mut pieces = PieceList::new();

        if byte_len > 0 {
            pieces.push_back(Piece::new(
                BufferKind::Original,
                0,
                byte_len,
                0,
                rune_len,
            ));
        }

        Self { original, add, add_rune_len: 0, pieces, byte_len, rune_len }
    }

    /// Returns the text a piece refers to.
    #[inline]
    pub(super) fn piece_text(&self, piece: &Piece) -> &str {
        &self.buffer(piece.buffer())[piece.byte_range()]
    }
}

impl fmt::Debug for PieceTable {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PieceTable(\"")?;
        debug_chunks(self.chunks(), f)?;
        f.write_str("\")")
    }
}

impl fmt::Display for PieceTable {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for PieceTable {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from_buffers(s.to_owned(), String::new())
    }
}

impl From<String> for PieceTable {
    #[inline]
    fn from(s: String) -> Self {
        Self::from_buffers(s, String::new())
    }
}

impl PartialEq<PieceTable> for PieceTable {
    #[inline]
    fn eq(&self, rhs: &PieceTable) -> bool {
        self.byte_len == rhs.byte_len
            && chunks_eq_chunks(self.chunks(), rhs.chunks())
    }
}

impl Eq for PieceTable {}

impl PartialEq<str> for PieceTable {
    #[inline]
    fn eq(&self, rhs: &str) -> bool {
        self.byte_len == rhs.len() && chunks_eq_str(self.chunks(), rhs)
    }
}

impl PartialEq<PieceTable> for str {
    #[inline]
    fn eq(&self, rhs: &PieceTable) -> bool {
        rhs == self
    }
}

impl<'a> PartialEq<&'a str> for PieceTable {
    #[inline]
    fn eq(&self, rhs: &&'a str) -> bool {
        self == *rhs
    }
}

impl<'a> PartialEq<PieceTable> for &'a str {
    #[inline]
    fn eq(&self, rhs: &PieceTable) -> bool {
        rhs == *self
    }
}

impl PartialEq<String> for PieceTable {
    #[inline]
    fn eq(&self, rhs: &String) -> bool {
        self == rhs.as_str()
    }
}

impl PartialEq<PieceTable> for String {
    #[inline]
    fn eq(&self, rhs: &PieceTable) -> bool {
        rhs == self.as_str()
    }
}
