use core::iter::FusedIterator;
use core::str;

use super::{Piece, PieceTable};
use crate::list::Iter;

/// An iterator over the pieces of a [`PieceTable`].
///
/// This struct is created by the [`pieces`](PieceTable::pieces()) method on
/// [`PieceTable`].
#[derive(Clone)]
pub struct Pieces<'a> {
    iter: Iter<'a, Piece>,
}

impl<'a> From<&'a PieceTable> for Pieces<'a> {
    #[inline]
    fn from(table: &'a PieceTable) -> Self {
        Self { iter: table.pieces.iter() }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = &'a Piece;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, piece)| piece)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Pieces<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, piece)| piece)
    }
}

impl ExactSizeIterator for Pieces<'_> {}

impl FusedIterator for Pieces<'_> {}

/// An iterator over the text referenced by each piece of a [`PieceTable`].
///
/// This struct is created by the [`chunks`](PieceTable::chunks()) method on
/// [`PieceTable`]. The chunks are never empty.
#[derive(Clone)]
pub struct Chunks<'a> {
    table: &'a PieceTable,
    pieces: Pieces<'a>,
}

impl<'a> From<&'a PieceTable> for Chunks<'a> {
    #[inline]
    fn from(table: &'a PieceTable) -> Self {
        Self { table, pieces: table.pieces() }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        self.pieces.next().map(|piece| table.piece_text(piece))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pieces.size_hint()
    }
}

impl DoubleEndedIterator for Chunks<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let table = self.table;
        self.pieces.next_back().map(|piece| table.piece_text(piece))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl FusedIterator for Chunks<'_> {}

/// An iterator over the `char`s of a [`PieceTable`].
///
/// This struct is created by the [`chars`](PieceTable::chars()) method on
/// [`PieceTable`].
#[derive(Clone)]
pub struct Chars<'a> {
    chunks: Chunks<'a>,

    /// The chunk currently being yielded by `next`.
    forward: str::Chars<'a>,

    /// The chunk currently being yielded by `next_back`.
    backward: str::Chars<'a>,

    /// The number of chars yet to be yielded from either end.
    remaining: usize,
}

impl<'a> From<&'a PieceTable> for Chars<'a> {
    #[inline]
    fn from(table: &'a PieceTable) -> Self {
        Self {
            chunks: table.chunks(),
            forward: "".chars(),
            backward: "".chars(),
            remaining: table.rune_len(),
        }
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(ch) = self.forward.next() {
                self.remaining -= 1;
                return Some(ch);
            }

            match self.chunks.next() {
                Some(chunk) => self.forward = chunk.chars(),

                // The chunks are exhausted but the backward chunk may still
                // have chars that haven't been yielded.
                None => {
                    let ch = self.backward.next()?;
                    self.remaining -= 1;
                    return Some(ch);
                },
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Chars<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(ch) = self.backward.next_back() {
                self.remaining -= 1;
                return Some(ch);
            }

            match self.chunks.next_back() {
                Some(chunk) => self.backward = chunk.chars(),

                // Same as above.
                None => {
                    let ch = self.forward.next_back()?;
                    self.remaining -= 1;
                    return Some(ch);
                },
            }
        }
    }
}

impl ExactSizeIterator for Chars<'_> {}

impl FusedIterator for Chars<'_> {}

/// An iterator over the `(position, char)` pairs of a [`PieceTable`].
///
/// This struct is created by the [`runes`](PieceTable::runes()) method on
/// [`PieceTable`].
#[derive(Clone)]
pub struct Runes<'a> {
    chars: Chars<'a>,
    position: usize,
}

impl<'a> From<&'a PieceTable> for Runes<'a> {
    #[inline]
    fn from(table: &'a PieceTable) -> Self {
        Self { chars: table.chars(), position: 0 }
    }
}

impl Iterator for Runes<'_> {
    type Item = (usize, char);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        let position = self.position;
        self.position += 1;
        Some((position, ch))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl ExactSizeIterator for Runes<'_> {}

impl FusedIterator for Runes<'_> {}
