//! Mapping rune positions to the pieces that own them.
//!
//! Both lookups pick their scan direction by comparing the position with
//! half of the document's rune length, then accumulate the document offsets
//! of each piece until the position falls inside one. Runes are converted to
//! bytes only within the pieces that contain the queried offsets.

use super::PieceTable;
use crate::list::NodeId;
use crate::{Error, Result, utf8};

/// The pieces intersecting a queried range, together with the document
/// offsets needed to edit or read them.
///
/// Holds handles into the table's piece list: it must be consumed before the
/// next mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FoundPieces {
    /// The intersecting pieces, in document order.
    pub(super) pieces: Vec<NodeId>,

    /// The index of the first piece in the piece list.
    pub(super) first_index: usize,

    /// The rune offset in the document where the first piece starts.
    pub(super) rune_start: usize,

    /// The byte offset in the document where the first piece starts.
    pub(super) byte_start: usize,

    /// The rune offset in the document where the last piece ends.
    pub(super) rune_end: usize,

    /// The byte offset in the document where the last piece ends.
    pub(super) byte_end: usize,

    /// The byte offset in the document of the queried position.
    pub(super) byte_position: usize,

    /// The byte length of the queried range, which is usually shorter than
    /// the combined length of the pieces.
    pub(super) byte_len: usize,
}

impl PieceTable {
    /// Finds the piece containing the rune `position`.
    ///
    /// A position sitting on the boundary between two pieces belongs to the
    /// piece that ends there, except `0` which belongs to the first piece.
    /// The end of the document resolves to the last piece. The result is
    /// empty if the document is empty.
    pub(super) fn find_piece(&self, position: usize) -> Result<FoundPieces> {
        if position > self.rune_len {
            return Err(Error::OffsetOutOfBounds {
                offset: position,
                len: self.rune_len,
            });
        }

        if self.pieces.is_empty() {
            return Ok(FoundPieces::default());
        }

        let mut found = FoundPieces::default();

        if position < self.rune_len / 2 {
            let (mut rune_start, mut byte_start) = (0, 0);

            for (idx, id, piece) in self.pieces.nodes() {
                let rune_end = rune_start + piece.rune_len();
                let byte_end = byte_start + piece.byte_len();

                if position <= rune_end {
                    found = FoundPieces {
                        pieces: vec![id],
                        first_index: idx,
                        rune_start,
                        byte_start,
                        rune_end,
                        byte_end,
                        ..found
                    };
                    break;
                }

                rune_start = rune_end;
                byte_start = byte_end;
            }
        } else {
            let (mut rune_end, mut byte_end) = (self.rune_len, self.byte_len);

            for (idx, id, piece) in self.pieces.nodes().rev() {
                let rune_start = rune_end - piece.rune_len();
                let byte_start = byte_end - piece.byte_len();

                if rune_start < position || idx == 0 {
                    found = FoundPieces {
                        pieces: vec![id],
                        first_index: idx,
                        rune_start,
                        byte_start,
                        rune_end,
                        byte_end,
                        ..found
                    };
                    break;
                }

                rune_end = rune_start;
                byte_end = byte_start;
            }
        }

        let Some(&id) = found.pieces.first() else {
            return Err(Error::inconsistency(
                "no piece contains an in-bounds position",
            ));
        };

        let text = self.piece_text(&self.pieces[id]);
        found.byte_position = found.byte_start
            + utf8::byte_of_rune(text, position - found.rune_start);

        Ok(found)
    }

    /// Finds the pieces intersecting the rune range
    /// `position..position + length`.
    ///
    /// A zero `length` falls back to [`find_piece`](Self::find_piece).
    pub(super) fn find_pieces(
        &self,
        position: usize,
        length: usize,
    ) -> Result<FoundPieces> {
        if position > self.rune_len {
            return Err(Error::OffsetOutOfBounds {
                offset: position,
                len: self.rune_len,
            });
        }

        let end = match position.checked_add(length) {
            Some(end) if end <= self.rune_len => end,
            _ => {
                return Err(Error::RangeOutOfBounds {
                    end: position.saturating_add(length),
                    len: self.rune_len,
                });
            },
        };

        if length == 0 {
            return self.find_piece(position);
        }

        let mut found = FoundPieces::default();
        let mut complete = false;

        if position < self.rune_len / 2 {
            let (mut rune_start, mut byte_start) = (0, 0);

            for (idx, id, piece) in self.pieces.nodes() {
                let rune_end = rune_start + piece.rune_len();
                let byte_end = byte_start + piece.byte_len();

                if rune_end > position {
                    if found.pieces.is_empty() {
                        found.first_index = idx;
                        found.rune_start = rune_start;
                        found.byte_start = byte_start;
                    }

                    found.pieces.push(id);

                    if rune_end >= end {
                        found.rune_end = rune_end;
                        found.byte_end = byte_end;
                        complete = true;
                        break;
                    }
                }

                rune_start = rune_end;
                byte_start = byte_end;
            }
        } else {
            let (mut rune_end, mut byte_end) = (self.rune_len, self.byte_len);

            for (idx, id, piece) in self.pieces.nodes().rev() {
                let rune_start = rune_end - piece.rune_len();
                let byte_start = byte_end - piece.byte_len();

                if rune_start < end {
                    if found.pieces.is_empty() {
                        found.rune_end = rune_end;
                        found.byte_end = byte_end;
                    }

                    found.pieces.push(id);

                    if rune_start <= position {
                        found.first_index = idx;
                        found.rune_start = rune_start;
                        found.byte_start = byte_start;
                        complete = true;
                        break;
                    }
                }

                rune_end = rune_start;
                byte_end = byte_start;
            }

            // The backward scan collects the pieces tail first.
            found.pieces.reverse();
        }

        let (Some(&first), Some(&last), true) =
            (found.pieces.first(), found.pieces.last(), complete)
        else {
            return Err(Error::inconsistency(
                "the pieces don't cover an in-bounds range",
            ));
        };

        let first_text = self.piece_text(&self.pieces[first]);
        found.byte_position = found.byte_start
            + utf8::byte_of_rune(first_text, position - found.rune_start);

        let last = &self.pieces[last];
        let last_rune_start = found.rune_end - last.rune_len();
        let last_byte_start = found.byte_end - last.byte_len();
        let byte_end_position = last_byte_start
            + utf8::byte_of_rune(self.piece_text(last), end - last_rune_start);

        found.byte_len = byte_end_position - found.byte_position;

        Ok(found)
    }
}
