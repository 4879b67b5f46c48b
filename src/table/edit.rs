use super::PieceTable;
use super::piece::{BufferKind, Piece};
use crate::list::NodeId;
use crate::{Error, Result, utf8};

impl PieceTable {
    /// Inserts `text` at the rune offset `position`, returning the number of
    /// runes inserted.
    ///
    /// Inserting right after the text of the previous insertion extends the
    /// piece created by it instead of adding a new one, so typing a word one
    /// character at a time only grows a single piece.
    ///
    /// # Examples
    ///
    /// ```
    /// # use piece_table::PieceTable;
    /// let mut table = PieceTable::from("ab");
    ///
    /// assert_eq!(Ok(1), table.insert(1, "X"));
    /// assert_eq!(Ok(1), table.insert(2, "Y"));
    ///
    /// assert_eq!("aXYb", table);
    /// assert_eq!(3, table.piece_count());
    /// ```
    pub fn insert(&mut self, position: usize, text: &str) -> Result<usize> {
        if text.is_empty() {
            return Err(Error::EmptyInsert);
        }

        let found = self.find_piece(position)?;

        let byte_len = text.len();
        let rune_len = utf8::count(text);
        let add_tail = self.add.len();

        let piece = Piece::new(
            BufferKind::Add,
            add_tail,
            byte_len,
            self.add_rune_len,
            rune_len,
        );

        self.add.push_str(text);
        self.add_rune_len += rune_len;

        match found.pieces.first() {
            None => {
                self.pieces.push_back(piece);
            },

            Some(&id)
                if position == found.rune_end
                    && self.pieces[id].ends_at_add(add_tail) =>
            {
                self.pieces[id].extend(byte_len, rune_len);
                tracing::debug!(position, rune_len, "extended typing run");
            },

            Some(_) if position == 0 => {
                self.pieces.push_front(piece);
            },

            Some(_) if position == self.rune_len => {
                self.pieces.push_back(piece);
            },

            Some(&id) if position == found.rune_start => {
                self.pieces.insert_before(id, piece);
            },

            Some(&id) if position == found.rune_end => {
                self.pieces.insert_after(id, piece);
            },

            Some(&id) => {
                let right = self.pieces[id].split_off(
                    found.byte_position - found.byte_start,
                    position - found.rune_start,
                );
                let new = self.pieces.insert_after(id, piece);
                self.pieces.insert_after(new, right);
            },
        }

        self.byte_len += byte_len;
        self.rune_len += rune_len;

        tracing::trace!(
            position,
            rune_len,
            piece_index = found.first_index,
            pieces = self.pieces.len(),
            "inserted"
        );

        Ok(rune_len)
    }

    /// Deletes the `length` runes starting at the rune offset `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use piece_table::PieceTable;
    /// let mut table = PieceTable::from("hello world");
    /// table.delete(5, 6).unwrap();
    /// assert_eq!("hello", table);
    /// ```
    pub fn delete(&mut self, position: usize, length: usize) -> Result<()> {
        if length == 0 {
            return Err(Error::EmptyDelete);
        }

        let found = self.find_pieces(position, length)?;

        let end = position + length;
        let byte_end_position = found.byte_position + found.byte_len;

        match *found.pieces.as_slice() {
            [] => {
                return Err(Error::inconsistency(
                    "no piece intersects a non-empty range",
                ));
            },

            [id] => {
                let keep_bytes = found.byte_position - found.byte_start;
                let keep_runes = position - found.rune_start;
                let skip_bytes = byte_end_position - found.byte_start;
                let skip_runes = end - found.rune_start;

                if keep_runes > 0 && end < found.rune_end {
                    let mut right =
                        self.pieces[id].split_off(keep_bytes, keep_runes);
                    right.advance(
                        skip_bytes - keep_bytes,
                        skip_runes - keep_runes,
                    );
                    self.pieces.insert_after(id, right);
                } else if keep_runes == 0 {
                    self.pieces[id].advance(skip_bytes, skip_runes);
                } else {
                    self.pieces[id].truncate(keep_bytes, keep_runes);
                }

                self.remove_if_empty(id);
            },

            [first, ref interior @ .., last] => {
                self.pieces[first].truncate(
                    found.byte_position - found.byte_start,
                    position - found.rune_start,
                );
                self.remove_if_empty(first);

                for &id in interior {
                    self.pieces.remove(id);
                }

                let last_piece = &mut self.pieces[last];
                let last_rune_start = found.rune_end - last_piece.rune_len();
                let last_byte_start = found.byte_end - last_piece.byte_len();
                last_piece.advance(
                    byte_end_position - last_byte_start,
                    end - last_rune_start,
                );
                self.remove_if_empty(last);
            },
        }

        self.byte_len -= found.byte_len;
        self.rune_len -= length;

        tracing::trace!(
            position,
            length,
            piece_index = found.first_index,
            pieces = self.pieces.len(),
            "deleted"
        );

        Ok(())
    }

    #[inline]
    fn remove_if_empty(&mut self, id: NodeId) {
        if self.pieces[id].is_empty() {
            self.pieces.remove(id);
        }
    }
}
