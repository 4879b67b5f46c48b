use super::PieceTable;

/// An incremental [`PieceTable`] builder.
///
/// The text appended to the builder becomes the table's original buffer.
#[derive(Debug, Clone, Default)]
pub struct PieceTableBuilder {
    original: String,
    add_capacity: usize,
}

impl PieceTableBuilder {
    /// Reserves room for `bytes` bytes of inserted text up front.
    #[inline]
    pub fn add_capacity(&mut self, bytes: usize) -> &mut Self {
        self.add_capacity = bytes;
        self
    }

    /// Appends `text` to the end of the original content.
    #[inline]
    pub fn append<T>(&mut self, text: T) -> &mut Self
    where
        T: AsRef<str>,
    {
        self.original.push_str(text.as_ref());
        self
    }

    /// Completes the build, consuming the `PieceTableBuilder` and returning
    /// the `PieceTable`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use piece_table::{PieceTable, PieceTableBuilder};
    /// #
    /// let mut builder = PieceTableBuilder::new();
    ///
    /// builder.append("ƒoo\n").append("bär\r\n").append("baz");
    ///
    /// let table: PieceTable = builder.build();
    ///
    /// assert_eq!(table, "ƒoo\nbär\r\nbaz");
    /// assert_eq!(1, table.piece_count());
    /// ```
    #[inline]
    pub fn build(self) -> PieceTable {
        PieceTable::from_buffers(
            self.original,
            String::with_capacity(self.add_capacity),
        )
    }

    /// Creates a new `PieceTableBuilder`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}
