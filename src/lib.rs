//! A text buffer that stores an editable document as a sequence of pieces
//! referencing two append-only buffers.
//!
//! Positions are expressed in Unicode scalar values ("runes"), while the
//! buffers are sliced by byte offsets; the [`PieceTable`] keeps the two in
//! sync on every edit.
//!
//! ```
//! # use piece_table::PieceTable;
//! let mut table = PieceTable::from("çğ日本語");
//!
//! table.insert(2, "→").unwrap();
//! assert_eq!(table, "çğ→日本語");
//!
//! table.delete(0, 2).unwrap();
//! assert_eq!(table, "→日本語");
//! assert_eq!(Ok('本'), table.get_at(2));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod list;
mod table;
mod utf8;

pub use error::{Error, ErrorKind, Result};
pub use list::{Collection, Iter, NodeId, Nodes, PieceList};
pub use table::{
    BufferKind,
    Chars,
    Chunks,
    Piece,
    PieceTable,
    PieceTableBuilder,
    Pieces,
    Runes,
};
