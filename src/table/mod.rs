//! A piece table built on top of a [`PieceList`](crate::PieceList).

mod builder;
mod edit;
mod iterators;
mod piece;
mod piece_table;
mod resolver;
#[cfg(feature = "serde")]
mod serde;
mod utils;

pub use builder::PieceTableBuilder;
pub use iterators::{Chars, Chunks, Pieces, Runes};
pub use piece::{BufferKind, Piece};
pub use piece_table::PieceTable;
