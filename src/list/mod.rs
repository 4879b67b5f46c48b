//! An arena-backed doubly linked list.

mod iterators;
mod piece_list;

pub use iterators::{Iter, Nodes};
pub use piece_list::{NodeId, PieceList};

use crate::Result;

/// An ordered container addressed by position.
///
/// Index-based mutations don't shift the elements between the mutation point
/// and the tail, and `forward` and `backward` always start a fresh traversal.
pub trait Collection<T> {
    type Forward<'a>: Iterator<Item = (usize, &'a T)>
    where
        Self: 'a,
        T: 'a;

    type Backward<'a>: Iterator<Item = (usize, &'a T)>
    where
        Self: 'a,
        T: 'a;

    fn append(&mut self, value: T);

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Fails if `index` is greater than the length of the collection.
    fn insert_at(&mut self, value: T, index: usize) -> Result<()>;

    /// Removes and returns the value at position `index`.
    ///
    /// Fails if `index` is not less than the length of the collection.
    fn delete_at(&mut self, index: usize) -> Result<T>;

    fn get_at(&self, index: usize) -> Result<&T>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates from head to tail, yielding each value with its index.
    fn forward(&self) -> Self::Forward<'_>;

    /// Iterates from tail to head, yielding each value with its index.
    fn backward(&self) -> Self::Backward<'_>;
}
