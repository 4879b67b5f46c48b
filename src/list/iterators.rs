use core::iter::FusedIterator;

use super::{NodeId, PieceList};

/// An iterator over the `(index, handle, value)` triples of a [`PieceList`].
///
/// This struct is created by the [`nodes`](PieceList::nodes()) method on
/// [`PieceList`]. It can be consumed from both ends.
pub struct Nodes<'a, T> {
    list: &'a PieceList<T>,

    /// The next node to yield when going forward.
    front: Option<NodeId>,

    /// The next node to yield when going backward.
    back: Option<NodeId>,

    /// The index of `front`.
    front_idx: usize,

    /// One past the index of `back`.
    back_idx: usize,
}

impl<T> Clone for Nodes<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Nodes<'a, T> {
    #[inline]
    pub(super) fn new(
        list: &'a PieceList<T>,
        front: Option<NodeId>,
        back: Option<NodeId>,
        len: usize,
    ) -> Self {
        Self { list, front, back, front_idx: 0, back_idx: len }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = (usize, NodeId, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front_idx == self.back_idx {
            return None;
        }

        let list = self.list;
        let id = self.front?;
        self.front = list.next(id);
        let idx = self.front_idx;
        self.front_idx += 1;
        Some((idx, id, &list[id]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.back_idx - self.front_idx;
        (exact, Some(exact))
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front_idx == self.back_idx {
            return None;
        }

        let list = self.list;
        let id = self.back?;
        self.back = list.prev(id);
        self.back_idx -= 1;
        Some((self.back_idx, id, &list[id]))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

impl<T> FusedIterator for Nodes<'_, T> {}

/// An iterator over the `(index, value)` pairs of a [`PieceList`].
///
/// This struct is created by the [`iter`](PieceList::iter()) method on
/// [`PieceList`], and backs its [`forward`](super::Collection::forward()) and
/// [`backward`](super::Collection::backward()) traversals.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { nodes: self.nodes.clone() }
    }
}

impl<'a, T> From<Nodes<'a, T>> for Iter<'a, T> {
    #[inline]
    fn from(nodes: Nodes<'a, T>) -> Self {
        Self { nodes }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|(idx, _, value)| (idx, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.nodes.next_back().map(|(idx, _, value)| (idx, value))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
