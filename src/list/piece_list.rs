use core::fmt;
use core::ops::{Index, IndexMut};

use super::{Collection, Iter, Nodes};
use crate::{Error, Result};

/// A handle to a node of a [`PieceList`].
///
/// Handles stay valid until the node they point to is removed, no matter how
/// many other nodes are inserted or removed in the meantime. Using a handle
/// after its node has been removed is a bug: the slot may have been reused by
/// a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// A doubly linked list whose nodes are allocated from a `Vec` arena and
/// linked by [`NodeId`]s instead of pointers.
///
/// Splicing a value in or out next to a known node is O(1) and never moves
/// the other values. Slots vacated by removals are kept in a free list and
/// reused by later insertions.
#[derive(Clone)]
pub struct PieceList<T> {
    slots: Vec<Slot<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    free: Option<usize>,
    len: usize,
}

impl<T> Default for PieceList<T> {
    #[inline]
    fn default() -> Self {
        Self { slots: Vec::new(), head: None, tail: None, free: None, len: 0 }
    }
}

impl<T: fmt::Debug> fmt::Debug for PieceList<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|(_, value)| value)).finish()
    }
}

impl<T> Index<NodeId> for PieceList<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.node(id).value
    }
}

impl<T> IndexMut<NodeId> for PieceList<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.node_mut(id).value
    }
}

impl<T> PieceList<T> {
    #[track_caller]
    #[inline]
    pub fn assert_invariants(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut current = self.head;

        while let Some(id) = current {
            let node = self.node(id);
            assert_eq!(node.prev, prev, "broken prev link at {id:?}");
            prev = Some(id);
            current = node.next;
            count += 1;
        }

        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len);

        let mut free = 0;
        let mut current = self.free;

        while let Some(idx) = current {
            match &self.slots[idx] {
                Slot::Vacant { next_free } => current = *next_free,
                Slot::Occupied(_) => panic!("slot {idx} is both used and free"),
            }
            free += 1;
        }

        assert_eq!(free + self.len, self.slots.len());
    }

    /// Returns a handle to the value at position `index`, walking from
    /// whichever end of the list is closer.
    #[inline]
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut id = self.head?;
            for _ in 0..index {
                id = self.next(id)?;
            }
            Some(id)
        } else {
            let mut id = self.tail?;
            for _ in index + 1..self.len {
                id = self.prev(id)?;
            }
            Some(id)
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(&node.value),
            _ => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(&mut node.value),
            _ => None,
        }
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Inserts `value` right after the node `id`, returning the new node's
    /// handle.
    #[inline]
    pub fn insert_after(&mut self, id: NodeId, value: T) -> NodeId {
        let next = self.node(id).next;
        let new = self.alloc(Node { value, prev: Some(id), next });
        self.node_mut(id).next = Some(new);
        match next {
            Some(next) => self.node_mut(next).prev = Some(new),
            None => self.tail = Some(new),
        }
        new
    }

    /// Inserts `value` right before the node `id`, returning the new node's
    /// handle.
    #[inline]
    pub fn insert_before(&mut self, id: NodeId, value: T) -> NodeId {
        let prev = self.node(id).prev;
        let new = self.alloc(Node { value, prev, next: Some(id) });
        self.node_mut(id).prev = Some(new);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(new),
            None => self.head = Some(new),
        }
        new
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from(self.nodes())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    /// Returns an iterator over the `(index, handle, value)` triples of the
    /// list, in order.
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self, self.head, self.tail, self.len)
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    #[inline]
    pub fn push_back(&mut self, value: T) -> NodeId {
        match self.tail {
            Some(tail) => self.insert_after(tail, value),
            None => self.push_first(value),
        }
    }

    #[inline]
    pub fn push_front(&mut self, value: T) -> NodeId {
        match self.head {
            Some(head) => self.insert_before(head, value),
            None => self.push_first(value),
        }
    }

    /// Unlinks the node `id` and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `id` doesn't point to a node in the list.
    #[inline]
    pub fn remove(&mut self, id: NodeId) -> T {
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }

        let slot = core::mem::replace(
            &mut self.slots[id.0],
            Slot::Vacant { next_free: self.free },
        );

        self.free = Some(id.0);
        self.len -= 1;

        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), ..Self::default() }
    }

    #[inline]
    fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;

        match self.free {
            Some(idx) => {
                self.free = match &self.slots[idx] {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!(),
                };
                self.slots[idx] = Slot::Occupied(node);
                NodeId(idx)
            },

            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    #[track_caller]
    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => stale_node_id(id),
        }
    }

    #[track_caller]
    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => stale_node_id(id),
        }
    }

    #[inline]
    fn push_first(&mut self, value: T) -> NodeId {
        debug_assert!(self.head.is_none() && self.tail.is_none());
        let id = self.alloc(Node { value, prev: None, next: None });
        self.head = Some(id);
        self.tail = Some(id);
        id
    }
}

impl<T> Collection<T> for PieceList<T> {
    type Forward<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type Backward<'a>
        = core::iter::Rev<Iter<'a, T>>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn append(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn insert_at(&mut self, value: T, index: usize) -> Result<()> {
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        let id = self.node_at(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len,
        })?;

        self.insert_before(id, value);
        Ok(())
    }

    #[inline]
    fn delete_at(&mut self, index: usize) -> Result<T> {
        let id = self.node_at(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len,
        })?;

        Ok(self.remove(id))
    }

    #[inline]
    fn get_at(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            .map(|id| &self[id])
            .ok_or(Error::IndexOutOfBounds { index, len: self.len })
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn forward(&self) -> Self::Forward<'_> {
        self.iter()
    }

    #[inline]
    fn backward(&self) -> Self::Backward<'_> {
        self.iter().rev()
    }
}

#[track_caller]
#[inline(never)]
fn stale_node_id(id: NodeId) -> ! {
    panic!("Stale node id: {id:?} doesn't point to a node in the list")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &PieceList<char>) -> String {
        list.iter().map(|(_, &ch)| ch).collect()
    }

    fn list(s: &str) -> PieceList<char> {
        let mut list = PieceList::new();
        for ch in s.chars() {
            list.append(ch);
        }
        list
    }

    #[test]
    fn append_and_get() {
        let list = list("abc");
        list.assert_invariants();
        assert_eq!(3, list.len());
        assert_eq!(Ok(&'a'), list.get_at(0));
        assert_eq!(Ok(&'c'), list.get_at(2));
        assert_eq!(
            Err(Error::IndexOutOfBounds { index: 3, len: 3 }),
            list.get_at(3)
        );
    }

    #[test]
    fn insert_at_every_index() {
        for index in 0..=4 {
            let mut list = list("abcd");
            list.insert_at('x', index).unwrap();
            list.assert_invariants();

            let mut expected = String::from("abcd");
            expected.insert(index, 'x');
            assert_eq!(expected, values(&list));
        }
    }

    #[test]
    fn insert_at_past_the_end() {
        let mut list = list("ab");
        assert_eq!(
            Err(Error::IndexOutOfBounds { index: 3, len: 2 }),
            list.insert_at('x', 3)
        );
        list.assert_invariants();
        assert_eq!("ab", values(&list));
    }

    #[test]
    fn delete_at_every_index() {
        for index in 0..4 {
            let mut list = list("abcd");
            let removed = list.delete_at(index).unwrap();
            list.assert_invariants();

            let mut expected = String::from("abcd");
            assert_eq!(expected.remove(index), removed);
            assert_eq!(expected, values(&list));
        }
    }

    #[test]
    fn delete_everything() {
        let mut list = list("abc");
        assert_eq!(Ok('b'), list.delete_at(1));
        assert_eq!(Ok('c'), list.delete_at(1));
        assert_eq!(Ok('a'), list.delete_at(0));
        assert!(list.delete_at(0).is_err());
        list.assert_invariants();
        assert!(list.is_empty());
        assert_eq!(None, list.head());
        assert_eq!(None, list.tail());
    }

    #[test]
    fn slots_are_reused() {
        let mut list = list("abcd");
        let b = list.node_at(1).unwrap();
        let c = list.node_at(2).unwrap();
        list.remove(b);
        list.remove(c);
        list.assert_invariants();

        list.push_front('x');
        list.push_back('y');
        list.assert_invariants();

        assert_eq!("xady", values(&list));
        assert_eq!(4, list.slots.len());
    }

    #[test]
    fn handles_survive_unrelated_edits() {
        let mut list = list("abc");
        let b = list.node_at(1).unwrap();

        list.push_front('x');
        list.delete_at(3).unwrap();
        list.insert_after(b, 'y');

        assert_eq!('b', list[b]);
        list[b] = 'B';
        list.assert_invariants();
        assert_eq!("xaBy", values(&list));
    }

    #[test]
    fn node_at_from_both_ends() {
        let list = list("abcdefg");
        for (index, ch) in "abcdefg".chars().enumerate() {
            let id = list.node_at(index).unwrap();
            assert_eq!(ch, list[id]);
        }
        assert_eq!(None, list.node_at(7));
    }

    #[test]
    fn forward_and_backward() {
        let list = list("abc");

        let forward = list.forward().collect::<Vec<_>>();
        assert_eq!(vec![(0, &'a'), (1, &'b'), (2, &'c')], forward);

        let backward = list.backward().collect::<Vec<_>>();
        assert_eq!(vec![(2, &'c'), (1, &'b'), (0, &'a')], backward);

        // Every call starts a fresh traversal.
        assert_eq!(3, list.forward().count());
        assert_eq!(3, list.backward().count());
    }

    #[test]
    #[should_panic]
    fn stale_handle_panics() {
        let mut list = list("ab");
        let a = list.node_at(0).unwrap();
        list.remove(a);
        let _value: char = list[a];
    }
}
