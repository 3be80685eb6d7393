use crate::{errors::SListError, handle::Handle, node::Node};
use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

const SENTINEL: usize = 0;

/// A singly-linked list anchored at a sentinel head node.
///
/// Nodes live in an id-keyed table and link to their successor by id. The
/// sentinel (id 0) never carries a value, so inserting at the front is the
/// same operation as inserting after any other node.
#[derive(Clone)]
pub struct SList<T> {
    nodes: HashMap<usize, Node<T>>,
    next_id: usize,
    head: usize,
    tail: Option<usize>,
    len: usize,
}

/// Iterator over values, front to back.
pub struct Iter<'a, T> {
    list: &'a SList<T>,
    next: Option<usize>,
    remaining: usize,
}

/// Iterator over mutable references to values, front to back.
pub struct IterMut<'a, T> {
    slots: HashMap<usize, (Option<usize>, &'a mut T)>,
    next: Option<usize>,
}

/// Owning iterator, front to back.
pub struct IntoIter<T> {
    list: SList<T>,
}

impl<T> Default for SList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases elements front to back.
impl<T> Drop for SList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> SList<T> {
    /// Create a new empty list holding only the sentinel.
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(SENTINEL, Node::sentinel(SENTINEL));

        Self {
            nodes,
            next_id: SENTINEL + 1,
            head: SENTINEL,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a value after the current tail.
    pub fn push_back(&mut self, value: T) -> Handle {
        let left = self.tail.unwrap_or(self.head);
        self.link_after(left, value)
    }

    /// Insert a value right after the sentinel.
    pub fn push_front(&mut self, value: T) -> Handle {
        self.link_after(self.head, value)
    }

    /// Remove the first element and return it.
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.first()?;
        Some(self.unlink_after(self.head, first))
    }

    /// First element.
    pub fn front(&self) -> Result<&T, SListError> {
        self.first()
            .and_then(|id| self.get(Handle(id)))
            .ok_or(SListError::EmptyCollection)
    }

    /// First element, mutably.
    pub fn front_mut(&mut self) -> Result<&mut T, SListError> {
        match self.first() {
            Some(id) => self.get_mut(Handle(id)).ok_or(SListError::EmptyCollection),
            None => Err(SListError::EmptyCollection),
        }
    }

    /// Last element (the tail).
    pub fn back(&self) -> Result<&T, SListError> {
        self.tail
            .and_then(|id| self.get(Handle(id)))
            .ok_or(SListError::EmptyCollection)
    }

    /// Last element, mutably.
    pub fn back_mut(&mut self) -> Result<&mut T, SListError> {
        match self.tail {
            Some(id) => self.get_mut(Handle(id)).ok_or(SListError::EmptyCollection),
            None => Err(SListError::EmptyCollection),
        }
    }

    /// Get a reference by handle (if live). Only handles issued by this list
    /// are meaningful here.
    pub fn get(&self, h: Handle) -> Option<&T> {
        self.nodes.get(&h.0).and_then(|n| n.value.as_ref())
    }

    /// Get a mutable reference by handle (if live). Only handles issued by
    /// this list are meaningful here.
    pub fn get_mut(&mut self, h: Handle) -> Option<&mut T> {
        self.nodes.get_mut(&h.0).and_then(|n| n.value.as_mut())
    }

    /// Remove every element. The sentinel stays, and handles issued so far
    /// go stale.
    pub fn clear(&mut self) {
        let mut cur = self.node_mut(self.head).next.take();
        while let Some(id) = cur {
            cur = self.nodes.remove(&id).and_then(|node| node.next);
        }
        self.tail = None;
        self.len = 0;
        debug_assert!(self.is_consistent());
    }

    /// Iterate values in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.first(),
            remaining: self.len,
        }
    }

    /// Iterate mutable references in order.
    ///
    /// Builds an id-to-slot table up front, so starting the iteration is O(n).
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let next = self.first();
        let slots = self
            .nodes
            .values_mut()
            .filter_map(|node| {
                let id = node.id;
                let successor = node.next;
                node.value.as_mut().map(|v| (id, (successor, v)))
            })
            .collect();
        IterMut { slots, next }
    }

    pub(crate) fn first(&self) -> Option<usize> {
        self.successor(self.head)
    }

    pub(crate) fn successor(&self, id: usize) -> Option<usize> {
        self.nodes.get(&id).and_then(|n| n.next)
    }

    /// Checks every structural invariant by walking the whole chain.
    pub(crate) fn is_consistent(&self) -> bool {
        let sentinel = match self.nodes.get(&self.head) {
            Some(n) if !n.is_live() => n,
            _ => return false,
        };
        if self.nodes.len() != self.len + 1 {
            return false;
        }

        let mut steps = 0;
        let mut last = None;
        let mut cur = sentinel.next;
        while let Some(id) = cur {
            let node = match self.nodes.get(&id) {
                Some(n) if n.is_live() => n,
                _ => return false,
            };
            steps += 1;
            if steps > self.len {
                // cycle
                return false;
            }
            last = Some(id);
            cur = node.next;
        }
        steps == self.len && last == self.tail
    }

    fn node_mut(&mut self, id: usize) -> &mut Node<T> {
        match self.nodes.get_mut(&id) {
            Some(node) => node,
            None => unreachable!("node {id} is linked but not stored"),
        }
    }

    /// Link a new node right after `left_id`. Becomes the tail when `left_id`
    /// had no successor.
    fn link_after(&mut self, left_id: usize, value: T) -> Handle {
        let id = self.next_id;
        self.next_id += 1;

        let right = self.node_mut(left_id).next.replace(id);
        debug_assert_eq!(right.is_none(), self.tail.unwrap_or(self.head) == left_id);

        self.nodes.insert(id, Node::with_value(id, value, right));
        if right.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
        Handle(id)
    }

    /// Unlink `id`, the successor of `prev_id`, and return its value.
    fn unlink_after(&mut self, prev_id: usize, id: usize) -> T {
        let node = match self.nodes.remove(&id) {
            Some(node) => node,
            None => unreachable!("node {id} is linked but not stored"),
        };
        let prev = self.node_mut(prev_id);
        debug_assert_eq!(prev.next, Some(id));
        prev.next = node.next;

        if self.tail == Some(id) {
            self.tail = (prev_id != self.head).then_some(prev_id);
        }
        self.len -= 1;

        match node.value {
            Some(value) => value,
            None => unreachable!("sentinel is never unlinked"),
        }
    }
}

impl<T: PartialEq> SList<T> {
    /// Find the first element equal to `value`.
    ///
    /// Returns `Ok(None)` when nothing matches; fails only on an empty list.
    pub fn find(&self, value: &T) -> Result<Option<Handle>, SListError> {
        self.require_non_empty()?;
        Ok(self.position(value).map(|(_, id)| Handle(id)))
    }

    /// Does any element equal `value`? An empty list contains nothing.
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Insert `value` right after the first element equal to `anchor`.
    pub fn insert_after(&mut self, anchor: &T, value: T) -> Result<Handle, SListError> {
        self.require_non_empty()?;
        let (_, anchor_id) = self.position(anchor).ok_or(SListError::NotFound)?;
        Ok(self.link_after(anchor_id, value))
    }

    /// Remove the first element equal to `value` and return it.
    pub fn erase(&mut self, value: &T) -> Result<T, SListError> {
        self.require_non_empty()?;
        let (prev_id, id) = self.position(value).ok_or(SListError::NotFound)?;
        Ok(self.unlink_after(prev_id, id))
    }

    fn require_non_empty(&self) -> Result<(), SListError> {
        if self.is_empty() {
            return Err(SListError::EmptyCollection);
        }
        Ok(())
    }

    /// `(predecessor, node)` ids of the first element equal to `value`.
    fn position(&self, value: &T) -> Option<(usize, usize)> {
        let mut prev = self.head;
        while let Some(id) = self.successor(prev) {
            if self.nodes[&id].value.as_ref() == Some(value) {
                return Some((prev, id));
            }
            prev = id;
        }
        None
    }
}

impl<T: PartialEq> PartialEq for SList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SList<T> {}

impl<T: fmt::Debug> fmt::Debug for SList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Every element followed by a single space: `[1, 2, 3]` renders as `"1 2 3 "`.
impl<T: fmt::Display> fmt::Display for SList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for SList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for SList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let list = self.list;
        let node = &list.nodes[&id];
        self.next = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let (next, value) = self.slots.remove(&id)?;
        self.next = next;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
