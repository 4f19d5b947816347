use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node, Nodes};
#[doc(inline)]
pub use crate::util::error::{EmptyList, IndexOutOfBounds, ListError};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in a single direction, from the head towards the tail.
///
/// Each [`Node`] owns the node after it and the list owns the head, so dropping the list releases
/// the entire chain.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head` | `O(1)` |
/// | `tail` | `O(n)` |
/// | `prepend` | `O(1)` |
/// | `append` | `O(n)` |
/// | `pop_front` | `O(1)` |
/// | `pop` | `O(n)` |
/// | `at/get` | `O(i)` |
/// | `insert_at` | `O(i)` |
/// | `remove_at` | `O(i)` |
/// | `contains/find` | `O(n)` |
///
/// There is no link back from the tail, so every operation at the back of the list has to walk
/// the whole chain to get there. Where possible, [`Extend`] and [`FromIterator`] walk it once and
/// then link every new node in turn.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first node in the list, if it exists.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns the last node in the list, if it exists. This has to walk every node to find it.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.nodes().last()
    }

    /// Returns the node at the provided zero-based `index`, or [`None`] if `index` is out of
    /// bounds.
    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        self.nodes().nth(index)
    }

    /// Returns the node at the provided zero-based `index` mutably, or [`None`] if `index` is out
    /// of bounds.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        seek_link(&mut self.head, index)?.as_deref_mut()
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.at(index)
            .map(Node::value)
            .ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.at_mut(index)
            .map(Node::value_mut)
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Adds a node holding `value` after the current tail. If the list is empty, the new node
    /// becomes the head.
    pub fn append(&mut self, value: T) {
        let end = seek_link(&mut self.head, self.len).unreachable();
        *end = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Adds a node holding `value` in front of the current head.
    pub fn prepend(&mut self, value: T) {
        let old_head = self.head.take();
        self.head = Some(Box::new(Node::with_next(value, old_head)));
        self.len += 1;
    }

    /// Removes the last node from the list and returns its value, if the list isn't empty.
    ///
    /// Removing the only node leaves the list empty, with no further traversal.
    pub fn pop(&mut self) -> Option<T> {
        let last_index = self.len.checked_sub(1)?;
        // The link holding the tail is the head itself for a list of one.
        let tail_link = seek_link(&mut self.head, last_index).unreachable();
        let (value, _) = tail_link.take().unreachable().into_parts();
        self.len = last_index;
        Some(value)
    }

    /// Removes the first node from the list and returns its value, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let (value, next) = self.head.take()?.into_parts();
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Inserts a node holding `value` so that it ends up at `index`, shifting the nodes after it
    /// back by one. An `index` of zero prepends and any `index` at or past the end appends.
    pub fn insert_at(&mut self, value: T, index: usize) {
        self.link_at(value, index.min(self.len));
    }

    /// Inserts a node holding `value` at `index`, returning an [`Err`] rather than appending if
    /// `index` is past the end of the list.
    pub fn try_insert_at(&mut self, value: T, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        self.link_at(value, index);
        Ok(())
    }

    /// Removes the node at `index` and returns its value. Removing index zero makes the old
    /// head's successor the new head.
    ///
    /// # Errors
    /// Returns [`ListError::EmptyList`] if the list has no nodes, or
    /// [`ListError::IndexOutOfBounds`] if `index` is not less than the length of the list.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(EmptyList.into());
        }
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        let link = seek_link(&mut self.head, index).unreachable();
        let (value, next) = link.take().unreachable().into_parts();
        *link = next;
        self.len -= 1;

        Ok(value)
    }

    /// Removes every node from the list.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    /// Returns an iterator over the nodes of the list, from head to tail.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            next: self.head.as_deref(),
            len: self.len,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Links a new node into the chain at `index`, which must not be past the end.
    fn link_at(&mut self, value: T, index: usize) {
        let link = seek_link(&mut self.head, index).unreachable();
        let next = link.take();
        *link = Some(Box::new(Node::with_next(value, next)));
        self.len += 1;
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut curr = self.head.as_deref();
        while let Some(node) = curr {
            count += 1;
            curr = node.next();
        }
        assert_eq!(count, self.len, "Cached length should match the number of linked nodes.");
        assert_eq!(self.head.is_none(), self.len == 0, "Head should be None only when empty.");
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first node holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Returns true if any node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

/// Follows `count` links from `link`, returning the link reached, or [`None`] if the chain ends
/// first. Following as many links as there are nodes yields the empty link after the tail.
fn seek_link<T>(mut link: &mut Link<T>, count: usize) -> Option<&mut Link<T>> {
    for _ in 0..count {
        link = &mut link.as_mut()?.next;
    }
    Some(link)
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut end = seek_link(&mut self.head, self.len).unreachable();
        for value in iter {
            let node = end.insert(Box::new(Node::new(value)));
            end = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink each node before it drops, otherwise dropping the head recurses once per node.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Length first, so that lists nested in a sequence can't run into each other.
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders each value as `( value )`, linked by arrows and terminated with `null`, e.g.
/// `( a ) -> ( b ) -> null`. An empty list is just `null`.
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "( {value} ) -> ")?;
        }
        write!(f, "null")
    }
}
