use std::fmt::{self, Debug, Formatter};

/// An owning link to the next node in a chain, or [`None`] at the end of it.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`LinkedList`](super::LinkedList), holding a value and the link to its
/// successor.
///
/// Nodes are created and destroyed by the list that owns them. A borrowed node can be used to
/// walk the remainder of the chain with [`Node::next`].
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node with no successor.
    pub(crate) const fn new(value: T) -> Node<T> {
        Node::with_next(value, None)
    }

    pub(crate) const fn with_next(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }

    /// Returns a reference to the value held by this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the value held by this node.
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the node following this one, or [`None`] if this is the last node in the list.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Returns true if this node has no successor.
    pub const fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Unboxes a node that has already been unlinked, splitting it into its value and the link it
    /// held.
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Link<T>) {
        let Node { value, next } = *self;
        (value, next)
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Only flag the successor, formatting it would recurse down the rest of the chain.
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("is_last", &self.is_last())
            .finish()
    }
}
