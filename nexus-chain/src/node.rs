//! Singly-linked node: one value, one owning link.
//!
//! Every container in this crate is a chain of [`Node`]s hanging off a single
//! owning root. A node owns its successor exclusively, so two nodes can never
//! share a tail and a chain can never close into a cycle.

use core::fmt;
use core::mem::{self, ManuallyDrop};
use core::ptr;

/// Owning link to the next node, or `None` at the end of a chain.
pub type Link<T> = Option<Box<Node<T>>>;

/// A value plus an owning link to its successor.
///
/// The value is fixed at construction. The link is rebound with
/// [`set_next`](Node::set_next), which hands back whatever it replaced so
/// the caller decides what happens to the old successor.
///
/// # Example
///
/// ```
/// use nexus_chain::Node;
///
/// let mut a = Node::new(1);
/// assert!(a.next().is_none());
///
/// let old = a.set_next(Some(Box::new(Node::new(2))));
/// assert!(old.is_none());
/// assert_eq!(a.next().map(Node::value), Some(&2));
/// ```
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a detached node.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the successor, or `None` if this node terminates its chain.
    #[inline]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Returns the successor mutably.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Self> {
        self.next.as_deref_mut()
    }

    /// Rebinds the successor, returning the previous one.
    ///
    /// The returned link is no longer reachable through `self`; dropping it
    /// frees the old successor and everything it still owns.
    #[inline]
    pub fn set_next(&mut self, next: Link<T>) -> Link<T> {
        mem::replace(&mut self.next, next)
    }

    /// Detaches and returns the successor, leaving this node as a terminus.
    #[inline]
    pub fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }

    /// Consumes the node, returning its value and its detached successor.
    pub fn into_parts(self) -> (T, Link<T>) {
        let this = ManuallyDrop::new(self);
        // Safety: `this` is never dropped, so each field is moved out exactly once.
        unsafe { (ptr::read(&this.value), ptr::read(&this.next)) }
    }

    /// Consumes the node, returning its value and dropping its successor.
    #[inline]
    pub fn into_value(self) -> T {
        self.into_parts().0
    }

    /// Returns the owning slot for the successor.
    #[inline]
    pub(crate) fn link_mut(&mut self) -> &mut Link<T> {
        &mut self.next
    }
}

// Tears the chain down one node at a time. The default drop glue would recurse
// once per node and can blow the stack on long chains.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Walks a chain from `first` to its terminus without taking ownership.
///
/// # Example
///
/// ```
/// use nexus_chain::{LinkedList, node};
///
/// let mut list = LinkedList::new();
/// list.insert_beginning(1);
/// list.insert_beginning(2);
///
/// let values: Vec<_> = node::walk(list.head()).map(|n| *n.value()).collect();
/// assert_eq!(values, vec![2, 1]);
/// ```
pub fn walk<T>(first: Option<&Node<T>>) -> impl Iterator<Item = &Node<T>> + '_ {
    core::iter::successors(first, |node| node.next())
}

/// Debug view of a chain's values, first to last.
pub(crate) struct DebugChain<'a, T>(pub(crate) Option<&'a Node<T>>);

impl<T: fmt::Debug> fmt::Debug for DebugChain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(walk(self.0).map(Node::value)).finish()
    }
}
