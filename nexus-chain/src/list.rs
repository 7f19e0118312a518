//! Singly-linked list with head insertion and value-based removal.
//!
//! # Example
//!
//! ```
//! use nexus_chain::LinkedList;
//!
//! let mut list = LinkedList::with_seed(Some(5));
//! list.insert_beginning(70);
//! list.insert_beginning(5675);
//! list.insert_beginning(90);
//! assert_eq!(list.stringify(), "90\n5675\n70\n5\n");
//!
//! assert!(list.remove(&5675));
//! assert_eq!(list.stringify(), "90\n70\n5\n");
//! ```

use core::fmt;

use log::trace;

use crate::node::{self, DebugChain, Link, Node};
use crate::render::Render;

/// A singly-linked list owning its chain from `head`.
///
/// Following links from the head always terminates after exactly
/// [`len`](LinkedList::len) nodes. A removed node is freed at the moment it
/// is unlinked.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Creates a list holding `seed` as its only node, or an empty list for `None`.
    pub fn with_seed(seed: Option<T>) -> Self {
        let mut list = Self::new();
        if let Some(value) = seed {
            list.insert_beginning(value);
        }
        list
    }

    /// Returns the head node, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` as the new head. O(1).
    pub fn insert_beginning(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.set_next(self.head.take());
        self.head = Some(node);
        self.len += 1;
        trace!("list: inserted head, len {}", self.len);
    }

    /// Returns `true` if some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        node::walk(self.head()).any(|node| node.value() == value)
    }

    /// Removes the first node, in head-to-tail order, whose value equals `value`.
    ///
    /// Later matches are left in place. Returns `false` and leaves the list
    /// untouched if nothing matches.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_chain::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.insert_beginning('a');
    /// list.insert_beginning('b');
    /// list.insert_beginning('c');
    ///
    /// assert!(list.remove(&'b'));
    /// assert_eq!(list.stringify(), "c\na\n");
    /// assert!(!list.remove(&'z'));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(head) = self.head.as_deref_mut() else {
            return false;
        };

        if head.value() == value {
            self.head = head.take_next();
            self.len -= 1;
            trace!("list: removed head, len {}", self.len);
            return true;
        }

        // Tail removal takes the same path: the successor of the removed
        // node is simply `None`.
        let mut previous = head;
        loop {
            if previous.next().is_some_and(|current| current.value() == value) {
                if let Some(mut removed) = previous.take_next() {
                    previous.set_next(removed.take_next());
                }
                self.len -= 1;
                trace!("list: removed node, len {}", self.len);
                return true;
            }
            match previous.next_mut() {
                Some(current) => previous = current,
                None => return false,
            }
        }
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.head = None;
        self.len = 0;
    }

    /// Returns a lazy, restartable view of the rendered values, head to tail.
    ///
    /// Absent values (see [`Render`]) are skipped. Each call starts over from
    /// the current head; a clone resumes from the same position.
    #[inline]
    pub fn lines(&self) -> Lines<'_, T> {
        Lines { next: self.head() }
    }

    /// Renders every present value on its own line, head to tail.
    ///
    /// Each line ends in `\n`. Absent values are omitted entirely.
    pub fn stringify(&self) -> String
    where
        T: Render,
    {
        self.to_string()
    }
}

impl<T: Render> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&DebugChain(self.head()), f)
    }
}

/// Iterator over the rendered values of a [`LinkedList`].
///
/// Created by [`LinkedList::lines`].
pub struct Lines<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<T> Clone for Lines<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T: Render> Iterator for Lines<'a, T> {
    type Item = &'a dyn fmt::Display;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next {
            self.next = node.next();
            if let Some(shown) = node.value().present() {
                return Some(shown);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &LinkedList<T>) -> Vec<T> {
        node::walk(list.head()).map(|n| *n.value()).collect()
    }

    fn cba() -> LinkedList<char> {
        let mut list = LinkedList::new();
        list.insert_beginning('a');
        list.insert_beginning('b');
        list.insert_beginning('c');
        list
    }

    #[test]
    fn new_is_empty() {
        let list: LinkedList<u32> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head().is_none());
        assert_eq!(list.stringify(), "");
    }

    #[test]
    fn with_seed() {
        let list = LinkedList::with_seed(Some(44));
        assert_eq!(values(&list), vec![44]);

        let list: LinkedList<u32> = LinkedList::with_seed(None);
        assert!(list.is_empty());
    }

    #[test]
    fn insert_beginning_prepends() {
        let list = cba();
        assert_eq!(values(&list), vec!['c', 'b', 'a']);
        assert_eq!(list.len(), 3);
        assert_eq!(list.head().map(Node::value), Some(&'c'));
    }

    #[test]
    fn remove_interior() {
        let mut list = cba();
        assert!(list.remove(&'b'));
        assert_eq!(values(&list), vec!['c', 'a']);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_head_updates_root() {
        let mut list = cba();
        assert!(list.remove(&'c'));
        assert_eq!(values(&list), vec!['b', 'a']);
        assert_eq!(list.head().map(Node::value), Some(&'b'));
    }

    #[test]
    fn remove_tail() {
        let mut list = cba();
        assert!(list.remove(&'a'));
        assert_eq!(values(&list), vec!['c', 'b']);
        assert!(list.head().unwrap().next().unwrap().next().is_none());
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut list = cba();
        assert!(!list.remove(&'z'));
        assert_eq!(values(&list), vec!['c', 'b', 'a']);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_from_empty_is_noop() {
        let mut list: LinkedList<u32> = LinkedList::new();
        assert!(!list.remove(&1));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_sole_node_empties() {
        let mut list = LinkedList::with_seed(Some(1));
        assert!(list.remove(&1));
        assert!(list.is_empty());
        assert!(list.head().is_none());
    }

    #[test]
    fn remove_only_first_match() {
        let mut list = LinkedList::new();
        for v in [1, 2, 3, 2, 1] {
            list.insert_beginning(v);
        }
        assert!(list.remove(&2));
        assert_eq!(values(&list), vec![1, 3, 2, 1]);
        assert!(list.remove(&1));
        assert_eq!(values(&list), vec![3, 2, 1]);
    }

    #[test]
    fn contains() {
        let list = cba();
        assert!(list.contains(&'b'));
        assert!(!list.contains(&'z'));
    }

    #[test]
    fn stringify_order() {
        let mut list = cba();
        assert_eq!(list.stringify(), "c\nb\na\n");
        list.remove(&'b');
        assert_eq!(list.stringify(), "c\na\n");
    }

    #[test]
    fn stringify_skips_absent() {
        let mut list = LinkedList::with_seed(Some(None));
        list.insert_beginning(Some(70));
        list.insert_beginning(None);
        list.insert_beginning(Some(90));
        assert_eq!(list.len(), 4);
        assert_eq!(list.stringify(), "90\n70\n");
    }

    #[test]
    fn lines_is_restartable() {
        let list = cba();
        let lines = list.lines();
        let first: Vec<_> = lines.clone().map(|l| l.to_string()).collect();
        let second: Vec<_> = lines.map(|l| l.to_string()).collect();
        assert_eq!(first, vec!["c", "b", "a"]);
        assert_eq!(first, second);
    }

    #[test]
    fn clear() {
        let mut list = cba();
        list.clear();
        assert!(list.is_empty());
        assert!(list.head().is_none());
        list.insert_beginning('d');
        assert_eq!(values(&list), vec!['d']);
    }

    #[test]
    fn debug_lists_values() {
        assert_eq!(format!("{:?}", cba()), "['c', 'b', 'a']");
    }
}
