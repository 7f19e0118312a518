//! Bounded LIFO stack on a singly-linked chain.
//!
//! The top of the stack is the head of the chain, so push, pop and peek all
//! touch exactly one end.
//!
//! # Example
//!
//! ```
//! use nexus_chain::{Stack, Underflow};
//!
//! let mut stack = Stack::new();
//! stack.push(10).unwrap();
//! stack.push(20).unwrap();
//!
//! assert_eq!(stack.peek(), Ok(&20));
//! assert_eq!(stack.pop(), Ok(20));
//! assert_eq!(stack.pop(), Ok(10));
//! assert_eq!(stack.pop(), Err(Underflow));
//! ```

use core::fmt;

use log::{debug, trace};

use crate::error::{Overflow, Underflow};
use crate::node::{DebugChain, Link, Node};

/// Capacity ceiling used by [`Stack::new`].
pub const DEFAULT_STACK_LIMIT: usize = 1000;

/// A capacity-bounded LIFO stack.
///
/// [`len`](Stack::len) always equals the number of nodes reachable from the
/// top and never exceeds [`limit`](Stack::limit).
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
    limit: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack limited to [`DEFAULT_STACK_LIMIT`] values.
    #[inline]
    pub const fn new() -> Self {
        Self::with_limit(DEFAULT_STACK_LIMIT)
    }

    /// Creates an empty stack holding at most `limit` values.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is 0.
    pub const fn with_limit(limit: usize) -> Self {
        assert!(limit > 0, "limit must be > 0");
        Self {
            top: None,
            len: 0,
            limit,
        }
    }

    /// Returns the number of values on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the capacity ceiling.
    #[inline]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns `true` if the stack holds no values.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if another value can be pushed.
    #[inline]
    pub const fn has_space(&self) -> bool {
        self.len < self.limit
    }

    /// Returns the top node, or `None` if the stack is empty.
    #[inline]
    pub fn top(&self) -> Option<&Node<T>> {
        self.top.as_deref()
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] carrying `value` if the stack is at its limit.
    /// The stack is left untouched.
    pub fn push(&mut self, value: T) -> Result<(), Overflow<T>> {
        if !self.has_space() {
            debug!("stack: push rejected, limit {} reached", self.limit);
            return Err(Overflow::new(value, self.limit));
        }

        let mut node = Box::new(Node::new(value));
        node.set_next(self.top.take());
        self.top = Some(node);
        self.len += 1;
        trace!("stack: pushed, len {}", self.len);
        Ok(())
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, Underflow> {
        let Some(top) = self.top.take() else {
            debug!("stack: pop rejected, stack is empty");
            return Err(Underflow);
        };

        let (value, next) = top.into_parts();
        self.top = next;
        self.len -= 1;
        trace!("stack: popped, len {}", self.len);
        Ok(value)
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, Underflow> {
        let Some(top) = self.top() else {
            debug!("stack: peek rejected, stack is empty");
            return Err(Underflow);
        };
        Ok(top.value())
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        self.top = None;
        self.len = 0;
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("limit", &self.limit)
            .field("values", &DebugChain(self.top()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node;

    fn reachable<T>(stack: &Stack<T>) -> usize {
        node::walk(stack.top()).count()
    }

    #[test]
    fn new_is_empty() {
        let stack: Stack<u32> = Stack::new();
        assert!(stack.is_empty());
        assert!(stack.has_space());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.limit(), DEFAULT_STACK_LIMIT);
    }

    #[test]
    fn lifo_order() {
        let mut stack = Stack::new();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
    }

    #[test]
    fn empty_underflows() {
        let mut stack: Stack<u32> = Stack::new();
        assert_eq!(stack.pop(), Err(Underflow));
        assert_eq!(stack.peek(), Err(Underflow));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut stack = Stack::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.len(), 2);
        assert_eq!(reachable(&stack), 2);
    }

    #[test]
    fn bounded_admission() {
        let mut stack = Stack::with_limit(1);
        stack.push('a').unwrap();
        assert!(!stack.has_space());

        let err = stack.push('b').unwrap_err();
        assert_eq!(err, Overflow::new('b', 1));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Ok(&'a'));

        assert_eq!(stack.pop(), Ok('a'));
        stack.push('b').unwrap();
        assert_eq!(stack.peek(), Ok(&'b'));
    }

    #[test]
    fn fill_to_default_limit() {
        let mut stack = Stack::new();
        for i in 0..DEFAULT_STACK_LIMIT {
            stack.push(i).unwrap();
        }
        assert!(stack.push(DEFAULT_STACK_LIMIT).is_err());
        assert_eq!(reachable(&stack), DEFAULT_STACK_LIMIT);
    }

    #[test]
    fn len_tracks_reachable_nodes() {
        let mut stack = Stack::with_limit(4);
        for i in 0..6 {
            let _ = stack.push(i);
            assert_eq!(stack.len(), reachable(&stack));
        }
        for _ in 0..6 {
            let _ = stack.pop();
            assert_eq!(stack.len(), reachable(&stack));
        }
    }

    #[test]
    fn clear() {
        let mut stack = Stack::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert!(stack.top().is_none());
        assert_eq!(stack.pop(), Err(Underflow));
    }

    #[test]
    fn debug_lists_top_first() {
        let mut stack = Stack::with_limit(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(format!("{stack:?}"), "Stack { limit: 3, values: [2, 1] }");
    }

    #[test]
    #[should_panic(expected = "limit must be > 0")]
    fn zero_limit_panics() {
        let _ = Stack::<u32>::with_limit(0);
    }
}
