//! Optionally bounded FIFO queue on a singly-linked chain.
//!
//! The chain is owned from the front. A second, non-owning pointer locates
//! the back node so that both enqueue and dequeue are O(1).
//!
//! Unlike the list and the stack, the queue links its nodes through raw
//! owning pointers rather than `Box`. A `Box` asserts unique access to its
//! node, which the `back` pointer would violate as soon as the chain moves.
//! Each node is allocated once in [`Queue::enqueue`] and freed exactly once,
//! in [`Queue::dequeue`] or when the queue is cleared or dropped.
//!
//! # Example
//!
//! ```
//! use nexus_chain::{Queue, Underflow};
//!
//! let mut queue = Queue::bounded(2);
//! queue.enqueue("all the fluffy kitties").unwrap();
//! queue.enqueue("some guy with a mustache").unwrap();
//!
//! // Full
//! assert!(queue.enqueue("one more").is_err());
//!
//! assert_eq!(queue.dequeue(), Ok("all the fluffy kitties"));
//! assert_eq!(queue.dequeue(), Ok("some guy with a mustache"));
//! assert_eq!(queue.dequeue(), Err(Underflow));
//! ```
//!
//! # Invariants
//!
//! - `len` equals the number of nodes reachable from the front
//! - an empty queue has neither a front nor a back
//! - a non-empty queue's back is the unique node with no successor
//! - a bounded queue never holds more than `max_size` values

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use log::{debug, trace};

use crate::error::{Overflow, Underflow};

/// Owning link to the next queue node. Freed with `Box::from_raw`.
type RawLink<T> = Option<NonNull<QueueNode<T>>>;

struct QueueNode<T> {
    value: T,
    next: RawLink<T>,
}

/// A FIFO queue with an optional capacity ceiling.
pub struct Queue<T> {
    /// Owns every node in the queue.
    front: RawLink<T>,
    /// Last node of the chain owned by `front`. Never owns anything.
    back: RawLink<T>,
    len: usize,
    max_size: Option<usize>,
    _owns: PhantomData<Box<QueueNode<T>>>,
}

// Safety: the queue owns every node through `front`; `back` only aliases a
// node inside that chain and is never handed out, so the queue is exactly as
// thread-safe as an owned chain of `T`.
unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty, unbounded queue.
    #[inline]
    pub const fn new() -> Self {
        Self::with_max_size(None)
    }

    /// Creates an empty queue holding at most `max_size` values.
    ///
    /// # Panics
    ///
    /// Panics if `max_size` is 0.
    #[inline]
    pub const fn bounded(max_size: usize) -> Self {
        Self::with_max_size(Some(max_size))
    }

    /// Creates an empty queue, bounded when `max_size` is `Some`.
    ///
    /// # Panics
    ///
    /// Panics if `max_size` is `Some(0)`.
    pub const fn with_max_size(max_size: Option<usize>) -> Self {
        if let Some(max) = max_size {
            assert!(max > 0, "max_size must be > 0");
        }
        Self {
            front: None,
            back: None,
            len: 0,
            max_size,
            _owns: PhantomData,
        }
    }

    /// Returns the number of values in the queue.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the capacity ceiling, or `None` if unbounded.
    #[inline]
    pub const fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Returns `true` if the queue holds no values.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if another value can be enqueued.
    #[inline]
    pub const fn has_space(&self) -> bool {
        match self.max_size {
            Some(max) => self.len < max,
            None => true,
        }
    }

    /// Returns an iterator over the values, front to back.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_chain::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    ///
    /// let values: Vec<_> = queue.iter().copied().collect();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.front,
            _queue: PhantomData,
        }
    }

    /// Appends `value` at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] carrying `value` if the queue is bounded and full.
    /// The queue is left untouched.
    pub fn enqueue(&mut self, value: T) -> Result<(), Overflow<T>> {
        if !self.has_space() {
            let max = self.max_size.unwrap_or(self.len);
            debug!("queue: enqueue rejected, max_size {max} reached");
            return Err(Overflow::new(value, max));
        }

        let node = Box::new(QueueNode { value, next: None });
        let node = NonNull::from(Box::leak(node));
        match self.back {
            // Safety: `back` is a live node owned by this queue, and `&mut self`
            // rules out any reference into the chain.
            Some(mut back) => unsafe { back.as_mut().next = Some(node) },
            None => self.front = Some(node),
        }
        self.back = Some(node);
        self.len += 1;
        trace!("queue: enqueued, len {}", self.len);
        Ok(())
    }

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, Underflow> {
        let Some(front) = self.front else {
            debug!("queue: dequeue rejected, queue is empty");
            return Err(Underflow);
        };

        // Safety: `front` came from `Box::leak` in `enqueue` and is unlinked
        // here, so it is reclaimed exactly once.
        let node = unsafe { Box::from_raw(front.as_ptr()) };
        let QueueNode { value, next } = *node;
        if self.len == 1 {
            // The last node is gone; `back` must not outlive it.
            debug_assert!(next.is_none());
            self.back = None;
        }
        self.front = next;
        self.len -= 1;
        trace!("queue: dequeued, len {}", self.len);
        Ok(value)
    }

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, Underflow> {
        self.iter().next().ok_or_else(|| {
            debug!("queue: peek rejected, queue is empty");
            Underflow
        })
    }

    /// Returns the back value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty.
    pub fn peek_back(&self) -> Result<&T, Underflow> {
        let Some(back) = self.back else {
            debug!("queue: peek_back rejected, queue is empty");
            return Err(Underflow);
        };
        // Safety: `back` is a live node owned by this queue, and `&self` keeps
        // it from being unlinked for the returned lifetime.
        Ok(unsafe { &back.as_ref().value })
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        let mut next = self.front.take();
        self.back = None;
        self.len = 0;
        while let Some(node) = next {
            // Safety: every node reachable from `front` is owned by the queue
            // and no longer reachable once `front` is taken.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            next = node.next;
        }
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("max_size", &self.max_size)
            .field("values", &self.iter())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over the values of a [`Queue`], front to back.
///
/// Created by [`Queue::iter`].
pub struct Iter<'a, T> {
    next: RawLink<T>,
    _queue: PhantomData<&'a Queue<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            _queue: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            // Safety: the borrowed queue owns `node` and cannot unlink it
            // while `'a` is live.
            let node = unsafe { node.as_ref() };
            self.next = node.next;
            &node.value
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
