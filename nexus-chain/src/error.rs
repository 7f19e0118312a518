//! Admission errors for bounded containers.

use core::fmt;

/// Insertion rejected because the container is at its capacity ceiling.
///
/// Carries the rejected value so the caller can retry later or discard it.
///
/// # Example
///
/// ```
/// use nexus_chain::{Overflow, Stack};
///
/// let mut stack = Stack::with_limit(1);
/// stack.push("plate").unwrap();
///
/// let err = stack.push("another plate").unwrap_err();
/// assert_eq!(err, Overflow { value: "another plate", capacity: 1 });
/// assert_eq!(err.into_inner(), "another plate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow<T> {
    /// The value that could not be inserted.
    pub value: T,
    /// Capacity ceiling that was reached.
    pub capacity: usize,
}

impl<T> Overflow<T> {
    #[inline]
    pub(crate) const fn new(value: T, capacity: usize) -> Self {
        Self { value, capacity }
    }

    /// Returns the value that could not be inserted.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for Overflow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is full (capacity {})", self.capacity)
    }
}

impl<T: fmt::Debug> std::error::Error for Overflow<T> {}

/// Removal or peek rejected because the container is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underflow;

impl fmt::Display for Underflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is empty")
    }
}

impl std::error::Error for Underflow {}
