//! Singly-linked node containers: list, bounded stack, bounded queue.
//!
//! The list and the stack are chains of [`Node`]s. Each node owns its
//! successor outright, so the chain from a container's root is always a
//! single path ending in `None`. Nodes are never shared and a chain never
//! loops. A node is freed at the moment it is unlinked.
//!
//! The queue keeps the same shape but links its nodes through raw owning
//! pointers, so that its non-owning `back` pointer stays valid while the
//! front of the chain is consumed.
//!
//! ```text
//! LinkedList  head ─▶ [c] ─▶ [b] ─▶ [a] ─▶ ∅
//! Stack       top  ─▶ [3] ─▶ [2] ─▶ [1] ─▶ ∅
//! Queue       front ─▶ [1] ─▶ [2] ─▶ [3] ─▶ ∅
//!                                     ▲
//!             back ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┘   (non-owning)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use nexus_chain::{LinkedList, Queue, Stack, Underflow};
//!
//! let mut list = LinkedList::new();
//! list.insert_beginning('a');
//! list.insert_beginning('b');
//! list.insert_beginning('c');
//! list.remove(&'b');
//! assert_eq!(list.stringify(), "c\na\n");
//!
//! let mut stack = Stack::with_limit(1);
//! stack.push(1).unwrap();
//! assert!(stack.push(2).is_err());
//! assert_eq!(stack.pop(), Ok(1));
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! assert_eq!(queue.dequeue(), Err(Underflow));
//! ```
//!
//! # Admission Control
//!
//! | Container | Ceiling | Insert | Remove / Peek |
//! |-----------|---------|--------|---------------|
//! | [`LinkedList`] | none | infallible | `remove` is a no-op when absent |
//! | [`Stack`] | `limit`, default [`DEFAULT_STACK_LIMIT`] | `Err(Overflow)` when full | `Err(Underflow)` when empty |
//! | [`Queue`] | optional `max_size` | `Err(Overflow)` when full | `Err(Underflow)` when empty |
//!
//! A rejected insert hands the value back inside [`Overflow`]. A failed
//! call never changes the container.
//!
//! # Logging
//!
//! Accepted mutations are logged at `trace`. Rejected operations, including
//! peeks at an empty container, are logged at `debug`. Both go through the
//! [`log`] facade. Nothing is printed unless the application
//! installs a logger.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod list;
pub mod node;
pub mod queue;
pub mod render;
pub mod stack;

pub use error::{Overflow, Underflow};
pub use list::{LinkedList, Lines};
pub use node::{Link, Node};
pub use queue::Queue;
pub use render::Render;
pub use stack::{DEFAULT_STACK_LIMIT, Stack};
