//! # Holdall
//!
//! Generic in-memory container utilities:
//! - [`Deque`] - a double-ended queue
//! - [`Opt`] - a nil-aware optional value wrapper
//! - [`Set`] - a hash set
//! - [`seq`] - sequence helper functions
//! - [`Error`] / [`Result`] - the coded error these containers signal with
//! - [`must()`] / [`must_get()`] - panic-on-error helpers for invariant violations
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. Use:
//! - `?` operator for propagation
//! - `map`, `and_then` combinators for transformation
//! - [`must()`] / [`must_get()`] only where an error is a programming bug
//!
//! ## Thread Safety
//!
//! No type in this crate synchronizes internally. All operations are
//! synchronous and non-blocking, with no background activity. An instance
//! mutated from multiple threads must be wrapped in an external lock;
//! concurrent access is entirely the caller's responsibility.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod deque;
pub mod error;
pub mod must;
pub mod opt;
pub mod seq;
pub mod set;

pub use deque::Deque;
pub use error::{Error, Result};
pub use must::{must, must_get};
pub use opt::Opt;
pub use set::Set;
