//! Control structures for fallible computations.
//!
//! This module provides the building blocks for running a computation that
//! may fail and processing its outcome through a fluent interface:
//!
//! - [`Attempt`]: the outcome of a computation, holding either the computed
//!   value or the error that aborted it
//! - [`attempt`]: runs a fallible computation once and captures its outcome
//! - [`Cause`]: the type-erased error channel shared by every combinator
//! - [`AttemptFailedError`]: returned by [`Attempt::or_raise`] on a failed
//!   outcome
//! - [`PredicateFailedError`]: used as a failure cause by
//!   [`Attempt::filter`] when a value is rejected
//!
//! # Examples
//!
//! ## Chaining combinators
//!
//! ```rust
//! use attempt::control::{Cause, attempt};
//!
//! let result = attempt(|| "17".parse::<i32>())
//!     .map(|n| Ok::<_, Cause>(n * 2))
//!     .filter(|n| Ok::<_, Cause>(*n > 0))
//!     .unwrap_or(0);
//! assert_eq!(result, 34);
//! ```
//!
//! ## Recovering from a failure
//!
//! ```rust
//! use attempt::control::{Cause, attempt};
//!
//! let result = attempt(|| "not a number".parse::<i32>())
//!     .recover(|_| Ok::<_, Cause>(-1))
//!     .unwrap_or(0);
//! assert_eq!(result, -1);
//! ```

mod error;
mod outcome;

pub use error::{AttemptFailedError, Cause, PredicateFailedError};
pub use outcome::{Attempt, attempt};
