//! # attempt
//!
//! A monadic container and fluent combinators for composing fallible
//! computations.
//!
//! ## Overview
//!
//! This library provides [`Attempt`](control::Attempt), a two-state container
//! that wraps either the value produced by a computation or the error that
//! aborted it. A chain of combinators decides, step by step, whether to run
//! its callback, propagate an existing failure unchanged, or produce a new
//! failure, without resorting to early-return error handling at each step:
//!
//! - **Forward combinators** (`map`, `flat_map`, `filter`, `if_successful`)
//!   operate on the success branch and never alter an existing failure.
//! - **Recovery combinators** (`recover`, `flat_recover`) operate on the
//!   failure branch and may turn it back into a success.
//! - **Terminal extractions** (`unwrap_or`, `unwrap_or_else`, `or_raise`,
//!   `or_raise_with`) leave the fluent chain and return to ordinary
//!   `Result`-based control flow.
//!
//! ## Example
//!
//! ```rust
//! use attempt::prelude::*;
//!
//! let result = attempt(|| "abc".parse::<i32>())
//!     .recover(|_| Ok::<_, Cause>(-1))
//!     .map(|x| Ok::<_, Cause>(x.abs()))
//!     .unwrap_or(0);
//! assert_eq!(result, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use attempt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
}

pub mod control;
