//! Attempt type - the outcome of a fallible computation.
//!
//! This module provides the [`Attempt<T>`] type, which represents the
//! outcome of a computation that may fail. An attempt is either a
//! `Success(T)` holding the computed value or a `Failure(Cause)` holding
//! the error that aborted the computation. The [`attempt`] function runs a
//! computation once and captures its outcome; the fluent interface then
//! allows chains of method calls handling successful or failed operations
//! without unwrapping at each step.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Attempt, Cause, attempt};
//!
//! // Capturing an outcome
//! let parsed = attempt(|| "42".parse::<i32>());
//! assert!(parsed.is_successful());
//!
//! // Pattern matching
//! match parsed {
//!     Attempt::Success(n) => assert_eq!(n, 42),
//!     Attempt::Failure(cause) => panic!("unexpected failure: {cause}"),
//! }
//!
//! // Chaining combinators, then leaving the chain
//! let result = attempt(|| "abc".parse::<i32>())
//!     .recover(|_| Ok::<_, Cause>(-1))
//!     .map(|n| Ok::<_, Cause>(n.abs()))
//!     .unwrap_or(0);
//! assert_eq!(result, 1);
//! ```

use super::error::{AttemptFailedError, Cause, PredicateFailedError};
use std::error::Error;
use std::fmt;

/// The outcome of a fallible computation.
///
/// `Attempt<T>` is exactly one of two states at all times:
///
/// - `Success(T)` holds the computed value
/// - `Failure(Cause)` holds the error that aborted the computation
///
/// The state never changes after construction; every combinator consumes
/// the receiver and returns a new outcome (or the receiver itself on
/// pass-through branches). Forward combinators ([`map`](Self::map),
/// [`flat_map`](Self::flat_map), [`filter`](Self::filter),
/// [`if_successful`](Self::if_successful)) never alter an existing
/// failure's cause; only the recovery combinators
/// ([`recover`](Self::recover), [`flat_recover`](Self::flat_recover)) may
/// replace it.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
///
/// # Examples
///
/// ```rust
/// use attempt::control::{Cause, attempt};
///
/// let doubled = attempt(|| "21".parse::<i32>())
///     .map(|n| Ok::<_, Cause>(n * 2));
/// assert_eq!(doubled.value(), Some(42));
/// ```
#[must_use = "this `Attempt` may hold a failure, which should be handled"]
pub enum Attempt<T> {
    /// The successful outcome, holding the computed value.
    Success(T),
    /// The failed outcome, holding the error that aborted the computation.
    Failure(Cause),
}

// =============================================================================
// Factory
// =============================================================================

/// Attempts to perform a computation that returns a value.
///
/// The supplier is invoked exactly once, synchronously. If it returns
/// `Ok(value)`, the outcome is a `Success` holding the value; if it returns
/// `Err(error)`, the outcome is a `Failure` holding that error verbatim as
/// its cause (never re-wrapped, never swallowed). There are no retries.
///
/// # Examples
///
/// ```rust
/// use attempt::control::{Cause, attempt};
///
/// let parsed = attempt(|| "42".parse::<i32>());
/// assert_eq!(parsed.value(), Some(42));
///
/// let failed = attempt(|| "forty-two".parse::<i32>());
/// assert!(failed.is_unsuccessful());
/// ```
#[inline]
pub fn attempt<T, F, E>(supplier: F) -> Attempt<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    match supplier() {
        Ok(value) => Attempt::Success(value),
        Err(error) => Attempt::Failure(error.into()),
    }
}

impl<T> Attempt<T> {
    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if the computation was successful.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, attempt};
    ///
    /// assert!(attempt(|| Ok::<_, Cause>(5)).is_successful());
    /// assert!(!attempt(|| "x".parse::<i32>()).is_successful());
    /// ```
    #[inline]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the computation was unsuccessful.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, attempt};
    ///
    /// assert!(attempt(|| "x".parse::<i32>()).is_unsuccessful());
    /// assert!(!attempt(|| Ok::<_, Cause>(5)).is_unsuccessful());
    /// ```
    #[inline]
    pub const fn is_unsuccessful(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value and Cause Extraction
    // =========================================================================

    /// Converts the outcome into an `Option<T>`, consuming the outcome.
    ///
    /// Returns `Some(value)` on a success, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// assert_eq!(attempt(|| "42".parse::<i32>()).value(), Some(42));
    /// assert_eq!(attempt(|| "x".parse::<i32>()).value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the computed value if the computation was
    /// successful.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// let outcome = attempt(|| "42".parse::<i32>());
    /// assert_eq!(outcome.value_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the cause of the failure, or `None` if the computation was
    /// successful.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, attempt};
    ///
    /// let failed = attempt(|| "x".parse::<i32>());
    /// assert!(failed.cause().is_some());
    ///
    /// let succeeded = attempt(|| Ok::<_, Cause>(5));
    /// assert!(succeeded.cause().is_none());
    /// ```
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause.as_ref()),
        }
    }

    /// Converts the outcome into its cause, consuming the outcome.
    ///
    /// Returns `Some(cause)` on a failure, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// let cause = attempt(|| "x".parse::<i32>()).into_cause();
    /// assert!(cause.is_some());
    /// ```
    #[inline]
    pub fn into_cause(self) -> Option<Cause> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Returns a failure if the computed value does not match the
    /// predicate, or if the predicate fails; otherwise returns the success
    /// holding the value.
    ///
    /// On a success, the predicate is invoked with a reference to the
    /// value:
    ///
    /// - `Ok(true)` keeps the same success unchanged
    /// - `Ok(false)` produces a failure whose cause is a
    ///   [`PredicateFailedError`] carrying the rejected value
    /// - `Err(error)` produces a failure wrapping that error
    ///
    /// On a failure, the predicate is never invoked and the failure is
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, PredicateFailedError, attempt};
    ///
    /// let kept = attempt(|| Ok::<_, Cause>(5)).filter(|n| Ok::<_, Cause>(*n > 0));
    /// assert_eq!(kept.value(), Some(5));
    ///
    /// let rejected = attempt(|| Ok::<_, Cause>(5)).filter(|n| Ok::<_, Cause>(*n < 0));
    /// let error = rejected
    ///     .cause()
    ///     .and_then(|cause| cause.downcast_ref::<PredicateFailedError<i32>>())
    ///     .expect("the rejected value is carried by the cause");
    /// assert_eq!(*error.value(), 5);
    ///
    /// let errored = attempt(|| Ok::<_, Cause>(5))
    ///     .filter(|_| Err(Cause::from("predicate exploded")));
    /// assert_eq!(errored.cause().unwrap().to_string(), "predicate exploded");
    /// ```
    #[inline]
    pub fn filter<P, E>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Result<bool, E>,
        E: Into<Cause>,
        T: fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => match predicate(&value) {
                Ok(true) => Self::Success(value),
                Ok(false) => Self::Failure(Box::new(PredicateFailedError::new(value))),
                Err(error) => Self::Failure(error.into()),
            },
            Self::Failure(cause) => Self::Failure(cause),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies the given mapping function to the computed value if the
    /// computation was successful and wraps the result in a success.
    ///
    /// If the mapping function fails, its error becomes the cause of a new
    /// failure. If the computation was already unsuccessful, the mapping
    /// function is never invoked and the existing failure propagates with
    /// its cause untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, attempt};
    ///
    /// let doubled = attempt(|| Ok::<_, Cause>(21)).map(|n| Ok::<_, Cause>(n * 2));
    /// assert_eq!(doubled.value(), Some(42));
    ///
    /// let failed = attempt(|| "x".parse::<i32>()).map(|n| Ok::<_, Cause>(n * 2));
    /// assert!(failed.is_unsuccessful());
    /// ```
    #[inline]
    pub fn map<R, F, E>(self, mapper: F) -> Attempt<R>
    where
        F: FnOnce(T) -> Result<R, E>,
        E: Into<Cause>,
    {
        match self {
            Self::Success(value) => match mapper(value) {
                Ok(mapped) => Attempt::Success(mapped),
                Err(error) => Attempt::Failure(error.into()),
            },
            Self::Failure(cause) => Attempt::Failure(cause),
        }
    }

    /// Applies the given mapping function to the computed value if the
    /// computation was successful; the returned outcome becomes the new
    /// state directly.
    ///
    /// Unlike [`map`](Self::map), the mapping function produces an
    /// [`Attempt`] of its own, so a successful outer value with an inner
    /// failure collapses to that inner failure; there is no double
    /// wrapping. If the computation was already unsuccessful, the mapping
    /// function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, attempt};
    ///
    /// let parsed = attempt(|| Ok::<_, Cause>("17"))
    ///     .flat_map(|text| attempt(|| text.parse::<i32>()));
    /// assert_eq!(parsed.value(), Some(17));
    ///
    /// let collapsed = attempt(|| Ok::<_, Cause>("abc"))
    ///     .flat_map(|text| attempt(|| text.parse::<i32>()));
    /// assert!(collapsed.is_unsuccessful());
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, mapper: F) -> Attempt<R>
    where
        F: FnOnce(T) -> Attempt<R>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(cause) => Attempt::Failure(cause),
        }
    }

    // =========================================================================
    // Recovery Operations
    // =========================================================================

    /// Applies the given mapping function to the cause of the failure if
    /// the computation was unsuccessful and wraps the result in a success.
    ///
    /// If the mapping function fails, its error becomes the cause of a new
    /// failure. If the computation was successful, the mapping function is
    /// never invoked and the success propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, attempt};
    ///
    /// let recovered = attempt(|| "x".parse::<i32>()).recover(|_| Ok::<_, Cause>(-1));
    /// assert_eq!(recovered.value(), Some(-1));
    ///
    /// let untouched = attempt(|| Ok::<_, Cause>(5)).recover(|_| Ok::<_, Cause>(-1));
    /// assert_eq!(untouched.value(), Some(5));
    /// ```
    #[inline]
    pub fn recover<F, E>(self, mapper: F) -> Self
    where
        F: FnOnce(Cause) -> Result<T, E>,
        E: Into<Cause>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => match mapper(cause) {
                Ok(value) => Self::Success(value),
                Err(error) => Self::Failure(error.into()),
            },
        }
    }

    /// Applies the given mapping function to the cause of the failure if
    /// the computation was unsuccessful; the returned outcome becomes the
    /// new state directly.
    ///
    /// This is the failure-branch counterpart of
    /// [`flat_map`](Self::flat_map). If the computation was successful, the
    /// mapping function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// let recovered = attempt(|| "x".parse::<i32>())
    ///     .flat_recover(|_| attempt(|| "31".parse::<i32>()));
    /// assert_eq!(recovered.value(), Some(31));
    ///
    /// let still_failed = attempt(|| "x".parse::<i32>())
    ///     .flat_recover(|_| attempt(|| "y".parse::<i32>()));
    /// assert!(still_failed.is_unsuccessful());
    /// ```
    #[inline]
    pub fn flat_recover<F>(self, mapper: F) -> Self
    where
        F: FnOnce(Cause) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => mapper(cause),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Performs the given action only if the computation was successful.
    ///
    /// The computed value is passed by reference. If the action completes,
    /// the same success is returned unchanged; if the action fails, its
    /// error becomes the cause of a new failure and the formerly successful
    /// value is discarded. On a failure the action is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, attempt};
    ///
    /// let mut seen = Vec::new();
    /// let outcome = attempt(|| Ok::<_, Cause>(5)).if_successful(|n| {
    ///     seen.push(*n);
    ///     Ok::<_, Cause>(())
    /// });
    /// assert!(outcome.is_successful());
    /// assert_eq!(seen, vec![5]);
    ///
    /// let rejected = attempt(|| Ok::<_, Cause>(5))
    ///     .if_successful(|_| Err(Cause::from("side effect failed")));
    /// assert!(rejected.is_unsuccessful());
    /// ```
    #[inline]
    pub fn if_successful<A, E>(self, action: A) -> Self
    where
        A: FnOnce(&T) -> Result<(), E>,
        E: Into<Cause>,
    {
        match self {
            Self::Success(value) => match action(&value) {
                Ok(()) => Self::Success(value),
                Err(error) => Self::Failure(error.into()),
            },
            Self::Failure(cause) => Self::Failure(cause),
        }
    }

    /// Performs the given action only if the computation was unsuccessful.
    ///
    /// The cause of the failure is passed by reference; the outcome is
    /// returned unchanged either way. On a success the action is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// let mut messages = Vec::new();
    /// let outcome = attempt(|| "x".parse::<i32>())
    ///     .if_unsuccessful(|cause| messages.push(cause.to_string()));
    /// assert!(outcome.is_unsuccessful());
    /// assert_eq!(messages.len(), 1);
    /// ```
    #[inline]
    pub fn if_unsuccessful<A>(self, action: A) -> Self
    where
        A: FnOnce(&(dyn Error + Send + Sync + 'static)),
    {
        if let Self::Failure(cause) = &self {
            action(cause.as_ref());
        }
        self
    }

    // =========================================================================
    // Terminal Extraction
    // =========================================================================

    /// Returns the computed value if the computation was successful,
    /// otherwise returns the given value.
    ///
    /// The argument is eagerly evaluated; for a lazily computed fallback
    /// use [`unwrap_or_else`](Self::unwrap_or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// assert_eq!(attempt(|| "42".parse::<i32>()).unwrap_or(0), 42);
    /// assert_eq!(attempt(|| "x".parse::<i32>()).unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the computed value if the computation was successful,
    /// otherwise obtains a value from the given supplier.
    ///
    /// The supplier is only invoked on a failed outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// assert_eq!(attempt(|| "42".parse::<i32>()).unwrap_or_else(|| 0), 42);
    /// assert_eq!(attempt(|| "x".parse::<i32>()).unwrap_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_else<S>(self, supplier: S) -> T
    where
        S: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    /// Returns the computed value if the computation was successful,
    /// otherwise returns an [`AttemptFailedError`] holding the cause of
    /// the failure.
    ///
    /// This is the deliberate exit point of the fluent chain back into
    /// `?`-based control flow.
    ///
    /// # Errors
    ///
    /// Returns `Err(AttemptFailedError)` if the computation was
    /// unsuccessful; the original cause is reachable through
    /// [`AttemptFailedError::cause`] and [`std::error::Error::source`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let value = attempt(|| "42".parse::<i32>()).or_raise()?;
    /// assert_eq!(value, 42);
    ///
    /// let error = attempt(|| "x".parse::<i32>()).or_raise().unwrap_err();
    /// assert!(error.cause().is::<std::num::ParseIntError>());
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn or_raise(self) -> Result<T, AttemptFailedError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(AttemptFailedError::new(cause)),
        }
    }

    /// Returns the computed value if the computation was successful,
    /// otherwise returns an error obtained by applying the given function
    /// to the cause of the failure.
    ///
    /// The function is usually an error constructor that takes the cause,
    /// used for error translation and chaining; it is only invoked on a
    /// failed outcome.
    ///
    /// # Errors
    ///
    /// Returns `Err(function(cause))` if the computation was unsuccessful.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::attempt;
    ///
    /// let error = attempt(|| "x".parse::<i32>())
    ///     .or_raise_with(|cause| format!("bad input: {cause}"))
    ///     .unwrap_err();
    /// assert!(error.starts_with("bad input:"));
    /// ```
    #[inline]
    pub fn or_raise_with<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce(Cause) -> E,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(function(cause)),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Attempt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(cause) => formatter.debug_tuple("Failure").field(cause).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E: Into<Cause>> From<Result<T, E>> for Attempt<T> {
    /// Converts a `Result` to an `Attempt`.
    ///
    /// `Ok(value)` becomes a success, and `Err(error)` becomes a failure
    /// whose cause is the converted error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Attempt;
    ///
    /// let outcome: Attempt<i32> = "42".parse::<i32>().into();
    /// assert_eq!(outcome.value(), Some(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Attempt<T>> for Result<T, Cause> {
    /// Converts an `Attempt` to a `Result`.
    ///
    /// A success becomes `Ok(value)`, and a failure becomes `Err(cause)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Attempt, Cause, attempt};
    ///
    /// let result: Result<i32, Cause> = attempt(|| "42".parse::<i32>()).into();
    /// assert_eq!(result.unwrap(), 42);
    /// ```
    #[inline]
    fn from(outcome: Attempt<T>) -> Self {
        match outcome {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(cause) => Err(cause),
        }
    }
}

// Static assertions to verify an outcome shares thread-safety with its value
// type; the cause channel is Send + Sync on its own.
static_assertions::assert_impl_all!(Attempt<i32>: Send, Sync);
static_assertions::assert_impl_all!(Attempt<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Attempt<std::rc::Rc<i32>>: Send, Sync);
