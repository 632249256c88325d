//! Property-based tests for Attempt combinator laws.
//!
//! This module verifies the container's algebraic guarantees across
//! generated inputs:
//!
//! - **Factory law**: wrapping a value/error is lossless
//! - **Identity law**: mapping the identity function preserves the value
//! - **Composition law**: mapping two functions in sequence equals mapping
//!   their composition
//! - **Propagation law**: forward combinators never alter an existing
//!   failure's cause
//! - **Short-circuit law**: callbacks on the pass-through branch are never
//!   invoked
//! - **Recovery law**: a recovered failure yields the recovery value

use attempt::control::{Cause, PredicateFailedError, attempt};
use proptest::prelude::*;
use std::cell::Cell;

// =============================================================================
// Factory Laws
// =============================================================================

proptest! {
    /// Any computed value is held losslessly by a successful outcome.
    #[test]
    fn prop_factory_wraps_any_value(value in any::<i32>()) {
        let outcome = attempt(move || Ok::<_, Cause>(value));
        prop_assert!(outcome.is_successful());
        prop_assert_eq!(outcome.value(), Some(value));
    }

    /// Any raised error is held verbatim as the cause of a failed outcome.
    #[test]
    fn prop_factory_captures_any_message(message in "[a-z]{1,20}") {
        let outcome = attempt(|| Err::<i32, _>(Cause::from(message.clone())));
        prop_assert!(outcome.is_unsuccessful());
        prop_assert_eq!(outcome.cause().unwrap().to_string(), message);
    }
}

// =============================================================================
// Identity and Composition Laws
// =============================================================================

proptest! {
    /// Mapping the identity function preserves the held value.
    #[test]
    fn prop_map_identity_law(value in any::<i32>()) {
        let outcome = attempt(move || Ok::<_, Cause>(value)).map(|x| Ok::<_, Cause>(x));
        prop_assert_eq!(outcome.value(), Some(value));
    }

    /// Mapping two functions in sequence equals mapping their composition.
    #[test]
    fn prop_map_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let sequenced = attempt(move || Ok::<_, Cause>(value))
            .map(move |n| Ok::<_, Cause>(function1(n)))
            .map(move |n| Ok::<_, Cause>(function2(n)));
        let composed = attempt(move || Ok::<_, Cause>(value))
            .map(move |n| Ok::<_, Cause>(function2(function1(n))));

        prop_assert_eq!(sequenced.value(), composed.value());
    }

    /// flat_map over a success is the returned outcome itself.
    #[test]
    fn prop_flat_map_left_identity_law(value in any::<i32>()) {
        let sequenced = attempt(move || Ok::<_, Cause>(value))
            .flat_map(|n| attempt(move || Ok::<_, Cause>(n.wrapping_mul(3))));
        let direct = attempt(move || Ok::<_, Cause>(value.wrapping_mul(3)));
        prop_assert_eq!(sequenced.value(), direct.value());
    }
}

// =============================================================================
// Propagation and Short-Circuit Laws
// =============================================================================

proptest! {
    /// Forward combinators leave a failure's cause untouched and never
    /// invoke their callbacks.
    #[test]
    fn prop_forward_combinators_propagate_failure(message in "[a-z]{1,20}") {
        let invocations = Cell::new(0);
        let touch = || invocations.set(invocations.get() + 1);

        let outcome = attempt(|| Err::<i32, _>(Cause::from(message.clone())))
            .map(|n: i32| {
                touch();
                Ok::<_, Cause>(n)
            })
            .filter(|_| {
                touch();
                Ok::<_, Cause>(true)
            })
            .if_successful(|_| {
                touch();
                Ok::<_, Cause>(())
            });

        prop_assert_eq!(invocations.get(), 0);
        prop_assert_eq!(outcome.cause().unwrap().to_string(), message);
    }

    /// Recovery combinators never invoke their callbacks on a success.
    #[test]
    fn prop_recovery_combinators_skip_success(value in any::<i32>()) {
        let invocations = Cell::new(0);

        let outcome = attempt(move || Ok::<_, Cause>(value))
            .recover(|_| {
                invocations.set(invocations.get() + 1);
                Ok::<_, Cause>(0)
            })
            .flat_recover(|_| {
                invocations.set(invocations.get() + 1);
                attempt(|| Ok::<_, Cause>(0))
            });

        prop_assert_eq!(invocations.get(), 0);
        prop_assert_eq!(outcome.value(), Some(value));
    }
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    /// A matching predicate keeps the value; a rejecting predicate moves
    /// the value into the cause.
    #[test]
    fn prop_filter_match_and_mismatch(value in any::<i32>()) {
        let kept = attempt(move || Ok::<_, Cause>(value)).filter(|_| Ok::<_, Cause>(true));
        prop_assert_eq!(kept.value(), Some(value));

        let rejected = attempt(move || Ok::<_, Cause>(value)).filter(|_| Ok::<_, Cause>(false));
        let carried = rejected
            .cause()
            .and_then(|cause| cause.downcast_ref::<PredicateFailedError<i32>>())
            .map(|error| *error.value());
        prop_assert_eq!(carried, Some(value));
    }
}

// =============================================================================
// Recovery and Extraction Laws
// =============================================================================

proptest! {
    /// A recovered failure yields the recovery value on extraction.
    #[test]
    fn prop_recover_round_trip(message in "[a-z]{1,20}", replacement in any::<i32>()) {
        let value = attempt(|| Err::<i32, _>(Cause::from(message)))
            .recover(move |_| Ok::<_, Cause>(replacement))
            .or_raise();
        prop_assert_eq!(value.ok(), Some(replacement));
    }

    /// unwrap_or ignores its default on a success and returns it on a
    /// failure.
    #[test]
    fn prop_unwrap_or_law(value in any::<i32>(), default in any::<i32>()) {
        let succeeded = attempt(move || Ok::<_, Cause>(value)).unwrap_or(default);
        prop_assert_eq!(succeeded, value);

        let failed = attempt(|| Err::<i32, _>(Cause::from("boom"))).unwrap_or(default);
        prop_assert_eq!(failed, default);
    }

    /// or_raise preserves the original cause through the raised error.
    #[test]
    fn prop_or_raise_preserves_cause(message in "[a-z]{1,20}") {
        let error = attempt(|| Err::<i32, _>(Cause::from(message.clone())))
            .or_raise()
            .unwrap_err();
        prop_assert_eq!(error.cause().to_string(), message);
    }
}
