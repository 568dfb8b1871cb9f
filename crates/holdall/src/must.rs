//! Panic-on-error helpers
//!
//! These convert a returned error into an unconditional, stack-unwinding
//! abort. They exist for call sites asserting "this error is a programming
//! bug, not a recoverable condition" and must never be applied to expected
//! failures; recoverable paths use `Result` and `?` instead. The panic
//! propagates past normal returns until an explicit
//! [`std::panic::catch_unwind`] boundary or process exit.

// The whole contract of this module is the panic.
#![allow(clippy::panic)]

use std::fmt::Display;

/// Assert that a fallible operation succeeded.
///
/// Returns normally with no effect on `Ok`; panics with the error's text
/// on `Err`.
#[track_caller]
pub fn must<E: Display>(res: Result<(), E>) {
    if let Err(err) = res {
        panic!("required operation failed: {err}");
    }
}

/// Assert that a fallible operation produced a value, and return it.
///
/// Returns the value unchanged on `Ok`; panics with the error's text on
/// `Err`.
#[track_caller]
pub fn must_get<T, E: Display>(res: Result<T, E>) -> T {
    match res {
        Ok(v) => v,
        Err(err) => panic!("required operation failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::panic::catch_unwind;

    #[test]
    fn test_must_ok_returns_normally() {
        must(Ok::<(), Error>(()));
    }

    #[test]
    fn test_must_err_unwinds() {
        let outcome = catch_unwind(|| must(Err::<(), Error>(Error::plain("x"))));
        assert!(outcome.is_err());
    }

    #[test]
    fn test_must_panic_carries_message() {
        let outcome = catch_unwind(|| must(Err::<(), Error>(Error::plain("boom"))));
        let Err(payload) = outcome else {
            panic!("expected unwind");
        };
        let text = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .unwrap_or_default();
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_must_get_ok_returns_value() {
        assert_eq!(must_get(Ok::<i32, Error>(42)), 42);
    }

    #[test]
    fn test_must_get_err_unwinds() {
        let outcome = catch_unwind(|| must_get(Err::<i32, Error>(Error::coded("E1", "bad"))));
        assert!(outcome.is_err());
    }

    #[test]
    fn test_must_works_with_any_display_error() {
        let outcome = catch_unwind(|| {
            let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
            must(Err::<(), std::io::Error>(io));
        });
        assert!(outcome.is_err());
    }
}
