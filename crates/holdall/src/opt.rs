//! Nil-aware optional value wrapper
//!
//! [`Opt`] represents "a value of `T`, or explicitly absent". It is a plain
//! value type, copied by assignment, with no shared ownership. Presence is
//! decided at construction and never changes: [`Opt::of`] is the path for
//! value kinds that are always present, [`Opt::of_nilable`] resolves
//! presence from a nilable payload (`Option<T>`), and [`Opt::absent`] is
//! the explicit empty.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A value of `T`, or explicitly absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opt<T> {
    value: Option<T>,
}

impl<T> Opt<T> {
    /// An explicitly absent value.
    #[must_use]
    pub const fn absent() -> Self {
        Self { value: None }
    }

    /// Wrap a value that is always present.
    #[must_use]
    pub const fn of(v: T) -> Self {
        Self { value: Some(v) }
    }

    /// Wrap a nilable payload; `None` maps to absent.
    #[must_use]
    pub const fn of_nilable(v: Option<T>) -> Self {
        Self { value: v }
    }

    /// Whether no value is held.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Checked accessor: the held value, or an error coded
    /// [`crate::error::code::NONE`] when absent.
    ///
    /// This is the recommended default accessor.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::code::NONE`] when no value is held.
    pub fn try_get(&self) -> Result<&T> {
        self.value.as_ref().ok_or_else(Error::none)
    }

    /// Borrow the held value, if any.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Unwrap into the underlying `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T: Clone + Default> Opt<T> {
    /// Unchecked accessor: the held value, or `T::default()` when absent.
    ///
    /// When absent, the content of the returned value is meaningless;
    /// callers are expected to check [`Opt::is_absent`] first. Prefer
    /// [`Opt::try_get`] unless presence was already established.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.clone().unwrap_or_default()
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nilable(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(opt: Opt<T>) -> Self {
        opt.into_option()
    }
}
