//! Error types for holdall
//!
//! A single error kind carries a human-readable message and an optional
//! category code. The code is fixed at construction and never changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Well-known category codes produced by this crate's containers.
pub mod code {
    /// Popping an end of a container that holds no elements.
    pub const EMPTY_CONTAINER: &str = "EMPTY_CONTAINER";

    /// Reading an absent optional value through the checked accessor.
    pub const NONE: &str = "NONE";
}

/// Error type for holdall operations.
///
/// `Display` renders the message alone; the code, when present, is a
/// machine-readable category tag for callers that dispatch on failure
/// class rather than text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{msg}")]
pub struct Error {
    msg: String,
    code: Option<String>,
}

impl Error {
    /// Create an uncategorized error carrying only a message.
    #[must_use]
    pub fn plain(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            code: None,
        }
    }

    /// Create an error tagged with a category code.
    #[must_use]
    pub fn coded(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            code: Some(code.into()),
        }
    }

    /// Create the error signaling an absent value ([`code::NONE`]).
    #[must_use]
    pub fn none() -> Self {
        Self::coded(code::NONE, "value is absent")
    }

    /// Create an error for an operation on an empty container
    /// ([`code::EMPTY_CONTAINER`]).
    #[must_use]
    pub fn empty_container(msg: impl Into<String>) -> Self {
        Self::coded(code::EMPTY_CONTAINER, msg)
    }

    /// Whether a category code was assigned at construction.
    #[must_use]
    pub const fn has_code(&self) -> bool {
        self.code.is_some()
    }

    /// The category code, if one was assigned.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The error message.
    #[must_use]
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Whether this error signals an absent value.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.code() == Some(code::NONE)
    }

    /// Whether this error signals an operation on an empty container.
    #[must_use]
    pub fn is_empty_container(&self) -> bool {
        self.code() == Some(code::EMPTY_CONTAINER)
    }
}

/// Result type alias for holdall operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_error_has_no_code() {
        let err = Error::plain("boom");
        assert!(!err.has_code());
        assert_eq!(err.code(), None);
        assert_eq!(err.msg(), "boom");
    }

    #[test]
    fn test_coded_error_has_code() {
        let err = Error::coded("E1", "boom");
        assert!(err.has_code());
        assert_eq!(err.code(), Some("E1"));
        assert_eq!(err.msg(), "boom");
    }

    #[test]
    fn test_display_renders_message_only() {
        let err = Error::coded("E1", "something failed");
        assert_eq!(err.to_string(), "something failed");
    }

    #[test]
    fn test_none_error_predicate() {
        assert!(Error::none().is_none());
        assert!(Error::none().has_code());
        assert!(!Error::plain("boom").is_none());
    }

    #[test]
    fn test_empty_container_predicate() {
        let err = Error::empty_container("pop on empty deque");
        assert!(err.is_empty_container());
        assert!(!err.is_none());
        assert_eq!(err.code(), Some(code::EMPTY_CONTAINER));
    }

    #[test]
    fn test_error_is_std_error() {
        fn describe(err: &dyn std::error::Error) -> String {
            err.to_string()
        }
        assert_eq!(describe(&Error::plain("boom")), "boom");
    }

    #[test]
    fn test_serde_round_trip() {
        let err = Error::coded("E1", "boom");
        let json = serde_json::to_string(&err).unwrap_or_default();
        let back: Error = serde_json::from_str(&json).unwrap_or_else(|_| Error::plain(""));
        assert_eq!(back, err);
    }
}
