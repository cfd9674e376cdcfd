//! Error types for guard failures
//!
//! Every guard reports failure through a single [`GuardError`]. The
//! [`GuardErrorKind`] says which family of constraint was violated; the
//! message is the user-facing text, and `params` carry the structured details
//! (actual value, bounds, type name) for callers that want more than a string.
//!
//! All string fields use `Cow<'static, str>` so static parameter and method
//! names never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The family of constraint a guard found violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GuardErrorKind {
    /// The value violates an ordering or bound (numeric and date guards).
    OutOfRange,
    /// The value has the wrong structure, e.g. an identifier of another version.
    InvalidFormat,
    /// The value equals its type's default where a real value was required.
    InvalidArgument,
    /// A categorical check failed: text emptiness or length, a predicate.
    Validation,
    /// The value is absent where presence was required.
    NullReference,
}

impl GuardErrorKind {
    /// Stable snake_case code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OutOfRange => "out_of_range",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidArgument => "invalid_argument",
            Self::Validation => "validation",
            Self::NullReference => "null_reference",
        }
    }
}

impl fmt::Display for GuardErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A failed guard.
///
/// `Display` prints the message and nothing else, so a caller-supplied
/// override is the complete text the user sees.
///
/// # Examples
///
/// ```
/// use guards::prelude::*;
///
/// fn withdraw(amount: i64) -> GuardResult<i64> {
///     amount.ensure_positive(call_site!(amount))
/// }
///
/// let err = withdraw(0).unwrap_err();
/// assert!(err.is_out_of_range());
/// assert_eq!(err.parameter, "amount");
/// assert_eq!(err.method, "withdraw");
/// assert_eq!(err.param("actual"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct GuardError {
    /// Which family of constraint failed.
    pub kind: GuardErrorKind,

    /// Source text of the guarded expression, e.g. `amount` or `self.amount`.
    pub parameter: Cow<'static, str>,

    /// Name of the function that invoked the guard.
    pub method: Cow<'static, str>,

    /// Human-readable message; either generated or the caller's override.
    pub message: Cow<'static, str>,

    /// Structured details in insertion order.
    ///
    /// Keys used by the built-in guards: `actual`, `min`, `max`, `after`,
    /// `before`, `length`, `type`, `version`, `default`.
    pub params: Vec<(Cow<'static, str>, String)>,
}

impl GuardError {
    /// Creates an error with no params.
    pub fn new(
        kind: GuardErrorKind,
        parameter: impl Into<Cow<'static, str>>,
        method: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            parameter: parameter.into(),
            method: method.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a detail parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    }

    /// The stable code of this error's kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Returns true for ordering and bound violations.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.kind == GuardErrorKind::OutOfRange
    }

    /// Returns true for structural format violations.
    #[must_use]
    pub fn is_invalid_format(&self) -> bool {
        self.kind == GuardErrorKind::InvalidFormat
    }

    /// Returns true when a default value was rejected.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind == GuardErrorKind::InvalidArgument
    }

    /// Returns true for categorical check failures.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind == GuardErrorKind::Validation
    }

    /// Returns true when a required value was absent.
    #[must_use]
    pub fn is_null_reference(&self) -> bool {
        self.kind == GuardErrorKind::NullReference
    }
}

/// Result of a guard: the original value, or why it was rejected.
pub type GuardResult<T> = Result<T, GuardError>;

// ============================================================================
// TESTS
// ============================================================================
