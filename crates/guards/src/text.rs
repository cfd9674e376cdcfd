//! Text presence, emptiness and length guards
//!
//! Text may be absent (`None`) or present. Absent text fails every guard in
//! this module; it is never treated as an empty string that happens to satisfy
//! a zero-length bound.
//!
//! Length is measured in Unicode scalar values (`chars`), not bytes.

use crate::foundation::{CallSite, GuardError, GuardErrorKind, GuardResult};

/// Placeholder shown in messages for absent text.
const NULL_TEXT: &str = "null";

// ============================================================================
// GUARDS
// ============================================================================

/// Checks over text that may be absent.
///
/// Implemented for `Option<S>` where `S: AsRef<str>` (covering `&str`,
/// `String`, `Cow<str>`, `Box<str>` ...) and for bare `&str` and `String`,
/// which are always present.
///
/// # Examples
///
/// ```
/// use guards::prelude::*;
///
/// fn set_code(code: Option<String>) -> GuardResult<String> {
///     code.ensure_exact_string_length(3, call_site!(code))
/// }
///
/// assert_eq!(set_code(Some("EUR".into())).unwrap(), "EUR");
/// assert!(set_code(None).unwrap_err().message.contains("'null'"));
/// ```
///
/// # Presence of text
///
/// Use [`ensure_string_not_null`](TextGuards::ensure_string_not_null) for
/// text. On `Option<String>` a plain `ensure_not_null` resolves to
/// [`NullGuards`](crate::presence::NullGuards) instead, which fails with
/// [`NullReference`](crate::GuardErrorKind::NullReference) and no `'null'`
/// placeholder in the message.
///
/// ```
/// use guards::prelude::*;
///
/// let name: Option<String> = None;
/// let text = name.clone().ensure_string_not_null(call_site!(name)).unwrap_err();
/// assert!(text.is_validation());
/// assert!(text.message.contains("'null'"));
///
/// let generic = name.ensure_not_null(call_site!(name)).unwrap_err();
/// assert!(generic.is_null_reference());
/// ```
pub trait TextGuards: Sized {
    /// The present text type returned on success.
    type Text: AsRef<str>;

    /// The text, or `None` when absent.
    fn into_text(self) -> Option<Self::Text>;

    /// Succeeds iff the text is present.
    fn ensure_string_not_null(self, site: CallSite) -> GuardResult<Self::Text> {
        self.into_text().ok_or_else(|| {
            reject(site, None, |_| "String mag niet null zijn.".to_owned())
        })
    }

    /// Succeeds iff the text is present and not blank after trimming.
    fn ensure_not_empty(self, site: CallSite) -> GuardResult<Self::Text> {
        match self.into_text() {
            Some(text) if !text.as_ref().trim().is_empty() => Ok(text),
            text => Err(reject(site, text.as_ref().map(AsRef::as_ref), |_| {
                "String mag niet leeg zijn.".to_owned()
            })),
        }
    }

    /// Succeeds iff the text is present and at least `min` characters long.
    fn ensure_minimum_string_length(self, min: usize, site: CallSite) -> GuardResult<Self::Text> {
        match self.into_text() {
            Some(text) if char_len(text.as_ref()) >= min => Ok(text),
            text => Err(reject(site, text.as_ref().map(AsRef::as_ref), |length| {
                format!("Lengte is {length} en moet minimaal {min} zijn.")
            })
            .with_param("min", min)),
        }
    }

    /// Succeeds iff the text is present and exactly `length` characters long.
    fn ensure_exact_string_length(
        self,
        length: usize,
        site: CallSite,
    ) -> GuardResult<Self::Text> {
        match self.into_text() {
            Some(text) if char_len(text.as_ref()) == length => Ok(text),
            text => Err(reject(site, text.as_ref().map(AsRef::as_ref), |actual| {
                format!("Lengte is {actual} en moet exact {length} zijn.")
            })
            .with_param("exact", length)),
        }
    }

    /// Succeeds iff the text is present and at most `max` characters long.
    fn ensure_maximum_string_length(self, max: usize, site: CallSite) -> GuardResult<Self::Text> {
        match self.into_text() {
            Some(text) if char_len(text.as_ref()) <= max => Ok(text),
            text => Err(reject(site, text.as_ref().map(AsRef::as_ref), |length| {
                format!("Lengte is {length} en mag maximaal {max} zijn.")
            })
            .with_param("max", max)),
        }
    }
}

impl<S: AsRef<str>> TextGuards for Option<S> {
    type Text = S;

    fn into_text(self) -> Option<S> {
        self
    }
}

impl<'a> TextGuards for &'a str {
    type Text = &'a str;

    fn into_text(self) -> Option<&'a str> {
        Some(self)
    }
}

impl TextGuards for String {
    type Text = Self;

    fn into_text(self) -> Option<Self> {
        Some(self)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Builds a text error; `constraint` receives the measured length (0 if absent).
fn reject(
    site: CallSite,
    text: Option<&str>,
    constraint: impl FnOnce(usize) -> String,
) -> GuardError {
    let length = text.map_or(0, char_len);
    let shown = text.unwrap_or(NULL_TEXT);
    site.reject(GuardErrorKind::Validation, |parameter, method| {
        format!(
            "Ongeldige waarde '{shown}' voor {parameter} in methode {method}. {}",
            constraint(length)
        )
    })
    .with_param("actual", shown)
    .with_param("length", length)
}

// ============================================================================
// TESTS
// ============================================================================
