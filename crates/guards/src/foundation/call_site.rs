//! Diagnostic context captured where a guard is invoked.

use std::borrow::Cow;

use crate::foundation::{GuardError, GuardErrorKind};

/// Names the guarded parameter and the function guarding it.
///
/// Usually built with [`call_site!`](crate::call_site), which captures both
/// names at compile time. Build it by hand with [`CallSite::new`] when the
/// macro does not fit, e.g. when forwarding a guard from a helper function.
///
/// # Examples
///
/// ```
/// use guards::prelude::*;
///
/// fn open(port: u16) -> GuardResult<u16> {
///     port.ensure_in_range(1024, 49151, call_site!(port))
/// }
///
/// let err = open(80).unwrap_err();
/// assert!(err.message.contains("port"));
/// assert!(err.message.contains("open"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Source text of the guarded expression.
    pub parameter: Cow<'static, str>,
    /// Name of the enclosing function.
    pub method: Cow<'static, str>,
    /// Replaces the generated message entirely when set.
    pub message: Option<Cow<'static, str>>,
}

impl CallSite {
    /// Creates a call site from explicit names.
    pub fn new(
        parameter: impl Into<Cow<'static, str>>,
        method: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            method: method.into(),
            message: None,
        }
    }

    /// Overrides the message of any error raised through this call site.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builds the error for a failed check and records it.
    ///
    /// `default_message` only runs when no override is set.
    pub(crate) fn reject(
        self,
        kind: GuardErrorKind,
        default_message: impl FnOnce(&str, &str) -> String,
    ) -> GuardError {
        let message = match self.message {
            Some(message) => message,
            None => Cow::Owned(default_message(&self.parameter, &self.method)),
        };

        tracing::debug!(
            target: "guards",
            kind = %kind,
            parameter = %self.parameter,
            method = %self.method,
            "{message}"
        );

        GuardError {
            kind,
            parameter: self.parameter,
            method: self.method,
            message,
            params: Vec::new(),
        }
    }
}

/// Reduces a fully qualified function path to the bare function name.
///
/// Strips the marker item appended by [`method_name!`](crate::method_name),
/// any trailing closure or async-block segments, and the module or impl path.
#[doc(hidden)]
#[must_use]
pub fn method_from_type_name(full: &'static str) -> &'static str {
    let mut name = full.strip_suffix("::__guard_site").unwrap_or(full);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}

/// Name of `T` with every path shortened to its last segment, e.g.
/// `Option<(i32, String)>` for
/// `core::option::Option<(i32, alloc::string::String)>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    shorten_paths(std::any::type_name::<T>())
}

fn shorten_paths(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut start = 0;
    for (index, c) in full.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            continue;
        }
        short.push_str(last_segment(&full[start..index]));
        short.push(c);
        start = index + c.len_utf8();
    }
    short.push_str(last_segment(&full[start..]));
    short
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
