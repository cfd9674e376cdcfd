//! Call-site capture macros.
//!
//! # Available Macros
//!
//! - [`call_site!`]: build a [`CallSite`](crate::CallSite) from a guarded expression
//! - [`method_name!`]: name of the enclosing function as a `&'static str`
//!
//! # Examples
//!
//! ```
//! use guards::prelude::*;
//!
//! fn rename(name: Option<&str>) -> GuardResult<&str> {
//!     name.ensure_not_empty(call_site!(name))
//! }
//!
//! let err = rename(Some("  ")).unwrap_err();
//! assert_eq!(err.parameter, "name");
//! assert_eq!(err.method, "rename");
//! ```

// ============================================================================
// METHOD NAME
// ============================================================================

/// Expands to the name of the enclosing function.
///
/// Closures and async blocks are looked through, so inside
/// `async fn load() { ... }` or a closure defined in `load` this is `"load"`.
#[macro_export]
macro_rules! method_name {
    () => {{
        fn __guard_site() {}
        $crate::foundation::call_site::method_from_type_name(::core::any::type_name_of_val(
            &__guard_site,
        ))
    }};
}

// ============================================================================
// CALL SITE
// ============================================================================

/// Builds a [`CallSite`](crate::CallSite) naming the guarded expression and
/// the enclosing function.
///
/// **Default message**:
/// ```rust,ignore
/// amount.ensure_positive(call_site!(amount))?;
/// ```
///
/// **Custom message** (replaces the generated one):
/// ```rust,ignore
/// amount.ensure_positive(call_site!(amount, "Bedrag moet positief zijn"))?;
/// ```
#[macro_export]
macro_rules! call_site {
    ($value:expr) => {
        $crate::CallSite::new(::core::stringify!($value), $crate::method_name!())
    };
    ($value:expr, $message:expr $(,)?) => {
        $crate::call_site!($value).with_message($message)
    };
}
