//! Caller-supplied predicate guards
//!
//! [`PredicateGuards::ensure_true`] evaluates a plain closure;
//! [`PredicateGuards::ensure_true_async`] awaits an async one. Both apply the
//! same rule: the value passes iff the predicate returns `true`.
//!
//! The async guard defines no timeout and no cancellation of its own. It is an
//! ordinary future; dropping it drops the predicate's future with it.

use std::future::Future;

use crate::foundation::call_site::short_type_name;
use crate::foundation::{CallSite, GuardError, GuardErrorKind, GuardResult};

/// Predicate checks for any value.
///
/// # Examples
///
/// ```
/// use guards::prelude::*;
///
/// #[derive(Debug)]
/// struct Order { lines: usize }
///
/// fn submit(order: Order) -> GuardResult<Order> {
///     order.ensure_true(|o| o.lines > 0, call_site!(order))
/// }
///
/// assert!(submit(Order { lines: 2 }).is_ok());
/// let err = submit(Order { lines: 0 }).unwrap_err();
/// assert!(err.message.contains("Order voldoet niet aan de gestelde voorwaarde."));
/// ```
pub trait PredicateGuards: Sized {
    /// Succeeds iff `predicate(&self)` returns `true`.
    fn ensure_true<F>(self, predicate: F, site: CallSite) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
    {
        if predicate(&self) {
            Ok(self)
        } else {
            Err(unsatisfied::<Self>(site))
        }
    }

    /// Awaits `predicate(&self)` and succeeds iff it resolves to `true`.
    ///
    /// ```
    /// use guards::prelude::*;
    ///
    /// async fn is_free(name: &str) -> bool {
    ///     name != "admin"
    /// }
    ///
    /// async fn register(name: String) -> GuardResult<String> {
    ///     name.ensure_true_async(async |n| is_free(n).await, call_site!(name)).await
    /// }
    /// ```
    fn ensure_true_async<F>(
        self,
        predicate: F,
        site: CallSite,
    ) -> impl Future<Output = GuardResult<Self>>
    where
        F: AsyncFnOnce(&Self) -> bool,
    {
        async move {
            if predicate(&self).await {
                Ok(self)
            } else {
                Err(unsatisfied::<Self>(site))
            }
        }
    }
}

impl<T> PredicateGuards for T {}

fn unsatisfied<T>(site: CallSite) -> GuardError {
    let type_name = short_type_name::<T>();
    site.reject(GuardErrorKind::Validation, |parameter, method| {
        format!(
            "Ongeldige waarde voor {parameter} in methode {method}. {type_name} voldoet niet aan de gestelde voorwaarde."
        )
    })
    .with_param("type", type_name)
}
