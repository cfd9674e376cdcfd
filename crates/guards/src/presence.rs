//! Presence guards
//!
//! Two shapes of "missing" are covered:
//!
//! - [`NullGuards`]: an explicit `Option<T>` that may be `None`
//! - [`DefaultGuards`]: an always-present value whose `Default` is the sentinel
//!   for "not set", e.g. `0`, an empty `String`, or a zeroed struct

use std::fmt::Debug;

use crate::foundation::call_site::short_type_name;
use crate::foundation::{CallSite, GuardErrorKind, GuardResult};

// ============================================================================
// NOT NULL
// ============================================================================

/// Presence check for optional values.
///
/// # Examples
///
/// ```
/// use guards::prelude::*;
///
/// #[derive(Debug)]
/// struct Customer;
///
/// fn greet(customer: Option<Customer>) -> GuardResult<Customer> {
///     customer.ensure_not_null(call_site!(customer))
/// }
///
/// let err = greet(None).unwrap_err();
/// assert!(err.is_null_reference());
/// assert!(err.message.contains("Customer"));
/// ```
pub trait NullGuards {
    /// The value carried when present.
    type Value;

    /// Returns the present value, or fails if it is absent.
    fn ensure_not_null(self, site: CallSite) -> GuardResult<Self::Value>;
}

impl<T> NullGuards for Option<T> {
    type Value = T;

    fn ensure_not_null(self, site: CallSite) -> GuardResult<T> {
        match self {
            Some(value) => Ok(value),
            None => {
                let type_name = short_type_name::<T>();
                Err(site
                    .reject(GuardErrorKind::NullReference, |parameter, method| {
                        format!(
                            "Ongeldige waarde voor {parameter} in methode {method}. {type_name} mag niet null zijn."
                        )
                    })
                    .with_param("type", type_name))
            }
        }
    }
}

// ============================================================================
// NOT DEFAULT
// ============================================================================

/// Rejects a value equal to its type's default.
pub trait DefaultGuards: Default + PartialEq + Debug {
    /// Succeeds iff `self != Self::default()`.
    fn ensure_not_default(self, site: CallSite) -> GuardResult<Self> {
        let default = Self::default();
        if self != default {
            return Ok(self);
        }
        let type_name = short_type_name::<Self>();
        Err(site
            .reject(GuardErrorKind::InvalidArgument, |parameter, method| {
                format!(
                    "Ongeldige waarde voor {parameter} in methode {method}. {type_name} mag niet de default waarde '{default:?}' zijn."
                )
            })
            .with_param("type", type_name)
            .with_param("default", format!("{default:?}")))
    }
}

impl<T: Default + PartialEq + Debug> DefaultGuards for T {}

// ============================================================================
// TESTS
// ============================================================================
