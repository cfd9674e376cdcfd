//! # guards
//!
//! Fluent guard clauses: precondition checks that hand the value back
//! unchanged when it is valid and fail with a descriptive [`GuardError`]
//! otherwise.
//!
//! ## Quick Start
//!
//! ```
//! use guards::prelude::*;
//!
//! fn transfer(amount: i64, reference: Option<&str>) -> GuardResult<(i64, &str)> {
//!     let amount = amount.ensure_positive(call_site!(amount))?;
//!     let reference = reference.ensure_maximum_string_length(35, call_site!(reference))?;
//!     Ok((amount, reference))
//! }
//!
//! assert_eq!(transfer(10, Some("invoice 42")).unwrap(), (10, "invoice 42"));
//!
//! let err = transfer(0, Some("invoice 42")).unwrap_err();
//! assert!(err.is_out_of_range());
//! assert_eq!(
//!     err.to_string(),
//!     "Ongeldige waarde 0 voor amount in methode transfer. Waarde moet strikt positief zijn."
//! );
//! ```
//!
//! ## Call sites
//!
//! Every guard takes a [`CallSite`] naming the guarded parameter and the
//! function that guards it. [`call_site!`] captures both at compile time;
//! `call_site!(value, "message")` also overrides the generated message.
//!
//! ## Guard groups
//!
//! - **Numeric**: [`NumberGuards`](numeric::NumberGuards): positive, not
//!   negative, inclusive lower/upper bounds, ranges
//! - **Date/time** (`temporal` feature): [`DateGuards`](temporal::DateGuards):
//!   after, before and range over dates and timestamps
//! - **Identifier** (`identifier` feature):
//!   [`IdentifierGuards`](identifier::IdentifierGuards): not nil, version 7
//! - **Presence**: [`NullGuards`](presence::NullGuards),
//!   [`DefaultGuards`](presence::DefaultGuards)
//! - **Text**: [`TextGuards`](text::TextGuards): present, not blank, length
//! - **Predicate**: [`PredicateGuards`](predicate::PredicateGuards): sync and
//!   async caller-supplied conditions
//!
//! Rejections are reported as `tracing` debug events under the `guards`
//! target.

// GuardError is returned unboxed by every guard.
#![allow(clippy::result_large_err)]

pub mod foundation;
#[cfg(feature = "identifier")]
pub mod identifier;
mod macros;
pub mod numeric;
pub mod predicate;
pub mod prelude;
pub mod presence;
#[cfg(feature = "temporal")]
pub mod temporal;
pub mod text;

pub use foundation::{CallSite, GuardError, GuardErrorKind, GuardResult};
