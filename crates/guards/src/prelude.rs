//! Prelude module for convenient imports.
//!
//! `use guards::prelude::*;` brings in every guard trait, the error types and
//! the [`call_site!`](crate::call_site) macro.

pub use crate::foundation::{CallSite, GuardError, GuardErrorKind, GuardResult};
pub use crate::{call_site, method_name};

pub use crate::numeric::{Number, NumberGuards};
pub use crate::predicate::PredicateGuards;
pub use crate::presence::{DefaultGuards, NullGuards};
pub use crate::text::TextGuards;

#[cfg(feature = "identifier")]
pub use crate::identifier::IdentifierGuards;

#[cfg(feature = "temporal")]
pub use crate::temporal::{DateBound, DateGuards, DateValue};
