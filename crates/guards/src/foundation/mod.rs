//! Foundation types shared by every guard group
//!
//! - **Call site**: [`CallSite`], the parameter and method names a guard reports
//! - **Errors**: [`GuardError`], [`GuardErrorKind`], [`GuardResult`]

pub mod call_site;
pub mod error;

pub use call_site::CallSite;
pub use error::{GuardError, GuardErrorKind, GuardResult};
