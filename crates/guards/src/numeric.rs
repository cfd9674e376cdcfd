//! Numeric bound guards
//!
//! All comparisons are inclusive except [`NumberGuards::ensure_positive`].
//! `ensure_greater_than` and `ensure_smaller_than` accept a value equal to the
//! bound, matching their long-standing behaviour.

use std::fmt::Display;

use crate::foundation::{CallSite, GuardErrorKind, GuardResult};

// ============================================================================
// NUMBER
// ============================================================================

/// An ordered numeric type with a zero value.
pub trait Number: PartialOrd + Display + Copy {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_number {
    ($zero:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);

// ============================================================================
// GUARDS
// ============================================================================

/// Bound checks for any [`Number`].
///
/// # Examples
///
/// ```
/// use guards::prelude::*;
///
/// fn set_discount(percent: f64) -> GuardResult<f64> {
///     percent.ensure_in_range(0.0, 100.0, call_site!(percent))
/// }
///
/// assert_eq!(set_discount(12.5).unwrap(), 12.5);
/// assert!(set_discount(120.0).unwrap_err().is_out_of_range());
/// ```
pub trait NumberGuards: Number {
    /// Succeeds iff `self > 0`.
    fn ensure_positive(self, site: CallSite) -> GuardResult<Self> {
        if self > Self::ZERO {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::OutOfRange, |parameter, method| {
                format!(
                    "Ongeldige waarde {self} voor {parameter} in methode {method}. Waarde moet strikt positief zijn."
                )
            })
            .with_param("actual", self))
    }

    /// Succeeds iff `self >= 0`.
    fn ensure_not_negative(self, site: CallSite) -> GuardResult<Self> {
        if self >= Self::ZERO {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::OutOfRange, |parameter, method| {
                format!(
                    "Ongeldige waarde {self} voor {parameter} in methode {method}. Waarde mag niet negatief zijn."
                )
            })
            .with_param("actual", self))
    }

    /// Succeeds iff `self >= min`.
    fn ensure_greater_than(self, min: Self, site: CallSite) -> GuardResult<Self> {
        if self >= min {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::OutOfRange, |parameter, method| {
                format!(
                    "Ongeldige waarde {self} voor {parameter} in methode {method}. Waarde moet groter of gelijk zijn aan {min}."
                )
            })
            .with_param("min", min)
            .with_param("actual", self))
    }

    /// Succeeds iff `self <= max`.
    fn ensure_smaller_than(self, max: Self, site: CallSite) -> GuardResult<Self> {
        if self <= max {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::OutOfRange, |parameter, method| {
                format!(
                    "Ongeldige waarde {self} voor {parameter} in methode {method}. Waarde moet kleiner of gelijk zijn aan {max}."
                )
            })
            .with_param("max", max)
            .with_param("actual", self))
    }

    /// Succeeds iff `min <= self <= max`.
    fn ensure_in_range(self, min: Self, max: Self, site: CallSite) -> GuardResult<Self> {
        if self >= min && self <= max {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::OutOfRange, |parameter, method| {
                format!(
                    "Ongeldige waarde {self} voor {parameter} in methode {method}. Waarde moet tussen {min} en {max} liggen."
                )
            })
            .with_param("min", min)
            .with_param("max", max)
            .with_param("actual", self))
    }
}

impl<T: Number> NumberGuards for T {}

// ============================================================================
// TESTS
// ============================================================================
