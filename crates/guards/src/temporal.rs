//! Date and timestamp ordering guards
//!
//! Two value families are supported: calendar dates ([`NaiveDate`]) and
//! timestamps ([`NaiveDateTime`]). Either family may serve as the bound for
//! either family of value. The bound is brought into the value's family before
//! comparing: a timestamp bound is truncated to its date, a date bound becomes
//! midnight of that date.
//!
//! Both checks are inclusive. Messages render dates in the Dutch short form
//! `d-M-yyyy`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::foundation::{CallSite, GuardErrorKind, GuardResult};

// ============================================================================
// BOUNDS AND VALUES
// ============================================================================

/// A date or timestamp usable as a comparison bound.
pub trait DateBound: Copy {
    /// The calendar date of this bound.
    fn to_date(self) -> NaiveDate;

    /// This bound as a timestamp; dates map to midnight.
    fn to_date_time(self) -> NaiveDateTime;
}

impl DateBound for NaiveDate {
    fn to_date(self) -> NaiveDate {
        self
    }

    fn to_date_time(self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

impl DateBound for NaiveDateTime {
    fn to_date(self) -> NaiveDate {
        self.date()
    }

    fn to_date_time(self) -> NaiveDateTime {
        self
    }
}

/// A date or timestamp that can be guarded.
pub trait DateValue: DateBound + PartialOrd + std::fmt::Display {
    /// Converts a bound of either family into this family.
    fn from_bound<B: DateBound>(bound: B) -> Self;

    /// Dutch short date, e.g. `1-1-2022`.
    fn short_date(&self) -> String;

    /// Short date plus time of day where the family has one.
    fn full_date(&self) -> String;
}

impl DateValue for NaiveDate {
    fn from_bound<B: DateBound>(bound: B) -> Self {
        bound.to_date()
    }

    fn short_date(&self) -> String {
        format!("{}-{}-{:04}", self.day(), self.month(), self.year())
    }

    fn full_date(&self) -> String {
        self.short_date()
    }
}

impl DateValue for NaiveDateTime {
    fn from_bound<B: DateBound>(bound: B) -> Self {
        bound.to_date_time()
    }

    fn short_date(&self) -> String {
        self.date().short_date()
    }

    fn full_date(&self) -> String {
        format!(
            "{} {:02}:{:02}:{:02}",
            self.short_date(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

// ============================================================================
// GUARDS
// ============================================================================

/// Ordering checks for dates and timestamps.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveDateTime};
/// use guards::prelude::*;
///
/// fn book(day: NaiveDate, opens: NaiveDateTime) -> GuardResult<NaiveDate> {
///     let closes = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap();
///     day.ensure_in_range(opens, closes, call_site!(day))
/// }
///
/// let opens = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(book(day, opens).unwrap(), day);
/// ```
pub trait DateGuards: DateValue {
    /// Succeeds iff `self >= bound`.
    fn ensure_after<B: DateBound>(self, bound: B, site: CallSite) -> GuardResult<Self> {
        let bound = Self::from_bound(bound);
        if self >= bound {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::OutOfRange, |parameter, method| {
                format!(
                    "Ongeldige waarde {} voor {parameter} in methode {method}. Datum moet na {} zijn.",
                    self.short_date(),
                    bound.short_date()
                )
            })
            .with_param("after", bound)
            .with_param("actual", self))
    }

    /// Succeeds iff `self <= bound`.
    fn ensure_before<B: DateBound>(self, bound: B, site: CallSite) -> GuardResult<Self> {
        let bound = Self::from_bound(bound);
        if self <= bound {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::OutOfRange, |parameter, method| {
                format!(
                    "Ongeldige waarde {} voor {parameter} in methode {method}. Datum moet voor {} zijn.",
                    self.full_date(),
                    bound.short_date()
                )
            })
            .with_param("before", bound)
            .with_param("actual", self))
    }

    /// Succeeds iff `after <= self <= before`.
    ///
    /// The upper bound is checked first, so a value outside both bounds is
    /// reported against `before`.
    fn ensure_in_range<A: DateBound, B: DateBound>(
        self,
        after: A,
        before: B,
        site: CallSite,
    ) -> GuardResult<Self> {
        self.ensure_before(before, site.clone())?
            .ensure_after(after, site)
    }
}

impl DateGuards for NaiveDate {}
impl DateGuards for NaiveDateTime {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_site;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn timestamp(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn short_and_full_forms() {
        assert_eq!(date(2022, 1, 1).short_date(), "1-1-2022");
        assert_eq!(date(2022, 11, 30).full_date(), "30-11-2022");
        let ts = date(2022, 3, 4).and_hms_opt(8, 5, 9).unwrap();
        assert_eq!(ts.short_date(), "4-3-2022");
        assert_eq!(ts.full_date(), "4-3-2022 08:05:09");
    }

    #[test]
    fn bound_normalisation() {
        let ts = date(2022, 3, 4).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(NaiveDate::from_bound(ts), date(2022, 3, 4));
        assert_eq!(NaiveDateTime::from_bound(date(2022, 3, 4)), timestamp(2022, 3, 4));
    }

    #[test]
    fn ensure_after_date_and_timestamp_bounds() {
        let value = date(2022, 1, 1);
        assert_eq!(value.ensure_after(date(2020, 1, 1), call_site!(value)).unwrap(), value);
        assert_eq!(value.ensure_after(timestamp(2020, 1, 1), call_site!(value)).unwrap(), value);

        let error = value
            .ensure_after(date(2024, 1, 1), call_site!(value))
            .unwrap_err();
        assert!(error.is_out_of_range());
        assert!(error.message.contains("Ongeldige waarde 1-1-2022"));
        assert!(error.message.contains("ensure_after_date_and_timestamp_bounds"));
        assert!(error.message.contains("na 1-1-2024"));
        assert_eq!(error.param("after"), Some("2024-01-01"));
    }

    #[test]
    fn ensure_before_date_and_timestamp_bounds() {
        let value = date(2022, 1, 1);
        assert!(value.ensure_before(date(2024, 1, 1), call_site!(value)).is_ok());
        assert!(value.ensure_before(timestamp(2024, 1, 1), call_site!(value)).is_ok());

        let error = value
            .ensure_before(timestamp(2020, 1, 1), call_site!(value))
            .unwrap_err();
        assert!(error.message.contains("Ongeldige waarde 1-1-2022"));
        assert!(error.message.contains("voor 1-1-2020"));
    }

    #[test]
    fn bounds_are_inclusive() {
        let value = date(2022, 1, 1);
        assert!(value.ensure_after(value, call_site!(value)).is_ok());
        assert!(value.ensure_before(value, call_site!(value)).is_ok());

        let stamp = timestamp(2022, 1, 1);
        assert!(stamp.ensure_after(value, call_site!(stamp)).is_ok());
        assert!(stamp.ensure_before(value, call_site!(stamp)).is_ok());
    }

    #[test]
    fn timestamp_value_against_date_bound_uses_midnight() {
        let stamp = date(2022, 1, 1).and_hms_opt(0, 0, 1).unwrap();
        let error = stamp
            .ensure_before(date(2022, 1, 1), call_site!(stamp))
            .unwrap_err();
        assert!(error.message.contains("Ongeldige waarde 1-1-2022 00:00:01"));
        assert!(error.message.contains("voor 1-1-2022"));
    }

    #[test]
    fn in_range_all_family_combinations() {
        let value = date(2022, 1, 1);
        let (low_d, high_d) = (date(2020, 1, 1), date(2024, 1, 1));
        let (low_t, high_t) = (timestamp(2020, 1, 1), timestamp(2024, 1, 1));

        assert!(value.ensure_in_range(low_d, high_d, call_site!(value)).is_ok());
        assert!(value.ensure_in_range(low_t, high_d, call_site!(value)).is_ok());
        assert!(value.ensure_in_range(low_d, high_t, call_site!(value)).is_ok());
        assert!(value.ensure_in_range(low_t, high_t, call_site!(value)).is_ok());

        let stamp = timestamp(2022, 1, 1);
        assert!(stamp.ensure_in_range(low_d, high_d, call_site!(stamp)).is_ok());
        assert!(stamp.ensure_in_range(low_t, high_d, call_site!(stamp)).is_ok());
        assert!(stamp.ensure_in_range(low_d, high_t, call_site!(stamp)).is_ok());
        assert!(stamp.ensure_in_range(low_t, high_t, call_site!(stamp)).is_ok());
    }

    #[test]
    fn in_range_reports_upper_bound_first() {
        let value = date(2022, 1, 1);
        let error = value
            .ensure_in_range(date(2023, 1, 1), date(2020, 1, 1), call_site!(value))
            .unwrap_err();
        assert!(error.message.contains("voor 1-1-2020"));
        assert!(!error.message.contains("2023"));
        assert_eq!(error.param("before"), Some("2020-01-01"));
        assert_eq!(error.param("after"), None);
    }

    #[test]
    fn ensure_after_timestamp_value_shows_date_only() {
        let stamp = date(2022, 1, 1).and_hms_opt(13, 45, 0).unwrap();
        let error = stamp
            .ensure_after(date(2024, 1, 1), call_site!(stamp))
            .unwrap_err();
        assert!(error.message.contains("Ongeldige waarde 1-1-2022 voor stamp"));
        assert!(!error.message.contains("13:45"));
        assert!(error.message.contains("na 1-1-2024"));
    }

    #[test]
    fn in_range_reports_upper_bound_first_for_mixed_bounds() {
        let value = date(2022, 1, 1);
        let (after_d, before_d) = (date(2023, 1, 1), date(2020, 1, 1));
        let (after_t, before_t) = (timestamp(2023, 1, 1), timestamp(2020, 1, 1));

        let errors = [
            value.ensure_in_range(after_t, before_d, call_site!(value)),
            value.ensure_in_range(after_d, before_t, call_site!(value)),
            value.ensure_in_range(after_t, before_t, call_site!(value)),
        ];
        for result in errors {
            let error = result.unwrap_err();
            assert!(error.message.contains("voor 1-1-2020"));
            assert!(!error.message.contains("2023"));
        }

        let stamp = timestamp(2022, 1, 1);
        let errors = [
            stamp.ensure_in_range(after_d, before_d, call_site!(stamp)),
            stamp.ensure_in_range(after_t, before_d, call_site!(stamp)),
            stamp.ensure_in_range(after_d, before_t, call_site!(stamp)),
            stamp.ensure_in_range(after_t, before_t, call_site!(stamp)),
        ];
        for result in errors {
            let error = result.unwrap_err();
            assert!(error.message.contains("Ongeldige waarde 1-1-2022 00:00:00"));
            assert!(error.message.contains("voor 1-1-2020"));
        }
    }

    #[test]
    fn in_range_reports_lower_bound() {
        let value = date(2022, 1, 1);
        let error = value
            .ensure_in_range(date(2023, 1, 1), date(2024, 1, 1), call_site!(value))
            .unwrap_err();
        assert!(error.message.contains("na 1-1-2023"));
    }

    #[test]
    fn in_range_custom_message() {
        let value = date(2022, 1, 1);
        let error = value
            .ensure_in_range(
                date(2020, 1, 1),
                date(2020, 1, 1),
                call_site!(value, "Datum buiten periode"),
            )
            .unwrap_err();
        assert_eq!(error.message, "Datum buiten periode");
    }
}
