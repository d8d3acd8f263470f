//! Age derivation with UTC minute precision.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Full years elapsed between `birthdate` and `now`, both read in UTC.
///
/// The birthday counts as reached once the (month, day, hour, minute) of
/// `now` is at or past that of the birthdate, compared as one tuple. So on
/// any later day of the birth month the birthday has passed whatever the
/// hour, unlike a field-by-field check that also demands `hour >=` and
/// `minute >=` on those days. Dates in the future yield 0.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use profile::age_on;
///
/// let born = Utc.with_ymd_and_hms(1998, 5, 10, 14, 0, 0).unwrap();
/// let before = Utc.with_ymd_and_hms(2026, 5, 10, 13, 59, 0).unwrap();
/// let after = Utc.with_ymd_and_hms(2026, 5, 10, 14, 0, 0).unwrap();
///
/// assert_eq!(age_on(born, before), 27);
/// assert_eq!(age_on(born, after), 28);
/// ```
pub fn age_on(birthdate: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let years = now.year() - birthdate.year();
    let anniversary = |t: &DateTime<Utc>| (t.month(), t.day(), t.hour(), t.minute());
    let reached = anniversary(&now) >= anniversary(&birthdate);
    let age = if reached { years } else { years - 1 };
    age.max(0) as u32
}

/// Age as of the current wall clock.
pub fn current_age(birthdate: DateTime<Utc>) -> u32 {
    age_on(birthdate, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn born() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1998, 5, 10, 14, 0, 0).unwrap()
    }

    #[test]
    fn counts_completed_years_only() {
        let day_before = Utc.with_ymd_and_hms(2024, 5, 9, 23, 59, 0).unwrap();
        assert_eq!(age_on(born(), day_before), 25);

        let later_month = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(age_on(born(), later_month), 26);
    }

    #[test]
    fn later_day_with_earlier_hour_counts_as_reached() {
        let next_day_morning = Utc.with_ymd_and_hms(2024, 5, 11, 1, 0, 0).unwrap();
        assert_eq!(age_on(born(), next_day_morning), 26);
    }

    #[test]
    fn future_birthdate_clamps_to_zero() {
        let now = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(age_on(born(), now), 0);
    }
}
