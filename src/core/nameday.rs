//! Nameday lookup over the calendar compiled into the binary.
//!
//! The dataset is a two-column CSV keyed by `MM-dd`; leap day has no entry,
//! matching printed nameday calendars.

use chrono::NaiveDate;

const NAMEDAYS: &str = include_str!("../../data/namedays.csv");

/// Looks up the nameday for the given date's month and day.
///
/// Returns `None` when the calendar has no entry for that day.
#[must_use]
pub fn nameday_for(date: NaiveDate) -> Option<String> {
    let key = date.format("%m-%d").to_string();

    NAMEDAYS.lines().find_map(|line| {
        let (day, name) = line.split_once(',')?;
        (day == key).then(|| name.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_known_days_resolve() {
        let christmas_eve = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
        assert_eq!(nameday_for(christmas_eve).as_deref(), Some("Adam a Eva"));

        let midsummer = NaiveDate::from_ymd_opt(2025, 6, 24).unwrap();
        assert_eq!(nameday_for(midsummer).as_deref(), Some("Jan"));
    }

    #[test]
    fn test_lookup_ignores_the_year() {
        let in_1993 = NaiveDate::from_ymd_opt(1993, 11, 11).unwrap();
        let in_2031 = NaiveDate::from_ymd_opt(2031, 11, 11).unwrap();
        assert_eq!(nameday_for(in_1993), nameday_for(in_2031));
        assert_eq!(nameday_for(in_1993).as_deref(), Some("Martin"));
    }

    #[test]
    fn test_leap_day_has_no_entry() {
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(nameday_for(leap_day), None);
    }

    #[test]
    fn test_every_other_day_has_an_entry() {
        // 2023 is not a leap year; all 365 days must resolve
        let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while date < end {
            assert!(nameday_for(date).is_some(), "missing entry for {date}");
            date = date.succ_opt().unwrap();
        }
    }
}
