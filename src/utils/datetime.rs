/// Pure date/time utility functions (Discord-agnostic)
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Check if a birth date falls on the given day, ignoring the year
///
/// A 29 February birthday is celebrated on 28 February in common years.
pub fn matches_birthday(birth_date: NaiveDate, today: NaiveDate) -> bool {
    let (month, day) = (birth_date.month(), birth_date.day());
    if month == 2 && day == 29 && !is_leap_year(today.year()) {
        return today.month() == 2 && today.day() == 28;
    }
    month == today.month() && day == today.day()
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Today's calendar date in the given timezone
pub fn today_in(timezone: &Tz) -> NaiveDate {
    Utc::now().with_timezone(timezone).date_naive()
}

/// Local hour (0-23) of a UTC instant in the given timezone
pub fn local_hour(instant: DateTime<Utc>, timezone: &Tz) -> u32 {
    timezone.from_utc_datetime(&instant.naive_utc()).hour()
}

/// Format a date as dd/MM/yyyy
pub fn format_simple_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Convert a unix timestamp to a calendar date in the given timezone
pub fn date_from_unix(seconds: i64, timezone: &Tz) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .map(|instant| instant.with_timezone(timezone).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_matches_birthday_ignores_year() {
        assert!(matches_birthday(date(1995, 3, 15), date(2026, 3, 15)));
        assert!(matches_birthday(date(2026, 12, 31), date(2026, 12, 31)));

        assert!(!matches_birthday(date(1995, 3, 15), date(2026, 3, 16)));
        assert!(!matches_birthday(date(1995, 3, 15), date(2026, 4, 15)));
    }

    #[test]
    fn test_leap_day_birthday() {
        let leap_day = date(2000, 2, 29);
        assert!(matches_birthday(leap_day, date(2028, 2, 29)));
        assert!(!matches_birthday(leap_day, date(2028, 2, 28)));

        assert!(matches_birthday(leap_day, date(2026, 2, 28)));
        assert!(!matches_birthday(leap_day, date(2026, 3, 1)));
        assert!(matches_birthday(date(1990, 2, 28), date(2026, 2, 28)));
    }

    #[test]
    fn test_format_simple_date() {
        assert_eq!(format_simple_date(date(2021, 3, 5)), "05/03/2021");
        assert_eq!(format_simple_date(date(1999, 12, 31)), "31/12/1999");
    }

    #[test]
    fn test_local_hour_follows_timezone() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(local_hour(instant, &chrono_tz::UTC), 12);
        assert_eq!(local_hour(instant, &chrono_tz::Europe::Paris), 13);
    }

    #[test]
    fn test_date_from_unix_crosses_midnight() {
        // 2026-01-10 23:30 UTC is already the 11th in Paris
        let instant = Utc.with_ymd_and_hms(2026, 1, 10, 23, 30, 0).unwrap();
        let seconds = instant.timestamp();
        assert_eq!(date_from_unix(seconds, &chrono_tz::UTC), Some(date(2026, 1, 10)));
        assert_eq!(
            date_from_unix(seconds, &chrono_tz::Europe::Paris),
            Some(date(2026, 1, 11))
        );
    }

    #[test]
    fn test_today_in_is_a_valid_date() {
        let today = today_in(&chrono_tz::UTC);
        assert!((1..=12).contains(&today.month()));
    }
}
