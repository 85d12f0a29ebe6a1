use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

/// How many days ahead of an occurrence the owner of a class is reminded
pub const REMINDER_HORIZON_DAYS: u32 = 7;

/// The calendar date `horizon_days` after the date of `now`.
///
/// The date is taken in the timezone `now` carries and whole days are added
/// to it, so the time of day and daylight saving shifts have no effect.
pub fn target_date<Tz: TimeZone>(now: &DateTime<Tz>, horizon_days: u32) -> NaiveDate {
    now.date_naive() + Days::new(horizon_days as u64)
}

/// Weekday index of `date` where Sunday is 0 and Saturday is 6
pub fn weekday_of(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Human readable day used in notifications, e.g. "Wednesday, May 8"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Utc};
    use chrono_tz::Europe::Oslo;

    fn utc(datetime: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M")
            .expect("Valid datetime")
            .and_utc()
    }

    fn date(d: &str) -> NaiveDate {
        d.parse().expect("Valid date")
    }

    #[test]
    fn it_adds_whole_days_across_month_and_year_boundaries() {
        let cases = [
            ("2024-11-25 09:00", "2024-12-02"),
            ("2024-12-28 09:00", "2025-01-04"),
            ("2024-02-26 09:00", "2024-03-04"),
            ("2023-02-26 09:00", "2023-03-05"),
            ("2024-01-31 09:00", "2024-02-07"),
        ];
        for (now, expected) in cases {
            assert_eq!(target_date(&utc(now), 7), date(expected));
        }
    }

    #[test]
    fn it_ignores_time_of_day() {
        let expected = date("2024-05-08");
        for now in ["2024-05-01 00:00", "2024-05-01 09:00", "2024-05-01 23:59"] {
            assert_eq!(target_date(&utc(now), REMINDER_HORIZON_DAYS), expected);
        }
    }

    #[test]
    fn it_uses_the_wall_clock_date_of_the_timezone() {
        // 23:30 UTC is already the next day in Oslo
        let now = utc("2024-05-01 23:30").with_timezone(&Oslo);
        assert_eq!(target_date(&now, 7), date("2024-05-09"));
    }

    #[test]
    fn it_is_insensitive_to_daylight_saving_shifts() {
        // Daylight saving time starts in Oslo on 2024-03-31
        let now = utc("2024-03-28 23:30").with_timezone(&Oslo);
        assert_eq!(target_date(&now, 7), date("2024-04-05"));
        // and ends on 2024-10-27
        let now = utc("2024-10-24 22:30").with_timezone(&Oslo);
        assert_eq!(target_date(&now, 7), date("2024-11-01"));
    }

    #[test]
    fn it_computes_weekdays_from_sunday() {
        assert_eq!(weekday_of(date("2024-05-05")), 0);
        assert_eq!(weekday_of(date("2024-05-01")), 3);
        assert_eq!(weekday_of(date("2024-05-04")), 6);
    }

    #[test]
    fn a_target_date_keeps_the_weekday_of_now() {
        let now = utc("2024-05-01 09:00");
        assert_eq!(weekday_of(target_date(&now, 7)), weekday_of(now.date_naive()));
    }

    #[test]
    fn it_formats_days() {
        assert_eq!(format_day(date("2024-05-08")), "Wednesday, May 8");
        assert_eq!(format_day(date("2024-12-02")), "Monday, Dec 2");
    }
}
