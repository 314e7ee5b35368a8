use chrono::Datelike;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::HOLIDAYS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub date: NaiveDate,
    pub year: i32,
    pub quarter: u32,
    pub month: u32,
    pub month_name: String,
    pub week_of_year: u32,
    pub day_of_week: String,
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub season: String,
}

pub fn quarter(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

// There is no spring: March to May fall into Winter.
pub fn season(month: u32) -> &'static str {
    match month {
        6..=8 => "Summer",
        9..=11 => "Fall",
        _ => "Winter",
    }
}

/// Every attribute is derived from the date alone.
pub fn calendar_date(date: NaiveDate) -> CalendarDate {
    CalendarDate {
        date,
        year: date.year(),
        quarter: quarter(date.month()),
        month: date.month(),
        month_name: date.format("%B").to_string(),
        week_of_year: date.iso_week().week(),
        day_of_week: date.format("%A").to_string(),
        is_weekend: date.weekday().num_days_from_monday() >= 5,
        is_holiday: HOLIDAYS.contains(&(date.month(), date.day())),
        season: season(date.month()).to_string(),
    }
}

/// One row per day, both ends inclusive.
pub fn calendar(start: NaiveDate, end: NaiveDate) -> Vec<CalendarDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(calendar_date)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::Weekday;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_covers_window_once() {
        let cal = calendar(ymd(2025, 7, 1), ymd(2025, 12, 31));
        assert_eq!(cal.len(), 184);
        let unique: HashSet<_> = cal.iter().map(|c| c.date).collect();
        assert_eq!(unique.len(), cal.len());
        assert_eq!(cal.first().unwrap().date, ymd(2025, 7, 1));
        assert_eq!(cal.last().unwrap().date, ymd(2025, 12, 31));

        for c in &cal {
            assert_eq!(*c, calendar_date(c.date));
            assert_eq!(c.quarter, (c.month - 1) / 3 + 1);
            let weekend = matches!(c.date.weekday(), Weekday::Sat | Weekday::Sun);
            assert_eq!(c.is_weekend, weekend);
        }
    }

    #[test]
    fn test_calendar_date() {
        // Saturday
        let c = calendar_date(ymd(2025, 7, 5));
        assert_eq!(c.month_name, "July");
        assert_eq!(c.day_of_week, "Saturday");
        assert!(c.is_weekend);
        assert!(!c.is_holiday);
        assert_eq!(c.quarter, 3);
        assert_eq!(c.week_of_year, 27);
        assert_eq!(c.season, "Summer");

        let xmas = calendar_date(ymd(2025, 12, 25));
        assert!(xmas.is_holiday);
        assert!(!xmas.is_weekend);
        assert_eq!(xmas.quarter, 4);
        assert_eq!(xmas.season, "Winter");

        assert_eq!(calendar_date(ymd(2025, 10, 1)).season, "Fall");
        assert_eq!(calendar_date(ymd(2025, 4, 1)).season, "Winter");
        assert!(!calendar_date(ymd(2025, 11, 24)).is_holiday);
    }

    #[test]
    fn test_empty_window() {
        assert!(calendar(ymd(2025, 7, 2), ymd(2025, 7, 1)).is_empty());
    }
}
