//! Year and week-of-year derivation for version strings.
//!
//! Two conventions are supported. They disagree near year boundaries, so the
//! choice is explicit in configuration rather than left to the host locale.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Week numbering convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekConvention {
    /// ISO-8601 weeks (01..=53, Monday first) paired with the ISO week-year
    #[default]
    Iso,
    /// US weeks as `strftime("%U")` (00..=53, Sunday first) paired with the calendar year
    Sunday,
}

impl fmt::Display for WeekConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekConvention::Iso => write!(f, "iso"),
            WeekConvention::Sunday => write!(f, "sunday"),
        }
    }
}

/// Two-digit year and week number, rendered as `YY.WW`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarStamp {
    pub year: u8,
    pub week: u8,
}

impl CalendarStamp {
    /// Create a stamp from explicit components. The year is reduced modulo 100.
    pub fn new(year: u8, week: u8) -> Self {
        CalendarStamp {
            year: year % 100,
            week,
        }
    }

    /// Derive the stamp for a date under the given convention
    pub fn from_date(date: NaiveDate, convention: WeekConvention) -> Self {
        let (year, week) = match convention {
            WeekConvention::Iso => {
                let iso = date.iso_week();
                (iso.year(), iso.week())
            }
            WeekConvention::Sunday => (date.year(), sunday_week(date)),
        };

        CalendarStamp {
            year: two_digit_year(year),
            week: week as u8,
        }
    }
}

impl fmt::Display for CalendarStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}", self.year, self.week)
    }
}

/// Week of the year counting Sundays, same as `%U`: days before the first
/// Sunday fall in week 0.
fn sunday_week(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_sunday()) / 7
}

fn two_digit_year(year: i32) -> u8 {
    year.rem_euclid(100) as u8
}

/// True when the two conventions put `date` in different years.
///
/// Happens in the last days of December and the first days of January.
pub fn year_boundary_mismatch(date: NaiveDate) -> bool {
    date.iso_week().year() != date.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_mid_year() {
        let stamp = CalendarStamp::from_date(date(2025, 2, 12), WeekConvention::Iso);
        assert_eq!(stamp.to_string(), "25.07");
    }

    #[test]
    fn test_sunday_mid_year() {
        let stamp = CalendarStamp::from_date(date(2025, 2, 12), WeekConvention::Sunday);
        assert_eq!(stamp.to_string(), "25.06");
    }

    #[test]
    fn test_iso_uses_week_year_at_boundary() {
        let stamp = CalendarStamp::from_date(date(2024, 12, 30), WeekConvention::Iso);
        assert_eq!(stamp.to_string(), "25.01");
        assert!(year_boundary_mismatch(date(2024, 12, 30)));
    }

    #[test]
    fn test_sunday_at_boundary() {
        let stamp = CalendarStamp::from_date(date(2024, 12, 30), WeekConvention::Sunday);
        assert_eq!(stamp.to_string(), "24.52");
    }

    #[test]
    fn test_sunday_week_zero() {
        // 2025-01-01 is a Wednesday, before the first Sunday
        let stamp = CalendarStamp::from_date(date(2025, 1, 1), WeekConvention::Sunday);
        assert_eq!(stamp.to_string(), "25.00");
    }

    #[test]
    fn test_iso_week_53_of_previous_year() {
        // 2021-01-03 belongs to ISO week 53 of 2020
        let stamp = CalendarStamp::from_date(date(2021, 1, 3), WeekConvention::Iso);
        assert_eq!(stamp.to_string(), "20.53");
    }

    #[test]
    fn test_no_mismatch_mid_year() {
        assert!(!year_boundary_mismatch(date(2025, 6, 15)));
    }

    #[test]
    fn test_year_is_zero_padded() {
        let stamp = CalendarStamp::from_date(date(2005, 3, 9), WeekConvention::Iso);
        assert_eq!(stamp.to_string(), "05.10");
        assert_eq!(CalendarStamp::new(125, 1).year, 25);
    }

    #[test]
    fn test_convention_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            convention: WeekConvention,
        }
        let w: Wrapper = toml::from_str("convention = \"sunday\"").unwrap();
        assert_eq!(w.convention, WeekConvention::Sunday);
    }
}
