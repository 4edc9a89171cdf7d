//! Date-range helpers for chart windows.

use serde::Serialize;
use time::{Date, Duration, Month};

use crate::transaction::MonthPrefix;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// The first day in the range.
    pub start: Date,
    /// The last day in the range.
    pub end: Date,
}

impl DateRange {
    /// The number of days in the range, zero if `start` is after `end`.
    pub fn day_count(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start).whole_days() as usize + 1
        }
    }

    /// Every day in the range in ascending order.
    pub fn days(&self) -> Vec<Date> {
        let mut days = Vec::with_capacity(self.day_count());
        let mut day = self.start;

        while day <= self.end {
            days.push(day);

            match day.next_day() {
                Some(next) => day = next,
                None => break,
            }
        }

        days
    }

    /// Whether `date` falls in the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The first to the last day of the month containing `date`.
pub fn month_bounds(date: Date) -> DateRange {
    let start = date - Duration::days(i64::from(date.day()) - 1);
    let end = start + Duration::days(i64::from(last_day_of_month(date.year(), date.month())) - 1);

    DateRange { start, end }
}

/// The `days` days ending on `today`, e.g. the last week for `days == 7`.
///
/// Returns `None` when `days` is zero.
pub fn trailing_days(today: Date, days: u16) -> Option<DateRange> {
    if days == 0 {
        return None;
    }

    let start = today
        .checked_sub(Duration::days(i64::from(days) - 1))
        .unwrap_or(Date::MIN);

    Some(DateRange { start, end: today })
}

/// Formats a month as a three-letter abbreviation and the year, e.g. "Mar 2024".
pub fn month_label(month: MonthPrefix) -> String {
    format!("{} {}", month_abbrev(month.month()), month.year())
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::ledger::window::{DateRange, month_bounds, month_label, trailing_days};

    #[test]
    fn month_bounds_handles_leap_years() {
        assert_eq!(
            month_bounds(date!(2024 - 02 - 10)),
            DateRange {
                start: date!(2024 - 02 - 01),
                end: date!(2024 - 02 - 29)
            }
        );
        assert_eq!(month_bounds(date!(2023 - 02 - 28)).end, date!(2023 - 02 - 28));
        assert_eq!(month_bounds(date!(2024 - 12 - 01)).end, date!(2024 - 12 - 31));
    }

    #[test]
    fn day_count_is_inclusive() {
        let range = DateRange {
            start: date!(2024 - 02 - 27),
            end: date!(2024 - 03 - 02),
        };

        assert_eq!(range.day_count(), 5);
        assert_eq!(range.days().len(), 5);
        assert_eq!(range.days()[2], date!(2024 - 02 - 29));
    }

    #[test]
    fn reversed_range_is_empty() {
        let range = DateRange {
            start: date!(2024 - 03 - 02),
            end: date!(2024 - 03 - 01),
        };

        assert_eq!(range.day_count(), 0);
        assert!(range.days().is_empty());
    }

    #[test]
    fn trailing_week_ends_today() {
        let range = trailing_days(date!(2024 - 03 - 03), 7).unwrap();

        assert_eq!(range.start, date!(2024 - 02 - 26));
        assert_eq!(range.end, date!(2024 - 03 - 03));
        assert!(trailing_days(date!(2024 - 03 - 03), 0).is_none());
    }

    #[test]
    fn month_label_uses_abbreviation_and_year() {
        assert_eq!(month_label("2024-03".parse().unwrap()), "Mar 2024");
        assert_eq!(month_label("2023-12".parse().unwrap()), "Dec 2023");
    }
}
