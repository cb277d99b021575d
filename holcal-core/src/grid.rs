//! Month-grid construction.
//!
//! A month view always shows whole weeks: the first of the month is padded
//! back to the week start and the last forward to the week end, borrowing
//! leading/trailing days from the adjacent months.

use crate::date::CalendarDay;
use chrono::{Datelike, Weekday};

/// The padded sequence of calendar days shown for one month view.
///
/// Invariants: the length is a multiple of 7, the days are consecutive,
/// and the reference month is fully covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    reference: CalendarDay,
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Build the grid for the month containing `reference`, with weeks
    /// starting on `week_start`.
    ///
    /// Pure and deterministic: any well-formed day produces a valid grid,
    /// across month/year rollovers and leap years alike. chrono's calendar
    /// is bounded (year ±262143); in its very first and last months the
    /// outer padding stops at the boundary instead of completing the week.
    pub fn build(reference: CalendarDay, week_start: Weekday) -> Self {
        let first = reference.first_of_month();
        let last = reference.last_of_month();

        let mut start = first.date();
        while start.weekday() != week_start {
            let Some(prev) = start.pred_opt() else { break };
            start = prev;
        }

        let week_end = week_start.pred();
        let mut end = last.date();
        while end.weekday() != week_end {
            let Some(next) = end.succ_opt() else { break };
            end = next;
        }

        let mut days = Vec::new();
        let mut day = start;
        while day < end {
            days.push(CalendarDay::new(day));
            let Some(next) = day.succ_opt() else { break };
            day = next;
        }
        days.push(CalendarDay::new(end));

        MonthGrid { reference, days }
    }

    /// The day the grid was built around.
    pub fn reference(&self) -> CalendarDay {
        self.reference
    }

    /// All displayed days, first to last.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// The displayed days grouped into weeks of 7.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) => *first <= day && day <= *last,
            _ => false,
        }
    }

    /// Whether `day` belongs to the reference month rather than the
    /// leading/trailing padding.
    pub fn in_reference_month(&self, day: CalendarDay) -> bool {
        day.year() == self.reference.year() && day.month() == self.reference.month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_whole_weeks_of_consecutive_days() {
        let grid = MonthGrid::build(day(2024, 2, 10), Weekday::Sun);

        assert_eq!(grid.days().len() % 7, 0);
        for pair in grid.days().windows(2) {
            assert_eq!(pair[1].date(), pair[0].date().succ_opt().unwrap());
        }
    }

    #[test]
    fn grid_covers_entire_reference_month() {
        let grid = MonthGrid::build(day(2024, 2, 10), Weekday::Sun);

        for d in 1..=29 {
            assert!(grid.contains(day(2024, 2, d)), "missing Feb {}", d);
        }
        assert_eq!(grid.days().first().unwrap().weekday(), Weekday::Sun);
        assert_eq!(grid.days().last().unwrap().weekday(), Weekday::Sat);
    }

    #[test]
    fn build_is_deterministic() {
        let a = MonthGrid::build(day(2025, 6, 1), Weekday::Sun);
        let b = MonthGrid::build(day(2025, 6, 1), Weekday::Sun);
        assert_eq!(a, b);
    }

    #[test]
    fn any_reference_day_in_month_yields_same_grid() {
        let a = MonthGrid::build(day(2025, 6, 1), Weekday::Sun);
        let b = MonthGrid::build(day(2025, 6, 30), Weekday::Sun);
        assert_eq!(a.days(), b.days());
    }

    #[test]
    fn leap_february_2024() {
        // Feb 2024: starts on a Thursday, ends on leap-day Thursday.
        let grid = MonthGrid::build(day(2024, 2, 1), Weekday::Sun);

        let leap_days = grid
            .days()
            .iter()
            .filter(|d| **d == day(2024, 2, 29))
            .count();
        assert_eq!(leap_days, 1);

        // Trailing padding belongs to March 2024.
        assert_eq!(grid.days().first().unwrap(), &day(2024, 1, 28));
        assert_eq!(grid.days().last().unwrap(), &day(2024, 3, 2));
        assert!(!grid.in_reference_month(day(2024, 3, 1)));
    }

    #[test]
    fn december_to_january_rollover() {
        let grid = MonthGrid::build(day(2024, 12, 25), Weekday::Sun);

        // Dec 1 2024 is a Sunday; the grid ends in the first week of 2025.
        assert_eq!(grid.days().first().unwrap(), &day(2024, 12, 1));
        assert_eq!(grid.days().last().unwrap(), &day(2025, 1, 4));
        assert_eq!(grid.days().len(), 35);
    }

    #[test]
    fn calendar_bounds_do_not_panic() {
        let first_month = MonthGrid::build(CalendarDay::new(NaiveDate::MIN), Weekday::Sun);
        assert!(first_month.contains(CalendarDay::new(NaiveDate::MIN)));
        assert_eq!(first_month.days().first().unwrap().date(), NaiveDate::MIN);

        let last_month = MonthGrid::build(CalendarDay::new(NaiveDate::MAX), Weekday::Sun);
        assert!(last_month.contains(CalendarDay::new(NaiveDate::MAX)));
        assert_eq!(last_month.days().last().unwrap().date(), NaiveDate::MAX);
    }

    #[test]
    fn monday_week_start() {
        let grid = MonthGrid::build(day(2024, 2, 1), Weekday::Mon);

        assert_eq!(grid.days().first().unwrap().weekday(), Weekday::Mon);
        assert_eq!(grid.days().last().unwrap().weekday(), Weekday::Sun);
        assert_eq!(grid.days().len() % 7, 0);
    }

    #[test]
    fn weeks_iterator_chunks_by_seven() {
        let grid = MonthGrid::build(day(2024, 2, 1), Weekday::Sun);
        for week in grid.weeks() {
            assert_eq!(week.len(), 7);
        }
    }
}
