//! Day-to-holiday lookup index.

use crate::date::CalendarDay;
use crate::holiday::Holiday;
use std::collections::HashMap;

/// Maps each calendar day to the holidays recorded for it.
///
/// Rebuilt wholesale whenever the holiday collection changes rather than
/// patched incrementally; collections are small (dozens to low hundreds),
/// so the O(n) rebuild is cheaper than chasing stale-index bugs. Within a
/// day, holidays keep the order they had in the source collection.
#[derive(Debug, Clone, Default)]
pub struct HolidayIndex {
    by_day: HashMap<CalendarDay, Vec<Holiday>>,
}

impl HolidayIndex {
    /// Group `holidays` by exact calendar date.
    pub fn build(holidays: &[Holiday]) -> Self {
        let mut by_day: HashMap<CalendarDay, Vec<Holiday>> = HashMap::new();
        for holiday in holidays {
            by_day.entry(holiday.date).or_default().push(holiday.clone());
        }
        HolidayIndex { by_day }
    }

    /// Holidays recorded on `day`, in source order. Empty when none.
    pub fn holidays_on(&self, day: CalendarDay) -> &[Holiday] {
        match self.by_day.get(&day) {
            Some(holidays) => holidays,
            None => &[],
        }
    }

    pub fn count_on(&self, day: CalendarDay) -> usize {
        self.holidays_on(day).len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}
