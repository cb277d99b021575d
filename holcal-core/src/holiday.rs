//! Holiday entity and its wire payloads.

use crate::date::CalendarDay;
use serde::{Deserialize, Serialize};

/// A named annotation attached to exactly one calendar day, persisted in
/// the remote store.
///
/// The store owns these and assigns `id` on creation; the controller only
/// holds a read-through cached copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Opaque store-assigned identifier.
    pub id: String,
    pub date: CalendarDay,
    pub name: String,
}

/// Creation payload: a holiday that has no identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHoliday {
    pub date: CalendarDay,
    pub name: String,
}

impl NewHoliday {
    pub fn new(date: CalendarDay, name: impl Into<String>) -> Self {
        NewHoliday {
            date,
            name: name.into(),
        }
    }
}
