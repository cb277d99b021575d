//! Core types and logic for holcal: a month-grid calendar with holiday
//! annotations persisted in a remote store.
//!
//! This crate provides:
//! - [`CalendarDay`] and [`MonthGrid`] for the padded month view
//! - [`Holiday`] and [`HolidayIndex`] for the day-to-holiday lookup
//! - the [`HolidayStore`] contract the controller consumes
//! - [`CalendarController`], the interaction state machine driving the
//!   add/view/delete flows against the store
//!
//! Store implementations (HTTP, in-memory) live outside this crate.

pub mod controller;
pub mod date;
pub mod error;
pub mod grid;
pub mod holiday;
pub mod index;
pub mod store;

pub use controller::{CalendarController, Modal};
pub use date::CalendarDay;
pub use error::{CalendarError, CalendarResult, TransportError, ValidationError};
pub use grid::MonthGrid;
pub use holiday::{Holiday, NewHoliday};
pub use index::HolidayIndex;
pub use store::HolidayStore;
