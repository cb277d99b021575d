//! Calendar interaction state machine.
//!
//! `CalendarController` owns the displayed month, the latest holiday
//! snapshot with its derived index, and the modal state, and mediates
//! every create/read/delete flow against the remote store.
//!
//! All transitions run on one task; a store call suspends only the
//! transition that issued it. The holiday snapshot is mutated exclusively
//! by [`CalendarController::refresh`] and always replaced wholesale, so no
//! failure can leave it partially updated.

use chrono::Weekday;

use crate::date::CalendarDay;
use crate::error::{CalendarError, CalendarResult, TransportError, ValidationError};
use crate::grid::MonthGrid;
use crate::holiday::{Holiday, NewHoliday};
use crate::index::HolidayIndex;
use crate::store::HolidayStore;

/// Modal state for the month view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    /// Add form for `day`, with the current draft name.
    Adding { day: CalendarDay, draft: String },
    /// List view for `day`, snapshotting the holidays it had when opened.
    Viewing {
        day: CalendarDay,
        holidays: Vec<Holiday>,
    },
}

pub struct CalendarController<S> {
    store: S,
    reference_month: CalendarDay,
    week_start: Weekday,
    holidays: Vec<Holiday>,
    index: HolidayIndex,
    modal: Modal,
    /// Monotonic refresh sequencing: a completed refresh is applied only
    /// if no newer one has landed, so stale in-flight results are dropped.
    issued_refresh: u64,
    applied_refresh: u64,
}

impl<S: HolidayStore> CalendarController<S> {
    /// Controller showing the current month, with no holidays loaded yet.
    pub fn new(store: S) -> Self {
        Self::starting_at(store, CalendarDay::today())
    }

    /// Controller showing the month containing `reference`.
    pub fn starting_at(store: S, reference: CalendarDay) -> Self {
        CalendarController {
            store,
            reference_month: reference,
            week_start: Weekday::Sun,
            holidays: Vec::new(),
            index: HolidayIndex::default(),
            modal: Modal::Closed,
            issued_refresh: 0,
            applied_refresh: 0,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    pub fn reference_month(&self) -> CalendarDay {
        self.reference_month
    }

    /// The most recent store snapshot.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// The padded month grid for the current reference month. Purely
    /// derived; never triggers a fetch.
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(self.reference_month, self.week_start)
    }

    /// Holidays on `day` per the current index, in snapshot order.
    pub fn holidays_on(&self, day: CalendarDay) -> &[Holiday] {
        self.index.holidays_on(day)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move the displayed month by `months`. Leaves the modal and the
    /// holiday snapshot untouched.
    pub fn navigate(&mut self, months: i32) {
        self.reference_month = self.reference_month.months_from(months);
    }

    // =========================================================================
    // Add flow
    // =========================================================================

    /// Open the add form for `day` with an empty draft.
    pub fn open_add(&mut self, day: CalendarDay) {
        self.modal = Modal::Adding {
            day,
            draft: String::new(),
        };
    }

    /// Update the draft name of an open add form. No-op otherwise.
    pub fn set_draft(&mut self, name: &str) {
        if let Modal::Adding { draft, .. } = &mut self.modal {
            *draft = name.to_string();
        }
    }

    /// Close the add form, discarding the draft.
    pub fn cancel_add(&mut self) {
        if matches!(self.modal, Modal::Adding { .. }) {
            self.modal = Modal::Closed;
        }
    }

    /// Persist the open add form's draft, then refetch.
    ///
    /// Validation runs before any store call: a missing add form or an
    /// empty draft blocks locally and nothing is sent. A transport failure
    /// leaves the form open so the user can re-trigger the action; there
    /// is no automatic retry.
    pub async fn submit_add(&mut self) -> CalendarResult<()> {
        let (day, name) = match &self.modal {
            Modal::Adding { day, draft } => (*day, draft.trim().to_string()),
            _ => return Err(ValidationError::NoDaySelected.into()),
        };
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        self.store
            .create(NewHoliday::new(day, name))
            .await
            .map_err(CalendarError::from)?;

        self.modal = Modal::Closed;
        self.refresh().await
    }

    // =========================================================================
    // View flow
    // =========================================================================

    /// Open the list view for `day`, snapshotting its holidays.
    ///
    /// Days without holidays are not viewable; the call is a no-op and
    /// reports `false`.
    pub fn open_view(&mut self, day: CalendarDay) -> bool {
        let holidays = self.index.holidays_on(day);
        if holidays.is_empty() {
            return false;
        }
        self.modal = Modal::Viewing {
            day,
            holidays: holidays.to_vec(),
        };
        true
    }

    pub fn close_view(&mut self) {
        if matches!(self.modal, Modal::Viewing { .. }) {
            self.modal = Modal::Closed;
        }
    }

    /// Delete a holiday by store identifier, then refetch.
    ///
    /// An open list view is re-derived from the refreshed index rather
    /// than closed, so it shows the post-delete contents (possibly an
    /// empty list). On transport failure nothing changes locally.
    pub async fn delete_holiday(&mut self, id: &str) -> CalendarResult<()> {
        self.store.delete(id).await.map_err(CalendarError::from)?;

        let refreshed = self.refresh().await;

        let viewing_day = match &self.modal {
            Modal::Viewing { day, .. } => Some(*day),
            _ => None,
        };
        if let Some(day) = viewing_day {
            self.modal = Modal::Viewing {
                day,
                holidays: self.index.holidays_on(day).to_vec(),
            };
        }

        refreshed
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Replace the local holiday snapshot with the store's current
    /// contents and rebuild the index.
    ///
    /// On transport failure the snapshot degrades to empty rather than
    /// going stale; the grid still renders and the error is returned for
    /// surfacing. A refresh overtaken by a newer completed one discards
    /// its result.
    pub async fn refresh(&mut self) -> CalendarResult<()> {
        let seq = self.begin_refresh();
        let result = self.store.list_all().await;
        self.apply_refresh(seq, result)
    }

    /// Issue a refresh ticket. Results are applied in ticket order.
    fn begin_refresh(&mut self) -> u64 {
        self.issued_refresh += 1;
        self.issued_refresh
    }

    /// Apply a completed refresh, unless a newer one already landed.
    fn apply_refresh(
        &mut self,
        seq: u64,
        result: Result<Vec<Holiday>, TransportError>,
    ) -> CalendarResult<()> {
        if seq <= self.applied_refresh {
            return Ok(());
        }
        self.applied_refresh = seq;

        match result {
            Ok(holidays) => {
                self.apply_holidays(holidays);
                Ok(())
            }
            Err(err) => {
                self.apply_holidays(Vec::new());
                Err(err.into())
            }
        }
    }

    fn apply_holidays(&mut self, holidays: Vec<Holiday>) {
        self.index = HolidayIndex::build(&holidays);
        self.holidays = holidays;
    }
}
