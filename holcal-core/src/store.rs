//! Remote holiday store contract.
//!
//! The store is the system of record for holidays; the core only consumes
//! this list/create/delete surface and never assumes pagination, filtering
//! or partial updates. Implementations live outside the core; the CLI
//! ships an HTTP one, tests use an in-memory one.

use crate::error::TransportError;
use crate::holiday::{Holiday, NewHoliday};

#[allow(async_fn_in_trait)]
pub trait HolidayStore {
    /// Fetch every holiday in the store.
    async fn list_all(&self) -> Result<Vec<Holiday>, TransportError>;

    /// Persist a new holiday; the store assigns its identifier.
    async fn create(&self, holiday: NewHoliday) -> Result<(), TransportError>;

    /// Delete a holiday by store identifier.
    async fn delete(&self, id: &str) -> Result<(), TransportError>;
}
