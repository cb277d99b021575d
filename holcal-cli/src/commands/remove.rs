use anyhow::Result;
use holcal_core::{CalendarController, CalendarDay, Modal};
use owo_colors::OwoColorize;

use crate::client::HttpHolidayStore;
use crate::render;

pub async fn run(store: HttpHolidayStore, id: String, day: Option<CalendarDay>) -> Result<()> {
    let mut controller = CalendarController::new(store);
    controller.refresh().await?;

    // With --day, keep that day's list open so the post-delete contents
    // get re-derived and shown.
    if let Some(day) = day {
        controller.open_view(day);
    }

    controller.delete_holiday(&id).await?;
    println!("Deleted holiday {}", id.red());

    if let Modal::Viewing { day, holidays } = controller.modal() {
        println!("{}", render::day_view(*day, holidays));
    }

    Ok(())
}
