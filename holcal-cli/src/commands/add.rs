use anyhow::Result;
use holcal_core::{CalendarController, CalendarDay};
use owo_colors::OwoColorize;

use crate::client::HttpHolidayStore;

pub async fn run(store: HttpHolidayStore, day: CalendarDay, name: String) -> Result<()> {
    let mut controller = CalendarController::starting_at(store, day);

    controller.open_add(day);
    controller.set_draft(&name);
    controller.submit_add().await?;

    println!("Added {} on {}", name.green(), day);
    Ok(())
}
