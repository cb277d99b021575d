use anyhow::Result;
use holcal_core::{CalendarController, CalendarDay, Modal};
use owo_colors::OwoColorize;

use crate::client::HttpHolidayStore;
use crate::render;

pub async fn run(store: HttpHolidayStore, day: CalendarDay) -> Result<()> {
    let mut controller = CalendarController::starting_at(store, day);
    controller.refresh().await?;

    if !controller.open_view(day) {
        println!("{}", format!("No holidays on {}", day).dimmed());
        return Ok(());
    }

    if let Modal::Viewing { holidays, .. } = controller.modal() {
        println!("{}", render::day_view(day, holidays));
    }

    Ok(())
}
