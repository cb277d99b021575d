use anyhow::Result;
use holcal_core::{CalendarController, CalendarDay};
use owo_colors::OwoColorize;

use crate::client::HttpHolidayStore;
use crate::render;

pub async fn run(store: HttpHolidayStore, month: Option<CalendarDay>) -> Result<()> {
    let mut controller = match month {
        Some(day) => CalendarController::starting_at(store, day),
        None => CalendarController::new(store),
    };

    // A fetch failure still renders the grid, just with no badges.
    if let Err(err) = controller.refresh().await {
        eprintln!("{} {}", "warning:".yellow(), err);
    }

    let grid = controller.month_grid();
    let view = render::month_view(&grid, CalendarDay::today(), |day| {
        controller.holidays_on(day).len()
    });
    println!("{}", view);

    Ok(())
}
