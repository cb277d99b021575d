//! Terminal rendering for the month grid and day views.
//!
//! Pure functions of controller state: the grid shows each day's number
//! with a holiday badge count, padding days from adjacent months dimmed.

use holcal_core::{CalendarDay, Holiday, MonthGrid};
use owo_colors::OwoColorize;

/// Render the padded month grid. `badge_count` reports the number of
/// holidays on a day, `today` is highlighted when visible.
pub fn month_view<F>(grid: &MonthGrid, today: CalendarDay, badge_count: F) -> String
where
    F: Fn(CalendarDay) -> usize,
{
    let mut lines = Vec::new();

    let title = grid.reference().date().format("%B %Y").to_string();
    lines.push(format!("{:^35}", title).bold().to_string());

    // Pad before styling: ANSI codes would throw off the column widths.
    let weekday_row: Vec<String> = match grid.weeks().next() {
        Some(week) => week
            .iter()
            .map(|d| {
                let name = d.date().format("%a").to_string();
                format!("{:>4}", name).dimmed().to_string()
            })
            .collect(),
        None => Vec::new(),
    };
    lines.push(weekday_row.join(" "));

    for week in grid.weeks() {
        let mut cells = Vec::new();
        for day in week {
            let number = format!("{:>3}", day.day());
            let number = if *day == today {
                number.bold().to_string()
            } else if grid.in_reference_month(*day) {
                number
            } else {
                number.dimmed().to_string()
            };

            let count = badge_count(*day);
            let badge = if count > 0 {
                count.to_string().red().to_string()
            } else {
                " ".to_string()
            };
            cells.push(format!("{}{}", number, badge));
        }
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}

/// Render the list of holidays on one day.
pub fn day_view(day: CalendarDay, holidays: &[Holiday]) -> String {
    let mut lines = vec![format!("Holidays on {}", day).bold().to_string()];

    if holidays.is_empty() {
        lines.push("  (none)".dimmed().to_string());
    } else {
        for holiday in holidays {
            lines.push(format!("  {} {}", holiday.name, format!("[{}]", holiday.id).dimmed()));
        }
    }

    lines.join("\n")
}
