mod client;
mod commands;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use holcal_core::CalendarDay;

use crate::client::HttpHolidayStore;
use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "holcal")]
#[command(about = "Month-grid holiday calendar backed by a remote holiday store")]
struct Cli {
    /// Holiday store base URL (overrides the config file)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid with holiday badges
    Show {
        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Add a holiday on a day
    Add {
        /// Day in dd/MM/yyyy form
        date: String,

        /// Holiday name
        name: String,
    },
    /// List the holidays on a day
    List {
        /// Day in dd/MM/yyyy form
        date: String,
    },
    /// Delete a holiday by store identifier
    Remove {
        id: String,

        /// Show this day's remaining holidays after the delete (dd/MM/yyyy)
        #[arg(short, long)]
        day: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GlobalConfig::load()?;
    let server_url = cli.server.unwrap_or(config.server_url);
    let store = HttpHolidayStore::new(server_url);

    match cli.command {
        Commands::Show { month } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            commands::show::run(store, month).await
        }
        Commands::Add { date, name } => commands::add::run(store, parse_day(&date)?, name).await,
        Commands::List { date } => commands::list::run(store, parse_day(&date)?).await,
        Commands::Remove { id, day } => {
            let day = day.as_deref().map(parse_day).transpose()?;
            commands::remove::run(store, id, day).await
        }
    }
}

/// Parse a dd/MM/yyyy day argument.
fn parse_day(s: &str) -> Result<CalendarDay> {
    CalendarDay::parse_wire(s).with_context(|| format!("Invalid date '{}'. Expected dd/MM/yyyy", s))
}

/// Parse YYYY-MM as the first day of that month.
fn parse_month(s: &str) -> Result<CalendarDay> {
    let date = chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))?;
    Ok(CalendarDay::new(date))
}
