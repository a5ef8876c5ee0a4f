//! Reminder computation for a block start.

use chrono::Utc;
use clap::Subcommand;

use dayblock_core::ReminderRequest;

#[derive(Subcommand)]
pub enum RemindAction {
    /// Compute the reminder instant for a block, if any
    At {
        /// Block date (YYYY-MM-DD)
        date: String,
        /// Block start time (HH:MM)
        start: String,
        /// Prep buffer in minutes
        #[arg(long, default_value_t = 0)]
        prep: u32,
        /// Estimated travel time in minutes
        #[arg(long)]
        travel: Option<u32>,
        /// Sleep time (HH:MM)
        #[arg(long, default_value = "22:00")]
        sleep: String,
        /// Wake time (HH:MM)
        #[arg(long, default_value = "07:00")]
        wake: String,
        /// IANA timezone, e.g. America/New_York
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
}

pub fn run(action: RemindAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RemindAction::At {
            date,
            start,
            prep,
            travel,
            sleep,
            wake,
            timezone,
        } => {
            let request =
                ReminderRequest::parse(&date, &start, prep, travel, &sleep, &wake, &timezone)?;
            match request.notify_at(Utc::now()) {
                Some(at) => {
                    let local = at.with_timezone(&request.timezone);
                    println!(
                        "Reminder at {} ({} local, {} min lead)",
                        at.to_rfc3339(),
                        local.format("%H:%M"),
                        request.lead_minutes()
                    );
                }
                None => println!("Suppressed (quiet hours or in the past)"),
            }
        }
    }
    Ok(())
}
