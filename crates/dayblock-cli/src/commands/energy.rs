//! Energy schedule display and slot scoring.

use chrono::Utc;
use chrono_tz::Tz;
use clap::Subcommand;

use dayblock_core::energy;
use dayblock_core::EnergyProfile;

use super::{parse_energy, parse_window, read_snapshot};

#[derive(Subcommand)]
pub enum EnergyAction {
    /// Show the daily energy schedule for the waking hours
    Schedule {
        /// Wake time (HH:MM)
        #[arg(long, default_value = "07:00")]
        wake: String,
        /// Sleep time (HH:MM)
        #[arg(long, default_value = "22:00")]
        sleep: String,
        /// Peak energy window (morning/afternoon/evening)
        #[arg(long, default_value = "morning")]
        window: String,
        /// Path to a JSON energy profile (24 hourly levels)
        #[arg(long)]
        profile: Option<String>,
    },
    /// Score a candidate slot for a task's energy requirement
    Score {
        /// Slot start (HH:MM)
        start: String,
        /// Slot end (HH:MM)
        end: String,
        /// Task energy requirement (high/medium/low)
        #[arg(long, default_value = "medium")]
        task: String,
        /// Peak energy window (morning/afternoon/evening)
        #[arg(long, default_value = "morning")]
        window: String,
        /// Path to a JSON energy profile (24 hourly levels)
        #[arg(long)]
        profile: Option<String>,
    },
    /// Current energy level in a timezone
    Now {
        /// IANA timezone, e.g. America/New_York
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Peak energy window (morning/afternoon/evening)
        #[arg(long, default_value = "morning")]
        window: String,
        /// Path to a JSON energy profile (24 hourly levels)
        #[arg(long)]
        profile: Option<String>,
    },
}

fn load_profile(path: Option<&str>) -> Result<Option<EnergyProfile>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Some(read_snapshot(path)?)),
        None => Ok(None),
    }
}

pub fn run(action: EnergyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EnergyAction::Schedule {
            wake,
            sleep,
            window,
            profile,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let window = parse_window(&window)?;
            let schedule = energy::format_schedule(profile.as_ref(), window, &wake, &sleep)?;
            if schedule.is_empty() {
                println!("(empty schedule)");
            } else {
                println!("{schedule}");
            }
        }
        EnergyAction::Score {
            start,
            end,
            task,
            window,
            profile,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let task = parse_energy(&task)?;
            let window = parse_window(&window)?;
            let score = energy::score_slot(&start, &end, task, profile.as_ref(), window)?;
            println!("{start}-{end} for a {task} energy task: {score:+}");
        }
        EnergyAction::Now {
            timezone,
            window,
            profile,
        } => {
            let tz: Tz = timezone
                .parse()
                .map_err(|_| format!("Invalid timezone: '{timezone}'"))?;
            let profile = load_profile(profile.as_deref())?;
            let window = parse_window(&window)?;
            let level = energy::current_level(profile.as_ref(), window, tz, Utc::now());
            println!("Current energy in {timezone}: {level}");
        }
    }
    Ok(())
}
