//! Ranked free-slot suggestions for a task.

use chrono::Utc;
use chrono_tz::Tz;
use clap::Subcommand;

use dayblock_core::{planner, Block, LazyMode, TimeOfDay, UserPreferences};

use super::{parse_energy, parse_window, read_snapshot};

#[derive(Subcommand)]
pub enum SuggestAction {
    /// Suggest conflict-free slots for a task on a date
    Slots {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Task duration in minutes
        #[arg(long)]
        duration: u32,
        /// Task energy requirement (high/medium/low)
        #[arg(long, default_value = "medium")]
        energy: String,
        /// Path to a JSON snapshot of existing blocks
        #[arg(long)]
        blocks: Option<String>,
        /// Wake time (HH:MM)
        #[arg(long, default_value = "07:00")]
        wake: String,
        /// Sleep time (HH:MM)
        #[arg(long, default_value = "22:00")]
        sleep: String,
        /// Peak energy window (morning/afternoon/evening)
        #[arg(long, default_value = "morning")]
        window: String,
        /// IANA timezone, e.g. America/New_York
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Maximum number of suggestions
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
}

pub fn run(action: SuggestAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SuggestAction::Slots {
            date,
            duration,
            energy,
            blocks,
            wake,
            sleep,
            window,
            timezone,
            limit,
        } => {
            let existing: Vec<Block> = match blocks {
                Some(path) => read_snapshot(&path)?,
                None => Vec::new(),
            };
            let tz: Tz = timezone
                .parse()
                .map_err(|_| format!("Invalid timezone: '{timezone}'"))?;
            let prefs = UserPreferences {
                wake_time: TimeOfDay::parse(&wake)?,
                sleep_time: TimeOfDay::parse(&sleep)?,
                timezone: tz,
                energy_profile: None,
                peak_energy_window: parse_window(&window)?,
                lazy_mode: LazyMode::default(),
            };

            let suggestions = planner::suggest_slots(
                &existing,
                date.parse()?,
                duration,
                parse_energy(&energy)?,
                &prefs,
                limit,
                Utc::now(),
            );

            if suggestions.is_empty() {
                println!("No free slot fits {duration} minutes on {date}");
            } else {
                for (i, s) in suggestions.iter().enumerate() {
                    println!(
                        "{}. {}-{} ({} energy, score {:+})",
                        i + 1,
                        s.start_time,
                        s.end_time,
                        s.energy,
                        s.score
                    );
                }
            }
        }
    }
    Ok(())
}
