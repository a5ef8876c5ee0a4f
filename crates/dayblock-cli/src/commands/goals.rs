//! Weekly goal-progress reporting.

use chrono::Utc;
use chrono_tz::Tz;
use clap::Subcommand;

use dayblock_core::{Block, Goal, WeekProgressReport};

use super::read_snapshot;

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Aggregate this week's progress for every goal
    Progress {
        /// Path to a JSON array of goals
        goals: String,
        /// Path to a JSON snapshot of the week's blocks
        #[arg(long)]
        blocks: String,
        /// IANA timezone, e.g. America/New_York
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: GoalsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GoalsAction::Progress {
            goals,
            blocks,
            timezone,
            json,
        } => {
            let goals: Vec<Goal> = read_snapshot(&goals)?;
            let blocks: Vec<Block> = read_snapshot(&blocks)?;
            let tz: Tz = timezone
                .parse()
                .map_err(|_| format!("Invalid timezone: '{timezone}'"))?;

            let report = WeekProgressReport::compute(&goals, &blocks, tz, Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!(
                "Week of {} (day {} of 7)",
                report.week.start(),
                report.day_index + 1
            );
            for g in &report.goals {
                println!(
                    "  {}: {}/{} min over {} session(s), {}% -- {}",
                    g.title,
                    g.completed_minutes,
                    g.weekly_target_minutes,
                    g.sessions_completed,
                    g.percent_complete,
                    g.status
                );
            }
        }
    }
    Ok(())
}
