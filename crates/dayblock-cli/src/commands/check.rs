//! Conflict checks for proposed blocks.

use clap::Subcommand;

use dayblock_core::{conflict, Block, ProposedBlock, TimeOfDay};

use super::read_snapshot;

#[derive(Subcommand)]
pub enum CheckAction {
    /// Check one proposed interval against existing blocks
    Slot {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,
        /// Path to a JSON snapshot of existing blocks
        #[arg(long)]
        blocks: String,
    },
    /// Validate and cross-check a batch of proposed blocks
    Batch {
        /// Path to a JSON array of proposed blocks
        proposed: String,
        /// Path to a JSON snapshot of existing blocks
        #[arg(long)]
        blocks: Option<String>,
    },
}

pub fn run(action: CheckAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CheckAction::Slot {
            date,
            start,
            end,
            blocks,
        } => {
            let existing: Vec<Block> = read_snapshot(&blocks)?;
            let date = date.parse()?;
            let conflicts = conflict::find_conflicts(
                &existing,
                date,
                TimeOfDay::parse(&start)?,
                TimeOfDay::parse(&end)?,
            );
            if conflicts.is_empty() {
                println!("No conflicts");
            } else {
                println!("{} conflict(s):", conflicts.len());
                for c in conflicts {
                    println!("  {} ({}-{})", c.title, c.start_time, c.end_time);
                }
            }
        }
        CheckAction::Batch { proposed, blocks } => {
            let proposed: Vec<ProposedBlock> = read_snapshot(&proposed)?;
            let existing: Vec<Block> = match blocks {
                Some(path) => read_snapshot(&path)?,
                None => Vec::new(),
            };
            let report = conflict::preview_batch(&proposed, &existing);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
