//! Block conflict detection.
//!
//! Pairwise overlap checks against a day's existing blocks, plus a batch
//! preview used when proposing several blocks at once. Results are
//! structured not-valid reports rather than errors, so a preview can show
//! partial success across the batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::timecode::{time_to_minutes, times_overlap, validate_date_format, validate_time_format, TimeOfDay};

/// Maximum number of proposed blocks in one preview batch.
pub const MAX_BATCH_SIZE: usize = 5;

/// Maximum title length for a proposed block.
pub const MAX_TITLE_LEN: usize = 100;

/// Description of a block a proposal collides with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDescriptor {
    pub title: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl ConflictDescriptor {
    fn from_block(block: &Block) -> Self {
        Self {
            title: block.title.clone(),
            start_time: block.start_time,
            end_time: block.end_time,
        }
    }
}

/// Find existing active blocks on `date` that overlap `[start, end)`.
///
/// Moved and skipped blocks no longer occupy their nominal slot and are
/// never reported.
pub fn find_conflicts(
    existing: &[Block],
    date: NaiveDate,
    start: TimeOfDay,
    end: TimeOfDay,
) -> Vec<ConflictDescriptor> {
    existing
        .iter()
        .filter(|b| b.date == date && b.status.occupies_slot())
        .filter(|b| {
            times_overlap(
                start.minutes(),
                end.minutes(),
                b.start_time.minutes(),
                b.end_time.minutes(),
            )
        })
        .map(ConflictDescriptor::from_block)
        .collect()
}

/// A block proposed by the caller, not yet validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposedBlock {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
}

/// Validation and conflict report for one proposed block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockPreview {
    pub index: usize,
    pub title: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub conflicts: Vec<ConflictDescriptor>,
}

/// Report for a whole proposed batch.
///
/// `valid` only when every block is individually valid and conflict-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPreview {
    pub valid: bool,
    /// Batch-level rejection, e.g. exceeding the size cap.
    pub error: Option<String>,
    pub blocks: Vec<BlockPreview>,
}

/// Validate a batch of proposed blocks and cross-check for conflicts.
///
/// Each block is validated independently; valid blocks are then checked
/// against existing active blocks on the same date and against *earlier*
/// valid blocks in the batch (index `i` against indices `< i` only, so a
/// pair is reported once). Batches over [`MAX_BATCH_SIZE`] are rejected
/// wholesale with a single summary error.
pub fn preview_batch(proposed: &[ProposedBlock], existing: &[Block]) -> BatchPreview {
    if proposed.len() > MAX_BATCH_SIZE {
        return BatchPreview {
            valid: false,
            error: Some(format!(
                "Too many blocks: {} (maximum {} per batch)",
                proposed.len(),
                MAX_BATCH_SIZE
            )),
            blocks: Vec::new(),
        };
    }

    let mut previews: Vec<BlockPreview> = proposed
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let errors = validate_proposed(block);
            BlockPreview {
                index,
                title: block.title.clone(),
                valid: errors.is_empty(),
                errors,
                conflicts: Vec::new(),
            }
        })
        .collect();

    for i in 0..proposed.len() {
        if !previews[i].valid {
            continue;
        }
        // Validity guarantees these parse
        let Ok(start) = time_to_minutes(&proposed[i].start_time) else {
            continue;
        };
        let Ok(end) = time_to_minutes(&proposed[i].end_time) else {
            continue;
        };

        // Existing blocks on the same date. Dates compare as strings so the
        // lenient date validator and conflict check agree on what "same
        // date" means.
        for block in existing {
            if block.date.format("%Y-%m-%d").to_string() != proposed[i].date
                || !block.status.occupies_slot()
            {
                continue;
            }
            if times_overlap(
                start,
                end,
                block.start_time.minutes(),
                block.end_time.minutes(),
            ) {
                previews[i].conflicts.push(ConflictDescriptor::from_block(block));
            }
        }

        // Earlier valid blocks in the same batch
        for j in 0..i {
            if !previews[j].valid || proposed[j].date != proposed[i].date {
                continue;
            }
            let (Ok(other_start), Ok(other_end)) = (
                TimeOfDay::parse(&proposed[j].start_time),
                TimeOfDay::parse(&proposed[j].end_time),
            ) else {
                continue;
            };
            if times_overlap(start, end, other_start.minutes(), other_end.minutes()) {
                previews[i].conflicts.push(ConflictDescriptor {
                    title: proposed[j].title.clone(),
                    start_time: other_start,
                    end_time: other_end,
                });
            }
        }
    }

    let valid = previews
        .iter()
        .all(|p| p.valid && p.conflicts.is_empty());
    BatchPreview {
        valid,
        error: None,
        blocks: previews,
    }
}

fn validate_proposed(block: &ProposedBlock) -> Vec<String> {
    let mut errors = Vec::new();
    if block.title.trim().is_empty() {
        errors.push("Title must not be empty".to_string());
    } else if block.title.chars().count() > MAX_TITLE_LEN {
        errors.push(format!("Title must be at most {MAX_TITLE_LEN} characters"));
    }
    if !validate_date_format(&block.date) {
        errors.push(format!("Invalid date: '{}'", block.date));
    }
    let start_ok = validate_time_format(&block.start_time);
    let end_ok = validate_time_format(&block.end_time);
    if !start_ok {
        errors.push(format!("Invalid start time: '{}'", block.start_time));
    }
    if !end_ok {
        errors.push(format!("Invalid end time: '{}'", block.end_time));
    }
    if start_ok && end_ok {
        // Both parse when the format check passes
        let start = time_to_minutes(&block.start_time).unwrap_or(0);
        let end = time_to_minutes(&block.end_time).unwrap_or(0);
        if start >= end {
            errors.push("Start time must be before end time".to_string());
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockStatus;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn existing_block(title: &str, date: &str, start: &str, end: &str) -> Block {
        Block::new(title, date.parse().unwrap(), t(start), t(end)).unwrap()
    }

    fn proposed(title: &str, date: &str, start: &str, end: &str) -> ProposedBlock {
        ProposedBlock {
            title: title.to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn test_pairwise_conflict() {
        let existing = vec![existing_block("Standup", "2024-01-15", "09:00", "09:30")];
        let date: NaiveDate = "2024-01-15".parse().unwrap();

        let conflicts = find_conflicts(&existing, date, t("09:15"), t("10:00"));
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].title, "Standup");

        // Adjacent is not a conflict
        assert!(find_conflicts(&existing, date, t("09:30"), t("10:00")).is_empty());
        // Different date is not a conflict
        let other: NaiveDate = "2024-01-16".parse().unwrap();
        assert!(find_conflicts(&existing, other, t("09:15"), t("10:00")).is_empty());
    }

    #[test]
    fn test_moved_and_skipped_blocks_ignored() {
        let mut moved = existing_block("Moved", "2024-01-15", "09:00", "10:00");
        moved.status = BlockStatus::Moved;
        let mut skipped = existing_block("Skipped", "2024-01-15", "09:00", "10:00");
        skipped.status = BlockStatus::Skipped;

        let date: NaiveDate = "2024-01-15".parse().unwrap();
        assert!(find_conflicts(&[moved, skipped], date, t("09:00"), t("10:00")).is_empty());
    }

    #[test]
    fn test_batch_cap() {
        let blocks: Vec<_> = (0..6)
            .map(|i| proposed(&format!("Block {i}"), "2024-01-15", "09:00", "10:00"))
            .collect();
        let report = preview_batch(&blocks, &[]);
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("maximum 5"));
        assert!(report.blocks.is_empty());
    }

    #[test]
    fn test_batch_validation_errors() {
        let blocks = vec![
            proposed("", "2024-01-15", "09:00", "10:00"),
            proposed("Ok", "2024-13-01", "09:00", "10:00"),
            proposed("Backwards", "2024-01-15", "10:00", "09:00"),
            proposed("Bad time", "2024-01-15", "9am", "10:00"),
        ];
        let report = preview_batch(&blocks, &[]);
        assert!(!report.valid);
        assert!(report.error.is_none());
        assert!(report.blocks[0].errors[0].contains("Title"));
        assert!(report.blocks[1].errors[0].contains("Invalid date"));
        assert!(report.blocks[2].errors[0].contains("before end"));
        assert!(report.blocks[3].errors[0].contains("start time"));
    }

    #[test]
    fn test_title_length_limit() {
        let long = "x".repeat(101);
        let report = preview_batch(&[proposed(&long, "2024-01-15", "09:00", "10:00")], &[]);
        assert!(!report.valid);
        assert!(report.blocks[0].errors[0].contains("100"));
    }

    #[test]
    fn test_cross_batch_conflicts_reported_once() {
        let blocks = vec![
            proposed("First", "2024-01-15", "09:00", "10:00"),
            proposed("Second", "2024-01-15", "09:30", "10:30"),
        ];
        let report = preview_batch(&blocks, &[]);
        assert!(!report.valid);
        // Only the later block carries the conflict
        assert!(report.blocks[0].conflicts.is_empty());
        assert_eq!(report.blocks[1].conflicts.len(), 1);
        assert_eq!(report.blocks[1].conflicts[0].title, "First");
    }

    #[test]
    fn test_conflicts_accumulate_from_both_sources() {
        let existing = vec![existing_block("Existing", "2024-01-15", "09:45", "10:15")];
        let blocks = vec![
            proposed("First", "2024-01-15", "09:00", "10:00"),
            proposed("Second", "2024-01-15", "09:30", "10:30"),
        ];
        let report = preview_batch(&blocks, &existing);
        assert_eq!(report.blocks[0].conflicts.len(), 1);
        let second: Vec<_> = report.blocks[1]
            .conflicts
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(second, vec!["Existing", "First"]);
    }

    #[test]
    fn test_clean_batch_is_valid() {
        let existing = vec![existing_block("Lunch", "2024-01-15", "12:00", "13:00")];
        let blocks = vec![
            proposed("Morning", "2024-01-15", "09:00", "10:00"),
            proposed("Afternoon", "2024-01-15", "14:00", "15:00"),
            proposed("Other day", "2024-01-16", "09:00", "10:00"),
        ];
        let report = preview_batch(&blocks, &existing);
        assert!(report.valid);
        assert!(report.blocks.iter().all(|b| b.conflicts.is_empty()));
    }
}
