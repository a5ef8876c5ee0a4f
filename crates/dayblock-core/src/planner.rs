//! Slot suggestion: find and rank free slots for a task.
//!
//! Walks the waking-hour range of a day, carves out the gaps left by the
//! existing active blocks, and ranks candidate slots of the requested
//! duration by how well their energy matches the task. This is what a
//! scheduling mutation calls to propose a slot before running the full
//! conflict check on the user's pick.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::block::{Block, UserPreferences};
use crate::energy::{level_for_hour, score_levels, EnergyLevel};
use crate::timecode::{TimeOfDay, MINUTES_PER_DAY};

/// Candidate starts are aligned to this grid within a gap.
const CANDIDATE_STEP_MINUTES: u32 = 30;

/// Penalty applied to high-energy tasks while lazy mode is active.
const LAZY_MODE_PENALTY: i32 = 15;

/// A ranked candidate slot for a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSuggestion {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub energy: EnergyLevel,
    pub score: i32,
}

/// Suggest up to `max_suggestions` conflict-free slots for a task on `date`.
///
/// Gaps are computed against active blocks only (moved/skipped blocks have
/// given up their slot). Candidates inside each gap start at the gap itself
/// and then on a half-hour grid, scored at their midpoint hour; ties break
/// toward the earlier start. While lazy mode is active, high-energy tasks
/// are penalized so lighter slots win.
pub fn suggest_slots(
    existing: &[Block],
    date: NaiveDate,
    duration_minutes: u32,
    task_energy: EnergyLevel,
    prefs: &UserPreferences,
    max_suggestions: usize,
    now: DateTime<Utc>,
) -> Vec<SlotSuggestion> {
    if duration_minutes == 0 || max_suggestions == 0 {
        return Vec::new();
    }

    let day_start = prefs.wake_time.minutes();
    // An overnight sleep time means the waking range runs to midnight on
    // this date; the early-morning remainder belongs to the next date.
    let day_end = if prefs.sleep_time.minutes() > day_start {
        prefs.sleep_time.minutes()
    } else {
        MINUTES_PER_DAY
    };

    let mut candidates = Vec::new();
    let lazy_penalty = if prefs.lazy_mode.is_active(now) && task_energy == EnergyLevel::High {
        LAZY_MODE_PENALTY
    } else {
        0
    };

    for (gap_start, gap_end) in free_gaps(existing, date, day_start, day_end) {
        let mut start = gap_start;
        while start + duration_minutes <= gap_end {
            let end = start + duration_minutes;
            let midpoint_hour = ((start + end) / 2 / 60) as i32;
            let energy = level_for_hour(
                midpoint_hour,
                prefs.energy_profile.as_ref(),
                prefs.peak_energy_window,
            );
            if let (Ok(start_time), Ok(end_time)) =
                (TimeOfDay::from_minutes(start), TimeOfDay::from_minutes(end))
            {
                candidates.push(SlotSuggestion {
                    start_time,
                    end_time,
                    energy,
                    score: score_levels(task_energy, energy) - lazy_penalty,
                });
            }
            // Next grid point after this start
            start = (start / CANDIDATE_STEP_MINUTES + 1) * CANDIDATE_STEP_MINUTES;
        }
    }

    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.start_time.cmp(&b.start_time))
    });
    candidates.truncate(max_suggestions);
    candidates
}

/// Gaps `[start, end)` in minutes left free by active blocks on `date`.
fn free_gaps(existing: &[Block], date: NaiveDate, day_start: u32, day_end: u32) -> Vec<(u32, u32)> {
    let mut occupied: Vec<(u32, u32)> = existing
        .iter()
        .filter(|b| b.date == date && b.status.occupies_slot())
        .map(|b| (b.start_time.minutes(), b.end_time.minutes()))
        .collect();
    occupied.sort_by_key(|&(start, _)| start);

    let mut gaps = Vec::new();
    let mut last_end = day_start;
    for (start, end) in occupied {
        if end <= last_end {
            continue;
        }
        if start >= day_end {
            break;
        }
        if start > last_end {
            gaps.push((last_end, start.min(day_end)));
        }
        last_end = last_end.max(end.min(day_end));
    }
    if last_end < day_end {
        gaps.push((last_end, day_end));
    }
    gaps
}
