//! Weekly goal-progress aggregation.
//!
//! Progress is derived, never stored: completed-block durations are summed
//! per goal inside the active week window and compared against the goal's
//! weekly target and the expected linear pace through the week.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockStatus, Goal};

/// Grace buffer, in percentage points, below the expected linear pace.
const ON_TRACK_GRACE: i64 = 10;

/// A half-open `[monday, monday + 7 days)` week window (ISO week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// The window containing `date`, anchored to that week's Monday.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self { start }
    }

    /// Monday the window starts on.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end, the following Monday.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(7)
    }

    /// Half-open membership test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end()
    }
}

/// Where a goal stands relative to the week's pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Complete,
    OnTrack,
    Behind,
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::OnTrack => write!(f, "on track"),
            Self::Behind => write!(f, "behind"),
        }
    }
}

/// Derived weekly progress for one goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: String,
    pub title: String,
    pub weekly_target_minutes: u32,
    pub completed_minutes: u32,
    pub sessions_completed: u32,
    pub percent_complete: i64,
    pub is_on_track: bool,
    pub status: ProgressStatus,
}

/// Weekly progress across all goals, with the pace inputs it was derived
/// from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekProgressReport {
    pub week: WeekWindow,
    /// Day of week, 0 = Sunday .. 6 = Saturday, in the user's timezone.
    pub day_index: u32,
    pub goals: Vec<GoalProgress>,
}

impl WeekProgressReport {
    /// Aggregate the week containing `now` in the user's timezone.
    ///
    /// All pace math uses the user's timezone as its single basis; there is
    /// no server-local day-of-week read anywhere in this path.
    pub fn compute(goals: &[Goal], blocks: &[Block], timezone: Tz, now: DateTime<Utc>) -> Self {
        let local = now.with_timezone(&timezone);
        let today = local.date_naive();
        let week = WeekWindow::containing(today);
        let day_index = local.weekday().num_days_from_sunday();
        let goals = goals
            .iter()
            .map(|g| goal_progress(g, blocks, week, day_index))
            .collect();
        Self {
            week,
            day_index,
            goals,
        }
    }
}

/// Derive one goal's progress for a week window.
///
/// `day_index` is 0 = Sunday .. 6 = Saturday. The on-track test allows a
/// fixed grace buffer below the expected linear pace; "behind" only kicks
/// in under 50% from Thursday on.
pub fn goal_progress(
    goal: &Goal,
    blocks: &[Block],
    week: WeekWindow,
    day_index: u32,
) -> GoalProgress {
    let mut completed_minutes: u32 = 0;
    let mut sessions_completed: u32 = 0;
    for block in blocks {
        if block.status != BlockStatus::Completed
            || block.goal_id.as_deref() != Some(goal.id.as_str())
            || !week.contains(block.date)
        {
            continue;
        }
        completed_minutes += block.duration_minutes();
        sessions_completed += 1;
    }

    let percent_complete = if goal.weekly_target_minutes == 0 {
        0
    } else {
        (completed_minutes as f64 / goal.weekly_target_minutes as f64 * 100.0).round() as i64
    };
    let expected_progress = (day_index as f64 / 7.0 * 100.0).round() as i64;
    let is_on_track = percent_complete >= expected_progress - ON_TRACK_GRACE;

    let status = if percent_complete >= 100 {
        ProgressStatus::Complete
    } else if percent_complete < 50 && day_index >= 4 {
        ProgressStatus::Behind
    } else {
        ProgressStatus::OnTrack
    };

    GoalProgress {
        goal_id: goal.id.clone(),
        title: goal.title.clone(),
        weekly_target_minutes: goal.weekly_target_minutes,
        completed_minutes,
        sessions_completed,
        percent_complete,
        is_on_track,
        status,
    }
}
