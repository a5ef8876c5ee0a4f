//! Pre-block reminder scheduling.
//!
//! Computes the absolute instant to fire a reminder before a block starts,
//! converting the block's local wall-clock start through its IANA timezone,
//! then suppresses reminders that would land inside quiet hours or in the
//! past. Suppression is a policy outcome, not an error: non-delivery is a
//! valid decision and comes back as `None`.

pub mod tzconv;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::block::{Block, UserPreferences};
use crate::error::{CoreError, ValidationError};
use crate::timecode::TimeOfDay;
use tzconv::{absolute_to_wall_clock, wall_clock_to_absolute};

/// Flat lead time applied to every reminder, on top of prep and travel.
pub const FLAT_LEAD_MINUTES: i64 = 5;

/// Reminder lifecycle for a block.
///
/// `None -> Scheduled -> (Fired | Suppressed | Superseded)`; rescheduling a
/// block supersedes any previous reminder and reruns the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationState {
    None,
    Scheduled,
    Fired,
    Suppressed,
    Superseded,
}

/// Validated inputs for one reminder computation.
///
/// Construction fails fast on malformed dates, times, or timezone
/// identifiers; once built, [`ReminderRequest::notify_at`] is total.
#[derive(Debug, Clone)]
pub struct ReminderRequest {
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub prep_buffer: u32,
    pub estimated_travel_time: Option<u32>,
    pub sleep_time: TimeOfDay,
    pub wake_time: TimeOfDay,
    pub timezone: Tz,
}

impl ReminderRequest {
    /// Build a request from raw strings, validating everything up front.
    #[allow(clippy::too_many_arguments)]
    pub fn parse(
        date: &str,
        start_time: &str,
        prep_buffer: u32,
        estimated_travel_time: Option<u32>,
        sleep_time: &str,
        wake_time: &str,
        timezone: &str,
    ) -> Result<Self, CoreError> {
        let date: NaiveDate = date
            .parse()
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
        let timezone: Tz = timezone
            .parse()
            .map_err(|_| ValidationError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self {
            date,
            start_time: TimeOfDay::parse(start_time)?,
            prep_buffer,
            estimated_travel_time,
            sleep_time: TimeOfDay::parse(sleep_time)?,
            wake_time: TimeOfDay::parse(wake_time)?,
            timezone,
        })
    }

    /// Build a request from a block and the owning user's preferences.
    pub fn from_block(block: &Block, prefs: &UserPreferences) -> Self {
        Self {
            date: block.date,
            start_time: block.start_time,
            prep_buffer: block.prep_buffer,
            estimated_travel_time: if block.requires_travel {
                block.estimated_travel_time
            } else {
                None
            },
            sleep_time: prefs.sleep_time,
            wake_time: prefs.wake_time,
            timezone: prefs.timezone,
        }
    }

    /// Total lead time in minutes before the block start.
    pub fn lead_minutes(&self) -> i64 {
        self.prep_buffer as i64
            + FLAT_LEAD_MINUTES
            + self.estimated_travel_time.unwrap_or(0) as i64
    }

    /// Compute the reminder instant, or `None` when suppressed.
    ///
    /// The block start is resolved at that date's UTC offset, so DST
    /// transitions are respected. The candidate instant is converted back
    /// into the same timezone for the quiet-hours test: when sleep time is
    /// after wake time the quiet range wraps through midnight; otherwise it
    /// is the plain `[sleep, wake)` interval. Candidates in quiet hours or
    /// at/before `now` are suppressed.
    pub fn notify_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let block_start = wall_clock_to_absolute(self.date, self.start_time, self.timezone);
        let candidate = block_start - Duration::minutes(self.lead_minutes());

        let local_minutes = absolute_to_wall_clock(candidate, self.timezone);
        if in_quiet_hours(
            local_minutes,
            self.sleep_time.minutes(),
            self.wake_time.minutes(),
        ) {
            return None;
        }
        if candidate <= now {
            return None;
        }
        Some(candidate)
    }
}

/// Quiet-hours membership test on wall-clock minutes.
fn in_quiet_hours(minutes: u32, sleep: u32, wake: u32) -> bool {
    if sleep > wake {
        // Sleep late, wake early the next day: [sleep, 24:00) U [0:00, wake)
        minutes >= sleep || minutes < wake
    } else {
        minutes >= sleep && minutes < wake
    }
}

/// Recompute a block's reminder after creation or reschedule.
///
/// Any previously scheduled reminder is superseded: its delivery handle is
/// cleared before the computation reruns. Returns the block's new state.
pub fn reschedule(
    block: &mut Block,
    prefs: &UserPreferences,
    now: DateTime<Utc>,
) -> NotificationState {
    block.notification_id = None;
    let request = ReminderRequest::from_block(block, prefs);
    match request.notify_at(now) {
        Some(at) => {
            block.notify_at = Some(at);
            NotificationState::Scheduled
        }
        None => {
            block.notify_at = None;
            NotificationState::Suppressed
        }
    }
}
