//! Record types the engine operates on: blocks, goals, and user
//! preferences.
//!
//! Storage for these records is a collaborator, not part of this crate;
//! callers load a snapshot, call into the engine, and persist the decision.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::energy::{EnergyLevel, EnergyProfile, PeakEnergyWindow};
use crate::error::ValidationError;
use crate::lazy_mode::LazyMode;
use crate::timecode::TimeOfDay;

/// Lifecycle status of a scheduled block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStatus {
    Planned,
    InProgress,
    Completed,
    Skipped,
    Moved,
}

impl BlockStatus {
    /// Whether a block in this status still occupies its nominal slot.
    ///
    /// Moved and skipped blocks are invisible to conflict detection.
    pub fn occupies_slot(self) -> bool {
        !matches!(self, Self::Moved | Self::Skipped)
    }
}

/// A scheduled activity on a specific date.
///
/// The `start < end` invariant holds for every `Block` in the program:
/// construction and deserialization both reject inverted or empty ranges,
/// so snapshot files go through the same boundary check as [`Block::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BlockRecord")]
pub struct Block {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: BlockStatus,
    pub goal_id: Option<String>,
    /// Energy the activity demands, if the user stated one.
    pub energy: Option<EnergyLevel>,
    pub requires_travel: bool,
    /// Travel lead time in minutes, fed by an external routing lookup.
    pub estimated_travel_time: Option<u32>,
    /// Preparation lead time in minutes.
    pub prep_buffer: u32,
    /// Absolute reminder instant; absent when suppressed or not yet computed.
    pub notify_at: Option<DateTime<Utc>>,
    /// Delivery-transport handle for a scheduled reminder, if any.
    pub notification_id: Option<String>,
}

impl Block {
    /// Create a planned block, enforcing `start < end` strictly.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Result<Self, ValidationError> {
        if start_time >= end_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            date,
            start_time,
            end_time,
            status: BlockStatus::Planned,
            goal_id: None,
            energy: None,
            requires_travel: false,
            estimated_travel_time: None,
            prep_buffer: 0,
            notify_at: None,
            notification_id: None,
        })
    }

    /// Duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end_time.minutes() - self.start_time.minutes()
    }
}

/// Wire shape of [`Block`]; deserialization funnels through it so ingested
/// snapshots cannot carry an inverted time range.
#[derive(Deserialize)]
struct BlockRecord {
    id: String,
    title: String,
    date: NaiveDate,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
    status: BlockStatus,
    goal_id: Option<String>,
    energy: Option<EnergyLevel>,
    requires_travel: bool,
    estimated_travel_time: Option<u32>,
    prep_buffer: u32,
    notify_at: Option<DateTime<Utc>>,
    notification_id: Option<String>,
}

impl TryFrom<BlockRecord> for Block {
    type Error = ValidationError;

    fn try_from(record: BlockRecord) -> Result<Self, Self::Error> {
        if record.start_time >= record.end_time {
            return Err(ValidationError::InvalidTimeRange {
                start: record.start_time.to_string(),
                end: record.end_time.to_string(),
            });
        }
        Ok(Self {
            id: record.id,
            title: record.title,
            date: record.date,
            start_time: record.start_time,
            end_time: record.end_time,
            status: record.status,
            goal_id: record.goal_id,
            energy: record.energy,
            requires_travel: record.requires_travel,
            estimated_travel_time: record.estimated_travel_time,
            prep_buffer: record.prep_buffer,
            notify_at: record.notify_at,
            notification_id: record.notification_id,
        })
    }
}

/// Preferred session length bounds for a goal, in minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionLength {
    pub min: u32,
    pub max: u32,
}

/// A weekly goal that completed blocks accrue toward.
///
/// Progress is derived on read from completed blocks in the active week
/// window, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub weekly_target_minutes: u32,
    pub preferred_session_length: SessionLength,
    /// Part of the day the user prefers to work on this goal.
    pub preferred_time: Option<PeakEnergyWindow>,
    pub energy_level: Option<EnergyLevel>,
    pub priority: Option<i32>,
}

/// The slice of the user's preference record the engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub wake_time: TimeOfDay,
    pub sleep_time: TimeOfDay,
    /// IANA timezone identifier, e.g. `America/New_York`.
    pub timezone: Tz,
    pub energy_profile: Option<EnergyProfile>,
    pub peak_energy_window: PeakEnergyWindow,
    #[serde(default)]
    pub lazy_mode: LazyMode,
}
