//! Energy model: hourly levels, slot scoring, and schedule formatting.
//!
//! Resolves an hour of the day to an energy level from either a 24-entry
//! custom profile or a coarse peak-window heuristic, scores candidate time
//! slots against a task's energy requirement, and renders a human-readable
//! daily energy schedule.

pub mod presets;

use std::fmt;

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::timecode::{time_to_hour, time_to_minutes};

/// Energy level for an hour of the day or a task requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Named starting point for an energy profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyPreset {
    MorningPerson,
    NightOwl,
    Steady,
    Custom,
}

/// A user's hour-by-hour energy profile.
///
/// Usable only when `hourly_levels` has exactly 24 entries; any other length
/// is treated as absent and lookups fall back to the peak-window heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyProfile {
    pub hourly_levels: Vec<EnergyLevel>,
    pub preset: EnergyPreset,
}

impl EnergyProfile {
    /// Copy a built-in preset table into a profile.
    pub fn from_preset(preset: EnergyPreset) -> Option<Self> {
        presets::preset_levels(preset).map(|table| Self {
            hourly_levels: table.to_vec(),
            preset,
        })
    }

    /// Whether the profile carries a full 24-hour table.
    pub fn is_usable(&self) -> bool {
        self.hourly_levels.len() == 24
    }
}

/// Coarse peak-energy fallback used when no custom profile exists.
///
/// Morning [6,12), afternoon [12,18), evening [18,22). Hours [0,6) and
/// [22,24) are always low; hours inside the window are high; the remaining
/// waking hours are medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeakEnergyWindow {
    Morning,
    Afternoon,
    Evening,
}

impl PeakEnergyWindow {
    /// Contiguous hour range [start, end) of the peak.
    pub fn hour_range(self) -> (i32, i32) {
        match self {
            Self::Morning => (6, 12),
            Self::Afternoon => (12, 18),
            Self::Evening => (18, 22),
        }
    }
}

/// Resolve the energy level for an hour of the day.
///
/// With a usable 24-entry profile the hour indexes the table directly;
/// out-of-range hours (negative or >= 24) fall back to medium rather than
/// panicking, since callers pass derived hour values from render paths.
/// Without a profile, the peak-window heuristic applies.
pub fn level_for_hour(
    hour: i32,
    profile: Option<&EnergyProfile>,
    peak_window: PeakEnergyWindow,
) -> EnergyLevel {
    if let Some(profile) = profile {
        if profile.is_usable() {
            return match usize::try_from(hour) {
                Ok(h) if h < 24 => profile.hourly_levels[h],
                _ => EnergyLevel::Medium,
            };
        }
    }

    let (peak_start, peak_end) = peak_window.hour_range();
    if hour >= peak_start && hour < peak_end {
        EnergyLevel::High
    } else if hour < 6 || hour >= 22 {
        EnergyLevel::Low
    } else {
        EnergyLevel::Medium
    }
}

/// Resolve the energy level for an `HH:MM` time string.
pub fn level_for_time(
    time: &str,
    profile: Option<&EnergyProfile>,
    peak_window: PeakEnergyWindow,
) -> Result<EnergyLevel, TimeError> {
    Ok(level_for_hour(
        time_to_hour(time)? as i32,
        profile,
        peak_window,
    ))
}

/// Score a candidate slot against a task's energy requirement.
///
/// The slot's energy is evaluated at its midpoint hour. Bonuses and
/// penalties are independent and additive; all applicable rules stack:
/// exact match +20, high-on-high +15, high-on-low -15, low-on-high -5,
/// low-on-low +10, and +5 whenever either side is medium.
pub fn score_slot(
    slot_start: &str,
    slot_end: &str,
    task_energy: EnergyLevel,
    profile: Option<&EnergyProfile>,
    peak_window: PeakEnergyWindow,
) -> Result<i32, TimeError> {
    let start_min = time_to_minutes(slot_start)?;
    let end_min = time_to_minutes(slot_end)?;
    let midpoint_hour = ((start_min + end_min) / 2 / 60) as i32;
    let slot_energy = level_for_hour(midpoint_hour, profile, peak_window);
    Ok(score_levels(task_energy, slot_energy))
}

/// The additive bonus/penalty table behind [`score_slot`].
pub fn score_levels(task_energy: EnergyLevel, slot_energy: EnergyLevel) -> i32 {
    use EnergyLevel::{High, Low, Medium};
    let mut score = 0;
    if task_energy == slot_energy {
        score += 20;
    }
    if task_energy == High && slot_energy == High {
        score += 15;
    }
    if task_energy == High && slot_energy == Low {
        score -= 15;
    }
    if task_energy == Low && slot_energy == High {
        score -= 5;
    }
    if task_energy == Low && slot_energy == Low {
        score += 10;
    }
    if task_energy == Medium || slot_energy == Medium {
        score += 5;
    }
    score
}

/// Render the waking-hour energy schedule as contiguous same-level segments.
///
/// Output is `"HH:00-HH:00: <level> energy"` segments joined by `", "`.
/// When wake > sleep the walk wraps through midnight. Equal wake and sleep
/// times produce an empty schedule.
pub fn format_schedule(
    profile: Option<&EnergyProfile>,
    peak_window: PeakEnergyWindow,
    wake: &str,
    sleep: &str,
) -> Result<String, TimeError> {
    let wake_hour = time_to_hour(wake)? as i32;
    let sleep_hour = time_to_hour(sleep)? as i32;
    if wake_hour == sleep_hour {
        return Ok(String::new());
    }

    let mut segments: Vec<String> = Vec::new();
    let mut seg_start = wake_hour;
    let mut seg_level = level_for_hour(wake_hour, profile, peak_window);

    let mut hour = (wake_hour + 1) % 24;
    loop {
        let done = hour == sleep_hour;
        let level = level_for_hour(hour, profile, peak_window);
        if done || level != seg_level {
            segments.push(format!(
                "{:02}:00-{:02}:00: {} energy",
                seg_start, hour, seg_level
            ));
            seg_start = hour;
            seg_level = level;
        }
        if done {
            break;
        }
        hour = (hour + 1) % 24;
    }

    Ok(segments.join(", "))
}

/// Energy level at the current instant in the given IANA timezone.
pub fn current_level(
    profile: Option<&EnergyProfile>,
    peak_window: PeakEnergyWindow,
    timezone: Tz,
    now: DateTime<Utc>,
) -> EnergyLevel {
    let hour = now.with_timezone(&timezone).hour() as i32;
    level_for_hour(hour, profile, peak_window)
}
