//! Built-in hourly energy preset tables.
//!
//! Presets are immutable configuration constants; a user picks one at
//! onboarding and the profile editor copies it into a custom profile.

use super::{EnergyLevel, EnergyPreset};

use EnergyLevel::{High, Low, Medium};

/// Morning person: peak before noon, tapering through the afternoon.
pub const MORNING_PERSON: [EnergyLevel; 24] = [
    Low, Low, Low, Low, Low, Low, // 00-05
    High, High, High, High, High, High, // 06-11
    Medium, Medium, Medium, Medium, Medium, Medium, // 12-17
    Medium, Medium, Medium, Medium, // 18-21
    Low, Low, // 22-23
];

/// Night owl: slow start, peak in the evening.
pub const NIGHT_OWL: [EnergyLevel; 24] = [
    Low, Low, Low, Low, Low, Low, // 00-05
    Low, Low, Medium, Medium, Medium, Medium, // 06-11
    Medium, Medium, Medium, Medium, Medium, Medium, // 12-17
    High, High, High, High, // 18-21
    Medium, Low, // 22-23
];

/// Steady: flat medium through waking hours.
pub const STEADY: [EnergyLevel; 24] = [
    Low, Low, Low, Low, Low, Low, // 00-05
    Medium, Medium, Medium, Medium, Medium, Medium, // 06-11
    Medium, Medium, Medium, Medium, Medium, Medium, // 12-17
    Medium, Medium, Medium, Medium, // 18-21
    Low, Low, // 22-23
];

/// Look up the hourly table for a preset; `Custom` has no built-in table.
pub fn preset_levels(preset: EnergyPreset) -> Option<&'static [EnergyLevel; 24]> {
    match preset {
        EnergyPreset::MorningPerson => Some(&MORNING_PERSON),
        EnergyPreset::NightOwl => Some(&NIGHT_OWL),
        EnergyPreset::Steady => Some(&STEADY),
        EnergyPreset::Custom => None,
    }
}
