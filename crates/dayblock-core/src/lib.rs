//! # Dayblock Core Library
//!
//! Core business logic for Dayblock, a personal daily-planning assistant.
//! This crate is the energy-aware scheduling and notification engine: it
//! scores candidate time slots against the user's energy rhythm, detects
//! block conflicts with timezone-correct arithmetic, computes pre-block
//! reminder instants with quiet-hour suppression, and aggregates weekly
//! goal progress.
//!
//! ## Architecture
//!
//! Everything here is pure and synchronous: callers load a snapshot of
//! blocks and preferences from storage, call in, and persist the decision.
//! "Now" is always an explicit parameter so tests control time
//! deterministically. Storage, auth, UI, and push delivery are external
//! collaborators.
//!
//! ## Key components
//!
//! - [`timecode`]: `HH:MM` codec, format validators, interval overlap
//! - [`energy`]: hourly energy levels, slot scoring, schedule formatting
//! - [`notify`]: timezone-aware reminder computation and suppression
//! - [`conflict`]: pairwise and batch conflict detection
//! - [`goals`]: weekly goal-progress aggregation
//! - [`planner`]: ranked free-slot suggestions

pub mod block;
pub mod conflict;
pub mod energy;
pub mod error;
pub mod goals;
pub mod lazy_mode;
pub mod notify;
pub mod planner;
pub mod timecode;

pub use block::{Block, BlockStatus, Goal, SessionLength, UserPreferences};
pub use conflict::{
    find_conflicts, preview_batch, BatchPreview, BlockPreview, ConflictDescriptor, ProposedBlock,
};
pub use energy::{EnergyLevel, EnergyPreset, EnergyProfile, PeakEnergyWindow};
pub use error::{CoreError, TimeError, ValidationError};
pub use goals::{GoalProgress, ProgressStatus, WeekProgressReport, WeekWindow};
pub use lazy_mode::LazyMode;
pub use notify::{NotificationState, ReminderRequest};
pub use planner::{suggest_slots, SlotSuggestion};
pub use timecode::TimeOfDay;
