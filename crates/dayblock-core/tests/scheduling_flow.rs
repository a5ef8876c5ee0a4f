//! End-to-end flow a scheduling mutation handler runs: validate the
//! proposal, check conflicts, pick a slot by energy, compute the reminder,
//! then report weekly progress once blocks complete.

use chrono::{TimeZone, Utc};
use chrono_tz::America::New_York;

use dayblock_core::{
    conflict, goals, notify, planner, Block, BlockStatus, EnergyLevel, Goal, LazyMode,
    PeakEnergyWindow, ProposedBlock, SessionLength, TimeOfDay, UserPreferences,
};

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

fn prefs() -> UserPreferences {
    UserPreferences {
        wake_time: t("07:00"),
        sleep_time: t("22:00"),
        timezone: New_York,
        energy_profile: None,
        peak_energy_window: PeakEnergyWindow::Morning,
        lazy_mode: LazyMode::default(),
    }
}

#[test]
fn schedule_block_against_a_busy_day() {
    let date = "2024-01-15".parse().unwrap();
    let existing = vec![
        Block::new("Morning routine", date, t("07:00"), t("09:00")).unwrap(),
        Block::new("Standup", date, t("09:00"), t("09:30")).unwrap(),
        Block::new("Lunch", date, t("12:00"), t("13:00")).unwrap(),
    ];
    let now = Utc.with_ymd_and_hms(2024, 1, 14, 12, 0, 0).unwrap();

    // Ask for a morning slot for a high-energy task
    let suggestions = planner::suggest_slots(
        &existing,
        date,
        60,
        EnergyLevel::High,
        &prefs(),
        3,
        now,
    );
    assert!(!suggestions.is_empty());
    let pick = &suggestions[0];
    // Peak-hour slot, clear of both existing blocks
    assert_eq!(pick.energy, EnergyLevel::High);
    assert!(conflict::find_conflicts(&existing, date, pick.start_time, pick.end_time).is_empty());

    // Create the block and compute its reminder
    let mut block = Block::new("Deep work", date, pick.start_time, pick.end_time).unwrap();
    block.prep_buffer = 10;
    let state = notify::reschedule(&mut block, &prefs(), now);
    assert_eq!(state, notify::NotificationState::Scheduled);
    let at = block.notify_at.unwrap();
    // 15 minutes of lead before the local start
    let lead = notify::tzconv::wall_clock_to_absolute(date, pick.start_time, New_York) - at;
    assert_eq!(lead.num_minutes(), 15);
}

#[test]
fn batch_preview_rejects_overlapping_proposals() {
    let date = "2024-01-15".parse().unwrap();
    let existing = vec![Block::new("Standup", date, t("09:00"), t("09:30")).unwrap()];

    let proposed = vec![
        ProposedBlock {
            title: "Writing".into(),
            date: "2024-01-15".into(),
            start_time: "09:15".into(),
            end_time: "10:00".into(),
        },
        ProposedBlock {
            title: "Review".into(),
            date: "2024-01-15".into(),
            start_time: "09:45".into(),
            end_time: "10:30".into(),
        },
    ];
    let report = conflict::preview_batch(&proposed, &existing);
    assert!(!report.valid);
    // First collides with the standup, second with the first
    assert_eq!(report.blocks[0].conflicts[0].title, "Standup");
    assert_eq!(report.blocks[1].conflicts[0].title, "Writing");
}

#[test]
fn completed_week_rolls_up_into_goal_progress() {
    let goal = Goal {
        id: "goal-writing".into(),
        title: "Writing".into(),
        weekly_target_minutes: 300,
        preferred_session_length: SessionLength { min: 30, max: 120 },
        preferred_time: Some(PeakEnergyWindow::Morning),
        energy_level: Some(EnergyLevel::High),
        priority: Some(80),
    };

    let mut blocks = vec![
        Block::new("Draft", "2024-01-15".parse().unwrap(), t("09:00"), t("10:00")).unwrap(),
        Block::new("Edit", "2024-01-16".parse().unwrap(), t("09:00"), t("10:30")).unwrap(),
    ];
    for b in &mut blocks {
        b.status = BlockStatus::Completed;
        b.goal_id = Some("goal-writing".into());
    }

    // Wednesday evening in New York
    let now = Utc.with_ymd_and_hms(2024, 1, 18, 1, 0, 0).unwrap();
    let report = goals::WeekProgressReport::compute(&[goal], &blocks, New_York, now);
    assert_eq!(report.day_index, 3);
    let progress = &report.goals[0];
    assert_eq!(progress.completed_minutes, 150);
    assert_eq!(progress.percent_complete, 50);
    assert!(progress.is_on_track);
}
