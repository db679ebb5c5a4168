//! Tests for the display summary and the update cycle

use careerpath::achievements::{AchievementCategory, AchievementEngine, AchievementId};
use careerpath::{UnlockedSet, UserProgressSnapshot};

use crate::common::{ids, snapshot_with_completed};

#[test]
fn test_points_level_and_categories() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_completed(5);

    let display = engine.compute_display_data(&snapshot, &ids(&["first_login", "courses_5"]), &[]);

    assert_eq!(display.total_points, 110);
    assert_eq!(display.level, 2);
    assert!((display.level_progress - 5.0).abs() < 1e-9);
    assert_eq!(display.total_achievements, 2);

    let categories: Vec<AchievementCategory> = display
        .categorized_achievements
        .iter()
        .map(|b| b.category)
        .collect();
    assert_eq!(
        categories,
        vec![AchievementCategory::GettingStarted, AchievementCategory::Progress]
    );
}

#[test]
fn test_milestone_points_count_towards_level() {
    let engine = AchievementEngine::new();
    let snapshot = UserProgressSnapshot::default();

    let display = engine.compute_display_data(
        &snapshot,
        &ids(&["first_login"]),
        &ids(&["beginner_complete", "nsqf_level_5"]),
    );

    // 10 + 300 + 400
    assert_eq!(display.total_points, 710);
    assert_eq!(display.level, 4);
    assert_eq!(display.total_milestones, 2);
    assert_eq!(display.recent_milestones.len(), 2);
}

#[test]
fn test_unknown_ids_do_not_count() {
    let engine = AchievementEngine::new();
    let snapshot = UserProgressSnapshot::default();

    let display = engine.compute_display_data(
        &snapshot,
        &ids(&["first_login", "retired_badge"]),
        &ids(&["courses_5"]),
    );

    assert_eq!(display.total_points, 10);
    assert_eq!(display.categorized_achievements.len(), 1);
    assert!(display.recent_milestones.is_empty());
}

#[test]
fn test_next_achievements_ranked_by_progress() {
    let engine = AchievementEngine::new();
    let mut snapshot = snapshot_with_completed(5);
    snapshot.progress.streak = 2;

    let display = engine.compute_display_data(&snapshot, &ids(&["first_login", "courses_5"]), &[]);
    let next: Vec<AchievementId> = display.next_achievements.iter().map(|n| n.id).collect();

    // streak 2/3 = 66.7, 5/10 = 50, 2/7 = 28.6, 5/25 = 20
    assert_eq!(
        next,
        vec![
            AchievementId::CourseStreak3,
            AchievementId::Courses10,
            AchievementId::CourseStreak7,
            AchievementId::Courses25,
        ]
    );
    assert!(display.next_achievements.iter().all(|n| n.progress > 0.0));
}

#[test]
fn test_update_records_new_unlocks_once() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_completed(10);
    let mut unlocked = UnlockedSet::default();

    let first = engine.update(&snapshot, &mut unlocked);
    assert!(first.has_news());
    assert_eq!(unlocked.achievements, ids(&["first_login", "courses_5", "courses_10"]));
    assert_eq!(unlocked.milestones, ids(&["beginner_complete"]));
    assert_eq!(first.display.total_points, 10 + 100 + 200 + 300);

    let second = engine.update(&snapshot, &mut unlocked);
    assert!(!second.has_news());
    assert_eq!(unlocked.achievements.len(), 3);
    assert_eq!(second.display, first.display);
}

#[test]
fn test_summary_serializes_string_ids() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_completed(5);
    let mut unlocked = UnlockedSet::default();

    let update = engine.update(&snapshot, &mut unlocked);
    let json = serde_json::to_value(&update).unwrap();

    assert_eq!(json["new_achievements"][1], "courses_5");
    assert_eq!(json["display"]["categorized_achievements"][0]["category"], "Getting Started");
}
