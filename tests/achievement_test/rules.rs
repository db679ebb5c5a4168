//! Tests for individual achievement unlock rules

use careerpath::achievements::{AchievementEngine, AchievementId};
use careerpath::UserProgressSnapshot;

use crate::common::{activity, cert, completed_cert, full_profile, ids, snapshot_with_completed};

fn unlocked(engine: &AchievementEngine, snapshot: &UserProgressSnapshot) -> Vec<&'static str> {
    engine
        .check_achievements(snapshot, &[])
        .into_iter()
        .map(|id| id.as_str())
        .collect()
}

#[test]
fn test_five_completed_courses_on_empty_snapshot() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_completed(5);

    assert_eq!(unlocked(&engine, &snapshot), vec!["first_login", "courses_5"]);
}

#[test]
fn test_empty_snapshot_only_grants_first_login() {
    let engine = AchievementEngine::new();
    let snapshot = UserProgressSnapshot::default();

    assert_eq!(unlocked(&engine, &snapshot), vec!["first_login"]);
}

#[test]
fn test_already_unlocked_ids_are_skipped() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_completed(12);

    let first = engine.check_achievements(&snapshot, &[]);
    assert!(first.contains(&AchievementId::Courses10));

    let already: Vec<String> = first.iter().map(|id| id.as_str().to_string()).collect();
    assert!(engine.check_achievements(&snapshot, &already).is_empty());
}

#[test]
fn test_unknown_unlocked_ids_are_harmless() {
    let engine = AchievementEngine::new();
    let snapshot = UserProgressSnapshot::default();

    let result = engine.check_achievements(&snapshot, &ids(&["legacy_badge", "first_login"]));
    assert!(result.is_empty());
}

#[test]
fn test_profile_and_course_records() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.profile = full_profile();
    snapshot.certifications = vec![
        completed_cert("Intro to Python", 78.0),
        cert("Statistics 101", "In Progress", 0.0),
    ];

    assert_eq!(
        unlocked(&engine, &snapshot),
        vec![
            "first_login",
            "profile_complete",
            "first_course_start",
            "first_course_complete"
        ]
    );
}

#[test]
fn test_started_course_without_completion() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.certifications = vec![cert("Deep Learning", "In Progress", 0.0)];

    let result = unlocked(&engine, &snapshot);
    assert!(result.contains(&"first_course_start"));
    assert!(!result.contains(&"first_course_complete"));
}

#[test]
fn test_streak_ladder() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.progress.streak = 7;

    let result = unlocked(&engine, &snapshot);
    assert!(result.contains(&"course_streak_3"));
    assert!(result.contains(&"course_streak_7"));
    assert!(!result.contains(&"course_streak_30"));
}

#[test]
fn test_score_based_achievements() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.certifications = vec![
        completed_cert("Course A", 90.0),
        completed_cert("Course B", 92.0),
        completed_cert("Course C", 95.0),
        completed_cert("Course D", 99.0),
        completed_cert("Course E", 100.0),
    ];

    let result = unlocked(&engine, &snapshot);
    assert!(result.contains(&"high_scorer"));
    assert!(result.contains(&"perfect_score"));

    snapshot.certifications.pop();
    let result = unlocked(&engine, &snapshot);
    assert!(!result.contains(&"high_scorer"));
    assert!(!result.contains(&"perfect_score"));
}

#[test]
fn test_quick_learner_with_unordered_dates() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.activities = vec![
        activity("Completed", "2024-03-07"),
        activity("Started", "2024-03-02"),
        activity("Completed", "2024-03-01"),
        activity("Completed", "not a date"),
        activity("Completed", "2024-03-05T18:30:00"),
    ];

    assert!(unlocked(&engine, &snapshot).contains(&"quick_learner"));
}

#[test]
fn test_quick_learner_needs_three_within_a_week() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.activities = vec![
        activity("Completed", "2024-03-01"),
        activity("Completed", "2024-03-05"),
        activity("Completed", "2024-03-12"),
    ];

    assert!(!unlocked(&engine, &snapshot).contains(&"quick_learner"));
}

#[test]
fn test_weekend_warrior() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();

    // Monday
    snapshot.activities = vec![activity("Started", "2024-03-11")];
    assert!(!unlocked(&engine, &snapshot).contains(&"weekend_warrior"));

    // Sunday
    snapshot.activities.push(activity("Started", "2024-03-10"));
    assert!(unlocked(&engine, &snapshot).contains(&"weekend_warrior"));
}

#[test]
fn test_activity_count_heuristics() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.activities = (0..4).map(|_| activity("Viewed", "garbled")).collect();

    let result = unlocked(&engine, &snapshot);
    assert!(result.contains(&"night_owl"));
    assert!(!result.contains(&"early_bird"));

    snapshot.activities.extend((0..2).map(|_| activity("Viewed", "garbled")));
    assert!(unlocked(&engine, &snapshot).contains(&"early_bird"));
}

#[test]
fn test_expertise_tracks() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.certifications = vec![
        completed_cert("Deep Learning Fundamentals", 80.0),
        completed_cert("CNN Architectures", 80.0),
        completed_cert("Transformers in Practice", 80.0),
        // Not completed, does not count
        cert("PyTorch Advanced", "In Progress", 0.0),
    ];

    let result = unlocked(&engine, &snapshot);
    assert!(result.contains(&"dl_expert"));
    assert!(!result.contains(&"ml_specialist"));
    assert!(!result.contains(&"data_scientist"));
}

#[test]
fn test_curiosity_across_subject_areas() {
    let engine = AchievementEngine::new();
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.certifications = vec![
        completed_cert("Machine Learning Basics", 70.0),
        completed_cert("Deep Learning Foundations", 70.0),
        completed_cert("Data Science Foundations", 70.0),
        completed_cert("Computer Vision Projects", 70.0),
    ];
    assert!(!unlocked(&engine, &snapshot).contains(&"curiosity_driven"));

    snapshot.certifications.push(completed_cert("Robotics 101", 70.0));
    assert!(unlocked(&engine, &snapshot).contains(&"curiosity_driven"));
}

#[test]
fn test_externally_granted_achievements_never_unlock() {
    let engine = AchievementEngine::new();
    let mut snapshot = snapshot_with_completed(100);
    snapshot.progress.streak = 365;
    snapshot.profile = full_profile();

    let result = unlocked(&engine, &snapshot);
    for id in ["ai_researcher", "secret_agent", "time_traveler"] {
        assert!(!result.contains(&id), "{} should not auto-unlock", id);
    }
}
