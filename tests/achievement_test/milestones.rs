//! Tests for milestone gating

use careerpath::achievements::{AchievementEngine, MilestoneId};
use careerpath::config::Config;
use careerpath::UserProgressSnapshot;

use crate::common::{completed_cert, ids, snapshot_with_completed};

fn snapshot_with_certs(completed: u32, scores: &[f64]) -> UserProgressSnapshot {
    let mut snapshot = snapshot_with_completed(completed);
    snapshot.certifications = scores
        .iter()
        .enumerate()
        .map(|(i, score)| completed_cert(&format!("Course {}", i + 1), *score))
        .collect();
    snapshot
}

#[test]
fn test_three_certificates_do_not_make_a_graduate() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_certs(3, &[80.0, 85.0, 90.0]);

    let milestones = engine.check_milestones(&snapshot, &[]);
    assert!(!milestones.contains(&MilestoneId::BeginnerComplete));
    assert!(milestones.is_empty());
}

#[test]
fn test_course_and_certificate_thresholds() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_certs(15, &[70.0, 75.0, 80.0]);

    assert_eq!(
        engine.check_milestones(&snapshot, &[]),
        vec![MilestoneId::BeginnerComplete, MilestoneId::NsqfLevel5]
    );

    // One certificate short of level 5
    let snapshot = snapshot_with_certs(15, &[70.0, 75.0]);
    assert_eq!(
        engine.check_milestones(&snapshot, &[]),
        vec![MilestoneId::BeginnerComplete]
    );
}

#[test]
fn test_average_score_ignores_zero_scores() {
    let engine = AchievementEngine::new();

    // Non-zero mean is exactly 80
    let snapshot = snapshot_with_certs(20, &[85.0, 75.0, 0.0]);
    assert!(engine
        .check_milestones(&snapshot, &[])
        .contains(&MilestoneId::IntermediateComplete));

    let snapshot = snapshot_with_certs(20, &[84.0, 74.0]);
    assert!(!engine
        .check_milestones(&snapshot, &[])
        .contains(&MilestoneId::IntermediateComplete));
}

#[test]
fn test_average_score_requirement_fails_without_scores() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_completed(20);

    let milestones = engine.check_milestones(&snapshot, &[]);
    assert!(milestones.contains(&MilestoneId::BeginnerComplete));
    assert!(!milestones.contains(&MilestoneId::IntermediateComplete));
}

#[test]
fn test_reached_milestones_are_not_repeated() {
    let engine = AchievementEngine::new();
    let snapshot = snapshot_with_certs(15, &[70.0, 75.0, 80.0]);

    let milestones =
        engine.check_milestones(&snapshot, &ids(&["beginner_complete", "nsqf_level_5"]));
    assert!(milestones.is_empty());
}

#[test]
fn test_pioneer_is_never_auto_unlocked() {
    let engine = AchievementEngine::new();
    let mut snapshot = snapshot_with_certs(100, &[100.0; 20]);
    snapshot.progress.streak = 400;

    let milestones = engine.check_milestones(&snapshot, &[]);
    assert!(milestones.contains(&MilestoneId::AdvancedComplete));
    assert!(!milestones.contains(&MilestoneId::AiPioneer));
}

#[test]
fn test_configured_thresholds_apply() {
    let config: Config = toml::from_str(
        r#"
        [milestones.beginner_complete]
        requirements = { courses_completed = 3 }
        "#,
    )
    .unwrap();
    let engine = config.achievement_engine().unwrap();
    let snapshot = snapshot_with_certs(3, &[80.0, 85.0, 90.0]);

    assert_eq!(
        engine.check_milestones(&snapshot, &[]),
        vec![MilestoneId::BeginnerComplete]
    );
}
