//! Achievement checking logic
//!
//! Snapshot aggregates are computed once per evaluation into [`SnapshotStats`];
//! each achievement and milestone is then a predicate over those aggregates.

use super::activity::{
    count_subject_areas, count_track_courses, has_quick_completion_run, has_weekend_activity,
    Track,
};
use super::definitions::AchievementId;
use super::milestones::Requirements;
use crate::domain::UserProgressSnapshot;

/// Aggregates extracted from a snapshot for rule evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotStats {
    pub profile_complete: bool,
    pub completed_courses: u32,
    pub streak: u32,
    pub total_certs: usize,
    pub completed_certs: usize,
    pub high_score_certs: usize,
    pub perfect_certs: usize,
    /// Mean of non-zero certification scores, `None` without any
    pub avg_score: Option<f64>,
    pub ml_courses: usize,
    pub dl_courses: usize,
    pub ds_courses: usize,
    pub subject_areas: usize,
    pub activity_count: usize,
    pub quick_completion_run: bool,
    pub weekend_activity: bool,
}

impl SnapshotStats {
    pub fn from_snapshot(snapshot: &UserProgressSnapshot) -> Self {
        let certs = &snapshot.certifications;
        let scores: Vec<f64> = certs.iter().map(|c| c.score).filter(|s| *s != 0.0).collect();
        let avg_score = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        };

        Self {
            profile_complete: snapshot.profile.is_complete(),
            completed_courses: snapshot.progress.completed,
            streak: snapshot.progress.streak,
            total_certs: certs.len(),
            completed_certs: certs.iter().filter(|c| c.is_completed()).count(),
            high_score_certs: certs.iter().filter(|c| c.score >= 90.0).count(),
            perfect_certs: certs.iter().filter(|c| c.score == 100.0).count(),
            avg_score,
            ml_courses: count_track_courses(certs, Track::MachineLearning),
            dl_courses: count_track_courses(certs, Track::DeepLearning),
            ds_courses: count_track_courses(certs, Track::DataScience),
            subject_areas: count_subject_areas(certs),
            activity_count: snapshot.activities.len(),
            quick_completion_run: has_quick_completion_run(&snapshot.activities),
            weekend_activity: has_weekend_activity(&snapshot.activities),
        }
    }
}

/// Check whether the unlock condition of an achievement holds
pub fn achievement_criteria_met(id: AchievementId, stats: &SnapshotStats) -> bool {
    match id {
        // Always true once they're using the system
        AchievementId::FirstLogin => true,
        AchievementId::ProfileComplete => stats.profile_complete,
        AchievementId::FirstCourseStart => stats.total_certs > 0,
        AchievementId::FirstCourseComplete => stats.completed_certs >= 1,
        AchievementId::CourseStreak3 => stats.streak >= 3,
        AchievementId::CourseStreak7 => stats.streak >= 7,
        AchievementId::CourseStreak30 => stats.streak >= 30,
        AchievementId::Courses5 => stats.completed_courses >= 5,
        AchievementId::Courses10 => stats.completed_courses >= 10,
        AchievementId::Courses25 => stats.completed_courses >= 25,
        AchievementId::Courses50 => stats.completed_courses >= 50,
        AchievementId::HighScorer => stats.high_score_certs >= 5,
        AchievementId::PerfectScore => stats.perfect_certs >= 1,
        AchievementId::QuickLearner => stats.quick_completion_run,
        AchievementId::MlSpecialist => stats.ml_courses >= 5,
        AchievementId::DlExpert => stats.dl_courses >= 3,
        AchievementId::DataScientist => stats.ds_courses >= 8,
        AchievementId::CuriosityDriven => stats.subject_areas >= 5,
        AchievementId::WeekendWarrior => stats.weekend_activity,
        // Placeholder heuristics: activity records carry no time of day
        AchievementId::EarlyBird => stats.activity_count > 5,
        AchievementId::NightOwl => stats.activity_count > 3,
        // Granted by an external trigger only
        AchievementId::AiResearcher | AchievementId::SecretAgent | AchievementId::TimeTraveler => {
            false
        }
    }
}

/// Check whether every snapshot-observable requirement of a milestone holds
///
/// Milestones with no observable requirement are never auto-unlocked.
pub fn milestone_criteria_met(requirements: &Requirements, stats: &SnapshotStats) -> bool {
    if !requirements.has_evaluable() {
        return false;
    }

    if let Some(min) = requirements.courses_completed {
        if stats.completed_courses < min {
            return false;
        }
    }

    if let Some(min) = requirements.certifications {
        if stats.completed_certs < min as usize {
            return false;
        }
    }

    if let Some(min) = requirements.min_avg_score {
        match stats.avg_score {
            Some(avg) if avg >= min => {}
            _ => return false,
        }
    }

    if let Some(min) = requirements.streak_days {
        if stats.streak < min {
            return false;
        }
    }

    true
}

/// Progress towards an achievement (0-100), for the "next up" list
///
/// Only count and streak based achievements report progress.
pub fn achievement_progress(id: AchievementId, stats: &SnapshotStats) -> f64 {
    let ratio = |value: f64, target: f64| (value / target * 100.0).min(100.0);

    match id {
        AchievementId::Courses5 => ratio(stats.completed_courses as f64, 5.0),
        AchievementId::Courses10 => ratio(stats.completed_courses as f64, 10.0),
        AchievementId::Courses25 => ratio(stats.completed_courses as f64, 25.0),
        AchievementId::FirstCourseComplete => ratio(stats.completed_certs as f64, 1.0),
        AchievementId::CourseStreak3 => ratio(stats.streak as f64, 3.0),
        AchievementId::CourseStreak7 => ratio(stats.streak as f64, 7.0),
        _ => 0.0,
    }
}
