//! Achievement engine - core gamification logic
//!
//! Evaluates the achievement and milestone catalogs against a snapshot and
//! derives the display summary. The engine holds only immutable catalogs, so
//! a single instance can be shared across threads.

use serde::Serialize;
use tracing::{debug, info};

use super::checker::{
    achievement_criteria_met, achievement_progress, milestone_criteria_met, SnapshotStats,
};
use super::definitions::{AchievementCatalog, AchievementId};
use super::display::{
    AchievementEntry, CategoryBucket, DisplaySummary, MilestoneEntry, NextAchievement,
    NEXT_ACHIEVEMENTS_LIMIT, RECENT_MILESTONES_LIMIT,
};
use super::levels::LevelStatus;
use super::milestones::{MilestoneCatalog, MilestoneId};
use crate::domain::{UnlockedSet, UserProgressSnapshot};

/// Result of running both checks and recording the new IDs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementUpdate {
    pub new_achievements: Vec<AchievementId>,
    pub new_milestones: Vec<MilestoneId>,
    pub display: DisplaySummary,
}

impl AchievementUpdate {
    pub fn has_news(&self) -> bool {
        !self.new_achievements.is_empty() || !self.new_milestones.is_empty()
    }
}

/// Stateless rule evaluator over user snapshots
#[derive(Debug, Clone, Default)]
pub struct AchievementEngine {
    achievements: AchievementCatalog,
    milestones: MilestoneCatalog,
}

impl AchievementEngine {
    /// Create an engine over the built-in catalogs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over custom (e.g. configured) catalogs
    pub fn with_catalogs(achievements: AchievementCatalog, milestones: MilestoneCatalog) -> Self {
        Self {
            achievements,
            milestones,
        }
    }

    pub fn achievements(&self) -> &AchievementCatalog {
        &self.achievements
    }

    pub fn milestones(&self) -> &MilestoneCatalog {
        &self.milestones
    }

    // ========================================
    // UNLOCK CHECKS
    // ========================================

    /// Achievements earned but not yet in `already_unlocked`, in catalog order
    pub fn check_achievements(
        &self,
        snapshot: &UserProgressSnapshot,
        already_unlocked: &[String],
    ) -> Vec<AchievementId> {
        let stats = SnapshotStats::from_snapshot(snapshot);
        self.check_achievements_with(&stats, already_unlocked)
    }

    fn check_achievements_with(
        &self,
        stats: &SnapshotStats,
        already_unlocked: &[String],
    ) -> Vec<AchievementId> {
        let newly_unlocked: Vec<AchievementId> = self
            .achievements
            .iter()
            .map(|a| a.id)
            .filter(|id| !already_unlocked.iter().any(|u| u == id.as_str()))
            .filter(|id| achievement_criteria_met(*id, stats))
            .collect();

        debug!(
            checked = self.achievements.total_count(),
            unlocked = newly_unlocked.len(),
            "Evaluated achievements"
        );
        newly_unlocked
    }

    /// Milestones reached but not yet in `already_unlocked`, in catalog order
    pub fn check_milestones(
        &self,
        snapshot: &UserProgressSnapshot,
        already_unlocked: &[String],
    ) -> Vec<MilestoneId> {
        let stats = SnapshotStats::from_snapshot(snapshot);
        self.check_milestones_with(&stats, already_unlocked)
    }

    fn check_milestones_with(
        &self,
        stats: &SnapshotStats,
        already_unlocked: &[String],
    ) -> Vec<MilestoneId> {
        self.milestones
            .iter()
            .filter(|m| !already_unlocked.iter().any(|u| u == m.id.as_str()))
            .filter(|m| milestone_criteria_met(&m.requirements, stats))
            .map(|m| m.id)
            .collect()
    }

    // ========================================
    // DISPLAY DATA
    // ========================================

    /// Points, level, category breakdown and next targets for a user
    ///
    /// IDs missing from the catalogs are ignored for points and categories.
    pub fn compute_display_data(
        &self,
        snapshot: &UserProgressSnapshot,
        unlocked_achievements: &[String],
        unlocked_milestones: &[String],
    ) -> DisplaySummary {
        let stats = SnapshotStats::from_snapshot(snapshot);

        let mut total_points: u32 = 0;
        let mut categorized: Vec<CategoryBucket> = Vec::new();

        for id in unlocked_achievements {
            let Some(achievement) = self.achievements.lookup(id) else {
                debug!(id = %id, "Ignoring unknown achievement ID");
                continue;
            };
            total_points = total_points.saturating_add(achievement.points);

            let entry = AchievementEntry {
                id: achievement.id,
                name: achievement.display_name(),
                description: achievement.description,
                points: achievement.points,
            };
            match categorized
                .iter_mut()
                .find(|b| b.category == achievement.category)
            {
                Some(bucket) => bucket.achievements.push(entry),
                None => categorized.push(CategoryBucket {
                    category: achievement.category,
                    achievements: vec![entry],
                }),
            }
        }

        for id in unlocked_milestones {
            if let Some(milestone) = self.milestones.lookup(id) {
                total_points = total_points.saturating_add(milestone.rewards.points);
            }
        }

        let recent_start = unlocked_milestones
            .len()
            .saturating_sub(RECENT_MILESTONES_LIMIT);
        let recent_milestones = unlocked_milestones[recent_start..]
            .iter()
            .filter_map(|id| self.milestones.lookup(id))
            .map(|m| MilestoneEntry {
                id: m.id,
                name: format!("{} {}", m.icon, m.name),
                description: m.description,
                points: m.rewards.points,
            })
            .collect();

        let level = LevelStatus::new(total_points);

        DisplaySummary {
            total_achievements: unlocked_achievements.len(),
            total_milestones: unlocked_milestones.len(),
            total_points,
            categorized_achievements: categorized,
            recent_milestones,
            next_achievements: self.next_achievements(&stats, unlocked_achievements),
            level: level.level,
            level_progress: level.progress_percent(),
        }
    }

    /// Visible achievements the user is closest to, best progress first
    fn next_achievements(
        &self,
        stats: &SnapshotStats,
        unlocked_achievements: &[String],
    ) -> Vec<NextAchievement> {
        let mut next: Vec<NextAchievement> = self
            .achievements
            .iter()
            .filter(|a| !a.hidden)
            .filter(|a| !unlocked_achievements.iter().any(|u| u == a.id.as_str()))
            .filter_map(|a| {
                let progress = achievement_progress(a.id, stats);
                (progress > 0.0).then(|| NextAchievement {
                    id: a.id,
                    name: a.display_name(),
                    description: a.description,
                    progress,
                    points: a.points,
                })
            })
            .collect();

        // Stable sort keeps catalog order among equal progress
        next.sort_by(|a, b| b.progress.total_cmp(&a.progress));
        next.truncate(NEXT_ACHIEVEMENTS_LIMIT);
        next
    }

    // ========================================
    // MAIN CHECK FUNCTION
    // ========================================

    /// Run both checks, append the new IDs to `unlocked`, and summarize
    pub fn update(
        &self,
        snapshot: &UserProgressSnapshot,
        unlocked: &mut UnlockedSet,
    ) -> AchievementUpdate {
        let stats = SnapshotStats::from_snapshot(snapshot);

        let new_achievements = self.check_achievements_with(&stats, &unlocked.achievements);
        let new_milestones = self.check_milestones_with(&stats, &unlocked.milestones);

        for id in &new_achievements {
            info!(achievement = %id, "Achievement unlocked");
        }
        for id in &new_milestones {
            info!(milestone = %id, "Milestone reached");
        }

        unlocked
            .achievements
            .extend(new_achievements.iter().map(|id| id.as_str().to_string()));
        unlocked
            .milestones
            .extend(new_milestones.iter().map(|id| id.as_str().to_string()));

        let display =
            self.compute_display_data(snapshot, &unlocked.achievements, &unlocked.milestones);

        AchievementUpdate {
            new_achievements,
            new_milestones,
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementCategory;
    use crate::domain::{Certification, Profile};

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_evaluation_always_grants_first_login() {
        let engine = AchievementEngine::new();
        let unlocked = engine.check_achievements(&UserProgressSnapshot::default(), &[]);
        assert_eq!(unlocked, vec![AchievementId::FirstLogin]);
    }

    #[test]
    fn test_never_regrants_unlocked_ids() {
        let engine = AchievementEngine::new();
        let mut snapshot = UserProgressSnapshot::default();
        snapshot.progress.completed = 30;
        snapshot.progress.streak = 8;

        let already = ids(&["first_login", "courses_5", "course_streak_3"]);
        let unlocked = engine.check_achievements(&snapshot, &already);

        assert!(unlocked.iter().all(|id| !already.contains(&id.as_str().to_string())));
        assert_eq!(
            unlocked,
            vec![
                AchievementId::CourseStreak7,
                AchievementId::Courses10,
                AchievementId::Courses25,
            ]
        );
    }

    #[test]
    fn test_profile_complete_unlocks() {
        let engine = AchievementEngine::new();
        let mut snapshot = UserProgressSnapshot::default();
        snapshot.profile = Profile {
            name: "Ravi".to_string(),
            education: "Master's".to_string(),
            experience: "Advanced (5+ years)".to_string(),
            interests: vec!["MLOps".to_string()],
        };
        let unlocked = engine.check_achievements(&snapshot, &ids(&["first_login"]));
        assert_eq!(unlocked, vec![AchievementId::ProfileComplete]);
    }

    #[test]
    fn test_display_points_categories_and_level() {
        let engine = AchievementEngine::new();
        let achievements = ids(&["first_login", "courses_5", "bogus_id", "profile_complete"]);
        let milestones = ids(&["beginner_complete", "not_a_milestone"]);

        let display =
            engine.compute_display_data(&UserProgressSnapshot::default(), &achievements, &milestones);

        // 10 + 100 + 25 + 300
        assert_eq!(display.total_points, 435);
        assert_eq!(display.total_achievements, 4);
        assert_eq!(display.total_milestones, 2);
        assert_eq!(display.level, 3);
        assert!((display.level_progress - 45.0).abs() < 1e-9);

        let categories: Vec<_> = display
            .categorized_achievements
            .iter()
            .map(|b| b.category)
            .collect();
        assert_eq!(
            categories,
            vec![AchievementCategory::GettingStarted, AchievementCategory::Progress]
        );
        assert_eq!(
            display
                .bucket(AchievementCategory::GettingStarted)
                .map(|b| b.achievements.len()),
            Some(2)
        );
        assert_eq!(display.recent_milestones.len(), 1);
    }

    #[test]
    fn test_recent_milestones_are_last_three() {
        let engine = AchievementEngine::new();
        let milestones = ids(&[
            "beginner_complete",
            "intermediate_complete",
            "nsqf_level_5",
            "nsqf_level_6",
        ]);
        let display = engine.compute_display_data(&UserProgressSnapshot::default(), &[], &milestones);
        let recent: Vec<_> = display.recent_milestones.iter().map(|m| m.id).collect();
        assert_eq!(
            recent,
            vec![
                MilestoneId::IntermediateComplete,
                MilestoneId::NsqfLevel5,
                MilestoneId::NsqfLevel6,
            ]
        );
    }

    #[test]
    fn test_next_achievements_ranked_by_progress() {
        let engine = AchievementEngine::new();
        let mut snapshot = UserProgressSnapshot::default();
        snapshot.progress.completed = 4;
        snapshot.progress.streak = 2;

        let display = engine.compute_display_data(&snapshot, &[], &[]);
        let next: Vec<_> = display
            .next_achievements
            .iter()
            .map(|n| (n.id, n.progress.round() as u32))
            .collect();
        assert_eq!(
            next,
            vec![
                (AchievementId::Courses5, 80),
                (AchievementId::CourseStreak3, 67),
                (AchievementId::Courses10, 40),
                (AchievementId::CourseStreak7, 29),
                (AchievementId::Courses25, 16),
            ]
        );
    }

    #[test]
    fn test_update_appends_and_is_idempotent() {
        let engine = AchievementEngine::new();
        let mut snapshot = UserProgressSnapshot::default();
        snapshot.certifications = vec![Certification {
            course: "Intro".to_string(),
            status: "Completed".to_string(),
            score: 100.0,
            completion_date: None,
        }];

        let mut unlocked = UnlockedSet::default();
        let first = engine.update(&snapshot, &mut unlocked);
        assert!(first.has_news());
        assert_eq!(
            unlocked.achievements,
            ids(&["first_login", "first_course_start", "first_course_complete", "perfect_score"])
        );
        // 10 + 20 + 50 + 300
        assert_eq!(first.display.total_points, 380);

        let second = engine.update(&snapshot, &mut unlocked);
        assert!(!second.has_news());
        assert_eq!(unlocked.achievements.len(), 4);
    }
}
