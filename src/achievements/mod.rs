//! Gamification system: achievements, milestones, points and levels
//!
//! Pure rule evaluation over a [`UserProgressSnapshot`](crate::domain::UserProgressSnapshot).
//! Persisting the unlocked IDs is the caller's job (see [`crate::store`]).

mod activity;
mod checker;
mod definitions;
mod display;
mod engine;
mod levels;
mod milestones;

pub use activity::{parse_activity_date, SubjectArea, Track};
pub use checker::SnapshotStats;
pub use definitions::{
    Achievement, AchievementCatalog, AchievementCategory, AchievementId, ACHIEVEMENTS,
};
pub use display::{AchievementEntry, CategoryBucket, DisplaySummary, MilestoneEntry, NextAchievement};
pub use engine::{AchievementEngine, AchievementUpdate};
pub use levels::{level_for_points, LevelStatus, LEVEL_THRESHOLDS, MAX_LEVEL};
pub use milestones::{
    CourseLevel, Milestone, MilestoneCatalog, MilestoneId, Requirements, Reward, MILESTONES,
};
