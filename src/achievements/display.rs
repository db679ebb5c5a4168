//! Display summary models
//!
//! Plain data handed to a rendering collaborator; nothing here formats text.

use serde::Serialize;

use super::definitions::{AchievementCategory, AchievementId};
use super::milestones::MilestoneId;

/// Number of entries in the "next achievements" list
pub const NEXT_ACHIEVEMENTS_LIMIT: usize = 5;

/// Number of most recent milestones shown
pub const RECENT_MILESTONES_LIMIT: usize = 3;

/// An unlocked achievement inside a category bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementEntry {
    pub id: AchievementId,
    pub name: String,
    pub description: &'static str,
    pub points: u32,
}

/// Unlocked achievements of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub category: AchievementCategory,
    pub achievements: Vec<AchievementEntry>,
}

/// A recently reached milestone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneEntry {
    pub id: MilestoneId,
    pub name: String,
    pub description: &'static str,
    pub points: u32,
}

/// A visible, not yet unlocked achievement with partial progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextAchievement {
    pub id: AchievementId,
    pub name: String,
    pub description: &'static str,
    /// 0-100
    pub progress: f64,
    pub points: u32,
}

/// Aggregate achievement statistics for a user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySummary {
    pub total_achievements: usize,
    pub total_milestones: usize,
    pub total_points: u32,
    /// Buckets in first-unlocked order
    pub categorized_achievements: Vec<CategoryBucket>,
    pub recent_milestones: Vec<MilestoneEntry>,
    pub next_achievements: Vec<NextAchievement>,
    pub level: u32,
    /// 0-100
    pub level_progress: f64,
}

impl DisplaySummary {
    pub fn bucket(&self, category: AchievementCategory) -> Option<&CategoryBucket> {
        self.categorized_achievements
            .iter()
            .find(|b| b.category == category)
    }
}
