//! User progress snapshot
//!
//! The caller-supplied bundle of profile, progress, certifications and
//! activity records that both engines evaluate. Every field is optional on
//! the wire; absent data deserializes to empty/zero.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status string a certification carries once the course is finished
pub const STATUS_COMPLETED: &str = "Completed";

/// Activity action recorded when a course is finished
pub const ACTION_COMPLETED: &str = "Completed";

/// Snapshot of a user's learning state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProgressSnapshot {
    pub profile: Profile,
    pub progress: Progress,
    pub certifications: Vec<Certification>,
    pub activities: Vec<Activity>,
}

/// Profile fields entered by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub education: String,
    pub experience: String,
    pub interests: Vec<String>,
}

impl Profile {
    /// All four profile fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.education.is_empty()
            && !self.experience.is_empty()
            && !self.interests.is_empty()
    }
}

/// Aggregate learning progress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    /// Number of completed courses/topics
    pub completed: u32,
    /// Current daily learning streak
    pub streak: u32,
    /// Dashboard-owned counters (in_progress, total_topics, ...) kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A certification record for a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub course: String,
    pub status: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
}

impl Certification {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// A single entry of the user's activity feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub action: String,
    /// ISO-8601 date or date-time
    pub date: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Activity {
    pub fn is_completion(&self) -> bool {
        self.action == ACTION_COMPLETED
    }
}

/// Achievement and milestone IDs already granted to a user, in grant order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockedSet {
    pub achievements: Vec<String>,
    pub milestones: Vec<String>,
}
