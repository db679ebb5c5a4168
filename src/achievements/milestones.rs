//! Milestone definitions
//!
//! Milestones are composite unlocks: every requirement the engine can
//! observe in a snapshot must pass, and the reward carries a badge and
//! feature unlocks on top of points.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Unique identifier for each milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MilestoneId {
    BeginnerComplete,
    IntermediateComplete,
    AdvancedComplete,
    NsqfLevel5,
    NsqfLevel6,
    NsqfLevel7,
    AiPioneer,
}

impl MilestoneId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeginnerComplete => "beginner_complete",
            Self::IntermediateComplete => "intermediate_complete",
            Self::AdvancedComplete => "advanced_complete",
            Self::NsqfLevel5 => "nsqf_level_5",
            Self::NsqfLevel6 => "nsqf_level_6",
            Self::NsqfLevel7 => "nsqf_level_7",
            Self::AiPioneer => "ai_pioneer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    pub fn all() -> &'static [MilestoneId] {
        &[
            Self::BeginnerComplete,
            Self::IntermediateComplete,
            Self::AdvancedComplete,
            Self::NsqfLevel5,
            Self::NsqfLevel6,
            Self::NsqfLevel7,
            Self::AiPioneer,
        ]
    }
}

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MilestoneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Course difficulty tier named by `min_level` requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Requirement thresholds of a milestone
///
/// Only `courses_completed`, `certifications`, `min_avg_score` and
/// `streak_days` can be checked against a snapshot. The remaining keys are
/// attested outside the engine and do not block an unlock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Requirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses_completed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_avg_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_level: Option<CourseLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsqf_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_scores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfect_scores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_courses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_papers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub innovations: Option<u32>,
}

impl Requirements {
    const EMPTY: Self = Self {
        courses_completed: None,
        certifications: None,
        min_avg_score: None,
        streak_days: None,
        min_level: None,
        nsqf_level: None,
        high_scores: None,
        perfect_scores: None,
        ai_courses: None,
        research_papers: None,
        innovations: None,
    };

    /// Whether at least one requirement is observable from a snapshot
    pub fn has_evaluable(&self) -> bool {
        self.courses_completed.is_some()
            || self.certifications.is_some()
            || self.min_avg_score.is_some()
            || self.streak_days.is_some()
    }

    /// Overlay the keys set in `other`
    pub fn merge(&mut self, other: &Requirements) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            courses_completed,
            certifications,
            min_avg_score,
            streak_days,
            min_level,
            nsqf_level,
            high_scores,
            perfect_scores,
            ai_courses,
            research_papers,
            innovations
        );
    }
}

/// Reward granted when a milestone unlocks
#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    pub points: u32,
    pub badge: &'static str,
    pub unlocks: &'static [&'static str],
}

/// Milestone definition
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub id: MilestoneId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirements: Requirements,
    pub rewards: Reward,
}

/// All milestone definitions, in catalog order
pub static MILESTONES: &[Milestone] = &[
    // Learning milestones
    Milestone {
        id: MilestoneId::BeginnerComplete,
        name: "Beginner Graduate",
        description: "Completed all beginner-level courses",
        icon: "🎓",
        requirements: Requirements {
            courses_completed: Some(10),
            min_level: Some(CourseLevel::Beginner),
            ..Requirements::EMPTY
        },
        rewards: Reward {
            points: 300,
            badge: "🎓 Beginner Graduate",
            unlocks: &["intermediate_track"],
        },
    },
    Milestone {
        id: MilestoneId::IntermediateComplete,
        name: "Intermediate Master",
        description: "Mastered intermediate-level concepts",
        icon: "🚀",
        requirements: Requirements {
            courses_completed: Some(20),
            min_level: Some(CourseLevel::Intermediate),
            min_avg_score: Some(80.0),
            ..Requirements::EMPTY
        },
        rewards: Reward {
            points: 600,
            badge: "🚀 Intermediate Master",
            unlocks: &["advanced_track", "mentorship_program"],
        },
    },
    Milestone {
        id: MilestoneId::AdvancedComplete,
        name: "Advanced Expert",
        description: "Achieved mastery in advanced topics",
        icon: "👑",
        requirements: Requirements {
            courses_completed: Some(30),
            min_level: Some(CourseLevel::Advanced),
            min_avg_score: Some(85.0),
            streak_days: Some(30),
            ..Requirements::EMPTY
        },
        rewards: Reward {
            points: 1000,
            badge: "👑 Advanced Expert",
            unlocks: &["research_projects", "industry_connections"],
        },
    },
    // Career milestones
    Milestone {
        id: MilestoneId::NsqfLevel5,
        name: "NSQF Level 5 Ready",
        description: "Ready for NSQF Level 5 roles",
        icon: "📜",
        requirements: Requirements {
            nsqf_level: Some(5),
            courses_completed: Some(15),
            certifications: Some(3),
            ..Requirements::EMPTY
        },
        rewards: Reward {
            points: 400,
            badge: "📜 NSQF Level 5",
            unlocks: &["job_board_access", "career_counseling"],
        },
    },
    Milestone {
        id: MilestoneId::NsqfLevel6,
        name: "NSQF Level 6 Ready",
        description: "Qualified for senior roles",
        icon: "🎖️",
        requirements: Requirements {
            nsqf_level: Some(6),
            courses_completed: Some(25),
            certifications: Some(5),
            high_scores: Some(10),
            ..Requirements::EMPTY
        },
        rewards: Reward {
            points: 700,
            badge: "🎖️ NSQF Level 6",
            unlocks: &["leadership_track", "mentorship_program"],
        },
    },
    Milestone {
        id: MilestoneId::NsqfLevel7,
        name: "NSQF Level 7 Ready",
        description: "Expert-level professional",
        icon: "🏅",
        requirements: Requirements {
            nsqf_level: Some(7),
            courses_completed: Some(35),
            certifications: Some(8),
            perfect_scores: Some(5),
            ..Requirements::EMPTY
        },
        rewards: Reward {
            points: 1200,
            badge: "🏅 NSQF Level 7",
            unlocks: &["research_opportunities", "conference_speaker"],
        },
    },
    // Specialty milestones
    Milestone {
        id: MilestoneId::AiPioneer,
        name: "AI Pioneer",
        description: "Pioneer in artificial intelligence",
        icon: "🌟",
        requirements: Requirements {
            ai_courses: Some(20),
            research_papers: Some(3),
            innovations: Some(1),
            ..Requirements::EMPTY
        },
        rewards: Reward {
            points: 2000,
            badge: "🌟 AI Pioneer",
            unlocks: &["research_lab_access", "innovation_fund"],
        },
    },
];

/// Runtime milestone catalog, [`MILESTONES`] plus configuration overrides
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneCatalog {
    entries: Vec<Milestone>,
}

impl Default for MilestoneCatalog {
    fn default() -> Self {
        Self {
            entries: MILESTONES.to_vec(),
        }
    }
}

impl MilestoneCatalog {
    pub fn get(&self, id: MilestoneId) -> Option<&Milestone> {
        self.entries.iter().find(|m| m.id == id)
    }

    /// Look up a persisted string ID; unknown IDs yield `None`
    pub fn lookup(&self, id: &str) -> Option<&Milestone> {
        MilestoneId::from_str(id).and_then(|id| self.get(id))
    }

    pub(crate) fn get_mut(&mut self, id: MilestoneId) -> Option<&mut Milestone> {
        self.entries.iter_mut().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.entries.iter()
    }
}
