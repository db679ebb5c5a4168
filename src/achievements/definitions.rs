//! Achievement definitions and metadata
//!
//! All achievements are defined here with their category and point rewards.
//! Unlock conditions live in `checker`.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    // Getting started
    FirstLogin,
    ProfileComplete,

    // Learning
    FirstCourseStart,
    FirstCourseComplete,

    // Consistency
    CourseStreak3,
    CourseStreak7,
    CourseStreak30,

    // Expertise
    MlSpecialist,
    DlExpert,
    DataScientist,
    AiResearcher,

    // Progress
    Courses5,
    Courses10,
    Courses25,
    Courses50,

    // Performance
    HighScorer,
    PerfectScore,
    QuickLearner,

    // Special
    EarlyBird,
    NightOwl,
    WeekendWarrior,
    CuriosityDriven,

    // Secret
    SecretAgent,
    TimeTraveler,
}

impl AchievementId {
    /// Get the string ID used in persisted user data
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLogin => "first_login",
            Self::ProfileComplete => "profile_complete",
            Self::FirstCourseStart => "first_course_start",
            Self::FirstCourseComplete => "first_course_complete",
            Self::CourseStreak3 => "course_streak_3",
            Self::CourseStreak7 => "course_streak_7",
            Self::CourseStreak30 => "course_streak_30",
            Self::MlSpecialist => "ml_specialist",
            Self::DlExpert => "dl_expert",
            Self::DataScientist => "data_scientist",
            Self::AiResearcher => "ai_researcher",
            Self::Courses5 => "courses_5",
            Self::Courses10 => "courses_10",
            Self::Courses25 => "courses_25",
            Self::Courses50 => "courses_50",
            Self::HighScorer => "high_scorer",
            Self::PerfectScore => "perfect_score",
            Self::QuickLearner => "quick_learner",
            Self::EarlyBird => "early_bird",
            Self::NightOwl => "night_owl",
            Self::WeekendWarrior => "weekend_warrior",
            Self::CuriosityDriven => "curiosity_driven",
            Self::SecretAgent => "secret_agent",
            Self::TimeTraveler => "time_traveler",
        }
    }

    /// Parse from a persisted string
    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    /// All achievement IDs in catalog order
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstLogin,
            Self::ProfileComplete,
            Self::FirstCourseStart,
            Self::FirstCourseComplete,
            Self::CourseStreak3,
            Self::CourseStreak7,
            Self::CourseStreak30,
            Self::MlSpecialist,
            Self::DlExpert,
            Self::DataScientist,
            Self::AiResearcher,
            Self::Courses5,
            Self::Courses10,
            Self::Courses25,
            Self::Courses50,
            Self::HighScorer,
            Self::PerfectScore,
            Self::QuickLearner,
            Self::EarlyBird,
            Self::NightOwl,
            Self::WeekendWarrior,
            Self::CuriosityDriven,
            Self::SecretAgent,
            Self::TimeTraveler,
        ]
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AchievementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Achievement category for grouping in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    #[serde(rename = "Getting Started")]
    GettingStarted,
    Learning,
    Consistency,
    Expertise,
    Progress,
    Performance,
    Special,
    Secret,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::Learning => "Learning",
            Self::Consistency => "Consistency",
            Self::Expertise => "Expertise",
            Self::Progress => "Progress",
            Self::Performance => "Performance",
            Self::Special => "Special",
            Self::Secret => "Secret",
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub points: u32,
    /// Hidden achievements are never listed as "next" and need an external trigger
    pub hidden: bool,
}

impl Achievement {
    /// Name with its icon, as shown on badges
    pub fn display_name(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// All achievement definitions, in catalog order
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === GETTING STARTED ===
    Achievement {
        id: AchievementId::FirstLogin,
        name: "Welcome Aboard",
        description: "Completed your first login to the dashboard",
        icon: "🌟",
        category: AchievementCategory::GettingStarted,
        points: 10,
        hidden: false,
    },
    Achievement {
        id: AchievementId::ProfileComplete,
        name: "Profile Master",
        description: "Completed your user profile with all information",
        icon: "👤",
        category: AchievementCategory::GettingStarted,
        points: 25,
        hidden: false,
    },
    // === LEARNING ===
    Achievement {
        id: AchievementId::FirstCourseStart,
        name: "Learning Journey Begins",
        description: "Started your first course",
        icon: "🚀",
        category: AchievementCategory::Learning,
        points: 20,
        hidden: false,
    },
    Achievement {
        id: AchievementId::FirstCourseComplete,
        name: "First Graduate",
        description: "Completed your first course",
        icon: "🎓",
        category: AchievementCategory::Learning,
        points: 50,
        hidden: false,
    },
    // === CONSISTENCY ===
    Achievement {
        id: AchievementId::CourseStreak3,
        name: "On Fire",
        description: "Completed courses for 3 days straight",
        icon: "🔥",
        category: AchievementCategory::Consistency,
        points: 75,
        hidden: false,
    },
    Achievement {
        id: AchievementId::CourseStreak7,
        name: "Week Warrior",
        description: "Maintained a 7-day learning streak",
        icon: "⚡",
        category: AchievementCategory::Consistency,
        points: 150,
        hidden: false,
    },
    Achievement {
        id: AchievementId::CourseStreak30,
        name: "Month Champion",
        description: "Incredible 30-day learning streak!",
        icon: "💪",
        category: AchievementCategory::Consistency,
        points: 500,
        hidden: false,
    },
    // === EXPERTISE ===
    Achievement {
        id: AchievementId::MlSpecialist,
        name: "ML Specialist",
        description: "Completed 5 Machine Learning courses",
        icon: "🤖",
        category: AchievementCategory::Expertise,
        points: 200,
        hidden: false,
    },
    Achievement {
        id: AchievementId::DlExpert,
        name: "Deep Learning Expert",
        description: "Mastered Deep Learning fundamentals",
        icon: "🧠",
        category: AchievementCategory::Expertise,
        points: 300,
        hidden: false,
    },
    Achievement {
        id: AchievementId::DataScientist,
        name: "Data Scientist",
        description: "Completed comprehensive Data Science track",
        icon: "📊",
        category: AchievementCategory::Expertise,
        points: 400,
        hidden: false,
    },
    Achievement {
        id: AchievementId::AiResearcher,
        name: "AI Researcher",
        description: "Achieved advanced level in AI research methodologies",
        icon: "🔬",
        category: AchievementCategory::Expertise,
        points: 600,
        hidden: false,
    },
    // === PROGRESS ===
    Achievement {
        id: AchievementId::Courses5,
        name: "Getting Started",
        description: "Completed 5 courses",
        icon: "🎯",
        category: AchievementCategory::Progress,
        points: 100,
        hidden: false,
    },
    Achievement {
        id: AchievementId::Courses10,
        name: "Dedicated Learner",
        description: "Completed 10 courses",
        icon: "📚",
        category: AchievementCategory::Progress,
        points: 200,
        hidden: false,
    },
    Achievement {
        id: AchievementId::Courses25,
        name: "Learning Master",
        description: "Completed 25 courses",
        icon: "🏆",
        category: AchievementCategory::Progress,
        points: 500,
        hidden: false,
    },
    Achievement {
        id: AchievementId::Courses50,
        name: "Knowledge King",
        description: "Completed 50 courses - Incredible dedication!",
        icon: "👑",
        category: AchievementCategory::Progress,
        points: 1000,
        hidden: false,
    },
    // === PERFORMANCE ===
    Achievement {
        id: AchievementId::HighScorer,
        name: "Excellence Award",
        description: "Achieved 90%+ score on 5 courses",
        icon: "⭐",
        category: AchievementCategory::Performance,
        points: 250,
        hidden: false,
    },
    Achievement {
        id: AchievementId::PerfectScore,
        name: "Perfectionist",
        description: "Achieved a perfect score on any course",
        icon: "💯",
        category: AchievementCategory::Performance,
        points: 300,
        hidden: false,
    },
    Achievement {
        id: AchievementId::QuickLearner,
        name: "Speed Demon",
        description: "Completed 3 courses in one week",
        icon: "🚄",
        category: AchievementCategory::Performance,
        points: 150,
        hidden: false,
    },
    // === SPECIAL ===
    Achievement {
        id: AchievementId::EarlyBird,
        name: "Early Bird",
        description: "Completed lessons before 8 AM",
        icon: "🌅",
        category: AchievementCategory::Special,
        points: 50,
        hidden: false,
    },
    Achievement {
        id: AchievementId::NightOwl,
        name: "Night Owl",
        description: "Completed lessons after 10 PM",
        icon: "🦉",
        category: AchievementCategory::Special,
        points: 50,
        hidden: false,
    },
    Achievement {
        id: AchievementId::WeekendWarrior,
        name: "Weekend Warrior",
        description: "Completed courses on weekends",
        icon: "💼",
        category: AchievementCategory::Special,
        points: 75,
        hidden: false,
    },
    Achievement {
        id: AchievementId::CuriosityDriven,
        name: "Curiosity Driven",
        description: "Explored courses in 5 different areas",
        icon: "🔍",
        category: AchievementCategory::Special,
        points: 200,
        hidden: false,
    },
    // === SECRET ===
    Achievement {
        id: AchievementId::SecretAgent,
        name: "Secret Agent",
        description: "Found a hidden easter egg",
        icon: "🕵️",
        category: AchievementCategory::Secret,
        points: 100,
        hidden: true,
    },
    Achievement {
        id: AchievementId::TimeTraveler,
        name: "Time Traveler",
        description: "Learned something from the future",
        icon: "⏰",
        category: AchievementCategory::Secret,
        points: 150,
        hidden: true,
    },
];

/// Runtime achievement catalog
///
/// Starts from [`ACHIEVEMENTS`] and may carry configuration overrides for
/// points, category and visibility. Entry order is always catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementCatalog {
    entries: Vec<Achievement>,
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self {
            entries: ACHIEVEMENTS.to_vec(),
        }
    }
}

impl AchievementCatalog {
    /// Get achievement definition by ID
    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.entries.iter().find(|a| a.id == id)
    }

    /// Look up a persisted string ID; unknown IDs yield `None`
    pub fn lookup(&self, id: &str) -> Option<&Achievement> {
        AchievementId::from_str(id).and_then(|id| self.get(id))
    }

    pub(crate) fn get_mut(&mut self, id: AchievementId) -> Option<&mut Achievement> {
        self.entries.iter_mut().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.entries.iter()
    }

    /// Get total number of achievements
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Get total possible points from all achievements
    pub fn total_points(&self) -> u32 {
        self.entries.iter().map(|a| a.points).sum()
    }
}
