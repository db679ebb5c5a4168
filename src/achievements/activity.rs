//! Activity and course-name analysis
//!
//! Date parsing for activity records, the rolling completion window, and
//! keyword classification of course names into subject areas.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};
use tracing::debug;

use crate::domain::{Activity, Certification};

/// Window in which three completions earn `quick_learner`
pub const QUICK_LEARNER_WINDOW_DAYS: i64 = 7;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 activity date (date only or date-time, optional offset)
pub fn parse_activity_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
}

/// Check if a date falls on Saturday or Sunday
pub fn is_weekend(date: &NaiveDateTime) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Any activity with a parseable date on a weekend
pub fn has_weekend_activity(activities: &[Activity]) -> bool {
    activities
        .iter()
        .filter_map(|a| parse_activity_date(&a.date))
        .any(|date| is_weekend(&date))
}

/// Three "Completed" activities within a rolling seven-day span
///
/// Records with unparseable dates are skipped.
pub fn has_quick_completion_run(activities: &[Activity]) -> bool {
    let mut dates: Vec<NaiveDateTime> = activities
        .iter()
        .filter(|a| a.is_completion())
        .filter_map(|a| {
            let parsed = parse_activity_date(&a.date);
            if parsed.is_none() {
                debug!(date = %a.date, "Skipping completion with malformed date");
            }
            parsed
        })
        .collect();

    if dates.len() < 3 {
        return false;
    }

    dates.sort();
    dates
        .windows(3)
        .any(|w| (w[2] - w[0]).num_days() <= QUICK_LEARNER_WINDOW_DAYS)
}

/// Keyword track used by the expertise achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    MachineLearning,
    DeepLearning,
    DataScience,
}

impl Track {
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::MachineLearning => &[
                "machine learning",
                "ml",
                "supervised",
                "unsupervised",
                "algorithm",
            ],
            Self::DeepLearning => &[
                "deep learning",
                "neural network",
                "cnn",
                "rnn",
                "transformer",
                "tensorflow",
                "pytorch",
            ],
            Self::DataScience => &[
                "data science",
                "analytics",
                "statistics",
                "pandas",
                "numpy",
                "visualization",
            ],
        }
    }

    pub fn matches(&self, course: &str) -> bool {
        let course = course.to_lowercase();
        self.keywords().iter().any(|kw| course.contains(kw))
    }
}

/// Count completed certifications whose course name matches a track
pub fn count_track_courses(certifications: &[Certification], track: Track) -> usize {
    certifications
        .iter()
        .filter(|c| c.is_completed() && track.matches(&c.course))
        .count()
}

/// Subject area a completed course is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubjectArea {
    MachineLearning,
    DeepLearning,
    DataScience,
    ComputerVision,
    Nlp,
    Robotics,
    Ethics,
}

impl SubjectArea {
    /// Areas in match priority order
    const ORDERED: [SubjectArea; 7] = [
        Self::MachineLearning,
        Self::DeepLearning,
        Self::DataScience,
        Self::ComputerVision,
        Self::Nlp,
        Self::Robotics,
        Self::Ethics,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::MachineLearning => &["machine learning", "ml"],
            Self::DeepLearning => &["deep learning", "neural"],
            Self::DataScience => &["data science", "analytics"],
            Self::ComputerVision => &["computer vision", "cv"],
            Self::Nlp => &["nlp", "natural language"],
            Self::Robotics => &["robotics"],
            Self::Ethics => &["ethics"],
        }
    }

    /// First area whose keywords hit the course name
    pub fn classify(course: &str) -> Option<SubjectArea> {
        let course = course.to_lowercase();
        Self::ORDERED
            .into_iter()
            .find(|area| area.keywords().iter().any(|kw| course.contains(kw)))
    }
}

/// Number of distinct subject areas across completed certifications
pub fn count_subject_areas(certifications: &[Certification]) -> usize {
    let mut areas: Vec<SubjectArea> = certifications
        .iter()
        .filter(|c| c.is_completed())
        .filter_map(|c| SubjectArea::classify(&c.course))
        .collect();
    areas.sort();
    areas.dedup();
    areas.len()
}
