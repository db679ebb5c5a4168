//! Shared snapshot builders for integration tests

#![allow(dead_code)]

use careerpath::{Activity, Certification, Profile, UserProgressSnapshot};

/// Snapshot with only `progress.completed` set
pub fn snapshot_with_completed(completed: u32) -> UserProgressSnapshot {
    let mut snapshot = UserProgressSnapshot::default();
    snapshot.progress.completed = completed;
    snapshot
}

pub fn cert(course: &str, status: &str, score: f64) -> Certification {
    Certification {
        course: course.to_string(),
        status: status.to_string(),
        score,
        completion_date: None,
    }
}

pub fn completed_cert(course: &str, score: f64) -> Certification {
    cert(course, "Completed", score)
}

pub fn activity(action: &str, date: &str) -> Activity {
    Activity {
        action: action.to_string(),
        date: date.to_string(),
        topic: "Machine Learning".to_string(),
        duration: None,
    }
}

pub fn full_profile() -> Profile {
    Profile {
        name: "Asha Rao".to_string(),
        education: "Bachelor's".to_string(),
        experience: "Beginner (0-1 years)".to_string(),
        interests: vec!["Machine Learning".to_string(), "Data Science".to_string()],
    }
}

pub fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
