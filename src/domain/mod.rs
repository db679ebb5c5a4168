//! Core domain types for CareerPath

mod snapshot;

pub use snapshot::{
    Activity, Certification, Profile, Progress, UnlockedSet, UserProgressSnapshot,
    ACTION_COMPLETED, STATUS_COMPLETED,
};
