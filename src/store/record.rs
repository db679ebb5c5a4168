//! Persisted per-user record and user ID helpers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{UnlockedSet, UserProgressSnapshot};

/// Keys added by an export and stripped again on import
pub const EXPORT_KEYS: [&str; 2] = ["export_timestamp", "user_id"];

/// Everything stored in `user_<id>.json`
///
/// Keys this crate does not model (goals, preferences, ...) are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub snapshot: UserProgressSnapshot,

    #[serde(flatten)]
    pub unlocked: UnlockedSet,

    /// RFC 3339 time of the last save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(snapshot: UserProgressSnapshot) -> Self {
        Self {
            snapshot,
            ..Default::default()
        }
    }
}

/// Derive a user ID from a display name: lowercase, spaces to `_`, `@` to `_at_`
pub fn user_id_from_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('@', "_at_")
}

/// Timestamp suffix used to make IDs unique
pub(crate) fn timestamp_suffix(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// Whether `id` can be used as part of a file name inside the data directory
pub fn is_valid_user_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}
