//! Per-user JSON snapshot storage
//!
//! One pretty-printed `user_<id>.json` file per user inside the data
//! directory. Writes are atomic and serialized through an advisory lock.

mod record;

pub use record::{is_valid_user_id, user_id_from_name, UserRecord, EXPORT_KEYS};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::achievements::{AchievementEngine, AchievementUpdate};
use crate::config::write_atomic;
use crate::domain::{Profile, UserProgressSnapshot};

const FILE_PREFIX: &str = "user_";
const FILE_SUFFIX: &str = ".json";

/// Error type for user data storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid user ID: {0:?}")]
    InvalidUserId(String),

    #[error("No stored data for user {0}")]
    NotFound(String),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed user data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Import data must be a JSON object")]
    NotAnObject,
}

/// Directory of per-user progress files
#[derive(Debug, Clone)]
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding `user_id`
    pub fn user_path(&self, user_id: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_user_id(user_id) {
            return Err(StoreError::InvalidUserId(user_id.to_string()));
        }
        Ok(self
            .data_dir
            .join(format!("{}{}{}", FILE_PREFIX, user_id, FILE_SUFFIX)))
    }

    pub fn exists(&self, user_id: &str) -> Result<bool, StoreError> {
        Ok(self.user_path(user_id)?.exists())
    }

    /// Load a user's record; `None` if nothing is stored
    pub fn load(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        let Some(content) = self.read(user_id)? else {
            return Ok(None);
        };
        let path = self.user_path(user_id)?;
        let record = serde_json::from_str(&content)
            .map_err(|source| StoreError::Parse { path, source })?;
        Ok(Some(record))
    }

    /// Save a record, stamping `last_updated`
    pub fn save(&self, user_id: &str, record: &mut UserRecord) -> Result<(), StoreError> {
        self.save_at(user_id, record, Utc::now())
    }

    pub fn save_at(
        &self,
        user_id: &str,
        record: &mut UserRecord,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let path = self.user_path(user_id)?;
        record.last_updated = Some(now.to_rfc3339_opts(SecondsFormat::Secs, true));

        let content = serde_json::to_vec_pretty(record).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;
        write_atomic(&path, &content).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        info!("Saved user data for {} to {}", user_id, path.display());
        Ok(())
    }

    /// All stored user IDs, sorted
    pub fn list_users(&self) -> Result<Vec<String>, StoreError> {
        let entries = match std::fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.data_dir.clone(),
                    source,
                })
            }
        };

        let mut users: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter_map(|name| {
                name.strip_prefix(FILE_PREFIX)
                    .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
                    .filter(|id| is_valid_user_id(id))
                    .map(str::to_string)
            })
            .collect();
        users.sort();
        Ok(users)
    }

    /// Delete a user's file; `false` if there was none
    pub fn delete(&self, user_id: &str) -> Result<bool, StoreError> {
        let path = self.user_path(user_id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted user data for {}", user_id);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// The stored JSON plus `export_timestamp` and `user_id`
    pub fn export(&self, user_id: &str) -> Result<Option<Value>, StoreError> {
        self.export_at(user_id, Utc::now())
    }

    pub fn export_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Value>, StoreError> {
        let Some(content) = self.read(user_id)? else {
            return Ok(None);
        };
        let path = self.user_path(user_id)?;
        let mut data: Value = serde_json::from_str(&content)
            .map_err(|source| StoreError::Parse { path, source })?;

        let object = data.as_object_mut().ok_or(StoreError::NotAnObject)?;
        object.insert(
            "export_timestamp".to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        object.insert("user_id".to_string(), Value::String(user_id.to_string()));
        Ok(Some(data))
    }

    /// Store exported data under `user_id`, dropping the export-only keys
    pub fn import(&self, user_id: &str, mut data: Value) -> Result<UserRecord, StoreError> {
        let path = self.user_path(user_id)?;
        let object = data.as_object_mut().ok_or(StoreError::NotAnObject)?;
        for key in EXPORT_KEYS {
            object.remove(key);
        }

        let mut record: UserRecord =
            serde_json::from_value(data).map_err(|source| StoreError::Parse { path, source })?;
        self.save(user_id, &mut record)?;
        Ok(record)
    }

    /// Fresh ID for a new user named `name`
    ///
    /// Taken IDs and empty names get a timestamp suffix.
    pub fn new_user_id(&self, name: &str, now: DateTime<Utc>) -> Result<String, StoreError> {
        let base = user_id_from_name(name);
        if base.is_empty() {
            return Ok(format!("user_{}", record::timestamp_suffix(now)));
        }
        if !is_valid_user_id(&base) {
            return Err(StoreError::InvalidUserId(base));
        }
        if self.exists(&base)? {
            return Ok(format!("{}_{}", base, record::timestamp_suffix(now)));
        }
        Ok(base)
    }

    /// Store a fresh record for `profile` under an ID derived from its name
    pub fn create_user(
        &self,
        profile: Profile,
        now: DateTime<Utc>,
    ) -> Result<(String, UserRecord), StoreError> {
        let user_id = self.new_user_id(&profile.name, now)?;
        let mut record = UserRecord::new(UserProgressSnapshot {
            profile,
            ..Default::default()
        });
        self.save_at(&user_id, &mut record, now)?;
        info!("Created user {}", user_id);
        Ok((user_id, record))
    }

    /// Evaluate a stored user and persist any new unlocks
    pub fn update_achievements(
        &self,
        engine: &AchievementEngine,
        user_id: &str,
    ) -> Result<AchievementUpdate, StoreError> {
        let mut record = self
            .load(user_id)?
            .ok_or_else(|| StoreError::NotFound(user_id.to_string()))?;

        let update = engine.update(&record.snapshot, &mut record.unlocked);
        if update.has_news() {
            self.save(user_id, &mut record)?;
        } else {
            debug!("No new unlocks for {}", user_id);
        }
        Ok(update)
    }

    fn read(&self, user_id: &str) -> Result<Option<String>, StoreError> {
        let path = self.user_path(user_id)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored data at {}", path.display());
                Ok(None)
            }
            Err(source) => {
                warn!("Failed to read {}: {}", path.display(), source);
                Err(StoreError::Io { path, source })
            }
        }
    }
}
