//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the per-user progress files
    /// Defaults to ~/.careerpath/user_data when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}
