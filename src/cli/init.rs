//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use careerpath::config::Config;

/// Default configuration content for careerpath init
pub const DEFAULT_CONFIG: &str = r#"# CareerPath Configuration
# ========================
#
# Everything here is optional. Built-in catalogs and factor tables apply
# unless overridden below.

# ============================================================================
# SETTINGS
# ============================================================================
#
#   data_dir - Directory for user_<id>.json files (default: ~/.careerpath/user_data)

[settings]
# data_dir = "/path/to/user_data"

# ============================================================================
# ACHIEVEMENTS - Override points, category or visibility by ID
# ============================================================================
#
# [achievements.courses_5]
# points = 120
# category = "Progress"
# hidden = false

# ============================================================================
# MILESTONES - Override requirement thresholds and reward points by ID
# ============================================================================
#
# [milestones.beginner_complete]
# requirements = { courses_completed = 8 }
# rewards = { points = 300 }

# ============================================================================
# SALARY - Factor tables merge key by key into the built-in tables
# ============================================================================
#
# [salary]
# annual_growth_rate = 0.18
#
# [salary.location_multipliers]
# "Bangalore" = 1.2
# "Kochi" = 0.9
"#;

/// Write the default config file
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    // Default to global config path
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    // Create parent directory (if any)
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
