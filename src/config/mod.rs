//! Configuration loading and management
//!
//! The built-in catalogs and factor tables are the defaults; the config file
//! only carries overrides:
//!
//! ```toml
//! [settings]
//! data_dir = "/srv/careerpath/user_data"
//!
//! [achievements.courses_5]
//! points = 120
//!
//! [milestones.beginner_complete]
//! requirements = { courses_completed = 8 }
//! rewards = { points = 300 }
//!
//! [salary.location_multipliers]
//! "Bangalore" = 1.25
//! ```

mod io;
mod overrides;
mod settings;

pub(crate) use io::write_atomic;
pub use overrides::{AchievementOverride, MilestoneOverride, RewardOverride, SalaryOverrides};
pub use settings::Settings;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::achievements::{
    AchievementCatalog, AchievementEngine, AchievementId, MilestoneCatalog, MilestoneId,
};
use crate::salary::{SalaryFactorTable, SalaryPredictor};

/// Error type for configuration overrides
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown {kind} ID in config: {id}")]
    UnknownId { kind: &'static str, id: String },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Achievement overrides keyed by achievement ID
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub achievements: BTreeMap<String, AchievementOverride>,

    /// Milestone overrides keyed by milestone ID
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub milestones: BTreeMap<String, MilestoneOverride>,

    /// Salary factor overrides
    #[serde(default, skip_serializing_if = "SalaryOverrides::is_empty")]
    pub salary: SalaryOverrides,
}

impl Config {
    /// Directory holding the per-user progress files
    pub fn data_dir(&self) -> PathBuf {
        self.settings
            .data_dir
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("user_data"))
    }

    /// Built-in achievement catalog with the configured overrides applied
    pub fn achievement_catalog(&self) -> Result<AchievementCatalog, ConfigError> {
        let mut catalog = AchievementCatalog::default();

        for (key, overrides) in &self.achievements {
            let achievement = AchievementId::from_str(key)
                .and_then(|id| catalog.get_mut(id))
                .ok_or_else(|| ConfigError::UnknownId {
                    kind: "achievement",
                    id: key.clone(),
                })?;

            if let Some(points) = overrides.points {
                achievement.points = points;
            }
            if let Some(category) = overrides.category {
                achievement.category = category;
            }
            if let Some(hidden) = overrides.hidden {
                achievement.hidden = hidden;
            }
        }

        Ok(catalog)
    }

    /// Built-in milestone catalog with the configured overrides applied
    pub fn milestone_catalog(&self) -> Result<MilestoneCatalog, ConfigError> {
        let mut catalog = MilestoneCatalog::default();

        for (key, overrides) in &self.milestones {
            let milestone = MilestoneId::from_str(key)
                .and_then(|id| catalog.get_mut(id))
                .ok_or_else(|| ConfigError::UnknownId {
                    kind: "milestone",
                    id: key.clone(),
                })?;

            if let Some(requirements) = &overrides.requirements {
                if let Some(score) = requirements.min_avg_score {
                    if !(0.0..=100.0).contains(&score) {
                        return Err(ConfigError::InvalidValue {
                            key: format!("milestones.{}.requirements.min_avg_score", key),
                            reason: format!("{} is outside 0-100", score),
                        });
                    }
                }
                milestone.requirements.merge(requirements);
            }
            if let Some(points) = overrides.rewards.as_ref().and_then(|r| r.points) {
                milestone.rewards.points = points;
            }
        }

        Ok(catalog)
    }

    /// Default factor table with the configured overrides applied
    pub fn salary_factors(&self) -> Result<SalaryFactorTable, ConfigError> {
        let mut table = SalaryFactorTable::default();
        self.salary.apply(&mut table);

        if !(table.annual_growth_rate.is_finite() && table.annual_growth_rate > -1.0) {
            return Err(ConfigError::InvalidValue {
                key: "salary.annual_growth_rate".to_string(),
                reason: format!("{} must be greater than -1", table.annual_growth_rate),
            });
        }

        let tables = [
            ("experience_multiplier", &table.experience_multiplier),
            ("location_multipliers", &table.location_multipliers),
            ("company_size_multipliers", &table.company_size_multipliers),
            ("market_saturation", &table.market_saturation),
        ];
        for (name, factors) in tables {
            if let Some((key, value)) = factors.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
                return Err(ConfigError::InvalidValue {
                    key: format!("salary.{}.{}", name, key),
                    reason: format!("multiplier {} must be positive", value),
                });
            }
        }

        if let Some((key, value)) = table
            .skill_bonuses
            .iter()
            .find(|(_, v)| !(v.is_finite() && *v >= 0.0))
        {
            return Err(ConfigError::InvalidValue {
                key: format!("salary.skill_bonuses.{}", key),
                reason: format!("bonus {} must be zero or positive", value),
            });
        }

        Ok(table)
    }

    /// Achievement engine over the configured catalogs
    pub fn achievement_engine(&self) -> Result<AchievementEngine, ConfigError> {
        Ok(AchievementEngine::with_catalogs(
            self.achievement_catalog()?,
            self.milestone_catalog()?,
        ))
    }

    /// Salary predictor over the configured factor table
    pub fn salary_predictor(&self) -> Result<SalaryPredictor, ConfigError> {
        Ok(SalaryPredictor::with_factors(self.salary_factors()?))
    }
}
