//! Per-entry overrides of the built-in catalogs and factor tables

use serde::{Deserialize, Serialize};

use crate::achievements::{AchievementCategory, Requirements};
use crate::salary::{FactorMap, SalaryFactorTable};

/// `[achievements.<id>]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AchievementOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AchievementCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// `rewards` table of a milestone override; badge and unlocks stay built-in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewardOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

/// `[milestones.<id>]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MilestoneOverride {
    /// Keys set here replace the built-in thresholds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<RewardOverride>,
}

/// `[salary]`: factor tables merge key by key into the defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SalaryOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_growth_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_multiplier: Option<FactorMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_bonuses: Option<FactorMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_multipliers: Option<FactorMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size_multipliers: Option<FactorMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand_trends: Option<FactorMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_saturation: Option<FactorMap>,
}

impl SalaryOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, table: &mut SalaryFactorTable) {
        if let Some(rate) = self.annual_growth_rate {
            table.annual_growth_rate = rate;
        }

        let pairs = [
            (&self.experience_multiplier, &mut table.experience_multiplier),
            (&self.skill_bonuses, &mut table.skill_bonuses),
            (&self.location_multipliers, &mut table.location_multipliers),
            (&self.company_size_multipliers, &mut table.company_size_multipliers),
            (&self.demand_trends, &mut table.demand_trends),
            (&self.market_saturation, &mut table.market_saturation),
        ];
        for (overlay, target) in pairs {
            if let Some(overlay) = overlay {
                target.merge(overlay);
            }
        }
    }
}
