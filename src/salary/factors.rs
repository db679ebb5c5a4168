//! Salary factor tables
//!
//! Multipliers, skill bonuses and market trends used by the predictor.
//! Tables keep their definition order: recommendations pick the first
//! qualifying skill.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const BEGINNER: &str = "Beginner (0-1 years)";
pub const INTERMEDIATE: &str = "Intermediate (2-4 years)";
pub const ADVANCED: &str = "Advanced (5+ years)";

pub const DEFAULT_LOCATION: &str = "Bangalore";
pub const DEFAULT_COMPANY_SIZE: &str = "Medium (201-1000)";

/// Upper bound of the combined skill bonus
pub const MAX_SKILL_BONUS: f64 = 0.5;

/// Ordered name → factor table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorMap {
    entries: Vec<(String, f64)>,
}

impl FactorMap {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| *value)
    }

    /// Factor for `key`, or `default` on a lookup miss
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set a factor, keeping the position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Overlay every entry of `other`
    pub fn merge(&mut self, other: &FactorMap) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FactorMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = FactorMap::default();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Serialize for FactorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FactorMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FactorMapVisitor;

        impl<'de> Visitor<'de> for FactorMapVisitor {
            type Value = FactorMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of names to numeric factors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FactorMap, A::Error> {
                let mut map = FactorMap::default();
                while let Some((key, value)) = access.next_entry::<String, f64>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FactorMapVisitor)
    }
}

/// Market trend data for projections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketTrends {
    pub annual_growth_rate: f64,
    pub demand_trends: FactorMap,
    pub market_saturation: FactorMap,
}

/// All coefficient tables of the salary model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryFactorTable {
    pub experience_multiplier: FactorMap,
    pub skill_bonuses: FactorMap,
    pub location_multipliers: FactorMap,
    pub company_size_multipliers: FactorMap,
    /// 0.18 = 18% yearly growth
    pub annual_growth_rate: f64,
    pub demand_trends: FactorMap,
    /// Keyed by experience tier
    pub market_saturation: FactorMap,
}

impl Default for SalaryFactorTable {
    fn default() -> Self {
        Self {
            experience_multiplier: [(BEGINNER, 0.85), (INTERMEDIATE, 1.0), (ADVANCED, 1.35)]
                .into_iter()
                .collect(),
            skill_bonuses: [
                ("Machine Learning", 0.15),
                ("Deep Learning", 0.25),
                ("Natural Language Processing", 0.20),
                ("Computer Vision", 0.20),
                ("Data Science", 0.10),
                ("Robotics", 0.30),
                ("AI Ethics", 0.05),
                ("MLOps", 0.18),
            ]
            .into_iter()
            .collect(),
            location_multipliers: [
                ("Bangalore", 1.2),
                ("Mumbai", 1.15),
                ("Delhi", 1.1),
                ("Hyderabad", 1.05),
                ("Chennai", 1.0),
                ("Pune", 0.95),
                ("Other Metro", 0.85),
                ("Tier 2 Cities", 0.7),
            ]
            .into_iter()
            .collect(),
            company_size_multipliers: [
                ("Startup (1-50)", 0.8),
                ("Small (51-200)", 0.9),
                ("Medium (201-1000)", 1.0),
                ("Large (1001-5000)", 1.2),
                ("Enterprise (5000+)", 1.4),
            ]
            .into_iter()
            .collect(),
            annual_growth_rate: 0.18,
            demand_trends: [
                ("Machine Learning", 1.25),
                ("Deep Learning", 1.35),
                ("Natural Language Processing", 1.45),
                ("Computer Vision", 1.30),
                ("Data Science", 1.15),
                ("Robotics", 1.40),
                ("AI Ethics", 1.05),
                ("MLOps", 1.50),
            ]
            .into_iter()
            .collect(),
            // High supply at entry level, scarce senior talent
            market_saturation: [(BEGINNER, 0.8), (INTERMEDIATE, 1.1), (ADVANCED, 1.3)]
                .into_iter()
                .collect(),
        }
    }
}

impl SalaryFactorTable {
    pub fn market_trends(&self) -> MarketTrends {
        MarketTrends {
            annual_growth_rate: self.annual_growth_rate,
            demand_trends: self.demand_trends.clone(),
            market_saturation: self.market_saturation.clone(),
        }
    }

    /// Sum of bonuses for the given interests, capped at [`MAX_SKILL_BONUS`]
    pub fn skill_bonus(&self, interests: &[String]) -> f64 {
        interests
            .iter()
            .map(|i| self.skill_bonuses.get_or(i, 0.0))
            .sum::<f64>()
            .min(MAX_SKILL_BONUS)
    }
}
