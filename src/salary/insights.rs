//! Salary insights and improvement recommendations

use std::fmt;

use serde::Serialize;

use super::nsqf;
use super::predictor::{round1, SalaryPrediction, SalaryPredictor};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Percentile reported at or below the level's minimum salary
const PERCENTILE_FLOOR: u32 = 25;
/// Percentile reported at or above the level's maximum salary
const PERCENTILE_CEILING: u32 = 90;

/// Skills above this bonus are worth recommending
const HIGH_IMPACT_BONUS: f64 = 0.15;
const CONFIDENCE_THRESHOLD: f64 = 0.8;
const LOCATION_THRESHOLD: f64 = 1.1;
const COMPANY_THRESHOLD: f64 = 1.2;

/// Prediction compared with the level's market average
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketComparison {
    pub your_prediction: f64,
    pub market_average: f64,
    pub difference: f64,
    pub percentile: u32,
}

/// Contribution of one selected interest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillImpact {
    pub skill: String,
    pub impact_percentage: f64,
    pub potential_increase: f64,
}

/// What the next NSQF level pays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextLevelOpportunity {
    pub level: u8,
    pub avg_salary: f64,
    pub potential_increase: f64,
    pub roles: Vec<&'static str>,
}

/// A salary improvement suggestion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Inputs too generic for a confident estimate
    BuildSpecificSkills,
    LearnSkill { skill: String, boost_percent: f64 },
    GainExperience,
    Relocate,
    TargetLargerCompanies,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::BuildSpecificSkills => {
                write!(f, "Build more specific skills to improve salary prediction accuracy")
            }
            Recommendation::LearnSkill {
                skill,
                boost_percent,
            } => write!(
                f,
                "Consider learning {} for up to {:.0}% salary boost",
                skill, boost_percent
            ),
            Recommendation::GainExperience => {
                write!(f, "Gain more experience to increase salary potential significantly")
            }
            Recommendation::Relocate => {
                write!(f, "Consider opportunities in Bangalore/Mumbai for higher compensation")
            }
            Recommendation::TargetLargerCompanies => {
                write!(f, "Target larger companies for better compensation packages")
            }
        }
    }
}

/// Prediction plus market context and recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub current_prediction: SalaryPrediction,
    pub market_comparison: MarketComparison,
    /// In interest order; interests without a bonus entry are skipped
    pub skill_impact: Vec<SkillImpact>,
    pub current_level_roles: Vec<&'static str>,
    pub next_level_opportunity: Option<NextLevelOpportunity>,
    pub recommendations: Vec<Recommendation>,
}

impl SalaryPredictor {
    pub fn get_salary_insights(
        &self,
        education: &str,
        experience: &str,
        interests: &[String],
    ) -> Insights {
        let prediction = self.predict_current_salary(education, experience, interests);
        let predicted = prediction.predicted_salary;
        let level = self.level_salary(prediction.nsqf_level);

        let market_comparison = MarketComparison {
            your_prediction: predicted,
            market_average: round1(level.avg_salary),
            difference: round1(predicted - level.avg_salary),
            percentile: percentile(predicted, level.min_salary, level.max_salary),
        };

        let skill_bonuses = &self.factors().skill_bonuses;
        let skill_impact = interests
            .iter()
            .filter_map(|interest| {
                let bonus = skill_bonuses.get(interest)?;
                Some(SkillImpact {
                    skill: interest.clone(),
                    impact_percentage: round1(bonus * 100.0),
                    potential_increase: round1(predicted * bonus),
                })
            })
            .collect();

        // Only levels inside the table offer roles to move into
        let next_level_opportunity = prediction
            .nsqf_level
            .checked_add(1)
            .filter(|next| nsqf::get_level(*next).is_some())
            .map(|next| {
                let next_salary = self.level_salary(next);
                NextLevelOpportunity {
                    level: next,
                    avg_salary: next_salary.avg_salary,
                    potential_increase: round1(next_salary.avg_salary - predicted),
                    roles: next_salary.roles.iter().take(3).copied().collect(),
                }
            });

        let recommendations = self.recommendations(&prediction, interests);

        Insights {
            current_level_roles: level.roles.to_vec(),
            current_prediction: prediction,
            market_comparison,
            skill_impact,
            next_level_opportunity,
            recommendations,
        }
    }

    fn recommendations(
        &self,
        prediction: &SalaryPrediction,
        interests: &[String],
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if prediction.confidence < CONFIDENCE_THRESHOLD {
            recommendations.push(Recommendation::BuildSpecificSkills);
        }

        if let Some((skill, bonus)) = self
            .factors()
            .skill_bonuses
            .iter()
            .find(|(skill, bonus)| {
                *bonus > HIGH_IMPACT_BONUS && !interests.iter().any(|i| i.as_str() == *skill)
            })
        {
            recommendations.push(Recommendation::LearnSkill {
                skill: skill.to_string(),
                boost_percent: bonus * 100.0,
            });
        }

        let factors = &prediction.factors;
        if factors.experience_factor < 1.0 {
            recommendations.push(Recommendation::GainExperience);
        }
        if factors.location_factor < LOCATION_THRESHOLD {
            recommendations.push(Recommendation::Relocate);
        }
        if factors.company_factor < COMPANY_THRESHOLD {
            recommendations.push(Recommendation::TargetLargerCompanies);
        }

        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}

/// Position of `salary` inside the level band, clamped to 25..=90
fn percentile(salary: f64, min: f64, max: f64) -> u32 {
    if salary <= min {
        PERCENTILE_FLOOR
    } else if salary >= max {
        PERCENTILE_CEILING
    } else {
        let span = f64::from(PERCENTILE_CEILING - PERCENTILE_FLOOR);
        (f64::from(PERCENTILE_FLOOR) + (salary - min) / (max - min) * span).round() as u32
    }
}
