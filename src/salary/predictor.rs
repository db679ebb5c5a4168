//! Salary predictor - deterministic multi-factor estimate
//!
//! Base salary comes from the NSQF level table; the configured factor table
//! scales it by experience, skills, location, company size and market
//! saturation. Every operation is a pure function of its inputs.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, warn};

use super::factors::{
    SalaryFactorTable, ADVANCED, DEFAULT_COMPANY_SIZE, DEFAULT_LOCATION, INTERMEDIATE,
};
use super::nsqf::{self, NSQF_LEVELS};

/// Round a money figure to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

const BASE_CONFIDENCE: f64 = 0.7;
const MAX_CONFIDENCE: f64 = 0.95;

/// Parsed salary band of one NSQF level, in LPA
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelSalary {
    pub min_salary: f64,
    pub max_salary: f64,
    pub avg_salary: f64,
    pub roles: &'static [&'static str],
    pub skills: &'static [&'static str],
}

impl LevelSalary {
    /// Linear band used when a range string cannot be parsed
    pub fn fallback(level: u8) -> Self {
        let steps = f64::from(level) - 4.0;
        Self {
            min_salary: 5.0 + steps * 3.0,
            max_salary: 10.0 + steps * 5.0,
            avg_salary: 7.5 + steps * 4.0,
            roles: &[],
            skills: &[],
        }
    }
}

/// Parse a display range such as "₹5-10 LPA" or "₹15-30+ LPA" into (min, max).
///
/// A missing or non-numeric upper bound becomes `min * 1.5`.
pub fn parse_salary_range(range: &str) -> Option<(f64, f64)> {
    let (_, amounts) = range.split_once('₹')?;
    let mut parts = amounts.split('-');

    let min: f64 = parts.next()?.replace("LPA", "").trim().parse().ok()?;

    let max_text = parts
        .next()
        .map(|s| s.replace("LPA", "").replace('+', "").trim().to_string())
        .unwrap_or_default();
    let max = if !max_text.is_empty() && max_text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        max_text.parse().unwrap_or(min * 1.5)
    } else {
        min * 1.5
    };

    Some((min, max))
}

/// Salary bands for every level in the NSQF table, parsed once
static LEVEL_SALARIES: Lazy<BTreeMap<u8, LevelSalary>> = Lazy::new(|| {
    NSQF_LEVELS
        .iter()
        .map(|level| {
            let salary = match parse_salary_range(level.salary_range) {
                Some((min, max)) => LevelSalary {
                    min_salary: min,
                    max_salary: max,
                    avg_salary: (min + max) / 2.0,
                    roles: level.job_roles,
                    skills: level.skills,
                },
                None => {
                    warn!(
                        "Unparseable salary range {:?} for NSQF level {}, using formula",
                        level.salary_range, level.level
                    );
                    LevelSalary {
                        roles: level.job_roles,
                        skills: level.skills,
                        ..LevelSalary::fallback(level.level)
                    }
                }
            };
            (level.level, salary)
        })
        .collect()
});

/// Money range around a prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// Factors applied to the base salary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryFactors {
    pub base_salary: f64,
    pub experience_factor: f64,
    /// Percent, e.g. 25.0
    pub skill_bonus: f64,
    pub location_factor: f64,
    pub company_factor: f64,
    pub market_factor: f64,
}

/// A single salary estimate in LPA
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryPrediction {
    pub predicted_salary: f64,
    pub salary_range: SalaryRange,
    pub factors: SalaryFactors,
    pub nsqf_level: u8,
    /// Heuristic in [0, 0.95]
    pub confidence: f64,
}

/// Deterministic salary model over the NSQF table and a factor table
#[derive(Debug, Clone, Default)]
pub struct SalaryPredictor {
    factors: SalaryFactorTable,
}

impl SalaryPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a predictor with custom (e.g. configured) factors
    pub fn with_factors(factors: SalaryFactorTable) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &SalaryFactorTable {
        &self.factors
    }

    /// Salary band of a level; levels outside the table use the formula
    pub fn level_salary(&self, level: u8) -> LevelSalary {
        LEVEL_SALARIES
            .get(&level)
            .copied()
            .unwrap_or_else(|| LevelSalary::fallback(level))
    }

    /// Predict with the default location and company size
    pub fn predict_current_salary(
        &self,
        education: &str,
        experience: &str,
        interests: &[String],
    ) -> SalaryPrediction {
        self.predict_current_salary_at(
            education,
            experience,
            interests,
            DEFAULT_LOCATION,
            DEFAULT_COMPANY_SIZE,
        )
    }

    pub fn predict_current_salary_at(
        &self,
        education: &str,
        experience: &str,
        interests: &[String],
        location: &str,
        company_size: &str,
    ) -> SalaryPrediction {
        let nsqf_level = nsqf::level_for_education(education);
        let base_salary = self.level_salary(nsqf_level).avg_salary;

        let factors = &self.factors;
        let experience_factor = factors.experience_multiplier.get_or(experience, 1.0);
        let skill_bonus = factors.skill_bonus(interests);
        let location_factor = factors.location_multipliers.get_or(location, 1.0);
        let company_factor = factors.company_size_multipliers.get_or(company_size, 1.0);
        let market_factor = factors.market_saturation.get_or(experience, 1.0);

        let salary = base_salary
            * experience_factor
            * (1.0 + skill_bonus)
            * location_factor
            * company_factor
            * market_factor;

        debug!(
            nsqf_level,
            base_salary, experience_factor, skill_bonus, location_factor, company_factor,
            market_factor, salary, "Salary prediction"
        );

        SalaryPrediction {
            predicted_salary: round1(salary),
            salary_range: SalaryRange {
                min: round1(salary * 0.8),
                max: round1(salary * 1.3),
                median: round1(salary),
            },
            factors: SalaryFactors {
                base_salary: round1(base_salary),
                experience_factor,
                skill_bonus: round1(skill_bonus * 100.0),
                location_factor,
                company_factor,
                market_factor,
            },
            nsqf_level,
            confidence: confidence(nsqf_level, experience, interests.len()),
        }
    }
}

/// How well-supported an estimate is, given the specificity of the inputs
fn confidence(nsqf_level: u8, experience: &str, interest_count: usize) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if (5..=7).contains(&nsqf_level) {
        confidence += 0.1;
    }
    if experience == INTERMEDIATE || experience == ADVANCED {
        confidence += 0.1;
    }
    confidence += (interest_count as f64 * 0.02).min(0.1);

    confidence.min(MAX_CONFIDENCE)
}
