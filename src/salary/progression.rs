//! Multi-year salary projection

use serde::Serialize;

use super::factors::{ADVANCED, INTERMEDIATE};
use super::nsqf;
use super::predictor::{round1, SalaryPredictor};

/// Default projection horizon in years
pub const DEFAULT_YEARS_AHEAD: u32 = 5;

/// Linear salary bonus per NSQF level gained
const LEVEL_BONUS: f64 = 0.2;

/// One simulated year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionYear {
    pub year: u32,
    pub salary: f64,
    pub nsqf_level: u8,
    pub experience_level: String,
    /// Percent; 0 for the starting year
    pub growth_rate: f64,
}

/// Year-by-year projection towards a target role
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progression {
    pub progression: Vec<ProgressionYear>,
    /// First year whose level reaches the target level
    pub target_achieved_year: Option<u32>,
    /// Percent growth from the first to the last year
    pub total_growth: f64,
    pub annual_avg_growth: f64,
}

impl Progression {
    pub fn final_year(&self) -> Option<&ProgressionYear> {
        self.progression.last()
    }
}

impl SalaryPredictor {
    /// Simulate compounding growth with the NSQF level rising every two years
    pub fn predict_career_progression(
        &self,
        education: &str,
        experience: &str,
        target_role: &str,
        years_ahead: u32,
    ) -> Progression {
        let current_level = nsqf::level_for_education(education);
        let target_level = nsqf::level_for_role(target_role).unwrap_or(current_level);
        let growth = self.factors().annual_growth_rate;

        let start_salary = self
            .predict_current_salary(education, experience, &[])
            .predicted_salary;

        let progression: Vec<ProgressionYear> = (0..=years_ahead)
            .map(|year| {
                let (experience_level, nsqf_level) = match year {
                    0 => (experience, current_level),
                    1..=2 => (INTERMEDIATE, level_at(current_level, target_level, year)),
                    _ => (ADVANCED, level_at(current_level, target_level, year)),
                };

                let level_bonus = if nsqf_level > current_level {
                    f64::from(nsqf_level - current_level) * LEVEL_BONUS
                } else {
                    0.0
                };
                let salary = start_salary * (1.0 + growth).powi(year as i32) * (1.0 + level_bonus);

                ProgressionYear {
                    year,
                    salary: round1(salary),
                    nsqf_level,
                    experience_level: experience_level.to_string(),
                    growth_rate: if year > 0 { round1(growth * 100.0) } else { 0.0 },
                }
            })
            .collect();

        let target_achieved_year = progression
            .iter()
            .find(|entry| entry.nsqf_level >= target_level)
            .map(|entry| entry.year);

        let total_growth = match (progression.first(), progression.last()) {
            (Some(first), Some(last)) if first.salary > 0.0 => {
                round1((last.salary - first.salary) / first.salary * 100.0)
            }
            _ => 0.0,
        };

        Progression {
            progression,
            target_achieved_year,
            total_growth,
            annual_avg_growth: round1(growth * 100.0),
        }
    }
}

/// Level after `year` years: one step every two years, never past the target
fn level_at(current: u8, target: u8, year: u32) -> u8 {
    let steps = u8::try_from(year / 2).unwrap_or(u8::MAX);
    current.saturating_add(steps).min(target)
}
