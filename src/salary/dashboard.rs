//! Combined salary view for a dashboard

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::factors::MarketTrends;
use super::insights::Insights;
use super::nsqf;
use super::predictor::{round1, SalaryPredictor};
use super::progression::{Progression, DEFAULT_YEARS_AHEAD};

/// Levels above the current one covered by role predictions
const ROLE_LEVEL_SPAN: u8 = 3;
/// Roles taken from each level
const ROLES_PER_LEVEL: usize = 2;
/// Salary uplift per level above the current one
const ROLE_LEVEL_UPLIFT: f64 = 0.15;

/// Salary estimate for a specific role
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolePrediction {
    pub role: &'static str,
    pub salary: f64,
    pub nsqf_level: u8,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryDashboard {
    pub insights: Insights,
    pub progression: Progression,
    pub role_predictions: Vec<RolePrediction>,
    pub market_data: MarketTrends,
    /// "%Y-%m-%d %H:%M"
    pub last_updated: String,
}

impl SalaryPredictor {
    /// Insights, a five-year projection and role estimates in one value
    pub fn dashboard(
        &self,
        education: &str,
        experience: &str,
        interests: &[String],
        now: DateTime<Utc>,
    ) -> SalaryDashboard {
        let insights = self.get_salary_insights(education, experience, interests);
        let progression =
            self.predict_career_progression(education, experience, "", DEFAULT_YEARS_AHEAD);

        let current = nsqf::level_for_education(education);
        let prediction = &insights.current_prediction;
        let end = current.saturating_add(ROLE_LEVEL_SPAN).min(nsqf::MAX_NSQF_LEVEL + 1);

        let role_predictions = (current..end)
            .filter_map(nsqf::get_level)
            .flat_map(|level| {
                let multiplier = 1.0 + f64::from(level.level - current) * ROLE_LEVEL_UPLIFT;
                level
                    .job_roles
                    .iter()
                    .take(ROLES_PER_LEVEL)
                    .copied()
                    .map(move |role| RolePrediction {
                        role,
                        salary: round1(prediction.predicted_salary * multiplier),
                        nsqf_level: level.level,
                        confidence: prediction.confidence,
                    })
            })
            .collect();

        SalaryDashboard {
            role_predictions,
            market_data: self.factors().market_trends(),
            last_updated: now.format("%Y-%m-%d %H:%M").to_string(),
            insights,
            progression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::salary::factors::BEGINNER;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()
    }

    #[test]
    fn test_role_predictions_span_three_levels() {
        let predictor = SalaryPredictor::new();
        let dashboard = predictor.dashboard("Diploma", BEGINNER, &[], fixed_now());

        let levels: Vec<u8> = dashboard.role_predictions.iter().map(|r| r.nsqf_level).collect();
        assert_eq!(levels, vec![5, 5, 6, 6, 7, 7]);
        assert_eq!(dashboard.role_predictions[0].role, "Data Analyst");

        let base = dashboard.insights.current_prediction.predicted_salary;
        assert_eq!(dashboard.role_predictions[0].salary, round1(base));
        assert_eq!(dashboard.role_predictions[4].salary, round1(base * 1.3));
    }

    #[test]
    fn test_role_predictions_stop_at_table_end() {
        let predictor = SalaryPredictor::new();
        let dashboard = predictor.dashboard("PhD", BEGINNER, &[], fixed_now());
        assert_eq!(dashboard.role_predictions.len(), 2);
        assert!(dashboard.role_predictions.iter().all(|r| r.nsqf_level == 8));
    }

    #[test]
    fn test_dashboard_metadata() {
        let predictor = SalaryPredictor::new();
        let dashboard = predictor.dashboard("Bachelor's", BEGINNER, &[], fixed_now());
        assert_eq!(dashboard.last_updated, "2024-03-09 14:05");
        assert_eq!(dashboard.progression.progression.len(), 6);
        assert_eq!(dashboard.market_data.annual_growth_rate, 0.18);
        assert_eq!(dashboard.market_data.demand_trends.get("MLOps"), Some(1.5));
    }
}
