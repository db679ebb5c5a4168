//! Salary prediction over the NSQF framework
//!
//! Point estimates, multi-year projections, insights and a combined
//! dashboard view. No I/O; lookup misses degrade to neutral defaults.

mod dashboard;
mod factors;
mod insights;
pub mod nsqf;
mod predictor;
mod progression;

pub use dashboard::{RolePrediction, SalaryDashboard};
pub use factors::{
    FactorMap, MarketTrends, SalaryFactorTable, ADVANCED, BEGINNER, DEFAULT_COMPANY_SIZE,
    DEFAULT_LOCATION, INTERMEDIATE, MAX_SKILL_BONUS,
};
pub use insights::{
    Insights, MarketComparison, NextLevelOpportunity, Recommendation, SkillImpact,
    MAX_RECOMMENDATIONS,
};
pub use predictor::{
    parse_salary_range, LevelSalary, SalaryFactors, SalaryPrediction, SalaryPredictor, SalaryRange,
};
pub use progression::{Progression, ProgressionYear, DEFAULT_YEARS_AHEAD};
