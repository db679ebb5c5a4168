//! Integration tests for salary prediction

use careerpath::config::Config;
use careerpath::salary::{
    nsqf, Recommendation, SalaryPredictor, ADVANCED, BEGINNER, INTERMEDIATE,
};

const EDUCATIONS: &[&str] = &["High School", "Diploma", "Bachelor's", "Master's", "PhD", "Unlisted"];
const EXPERIENCES: &[&str] = &[BEGINNER, INTERMEDIATE, ADVANCED, "Unlisted"];
const LOCATIONS: &[&str] = &[
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Other Metro",
    "Tier 2 Cities",
    "Atlantis",
];
const COMPANY_SIZES: &[&str] = &[
    "Startup (1-50)",
    "Small (51-200)",
    "Medium (201-1000)",
    "Large (1001-5000)",
    "Enterprise (5000+)",
    "Unlisted",
];

fn interests(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_bachelor_beginner_defaults() {
    let predictor = SalaryPredictor::new();
    let prediction = predictor.predict_current_salary("Bachelor's", BEGINNER, &[]);

    assert_eq!(prediction.predicted_salary, 6.1);
    assert_eq!(prediction.nsqf_level, 6);
    assert_eq!(prediction.salary_range.min, 4.9);
    assert_eq!(prediction.salary_range.max, 8.0);
    assert!((prediction.confidence - 0.8).abs() < 1e-9);
}

#[test]
fn test_interest_adds_skill_bonus() {
    let predictor = SalaryPredictor::new();
    let prediction =
        predictor.predict_current_salary("Bachelor's", BEGINNER, &interests(&["Machine Learning"]));

    // 7.5 * 0.85 * 1.15 * 1.2 * 0.8
    assert_eq!(prediction.predicted_salary, 7.0);
    assert_eq!(prediction.factors.skill_bonus, 15.0);
    assert_eq!(prediction.salary_range.min, 5.6);
    assert_eq!(prediction.salary_range.max, 9.1);
}

#[test]
fn test_prediction_is_deterministic() {
    let predictor = SalaryPredictor::new();
    let interests = interests(&["Deep Learning", "MLOps"]);

    let first = predictor.predict_current_salary_at("Master's", ADVANCED, &interests, "Pune", "Large (1001-5000)");
    let second = predictor.predict_current_salary_at("Master's", ADVANCED, &interests, "Pune", "Large (1001-5000)");
    assert_eq!(first, second);
}

#[test]
fn test_range_brackets_prediction_for_all_inputs() {
    let predictor = SalaryPredictor::new();
    let interests = interests(&["Data Science"]);

    for education in EDUCATIONS {
        for experience in EXPERIENCES {
            for location in LOCATIONS {
                for company in COMPANY_SIZES {
                    let p = predictor.predict_current_salary_at(
                        education, experience, &interests, location, company,
                    );
                    assert!(
                        p.salary_range.min < p.predicted_salary
                            && p.predicted_salary < p.salary_range.max,
                        "{} / {} / {} / {}: {:?}",
                        education,
                        experience,
                        location,
                        company,
                        p.salary_range
                    );
                    assert!((0.7..=0.95).contains(&p.confidence));
                }
            }
        }
    }
}

#[test]
fn test_skill_bonus_is_capped() {
    let predictor = SalaryPredictor::new();
    let all = interests(&[
        "Machine Learning",
        "Deep Learning",
        "Natural Language Processing",
        "Computer Vision",
        "Data Science",
        "Robotics",
        "AI Ethics",
        "MLOps",
    ]);

    let prediction = predictor.predict_current_salary("Bachelor's", INTERMEDIATE, &all);
    assert_eq!(prediction.factors.skill_bonus, 50.0);
    assert_eq!(prediction.confidence, 0.95);
}

#[test]
fn test_unknown_inputs_fall_back_to_neutral_factors() {
    let predictor = SalaryPredictor::new();
    let prediction =
        predictor.predict_current_salary_at("Unlisted", "Unlisted", &[], "Atlantis", "Unlisted");

    assert_eq!(prediction.nsqf_level, nsqf::DEFAULT_NSQF_LEVEL);
    assert_eq!(prediction.factors.experience_factor, 1.0);
    assert_eq!(prediction.factors.location_factor, 1.0);
    assert_eq!(prediction.factors.company_factor, 1.0);
    assert_eq!(prediction.factors.market_factor, 1.0);
    assert_eq!(prediction.factors.skill_bonus, 0.0);
}

#[test]
fn test_configured_factors_change_prediction() {
    let config: Config = toml::from_str(
        r#"
        [salary.location_multipliers]
        "Bangalore" = 1.0
        "#,
    )
    .unwrap();
    let configured = config.salary_predictor().unwrap();
    let builtin = SalaryPredictor::new();
    let interests = interests(&["Machine Learning"]);

    let lower = configured.predict_current_salary("Bachelor's", BEGINNER, &interests);
    let default = builtin.predict_current_salary("Bachelor's", BEGINNER, &interests);

    assert_eq!(lower.factors.location_factor, 1.0);
    assert!(lower.predicted_salary < default.predicted_salary);
    // Other locations keep their defaults
    assert_eq!(configured.factors().location_multipliers.get("Mumbai"), Some(1.15));
}

#[test]
fn test_invalid_multiplier_is_rejected() {
    let config: Config = toml::from_str(
        r#"
        [salary.company_size_multipliers]
        "Startup (1-50)" = 0.0
        "#,
    )
    .unwrap();
    assert!(config.salary_predictor().is_err());
}

#[test]
fn test_negative_skill_bonus_is_rejected() {
    let config: Config = toml::from_str(
        r#"
        [salary.skill_bonuses]
        "Deep Learning" = -2.0
        "#,
    )
    .unwrap();
    assert!(config.salary_predictor().is_err());
}

#[test]
fn test_configured_bonuses_keep_prediction_positive() {
    let config: Config = toml::from_str(
        r#"
        [salary.skill_bonuses]
        "Deep Learning" = 0.0
        "Robotics" = 3.0
        "#,
    )
    .unwrap();
    let predictor = config.salary_predictor().unwrap();

    for list in [&["Deep Learning"][..], &["Robotics"], &["Deep Learning", "Robotics"]] {
        let p = predictor.predict_current_salary("Bachelor's", BEGINNER, &interests(list));
        assert!(p.predicted_salary > 0.0);
        assert!(p.salary_range.min < p.predicted_salary && p.predicted_salary < p.salary_range.max);
        assert!(p.factors.skill_bonus <= 50.0);
    }
}

#[test]
fn test_progression_towards_higher_role() {
    let predictor = SalaryPredictor::new();
    let result = predictor.predict_career_progression("Diploma", BEGINNER, "Senior Data Scientist", 5);

    let levels: Vec<u8> = result.progression.iter().map(|y| y.nsqf_level).collect();
    assert_eq!(levels, vec![5, 5, 6, 6, 7, 7]);
    assert_eq!(result.target_achieved_year, Some(4));

    let salaries: Vec<f64> = result.progression.iter().map(|y| y.salary).collect();
    assert!(salaries.windows(2).all(|w| w[0] < w[1]));
    assert!(result.total_growth > 0.0);
    assert_eq!(result.final_year().map(|y| y.year), Some(5));
}

#[test]
fn test_progression_with_zero_years() {
    let predictor = SalaryPredictor::new();
    let result = predictor.predict_career_progression("Bachelor's", BEGINNER, "AI Consultant", 0);

    assert_eq!(result.progression.len(), 1);
    assert_eq!(result.target_achieved_year, None);
    assert_eq!(result.total_growth, 0.0);
}

#[test]
fn test_insights_for_beginner() {
    let predictor = SalaryPredictor::new();
    let insights =
        predictor.get_salary_insights("Bachelor's", BEGINNER, &interests(&["Machine Learning"]));

    assert_eq!(insights.market_comparison.your_prediction, 7.0);
    assert_eq!(insights.market_comparison.market_average, 7.5);
    assert!((25..=90).contains(&insights.market_comparison.percentile));
    assert_eq!(insights.skill_impact.len(), 1);
    assert_eq!(insights.skill_impact[0].skill, "Machine Learning");
    assert_eq!(insights.skill_impact[0].impact_percentage, 15.0);

    let next = insights.next_level_opportunity.as_ref().unwrap();
    assert_eq!(next.level, 7);
    assert!(next.roles.len() <= 3);

    assert!(insights.recommendations.len() <= 4);
    assert!(insights.recommendations.contains(&Recommendation::GainExperience));
}

#[test]
fn test_phd_has_no_next_level() {
    let predictor = SalaryPredictor::new();
    let insights = predictor.get_salary_insights("PhD", ADVANCED, &[]);
    assert!(insights.next_level_opportunity.is_none());
}
