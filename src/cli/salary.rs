//! Salary command implementations

use anyhow::Result;
use tracing::debug;

use careerpath::config::Config;
use careerpath::salary::{Insights, Progression, SalaryPrediction, BEGINNER};
use careerpath::store::StoreError;

use super::{open_store, print_json};
use crate::ProfileArgs;

/// Education assumed when neither the flags nor the stored profile give one
const DEFAULT_EDUCATION: &str = "Bachelor's";

/// Resolved salary inputs
struct Profile {
    education: String,
    experience: String,
    interests: Vec<String>,
}

/// Merge explicit flags over the stored profile of `--user`
fn resolve_profile(config: &Config, args: &ProfileArgs) -> Result<Profile> {
    let stored = match &args.user {
        Some(user) => {
            let record = open_store(config)
                .load(user)?
                .ok_or_else(|| StoreError::NotFound(user.clone()))?;
            Some(record.snapshot.profile)
        }
        None => None,
    };

    let pick = |flag: &Option<String>, saved: Option<&String>, default: &str| {
        flag.clone()
            .or_else(|| saved.filter(|s| !s.is_empty()).cloned())
            .unwrap_or_else(|| {
                debug!("Using default profile value {:?}", default);
                default.to_string()
            })
    };

    let interests = if !args.interests.is_empty() {
        args.interests.clone()
    } else {
        stored
            .as_ref()
            .map(|p| p.interests.clone())
            .unwrap_or_default()
    };

    Ok(Profile {
        education: pick(
            &args.education,
            stored.as_ref().map(|p| &p.education),
            DEFAULT_EDUCATION,
        ),
        experience: pick(
            &args.experience,
            stored.as_ref().map(|p| &p.experience),
            BEGINNER,
        ),
        interests,
    })
}

pub fn predict_command(
    config: &Config,
    args: &ProfileArgs,
    location: &str,
    company_size: &str,
) -> Result<()> {
    let profile = resolve_profile(config, args)?;
    let predictor = config.salary_predictor()?;
    let prediction = predictor.predict_current_salary_at(
        &profile.education,
        &profile.experience,
        &profile.interests,
        location,
        company_size,
    );

    if args.json {
        return print_json(&prediction);
    }

    print_prediction(&prediction);
    Ok(())
}

pub fn progression_command(
    config: &Config,
    args: &ProfileArgs,
    target_role: &str,
    years: u32,
) -> Result<()> {
    let profile = resolve_profile(config, args)?;
    let predictor = config.salary_predictor()?;
    let progression = predictor.predict_career_progression(
        &profile.education,
        &profile.experience,
        target_role,
        years,
    );

    if args.json {
        return print_json(&progression);
    }

    print_progression(&progression);
    Ok(())
}

pub fn insights_command(config: &Config, args: &ProfileArgs) -> Result<()> {
    let profile = resolve_profile(config, args)?;
    let predictor = config.salary_predictor()?;
    let insights =
        predictor.get_salary_insights(&profile.education, &profile.experience, &profile.interests);

    if args.json {
        return print_json(&insights);
    }

    print_insights(&insights);
    Ok(())
}

pub fn dashboard_command(config: &Config, args: &ProfileArgs) -> Result<()> {
    let profile = resolve_profile(config, args)?;
    let predictor = config.salary_predictor()?;
    let dashboard = predictor.dashboard(
        &profile.education,
        &profile.experience,
        &profile.interests,
        chrono::Utc::now(),
    );

    if args.json {
        return print_json(&dashboard);
    }

    print_insights(&dashboard.insights);
    println!();
    print_progression(&dashboard.progression);

    println!("\nRole estimates:");
    for role in &dashboard.role_predictions {
        println!(
            "  {:<32} NSQF {}  ₹{:.1} LPA",
            role.role, role.nsqf_level, role.salary
        );
    }

    println!("\nLast updated: {}", dashboard.last_updated);
    Ok(())
}

fn print_prediction(prediction: &SalaryPrediction) {
    let range = &prediction.salary_range;
    let factors = &prediction.factors;

    println!(
        "Predicted salary: ₹{:.1} LPA (range ₹{:.1}-{:.1} LPA)",
        prediction.predicted_salary, range.min, range.max
    );
    println!(
        "NSQF level {}  confidence {:.0}%",
        prediction.nsqf_level,
        prediction.confidence * 100.0
    );
    println!("  Base salary:     ₹{:.1} LPA", factors.base_salary);
    println!("  Experience:      x{}", factors.experience_factor);
    println!("  Skill bonus:     +{:.1}%", factors.skill_bonus);
    println!("  Location:        x{}", factors.location_factor);
    println!("  Company size:    x{}", factors.company_factor);
    println!("  Market:          x{}", factors.market_factor);
}

fn print_progression(progression: &Progression) {
    println!("Year  Salary (LPA)  NSQF  Experience");
    for year in &progression.progression {
        println!(
            "{:>4}  {:>12.1}  {:>4}  {}",
            year.year, year.salary, year.nsqf_level, year.experience_level
        );
    }
    println!(
        "Total growth: {:.1}% ({:.1}% per year)",
        progression.total_growth, progression.annual_avg_growth
    );
    match progression.target_achieved_year {
        Some(year) => println!("Target level reached in year {}", year),
        None => println!("Target level not reached within the projection"),
    }
}

fn print_insights(insights: &Insights) {
    print_prediction(&insights.current_prediction);

    let market = &insights.market_comparison;
    println!(
        "\nMarket average ₹{:.1} LPA, difference {:+.1}, percentile {}",
        market.market_average, market.difference, market.percentile
    );

    if !insights.skill_impact.is_empty() {
        println!("\nSkill impact:");
        for impact in &insights.skill_impact {
            println!(
                "  {:<28} +{:.1}% (₹{:.1} LPA)",
                impact.skill, impact.impact_percentage, impact.potential_increase
            );
        }
    }

    println!("\nRoles at this level: {}", insights.current_level_roles.join(", "));

    if let Some(next) = &insights.next_level_opportunity {
        println!(
            "Next level {}: avg ₹{:.1} LPA ({:+.1}), e.g. {}",
            next.level,
            next.avg_salary,
            next.potential_increase,
            next.roles.join(", ")
        );
    }

    if !insights.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &insights.recommendations {
            println!("  - {}", recommendation);
        }
    }
}
