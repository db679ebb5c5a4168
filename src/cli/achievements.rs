//! Achievements command implementation

use anyhow::{Context, Result};
use std::path::PathBuf;

use careerpath::achievements::{AchievementEngine, AchievementUpdate};
use careerpath::config::Config;
use careerpath::store::{StoreError, UserRecord};

use super::{open_store, print_json};

/// Evaluate a stored user or a snapshot file and print the result
pub fn achievements_command(
    config: &Config,
    user: Option<String>,
    snapshot: Option<PathBuf>,
    save: bool,
    json: bool,
) -> Result<()> {
    let engine = config.achievement_engine()?;

    let update = match (user, snapshot) {
        (Some(user), _) if save => open_store(config)
            .update_achievements(&engine, &user)
            .with_context(|| format!("Failed to update achievements for {}", user))?,
        (Some(user), _) => {
            let mut record = open_store(config)
                .load(&user)?
                .ok_or(StoreError::NotFound(user))?;
            engine.update(&record.snapshot, &mut record.unlocked)
        }
        (None, Some(path)) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
            let mut record: UserRecord = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
            engine.update(&record.snapshot, &mut record.unlocked)
        }
        (None, None) => anyhow::bail!("Either --user or --snapshot is required"),
    };

    if json {
        return print_json(&update);
    }

    print_update(&engine, &update);
    Ok(())
}

fn print_update(engine: &AchievementEngine, update: &AchievementUpdate) {
    if update.has_news() {
        println!("Newly unlocked:\n");
        for id in &update.new_achievements {
            if let Some(achievement) = engine.achievements().get(*id) {
                println!(
                    "  {} (+{}) - {}",
                    achievement.display_name(),
                    achievement.points,
                    achievement.description
                );
            }
        }
        for id in &update.new_milestones {
            if let Some(milestone) = engine.milestones().get(*id) {
                println!(
                    "  {} {} (+{}) - {}",
                    milestone.icon, milestone.name, milestone.rewards.points, milestone.description
                );
            }
        }
        println!();
    } else {
        println!("No new achievements.\n");
    }

    let display = &update.display;
    println!(
        "Level {} - {} points ({:.0}% to next level)",
        display.level, display.total_points, display.level_progress
    );
    println!(
        "Achievements: {}/{}  Milestones: {}",
        display.total_achievements,
        engine.achievements().total_count(),
        display.total_milestones
    );

    for bucket in &display.categorized_achievements {
        let names: Vec<&str> = bucket.achievements.iter().map(|a| a.name.as_str()).collect();
        println!("  {}: {}", bucket.category.label(), names.join(", "));
    }

    if !display.recent_milestones.is_empty() {
        println!("\nRecent milestones:");
        for milestone in &display.recent_milestones {
            println!("  {} (+{})", milestone.name, milestone.points);
        }
    }

    if !display.next_achievements.is_empty() {
        println!("\nNext up:");
        for next in &display.next_achievements {
            println!("  {:<24} {:>5.1}%  {}", next.name, next.progress, next.description);
        }
    }
}
