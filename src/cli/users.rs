//! User management command implementations

use anyhow::{Context, Result};
use std::path::Path;

use careerpath::config::Config;
use careerpath::store::StoreError;
use careerpath::Profile;

use super::{open_store, print_json};

/// List stored users
pub fn list_command(config: &Config) -> Result<()> {
    let store = open_store(config);
    let users = store.list_users()?;

    if users.is_empty() {
        println!("No users found in {}.", store.data_dir().display());
        return Ok(());
    }

    println!("Users ({}):\n", users.len());
    for user in users {
        match store.load(&user) {
            Ok(Some(record)) => {
                let profile = &record.snapshot.profile;
                println!(
                    "  {} - {} ({} completed, {} achievements)",
                    user,
                    if profile.name.is_empty() { "-" } else { profile.name.as_str() },
                    record.snapshot.progress.completed,
                    record.unlocked.achievements.len()
                );
            }
            Ok(None) => {}
            Err(e) => println!("  {} - unreadable: {}", user, e),
        }
    }

    Ok(())
}

/// Create a user from a name and optional profile fields
pub fn create_command(
    config: &Config,
    name: String,
    education: Option<String>,
    experience: Option<String>,
    interests: Vec<String>,
) -> Result<()> {
    let profile = Profile {
        name,
        education: education.unwrap_or_default(),
        experience: experience.unwrap_or_default(),
        interests,
    };

    let (user_id, record) = open_store(config).create_user(profile, chrono::Utc::now())?;
    println!("Created user: {}", user_id);
    if !record.snapshot.profile.is_complete() {
        println!("Profile is incomplete; fill it in to unlock profile_complete.");
    }
    Ok(())
}

/// Print a user's stored record as JSON
pub fn show_command(config: &Config, user: &str) -> Result<()> {
    let record = open_store(config)
        .load(user)?
        .ok_or_else(|| StoreError::NotFound(user.to_string()))?;
    print_json(&record)
}

pub fn delete_command(config: &Config, user: &str) -> Result<()> {
    if open_store(config).delete(user)? {
        println!("Deleted: {}", user);
    } else {
        println!("No stored data for {}.", user);
    }
    Ok(())
}

pub fn export_command(config: &Config, user: &str, out: Option<&Path>) -> Result<()> {
    let data = open_store(config)
        .export(user)?
        .ok_or_else(|| StoreError::NotFound(user.to_string()))?;

    match out {
        Some(path) => {
            let content = serde_json::to_string_pretty(&data)?;
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            println!("Exported {} to {}", user, path.display());
            Ok(())
        }
        None => print_json(&data),
    }
}

pub fn import_command(config: &Config, user: &str, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read import file: {}", file.display()))?;
    let data: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse import file: {}", file.display()))?;

    let record = open_store(config).import(user, data)?;
    println!(
        "Imported {} ({} certifications, {} activities)",
        user,
        record.snapshot.certifications.len(),
        record.snapshot.activities.len()
    );
    Ok(())
}
