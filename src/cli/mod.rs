//! CLI command implementations

pub mod achievements;
pub mod init;
pub mod nsqf;
pub mod salary;
pub mod users;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use careerpath::config::Config;
use careerpath::store::DataStore;

/// Load the config given with `--config`, or the global one
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load_from(path)
}

pub fn open_store(config: &Config) -> DataStore {
    DataStore::new(config.data_dir())
}

/// Pretty-print any serializable result to stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
