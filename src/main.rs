use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "careerpath")]
#[command(about = "CareerPath - achievements and salary outlook for AI learners")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.careerpath/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate achievements and milestones for a user
    Achievements {
        /// Stored user ID
        #[arg(long, required_unless_present = "snapshot", conflicts_with = "snapshot")]
        user: Option<String>,

        /// Snapshot JSON file to evaluate instead of a stored user
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Persist new unlocks to the user's file
        #[arg(long, requires = "user")]
        save: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Salary prediction and career projections
    Salary {
        #[command(subcommand)]
        command: SalaryCommands,
    },

    /// Manage stored users
    Users {
        #[command(subcommand)]
        command: Option<UserCommands>,
    },

    /// Browse the NSQF level framework
    Nsqf {
        #[command(subcommand)]
        command: NsqfCommands,
    },

    /// Initialize a new ~/.careerpath/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Profile inputs shared by the salary commands
#[derive(Args, Clone, Debug)]
pub struct ProfileArgs {
    /// Take missing profile fields from this stored user
    #[arg(long)]
    user: Option<String>,

    /// Education level, e.g. "Bachelor's"
    #[arg(long)]
    education: Option<String>,

    /// Experience tier, e.g. "Intermediate (2-4 years)"
    #[arg(long)]
    experience: Option<String>,

    /// Interest area (repeatable)
    #[arg(long = "interest")]
    interests: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum SalaryCommands {
    /// Predict the current salary
    Predict {
        #[command(flatten)]
        profile: ProfileArgs,

        /// City or region
        #[arg(long, default_value = careerpath::salary::DEFAULT_LOCATION)]
        location: String,

        /// Company size bracket
        #[arg(long, default_value = careerpath::salary::DEFAULT_COMPANY_SIZE)]
        company_size: String,
    },

    /// Project salary growth over the coming years
    Progression {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Role to grow towards
        #[arg(long, default_value = "")]
        target_role: String,

        /// Number of years to project
        #[arg(long, default_value_t = careerpath::salary::DEFAULT_YEARS_AHEAD)]
        years: u32,
    },

    /// Market comparison, skill impact and recommendations
    Insights {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Insights, projection and role estimates together
    Dashboard {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List stored users
    List,

    /// Create a user with an empty progress record
    Create {
        /// Display name; the user ID is derived from it
        name: String,

        #[arg(long)]
        education: Option<String>,

        #[arg(long)]
        experience: Option<String>,

        /// Area of interest (repeatable)
        #[arg(long = "interest")]
        interests: Vec<String>,
    },

    /// Show a user's stored progress
    Show { user: String },

    /// Delete a user's stored data
    Delete { user: String },

    /// Export a user's data with an export timestamp
    Export {
        user: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import previously exported data
    Import { user: String, file: PathBuf },
}

#[derive(Subcommand)]
enum NsqfCommands {
    /// List all levels with salary ranges and roles
    Levels,

    /// Levels between an education level and a target role
    Pathway {
        #[arg(long)]
        education: String,

        #[arg(long)]
        role: String,
    },

    /// Levels relevant to a topic
    Topic { topic: String },

    /// Every job role in the framework
    Roles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config;

    match cli.command {
        Commands::Achievements {
            user,
            snapshot,
            save,
            json,
        } => {
            let config = cli::load_config(config_path.as_deref())?;
            cli::achievements::achievements_command(&config, user, snapshot, save, json)?;
        }
        Commands::Salary { command } => {
            let config = cli::load_config(config_path.as_deref())?;
            match command {
                SalaryCommands::Predict {
                    profile,
                    location,
                    company_size,
                } => cli::salary::predict_command(&config, &profile, &location, &company_size)?,
                SalaryCommands::Progression {
                    profile,
                    target_role,
                    years,
                } => cli::salary::progression_command(&config, &profile, &target_role, years)?,
                SalaryCommands::Insights { profile } => {
                    cli::salary::insights_command(&config, &profile)?
                }
                SalaryCommands::Dashboard { profile } => {
                    cli::salary::dashboard_command(&config, &profile)?
                }
            }
        }
        Commands::Users { command } => {
            let config = cli::load_config(config_path.as_deref())?;
            match command.unwrap_or(UserCommands::List) {
                UserCommands::List => cli::users::list_command(&config)?,
                UserCommands::Create {
                    name,
                    education,
                    experience,
                    interests,
                } => cli::users::create_command(&config, name, education, experience, interests)?,
                UserCommands::Show { user } => cli::users::show_command(&config, &user)?,
                UserCommands::Delete { user } => cli::users::delete_command(&config, &user)?,
                UserCommands::Export { user, out } => {
                    cli::users::export_command(&config, &user, out.as_deref())?
                }
                UserCommands::Import { user, file } => {
                    cli::users::import_command(&config, &user, &file)?
                }
            }
        }
        Commands::Nsqf { command } => match command {
            NsqfCommands::Levels => cli::nsqf::levels_command(),
            NsqfCommands::Pathway { education, role } => {
                cli::nsqf::pathway_command(&education, &role)
            }
            NsqfCommands::Topic { topic } => cli::nsqf::topic_command(&topic),
            NsqfCommands::Roles => cli::nsqf::roles_command(),
        },
        Commands::Init { force } => {
            cli::init::init_command(config_path, force)?;
        }
    }

    Ok(())
}
