// ABOUTME: Fridgechef CLI - fridge inventory, recipe search, and profile from the terminal
// ABOUTME: Renders store snapshots and reports failures as notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors
//!
//! Usage:
//! ```bash
//! # Show the session and inventory summary
//! fridgechef-cli --email ana@example.com --password secret status
//!
//! # Add two eggs to the fridge (product id or name)
//! fridgechef-cli fridge add Egg 2
//!
//! # Recipes ranked by how much of them the fridge covers
//! fridgechef-cli recipes list --by-coverage
//!
//! # Recipe detail with per-ingredient coverage
//! fridgechef-cli recipes show r-42
//!
//! # Record measurements and show the BMI
//! fridgechef-cli profile update --weight 70 --height 175
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fridgechef::config::ClientConfig;
use fridgechef::constants::env_config;
use fridgechef::constants::search::QUICK_ADD_LIMIT;
use fridgechef::errors::AppError;
use fridgechef::logging::LoggingConfig;
use fridgechef::models::RecipeFilters;
use fridgechef::notifications::Notification;
use std::process;
use tracing::info;

use commands::Session;

#[derive(Parser)]
#[command(
    name = "fridgechef-cli",
    about = "Fridgechef command-line client",
    long_about = "Manage your fridge inventory, find recipes you can cook, and track your BMI."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Account email; logs in before running the command
    #[arg(long, global = true, env = env_config::EMAIL)]
    email: Option<String>,

    /// Account password
    #[arg(long, global = true, env = env_config::PASSWORD, hide_env_values = true)]
    password: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the session user and inventory size
    Status,

    /// Inventory commands
    Fridge {
        #[command(subcommand)]
        action: FridgeCommand,
    },

    /// Recipe commands
    Recipes {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FridgeCommand {
    /// List the products in the fridge
    List,

    /// Add a product by id or name
    Add {
        /// Product id or name
        product: String,

        /// Quantity in the product's unit
        quantity: f64,

        /// Replace the held quantity if the product is already in the fridge
        #[arg(long)]
        replace: bool,
    },

    /// Remove a product by id or name
    Remove {
        /// Product id or name
        product: String,
    },

    /// Suggest catalog products that are not in the fridge yet
    Suggest {
        /// Only products whose name matches this text
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Number of suggestions
        #[arg(long, default_value_t = QUICK_ADD_LIMIT)]
        limit: usize,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// List every recipe
    List {
        /// Order by fridge coverage instead of backend order
        #[arg(long)]
        by_coverage: bool,

        /// Only recipes the fridge fully covers
        #[arg(long, conflicts_with = "partial")]
        ready: bool,

        /// Only recipes the fridge at least partly covers
        #[arg(long)]
        partial: bool,
    },

    /// Search recipes on the backend
    Search {
        /// Name substring
        #[arg(long)]
        name: Option<String>,

        /// Category label ("All" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Food type
        #[arg(long)]
        food_type: Option<String>,

        /// Difficulty level (1 easy, 2 intermediate, 3 hard)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        difficulty: Option<u8>,
    },

    /// Show a recipe with its ingredient coverage
    Show {
        /// Recipe id
        recipe_id: String,
    },

    /// List recommended recipes
    Recommend,

    /// List recipe categories
    Categories,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Record weight and height
    Update {
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,
    },

    /// Compute the BMI locally, from the arguments or the stored profile
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        match error.downcast_ref::<AppError>() {
            Some(app_error) => eprintln!("{}", Notification::from_error(app_error)),
            None => eprintln!("Error: {error:#}"),
        }
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = ClientConfig::from_env()?;
    info!("Fridgechef CLI against {}", config.api_url);

    let session = Session::connect(&config)?;
    let credentials = cli.email.zip(cli.password);
    session.start(credentials).await?;

    match cli.command {
        Command::Status => commands::status(&session).await,
        Command::Fridge { action } => match action {
            FridgeCommand::List => commands::fridge::list(&session).await,
            FridgeCommand::Add {
                product,
                quantity,
                replace,
            } => commands::fridge::add(&session, &product, quantity, replace).await?,
            FridgeCommand::Remove { product } => {
                commands::fridge::remove(&session, &product).await?;
            }
            FridgeCommand::Suggest { query, limit } => {
                commands::fridge::suggest(&session, query.as_deref(), limit).await?;
            }
        },
        Command::Recipes { action } => match action {
            RecipeCommand::List {
                by_coverage,
                ready,
                partial,
            } => commands::recipes::list(&session, by_coverage, ready, partial).await?,
            RecipeCommand::Search {
                name,
                category,
                food_type,
                difficulty,
            } => {
                let filters = RecipeFilters {
                    name,
                    food_type,
                    category,
                    difficulty,
                };
                commands::recipes::search(&session, filters).await?;
            }
            RecipeCommand::Show { recipe_id } => {
                commands::recipes::show(&session, &recipe_id).await?;
            }
            RecipeCommand::Recommend => commands::recipes::recommend(&session).await?,
            RecipeCommand::Categories => commands::recipes::categories(&session).await?,
        },
        Command::Profile { action } => match action {
            ProfileCommand::Update { weight, height } => {
                commands::profile::update(&session, weight, height).await?;
            }
            ProfileCommand::Bmi { weight, height } => {
                commands::profile::bmi(&session, weight, height).await;
            }
        },
    }

    Ok(())
}
