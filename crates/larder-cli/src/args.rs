use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, RandomArgs, RecipeCommands, SearchArgs};

/// Main command-line interface for the Larder recipe tool
///
/// Larder keeps a local book of recipes fetched from TheMealDB and a weekly
/// meal planner that assigns saved recipes to day/meal slots. Search results
/// can be saved, edited, planned, and removed entirely offline once fetched.
#[derive(Parser)]
#[command(version, about, name = "larder")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/larder/larder.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Larder CLI
///
/// The CLI mirrors the four surfaces of the app:
/// - `search`/`random`: look up recipes on the remote API
/// - `recipe`: manage the saved recipe book
/// - `plan`: manage the weekly meal planner
#[derive(Subcommand)]
pub enum Commands {
    /// Search the remote recipe API by name
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Fetch a random recipe suggestion
    Random(RandomArgs),
    /// Manage saved recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Manage the weekly meal plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
