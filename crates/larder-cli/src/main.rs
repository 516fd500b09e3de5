//! Larder CLI Application
//!
//! Command-line interface for the larder recipe book and weekly meal planner.

mod args;
mod cli;
mod remote;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use larder_core::LarderBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let larder = LarderBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize larder")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Larder started");

    match command {
        Some(Search(args)) => Cli::new(larder, renderer).search(args).await,
        Some(Random(args)) => Cli::new(larder, renderer).random(args).await,
        Some(Recipe { command }) => {
            Cli::new(larder, renderer)
                .handle_recipe_command(command)
                .await
        }
        Some(Plan { command }) => {
            Cli::new(larder, renderer)
                .handle_plan_command(command)
                .await
        }
        None => Cli::new(larder, renderer).list_recipes().await,
    }
}
