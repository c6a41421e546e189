//! Sous CLI application
//!
//! Command-line front end for the sous guided cooking mode: manage the
//! local recipe store and cook a recipe step by step.

mod args;
mod cli;
mod cooking;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use sous_core::KitchenBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let kitchen = KitchenBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize recipe store")?;

    let cli = Cli::new(kitchen, TerminalRenderer::new(!no_color));

    info!("Sous started");

    match command {
        Some(Recipe { command }) => cli.handle_recipe_command(command).await,
        Some(Cook(args)) => cli.cook(&args).await,
        None => cli.list_recipes().await,
    }
}
