use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CookArgs, RecipeCommands};

/// Guided cooking mode for your recipes
///
/// Sous keeps recipes in a local store and walks you through them one step at
/// a time, with a countdown for every timed step.
#[derive(Parser)]
#[command(version, about, name = "sous")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sous/sous.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the sous CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage stored recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Cook a recipe step by step
    #[command(alias = "c")]
    Cook(CookArgs),
}
