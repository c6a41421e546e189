//! Command definitions and handlers.
//!
//! Argument structs carry the clap derives; the [`Cli`] handler turns them
//! into calls on the core [`Kitchen`] and renders the markdown results.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::info;
use sous_core::{
    CookingModeBuilder, CreateResult, DeleteResult, Kitchen, LoadState, OperationStatus,
};

use crate::{
    cooking::{self, TerminalHaptics},
    renderer::TerminalRenderer,
};

/// Import a recipe from a JSON file
///
/// The file holds a title, an optional description and a list of steps, each
/// with a 1-based `order`, a `description` and an optional `duration_sec`.
#[derive(Args)]
pub struct AddRecipeArgs {
    #[arg(help = "Path to the recipe JSON file")]
    pub file: PathBuf,
}

/// Identify a stored recipe
#[derive(Args)]
pub struct RecipeIdArgs {
    #[arg(help = "Unique identifier of the recipe")]
    pub id: u64,
}

/// Show a recipe with all of its steps
#[derive(Args)]
pub struct ShowRecipeArgs {
    #[arg(help = "Unique identifier of the recipe")]
    pub id: u64,

    /// Print the stored recipe as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Import a recipe from a JSON file
    #[command(alias = "a")]
    Add(AddRecipeArgs),
    /// List stored recipes
    #[command(alias = "l")]
    List,
    /// Show a recipe with its steps
    #[command(alias = "s")]
    Show(ShowRecipeArgs),
    /// Delete a recipe
    #[command(alias = "d")]
    Delete(RecipeIdArgs),
}

/// Walk through a recipe with step navigation and timers
///
/// Reads commands from standard input, one per line: n(ext), p(rev),
/// t(imer), r(eset), s(tatus), f(inish), q(uit), wait <seconds>, h(elp).
#[derive(Args)]
pub struct CookArgs {
    #[arg(help = "Unique identifier of the recipe to cook")]
    pub id: u64,

    /// Length of one countdown second in milliseconds
    #[arg(long, default_value_t = 1000, hide = true)]
    pub tick_ms: u64,
}

/// Handler for all CLI commands.
pub struct Cli {
    kitchen: Kitchen,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(kitchen: Kitchen, renderer: TerminalRenderer) -> Self {
        Self { kitchen, renderer }
    }

    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::Add(args) => self.add_recipe(&args).await,
            RecipeCommands::List => self.list_recipes().await,
            RecipeCommands::Show(args) => self.show_recipe(&args).await,
            RecipeCommands::Delete(args) => self.delete_recipe(args.id).await,
        }
    }

    async fn add_recipe(&self, args: &AddRecipeArgs) -> Result<()> {
        let json = tokio::fs::read_to_string(&args.file)
            .await
            .with_context(|| format!("Failed to read {}", args.file.display()))?;

        let recipe = self
            .kitchen
            .import_recipe_json(&json)
            .await
            .context("Failed to import recipe")?;

        self.renderer.render(&CreateResult::new(recipe).to_string())
    }

    pub async fn list_recipes(&self) -> Result<()> {
        let recipes = self
            .kitchen
            .list_recipes()
            .await
            .context("Failed to list recipes")?;

        self.renderer.render(&recipes.to_string())
    }

    async fn show_recipe(&self, args: &ShowRecipeArgs) -> Result<()> {
        let id = args.id;
        let recipe = self
            .kitchen
            .get_recipe(id)
            .await
            .context("Failed to load recipe")?;

        match recipe {
            Some(recipe) if args.json => {
                let json = serde_json::to_string_pretty(&recipe)
                    .context("Failed to serialize recipe")?;
                println!("{json}");
                Ok(())
            }
            Some(recipe) => self.renderer.render(&recipe.to_string()),
            None => self
                .renderer
                .render(&OperationStatus::recipe_not_found(id).to_string()),
        }
    }

    async fn delete_recipe(&self, id: u64) -> Result<()> {
        let recipe = self
            .kitchen
            .get_recipe(id)
            .await
            .context("Failed to load recipe")?
            .with_context(|| format!("Recipe {id} not found"))?;

        self.kitchen
            .delete_recipe(id)
            .await
            .context("Failed to delete recipe")?;

        self.renderer.render(&DeleteResult::new(recipe).to_string())
    }

    pub async fn cook(&self, args: &CookArgs) -> Result<()> {
        let state = CookingModeBuilder::new()
            .with_tick_interval(Duration::from_millis(args.tick_ms))
            .with_haptics(TerminalHaptics::new(self.renderer.rich_enabled()))
            .load(&self.kitchen, args.id)
            .await;

        match state {
            LoadState::Ready(mut mode) => {
                info!("Cooking recipe {}", args.id);
                cooking::run(&mut mode, &self.renderer).await
            }
            // Not found and transient failures look the same here; the
            // difference has already been logged.
            LoadState::NotReady(_) => self
                .renderer
                .render(&OperationStatus::recipe_not_found(args.id).to_string()),
        }
    }
}
