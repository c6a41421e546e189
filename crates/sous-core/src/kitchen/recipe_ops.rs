//! Recipe operations for the Kitchen.

use log::info;
use tokio::task;

use super::Kitchen;
use crate::{
    db::Database,
    display::RecipeSummaries,
    error::{Result, SousError},
    models::{NewRecipe, Recipe},
    provider::RecipeProvider,
};

impl Kitchen {
    /// Validates and stores a new recipe.
    pub async fn add_recipe(&self, recipe: &NewRecipe) -> Result<Recipe> {
        let db_path = self.db_path.clone();
        let recipe = recipe.clone();

        let created = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_recipe(&recipe)
        })
        .await
        .map_err(SousError::join_error)??;

        info!(
            "Added recipe {} '{}' with {} steps",
            created.id,
            created.title,
            created.steps.len()
        );
        Ok(created)
    }

    /// Imports a recipe from JSON text.
    pub async fn import_recipe_json(&self, json: &str) -> Result<Recipe> {
        let recipe: NewRecipe = serde_json::from_str(json)?;
        self.add_recipe(&recipe).await
    }

    /// Retrieves a single recipe by its ID.
    pub async fn get_recipe(&self, id: u64) -> Result<Option<Recipe>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_recipe(id)
        })
        .await
        .map_err(SousError::join_error)?
    }

    /// Lists stored recipes as summaries.
    pub async fn list_recipes(&self) -> Result<RecipeSummaries> {
        let db_path = self.db_path.clone();

        let summaries = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_recipes()
        })
        .await
        .map_err(SousError::join_error)??;

        Ok(RecipeSummaries(summaries))
    }

    /// Removes a recipe and its steps.
    pub async fn delete_recipe(&self, id: u64) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_recipe(id)
        })
        .await
        .map_err(SousError::join_error)??;

        info!("Deleted recipe {id}");
        Ok(())
    }
}

impl RecipeProvider for Kitchen {
    async fn fetch_recipe(&self, id: u64) -> Result<Recipe> {
        self.get_recipe(id)
            .await?
            .ok_or(SousError::RecipeNotFound { id })
    }
}
