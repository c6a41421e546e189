//! Recipe CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, SousError},
    models::{NewRecipe, Recipe, RecipeSummary, Step},
};

const INSERT_RECIPE_SQL: &str =
    "INSERT INTO recipes (title, description, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const INSERT_STEP_SQL: &str = "INSERT INTO recipe_steps (recipe_id, step_order, description, duration_sec) VALUES (?1, ?2, ?3, ?4)";
const SELECT_RECIPE_SQL: &str =
    "SELECT id, title, description, created_at, updated_at FROM recipes WHERE id = ?1";
// Steps come back in insertion order, which need not match step_order.
const SELECT_STEPS_SQL: &str =
    "SELECT step_order, description, duration_sec FROM recipe_steps WHERE recipe_id = ?1 ORDER BY id";
const SELECT_SUMMARIES_SQL: &str = "SELECT r.id, r.title, r.description, r.created_at, \
     COUNT(s.id), \
     SUM(CASE WHEN s.duration_sec > 0 THEN 1 ELSE 0 END), \
     COALESCE(SUM(s.duration_sec), 0) \
     FROM recipes r LEFT JOIN recipe_steps s ON s.recipe_id = r.id \
     GROUP BY r.id ORDER BY r.id";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE id = ?1";

fn parse_timestamp(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<Step> {
        Ok(Step {
            order: row.get::<_, i64>(0)? as u32,
            description: row.get(1)?,
            duration_sec: row.get::<_, Option<i64>>(2)?.map(|d| d as u32),
        })
    }

    /// Stores a new recipe and its steps in one transaction.
    pub fn add_recipe(&mut self, recipe: &NewRecipe) -> Result<Recipe> {
        recipe.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_RECIPE_SQL,
            params![recipe.title, recipe.description, &now_str, &now_str],
        )
        .db_context("Failed to insert recipe")?;

        let id = tx.last_insert_rowid() as u64;

        for step in &recipe.steps {
            tx.execute(
                INSERT_STEP_SQL,
                params![
                    id as i64,
                    i64::from(step.order),
                    step.description,
                    step.duration_sec.map(i64::from)
                ],
            )
            .db_context("Failed to insert recipe step")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Recipe {
            id,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            steps: recipe.steps.iter().cloned().map(Step::from).collect(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a recipe and its steps by ID.
    pub fn get_recipe(&self, id: u64) -> Result<Option<Recipe>> {
        let recipe = self
            .connection
            .query_row(SELECT_RECIPE_SQL, params![id as i64], |row| {
                Ok(Recipe {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    steps: Vec::new(),
                    created_at: parse_timestamp(row, 3)?,
                    updated_at: parse_timestamp(row, 4)?,
                })
            })
            .optional()
            .db_context("Failed to query recipe")?;

        let Some(mut recipe) = recipe else {
            return Ok(None);
        };

        recipe.steps = self.get_steps(id)?;
        Ok(Some(recipe))
    }

    /// Retrieves the steps of a recipe in storage order.
    pub fn get_steps(&self, recipe_id: u64) -> Result<Vec<Step>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEPS_SQL)
            .db_context("Failed to prepare query")?;

        let steps = stmt
            .query_map(params![recipe_id as i64], Self::build_step_from_row)
            .db_context("Failed to query recipe steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read recipe step")?;

        Ok(steps)
    }

    /// Lists all recipes with step statistics, oldest first.
    pub fn list_recipes(&self) -> Result<Vec<RecipeSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(RecipeSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    created_at: parse_timestamp(row, 3)?,
                    total_steps: row.get::<_, i64>(4)? as u32,
                    timed_steps: row.get::<_, Option<i64>>(5)?.unwrap_or(0) as u32,
                    total_timer_sec: row.get::<_, i64>(6)? as u64,
                })
            })
            .db_context("Failed to query recipes")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read recipe summary")?;

        Ok(summaries)
    }

    /// Deletes a recipe and, through the foreign key, its steps.
    pub fn delete_recipe(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_RECIPE_SQL, params![id as i64])
            .db_context("Failed to delete recipe")?;

        if deleted == 0 {
            return Err(SousError::RecipeNotFound { id });
        }
        Ok(())
    }
}
