mod common;

use common::{step, unsorted_sauce_recipe};
use sous_core::{Database, NewRecipe, SousError};
use tempfile::TempDir;

#[test]
fn test_add_and_get_recipe_keeps_storage_order() {
    let mut db = Database::in_memory().expect("Failed to open database");

    let created = db
        .add_recipe(&unsorted_sauce_recipe())
        .expect("Failed to add recipe");
    assert_eq!(created.steps.len(), 3);

    let fetched = db
        .get_recipe(created.id)
        .expect("Failed to get recipe")
        .expect("Recipe should exist");

    assert_eq!(fetched.title, "Tomato Sauce");
    assert_eq!(fetched.description.as_deref(), Some("Simple and quick"));
    let orders: Vec<u32> = fetched.steps.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![3, 1, 2]);
    assert_eq!(fetched.steps[2].duration_sec, Some(90));
    assert_eq!(fetched.steps[0].duration_sec, None);
}

#[test]
fn test_get_missing_recipe_returns_none() {
    let db = Database::in_memory().expect("Failed to open database");
    assert!(db.get_recipe(404).expect("Query failed").is_none());
}

#[test]
fn test_list_recipes_with_statistics() {
    let mut db = Database::in_memory().expect("Failed to open database");
    db.add_recipe(&unsorted_sauce_recipe()).unwrap();
    db.add_recipe(&NewRecipe {
        title: "Ice Water".to_string(),
        description: None,
        steps: vec![],
    })
    .unwrap();

    let summaries = db.list_recipes().expect("Failed to list recipes");

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].title, "Tomato Sauce");
    assert_eq!(summaries[0].total_steps, 3);
    assert_eq!(summaries[0].timed_steps, 1);
    assert_eq!(summaries[0].total_timer_sec, 90);
    assert_eq!(summaries[1].total_steps, 0);
    assert_eq!(summaries[1].timed_steps, 0);
    assert_eq!(summaries[1].total_timer_sec, 0);
}

#[test]
fn test_delete_recipe_removes_steps() {
    let mut db = Database::in_memory().expect("Failed to open database");
    let recipe = db.add_recipe(&unsorted_sauce_recipe()).unwrap();

    db.delete_recipe(recipe.id).expect("Failed to delete recipe");

    assert!(db.get_recipe(recipe.id).unwrap().is_none());
    assert!(db.get_steps(recipe.id).unwrap().is_empty());
}

#[test]
fn test_delete_missing_recipe_is_not_found() {
    let mut db = Database::in_memory().expect("Failed to open database");

    let err = db.delete_recipe(77).unwrap_err();
    assert!(matches!(err, SousError::RecipeNotFound { id: 77 }));
}

#[test]
fn test_add_recipe_rejects_invalid_steps() {
    let mut db = Database::in_memory().expect("Failed to open database");

    let duplicate = NewRecipe {
        title: "Broken".to_string(),
        description: None,
        steps: vec![step(1, "One", None), step(1, "Also one", None)],
    };
    let err = db.add_recipe(&duplicate).unwrap_err();
    assert!(matches!(err, SousError::InvalidInput { .. }));

    assert!(db.list_recipes().unwrap().is_empty());
}

#[test]
fn test_database_persists_across_connections() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("persist.db");

    let id = {
        let mut db = Database::new(&db_path).expect("Failed to open database");
        db.add_recipe(&unsorted_sauce_recipe()).unwrap().id
    };

    let db = Database::new(&db_path).expect("Failed to reopen database");
    let recipe = db.get_recipe(id).unwrap().expect("Recipe should persist");
    assert_eq!(recipe.steps.len(), 3);
}
