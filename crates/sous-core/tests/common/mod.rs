use sous_core::{Kitchen, KitchenBuilder, NewRecipe, NewStep};
use tempfile::TempDir;

/// Helper function to create a kitchen backed by a temporary database
#[allow(dead_code)]
pub async fn create_test_kitchen() -> (TempDir, Kitchen) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let kitchen = KitchenBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create kitchen");
    (temp_dir, kitchen)
}

pub fn step(order: u32, description: &str, duration_sec: Option<u32>) -> NewStep {
    NewStep {
        order,
        description: description.to_string(),
        duration_sec,
    }
}

/// Three steps stored out of order; the second has a 90 second timer.
#[allow(dead_code)]
pub fn unsorted_sauce_recipe() -> NewRecipe {
    NewRecipe {
        title: "Tomato Sauce".to_string(),
        description: Some("Simple and quick".to_string()),
        steps: vec![
            step(3, "Season and serve", None),
            step(1, "Sweat the garlic", None),
            step(2, "Simmer the tomatoes", Some(90)),
        ],
    }
}
