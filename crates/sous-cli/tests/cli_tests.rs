use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASTA_JSON: &str = r#"{
    "title": "Weeknight Pasta",
    "description": "Fast and salty",
    "steps": [
        {"order": 2, "description": "Cook the pasta", "duration_sec": 30},
        {"order": 1, "description": "Boil salted water"}
    ]
}"#;

/// Helper function to create a Command with --no-color flag for testing
fn sous_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sous").expect("Failed to find sous binary");
    cmd.arg("--no-color");
    cmd
}

/// Temporary directory holding the database and a recipe file
fn create_cli_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let recipe_path = temp_dir.path().join("pasta.json");
    std::fs::write(&recipe_path, PASTA_JSON).expect("Failed to write recipe file");
    (temp_dir, recipe_path)
}

fn db_arg(temp_dir: &TempDir) -> String {
    temp_dir.path().join("cli_test.db").to_string_lossy().into_owned()
}

fn add_pasta(db: &str, recipe_path: &Path) {
    sous_cmd()
        .args(["--database-file", db, "recipe", "add"])
        .arg(recipe_path)
        .assert()
        .success();
}

#[test]
fn test_cli_add_recipe() {
    let (temp_dir, recipe_path) = create_cli_test_environment();
    let db = db_arg(&temp_dir);

    sous_cmd()
        .args(["--database-file", &db, "recipe", "add"])
        .arg(&recipe_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created recipe with ID: 1"))
        .stdout(predicate::str::contains("# 1. Weeknight Pasta"))
        .stdout(predicate::str::contains("- 2. Cook the pasta (00:30)"));
}

#[test]
fn test_cli_add_invalid_recipe_fails() {
    let (temp_dir, _) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    let bad_path = temp_dir.path().join("bad.json");
    std::fs::write(&bad_path, r#"{"title": "", "steps": []}"#).unwrap();

    sous_cmd()
        .args(["--database-file", &db, "recipe", "add"])
        .arg(&bad_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import recipe"));
}

#[test]
fn test_cli_add_missing_file_fails() {
    let (temp_dir, _) = create_cli_test_environment();
    let db = db_arg(&temp_dir);

    sous_cmd()
        .args(["--database-file", &db, "recipe", "add", "nowhere.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read nowhere.json"));
}

#[test]
fn test_cli_list_empty_recipes() {
    let (temp_dir, _) = create_cli_test_environment();
    let db = db_arg(&temp_dir);

    sous_cmd()
        .args(["--database-file", &db, "recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_cli_list_is_default_command() {
    let (temp_dir, recipe_path) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    add_pasta(&db, &recipe_path);

    sous_cmd()
        .args(["--database-file", &db])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Weeknight Pasta (ID: 1) (2 steps)"))
        .stdout(predicate::str::contains("- **Timers**: 1 (30s total)"));
}

#[test]
fn test_cli_show_recipe_sorted() {
    let (temp_dir, recipe_path) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    add_pasta(&db, &recipe_path);

    let output = sous_cmd()
        .args(["--database-file", &db, "r", "s", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let boil = stdout.find("- 1. Boil salted water").unwrap();
    let cook = stdout.find("- 2. Cook the pasta (00:30)").unwrap();
    assert!(boil < cook);
}

#[test]
fn test_cli_show_recipe_json() {
    let (temp_dir, recipe_path) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    add_pasta(&db, &recipe_path);

    sous_cmd()
        .args(["--database-file", &db, "recipe", "show", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title": "Weeknight Pasta""#))
        .stdout(predicate::str::contains(r#""duration_sec": 30"#));
}

#[test]
fn test_cli_show_missing_recipe() {
    let (temp_dir, _) = create_cli_test_environment();
    let db = db_arg(&temp_dir);

    sous_cmd()
        .args(["--database-file", &db, "recipe", "show", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Recipe 42 not found"));
}

#[test]
fn test_cli_delete_recipe() {
    let (temp_dir, recipe_path) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    add_pasta(&db, &recipe_path);

    sous_cmd()
        .args(["--database-file", &db, "recipe", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted recipe 'Weeknight Pasta' (ID: 1)",
        ));

    sous_cmd()
        .args(["--database-file", &db, "recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));

    sous_cmd()
        .args(["--database-file", &db, "recipe", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe 1 not found"));
}

#[test]
fn test_cli_cook_walkthrough() {
    let (temp_dir, recipe_path) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    add_pasta(&db, &recipe_path);

    // 30 countdown seconds at 10ms each finish well inside the one second wait.
    sous_cmd()
        .args(["--database-file", &db, "cook", "1", "--tick-ms", "10"])
        .write_stdin("n\nt\nwait 1\ns\nn\nf\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Step 1 of 2"))
        .stdout(predicate::str::contains("## Step 2 of 2"))
        .stdout(predicate::str::contains("Timer: 00:30 (paused)"))
        .stdout(predicate::str::contains("Timer done!"))
        .stdout(predicate::str::contains("Timer: 00:00 (done)"))
        .stdout(predicate::str::contains("All steps complete."))
        .stdout(predicate::str::contains(
            "Success: Finished cooking (2/2 steps complete)",
        ));
}

#[test]
fn test_cli_cook_pause_and_reset() {
    let (temp_dir, recipe_path) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    add_pasta(&db, &recipe_path);

    sous_cmd()
        .args(["--database-file", &db, "cook", "1"])
        .write_stdin("next\ntimer\ntimer\nreset\nprev\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Timer: 00:30 (running)"))
        .stdout(predicate::str::contains("- ✓ 1. Boil salted water"))
        .stdout(predicate::str::contains("Timer done!").not())
        .stdout(predicate::str::contains("Finished cooking").not());
}

#[test]
fn test_cli_cook_unknown_command() {
    let (temp_dir, recipe_path) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    add_pasta(&db, &recipe_path);

    sous_cmd()
        .args(["--database-file", &db, "c", "1"])
        .write_stdin("stir\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: stir"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_cook_missing_recipe() {
    let (temp_dir, _) = create_cli_test_environment();
    let db = db_arg(&temp_dir);

    sous_cmd()
        .args(["--database-file", &db, "cook", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Recipe 99 not found"));
}

#[test]
fn test_cli_cook_empty_recipe() {
    let (temp_dir, _) = create_cli_test_environment();
    let db = db_arg(&temp_dir);
    let empty_path = temp_dir.path().join("empty.json");
    std::fs::write(&empty_path, r#"{"title": "Water"}"#).unwrap();
    add_pasta(&db, &empty_path);

    sous_cmd()
        .args(["--database-file", &db, "cook", "1"])
        .write_stdin("n\nt\nf\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recipe not ready: there are no steps to cook.",
        ))
        .stdout(predicate::str::contains("Error: Nothing to finish"));
}

#[test]
fn test_cli_show_and_delete_report_store_failures() {
    let (temp_dir, _) = create_cli_test_environment();
    let db = db_arg(&temp_dir);

    // A recipes table missing its timestamp columns opens fine but fails on read.
    let conn = rusqlite::Connection::open(&db).unwrap();
    conn.execute_batch(
        "CREATE TABLE recipes (id INTEGER PRIMARY KEY, title TEXT NOT NULL);
         INSERT INTO recipes (id, title) VALUES (1, 'Broken');",
    )
    .unwrap();
    drop(conn);

    sous_cmd()
        .args(["--database-file", &db, "recipe", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load recipe"));

    sous_cmd()
        .args(["--database-file", &db, "recipe", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load recipe"));
}
