use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn recipebox(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_then_view() {
    let dir = TempDir::new().unwrap();

    recipebox(&dir)
        .args(["add", "Borscht", "Soup", "-i", "beet, 2, pcs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe added: Borscht"));

    assert!(dir.path().join("recipes.json").exists());

    recipebox(&dir)
        .args(["view", "borscht"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe: Borscht"))
        .stdout(predicate::str::contains("Category: Soup"))
        .stdout(predicate::str::contains("2.0 pcs beet"));
}

#[test]
fn test_list_is_default_command() {
    let dir = TempDir::new().unwrap();

    recipebox(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));

    recipebox(&dir)
        .args(["add", "Tea", "Drinks"])
        .assert()
        .success();

    recipebox(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea"))
        .stdout(predicate::str::contains("0 ingredients"));
}

#[test]
fn test_delete_removes_all_case_variants() {
    let dir = TempDir::new().unwrap();
    for name in ["abc", "ABC", "Other"] {
        recipebox(&dir).args(["add", name, "x"]).assert().success();
    }

    recipebox(&dir)
        .args(["rm", "AbC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 recipes"));

    recipebox(&dir)
        .args(["list", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe: Other"))
        .stdout(predicate::str::contains("Recipe: abc").not());
}

#[test]
fn test_edit_renames_and_persists() {
    let dir = TempDir::new().unwrap();
    recipebox(&dir).args(["add", "Pie", "Dessert"]).assert().success();

    recipebox(&dir)
        .args(["edit", "pie", "--name", "Apple Pie", "-i", "apple, 3, pcs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe updated: Apple Pie"));

    recipebox(&dir)
        .args(["view", "apple", "pie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.0 pcs apple"));
}

#[test]
fn test_view_missing_recipe_warns() {
    let dir = TempDir::new().unwrap();

    recipebox(&dir)
        .args(["view", "Nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe not found: Nothing"));
}

#[test]
fn test_malformed_ingredient_is_rejected() {
    let dir = TempDir::new().unwrap();

    recipebox(&dir)
        .args(["add", "Borscht", "Soup", "-i", "beet, lots, pcs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid quantity"));

    assert!(!dir.path().join("recipes.json").exists());
}

#[test]
fn test_corrupt_file_is_reported_and_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("recipes.json");
    fs::write(&data, "this is not json").unwrap();

    recipebox(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."))
        .stderr(predicate::str::contains("failed to load recipes"));

    assert_eq!(fs::read_to_string(&data).unwrap(), "this is not json");
}

#[test]
fn test_file_flag_overrides_location() {
    let dir = TempDir::new().unwrap();

    recipebox(&dir)
        .args(["--file", "kitchen/box.json", "add", "Tea", "Drinks"])
        .assert()
        .success();

    assert!(dir.path().join("kitchen").join("box.json").exists());
    assert!(!dir.path().join("recipes.json").exists());
}

#[test]
fn test_config_separator_is_used_for_ingredients() {
    let dir = TempDir::new().unwrap();

    recipebox(&dir)
        .args(["config", "ingredient-separator", ";"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ingredient-separator set to ;"));

    recipebox(&dir)
        .args(["add", "Bread", "Baking", "-i", "flour, rye; 500; g"])
        .assert()
        .success();

    recipebox(&dir)
        .args(["view", "bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("500.0 g flour, rye"));
}

#[test]
fn test_unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();

    recipebox(&dir)
        .args(["config", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: nope"));

    recipebox(&dir)
        .args(["config", "nope", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: nope"));

    recipebox(&dir)
        .args(["config", "ingredient-separator", ";;"])
        .assert()
        .failure();

    assert!(!dir.path().join("recipebox.config.json").exists());
}
