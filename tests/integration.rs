use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn larder_cmd() -> Command {
    Command::cargo_bin("larder").unwrap()
}

/// Render a recipe into `tmp/recipes/` with the given title and ingredients.
fn render_recipe(tmp: &TempDir, title: &str, ingredients: &str) {
    larder_cmd()
        .args([
            "render",
            "--title",
            title,
            "--description",
            "A test recipe",
            "--difficulty",
            "medium",
            "--prep-time",
            "10 mins",
            "--cook-time",
            "20 mins",
            "--servings",
            "2",
            "--ingredients",
            ingredients,
            "--directions",
            "Mix everything,Cook it",
        ])
        .current_dir(tmp.path())
        .assert()
        .success();
}

fn read_index(tmp: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(tmp.path().join("recipes.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// --- render ---

#[test]
fn test_render_writes_page_into_recipes_dir() {
    let tmp = TempDir::new().unwrap();
    larder_cmd()
        .args([
            "render",
            "--title",
            "Tomato Soup",
            "--ingredients",
            "tomato:4,cream:1 cup",
            "--directions",
            "Roast the tomato,Stir in cream",
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tomato-soup.html"));

    let html = fs::read_to_string(tmp.path().join("recipes/tomato-soup.html")).unwrap();
    assert!(html.contains(r#"<meta name="recipe-status" content="live">"#));
    assert!(html.contains("<title>Tomato Soup - My Recipes</title>"));
    assert!(html.contains(r#"<span class="ingredient-used">tomato (4)</span>"#));
    assert!(!tmp.path().join("recipes.json").exists());
}

#[test]
fn test_render_explicit_output() {
    let tmp = TempDir::new().unwrap();
    larder_cmd()
        .args(["render", "--title", "Toast", "--output", "out/toast-page.html"])
        .current_dir(tmp.path())
        .assert()
        .success();
    assert!(tmp.path().join("out/toast-page.html").exists());
}

#[test]
fn test_render_uses_config_site_name() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("larder.toml"),
        "[site]\nname = \"Grandma's Kitchen\"\nauthor = \"Grandma\"\n\n[paths]\nrecipes_dir = \"pages\"\n",
    )
    .unwrap();
    larder_cmd()
        .args(["render", "--title", "Toast"])
        .current_dir(tmp.path())
        .assert()
        .success();
    let html = fs::read_to_string(tmp.path().join("pages/toast.html")).unwrap();
    assert!(html.contains("<title>Toast - Grandma&#x27;s Kitchen</title>"));
    assert!(html.contains("Grandma"));
}

#[test]
fn test_render_missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    larder_cmd()
        .args(["render", "--title", "Toast", "--config", "missing.toml"])
        .current_dir(tmp.path())
        .assert()
        .failure();
}

#[test]
fn test_render_rejects_unknown_difficulty() {
    let tmp = TempDir::new().unwrap();
    larder_cmd()
        .args(["render", "--title", "Toast", "--difficulty", "extreme"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty"));
}

#[test]
fn test_render_with_update_index() {
    let tmp = TempDir::new().unwrap();
    larder_cmd()
        .args([
            "render",
            "--title",
            "Apple Pie",
            "--servings",
            "8",
            "--prep-time",
            "30 mins",
            "--categories",
            "dessert",
            "--update-index",
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- New recipes: 1"));

    let index = read_index(&tmp);
    assert_eq!(index[0]["id"], "apple-pie");
    assert_eq!(index[0]["title"], "Apple Pie");
    assert_eq!(index[0]["servings"], 8);
    assert_eq!(index[0]["time"], "30 mins");
    assert_eq!(index[0]["categories"][0], "dessert");
    assert_eq!(index[0]["display"], true);
}

// --- sync ---

#[test]
fn test_sync_builds_sorted_index() {
    let tmp = TempDir::new().unwrap();
    render_recipe(&tmp, "Zucchini Bread", "zucchini:2");
    render_recipe(&tmp, "Banana Bread", "banana:3");

    larder_cmd()
        .arg("sync")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- New recipes: 2"))
        .stdout(predicate::str::contains("- Total live recipes: 2"));

    let index = read_index(&tmp);
    let ids: Vec<_> = index
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["banana-bread", "zucchini-bread"]);
    assert_eq!(index[0]["difficulty"], "medium");
    assert_eq!(index[0]["servings"], 2);
    assert_eq!(index[0]["time"], "10 mins");
}

#[test]
fn test_sync_twice_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    render_recipe(&tmp, "Banana Bread", "banana:3");

    larder_cmd().arg("sync").current_dir(tmp.path()).assert().success();
    let first = fs::read(tmp.path().join("recipes.json")).unwrap();

    larder_cmd()
        .arg("sync")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- New recipes: 0"))
        .stdout(predicate::str::contains("- Updated recipes: 0"))
        .stdout(predicate::str::contains("- Unchanged recipes: 1"))
        .stdout(predicate::str::contains("- Removed recipes: 0"));
    let second = fs::read(tmp.path().join("recipes.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sync_removes_deleted_and_non_live() {
    let tmp = TempDir::new().unwrap();
    render_recipe(&tmp, "Banana Bread", "banana:3");
    render_recipe(&tmp, "Apple Crumble", "apple:4");
    render_recipe(&tmp, "Carrot Cake", "carrot:2");
    larder_cmd().arg("sync").current_dir(tmp.path()).assert().success();

    let recipes = tmp.path().join("recipes");
    fs::remove_file(recipes.join("banana-bread.html")).unwrap();
    let crumble = fs::read_to_string(recipes.join("apple-crumble.html")).unwrap();
    fs::write(
        recipes.join("apple-crumble.html"),
        crumble.replace(r#"content="live""#, r#"content="draft""#),
    )
    .unwrap();

    larder_cmd()
        .args(["sync", "--verbose"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- Removed recipes: 2"))
        .stdout(predicate::str::contains("Recipe in index but file not found: banana-bread"))
        .stdout(predicate::str::contains(
            "Recipe in index but marked as dead or has no status: apple-crumble",
        ));

    let index = read_index(&tmp);
    assert_eq!(index.as_array().unwrap().len(), 1);
    assert_eq!(index[0]["id"], "carrot-cake");
}

#[test]
fn test_sync_keeps_template_hidden_and_last() {
    let tmp = TempDir::new().unwrap();
    render_recipe(&tmp, "Banana Bread", "banana:3");
    fs::write(
        tmp.path().join("recipes.json"),
        r#"[{"id": "recipe-template", "title": "AAA Template", "display": true}]"#,
    )
    .unwrap();

    larder_cmd().arg("sync").current_dir(tmp.path()).assert().success();

    let index = read_index(&tmp);
    let entries = index.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["id"], "recipe-template");
    assert_eq!(entries[1]["title"], "AAA Template");
    assert_eq!(entries[1]["display"], false);
}

#[test]
fn test_sync_synthesizes_template_entry() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("recipes")).unwrap();
    fs::write(tmp.path().join("recipes/recipe-template.html"), "<html></html>").unwrap();

    larder_cmd().arg("sync").current_dir(tmp.path()).assert().success();

    let index = read_index(&tmp);
    assert_eq!(index[0]["id"], "recipe-template");
    assert_eq!(index[0]["title"], "Recipe Template");
    assert_eq!(index[0]["display"], false);
}

#[test]
fn test_sync_dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    render_recipe(&tmp, "Banana Bread", "banana:3");

    larder_cmd()
        .args(["sync", "--dry-run"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- New recipes: 1"))
        .stdout(predicate::str::contains("Dry run completed"));
    assert!(!tmp.path().join("recipes.json").exists());
}

#[test]
fn test_sync_malformed_index_is_replaced() {
    let tmp = TempDir::new().unwrap();
    render_recipe(&tmp, "Banana Bread", "banana:3");
    fs::write(tmp.path().join("recipes.json"), "{ broken").unwrap();

    larder_cmd().arg("sync").current_dir(tmp.path()).assert().success();
    assert_eq!(read_index(&tmp)[0]["id"], "banana-bread");
}

#[test]
fn test_sync_custom_paths_and_alias() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("pages")).unwrap();
    fs::write(
        tmp.path().join("pages/toast.html"),
        r#"<html><head><meta name="recipe-status" content="live"><title>Toast</title></head></html>"#,
    )
    .unwrap();

    larder_cmd()
        .args(["reconcile", "--recipes-dir", "pages", "--json-file", "site/index.json"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let raw = fs::read_to_string(tmp.path().join("site/index.json")).unwrap();
    assert!(raw.contains(r#""id": "toast""#));
}

#[test]
fn test_sync_missing_recipes_dir_fails() {
    let tmp = TempDir::new().unwrap();
    larder_cmd()
        .arg("sync")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipes directory not found"));
}

#[test]
fn test_sync_json_output() {
    let tmp = TempDir::new().unwrap();
    render_recipe(&tmp, "Banana Bread", "banana:3");

    let output = larder_cmd()
        .args(["sync", "--json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["new"][0], "banana-bread");
    assert_eq!(json["data"]["total_live"], 1);
}

// --- validate ---

#[test]
fn test_validate_complete_recipe() {
    let tmp = TempDir::new().unwrap();
    larder_cmd()
        .args([
            "validate",
            "--title",
            "Chili",
            "--description",
            "Hearty",
            "--prep-time",
            "20 mins",
            "--cook-time",
            "1 hour",
            "--ingredients",
            "beans:2 cans,beef:1 lb,onion:1",
            "--directions",
            "Brown the beef,Add onion,Simmer",
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe is valid"));
}

#[test]
fn test_validate_reports_errors_and_fails() {
    let tmp = TempDir::new().unwrap();
    larder_cmd()
        .args(["validate", "--title", "Chili", "--servings=-3"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("error: Description is required"))
        .stdout(predicate::str::contains("error: Servings must be a positive number"));
}
