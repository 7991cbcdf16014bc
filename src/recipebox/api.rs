//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for recipe operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (parses typed ingredient entries, rejects blank
//!   lookup names). Names and categories are passed through verbatim.
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, and it never decides how results are shown.
//!
//! `RecipeApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RecipeApi<FileStore>`
//! - Testing: `RecipeApi<InMemoryStore>`

use crate::commands::{self, NewRecipe, RecipeUpdate};
use crate::config::RecipeBoxConfig;
use crate::error::{RecipeError, Result};
use crate::input::parse_ingredients;
use crate::store::{DataStore, RecipeStore};
use std::path::PathBuf;

pub struct RecipeApi<S: DataStore> {
    store: RecipeStore<S>,
    config_dir: PathBuf,
    separator: char,
}

impl<S: DataStore> RecipeApi<S> {
    pub fn new(backend: S, config_dir: PathBuf, config: &RecipeBoxConfig) -> Self {
        Self {
            store: RecipeStore::open(backend),
            config_dir,
            separator: config.ingredient_separator,
        }
    }

    /// Add a recipe. Ingredient entries are typed text ("beet, 2, pcs");
    /// one malformed entry rejects the whole recipe.
    pub fn add_recipe<I: AsRef<str>>(
        &mut self,
        name: &str,
        category: &str,
        ingredients: &[I],
        instructions: &str,
    ) -> Result<commands::CmdResult> {
        let new_recipe = NewRecipe {
            name: name.to_string(),
            category: category.to_string(),
            ingredients: parse_ingredients(ingredients, self.separator)?,
            instructions: instructions.to_string(),
        };
        commands::add::run(&mut self.store, new_recipe)
    }

    pub fn list_recipes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_recipe(&self, name: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, require_name(name)?)
    }

    pub fn delete_recipe(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, require_name(name)?)
    }

    pub fn update_recipe<I: AsRef<str>>(
        &mut self,
        name: &str,
        changes: RecipeChanges<'_, I>,
    ) -> Result<commands::CmdResult> {
        let name = require_name(name)?;
        let update = RecipeUpdate {
            name: changes.name.map(str::to_string),
            category: changes.category.map(str::to_string),
            instructions: changes.instructions.map(str::to_string),
            ingredients: parse_ingredients(changes.ingredients, self.separator)?,
        };
        commands::update::run(&mut self.store, name, update)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &RecipeStore<S> {
        &self.store
    }
}

/// Raw edit input as a UI collects it.
#[derive(Debug, Clone)]
pub struct RecipeChanges<'a, I> {
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub instructions: Option<&'a str>,
    pub ingredients: &'a [I],
}

impl<'a, I> RecipeChanges<'a, I> {
    pub fn ingredients(ingredients: &'a [I]) -> Self {
        Self {
            name: None,
            category: None,
            instructions: None,
            ingredients,
        }
    }
}

/// Lookups use the name as given; only all-blank names are refused.
fn require_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(RecipeError::Api("Recipe name cannot be empty".into()));
    }
    Ok(name)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::store::Durability;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    const NO_INGREDIENTS: &[&str] = &[];

    fn api() -> (TempDir, RecipeApi<InMemoryStore>) {
        let dir = TempDir::new().unwrap();
        let api = RecipeApi::new(
            InMemoryStore::new(),
            dir.path().to_path_buf(),
            &RecipeBoxConfig::default(),
        );
        (dir, api)
    }

    #[test]
    fn add_parses_ingredient_entries() {
        let (_dir, mut api) = api();
        api.add_recipe("Borscht", "Soup", &["beet, 2, pcs"], "")
            .unwrap();

        let listed = api.list_recipes().unwrap().listed_recipes;
        assert_eq!(listed[0].ingredients()[0].to_string(), "2.0 pcs beet");
        assert_eq!(listed[0].instructions(), "");
    }

    #[test]
    fn add_rejects_malformed_ingredient_without_storing() {
        let (_dir, mut api) = api();
        let err = api
            .add_recipe("Borscht", "Soup", &["beet, lots, pcs"], "")
            .unwrap_err();

        assert!(matches!(err, RecipeError::InputFormat(_)));
        assert!(api.store().list().is_empty());
        assert_eq!(api.store().backend().save_count(), 0);
    }

    #[test]
    fn uses_configured_separator() {
        let dir = TempDir::new().unwrap();
        let config = RecipeBoxConfig {
            ingredient_separator: '|',
            ..RecipeBoxConfig::default()
        };
        let mut api = RecipeApi::new(InMemoryStore::new(), dir.path().to_path_buf(), &config);

        api.add_recipe("Bread", "Baking", &["flour, wholemeal | 500 | g"], "")
            .unwrap();

        assert_eq!(
            api.store().list()[0].ingredients()[0].name(),
            "flour, wholemeal"
        );
    }

    #[test]
    fn find_and_delete_reject_blank_names() {
        let (_dir, mut api) = api();
        api.add_recipe("Pie", "Dessert", NO_INGREDIENTS, "").unwrap();

        assert_eq!(api.find_recipe("pie").unwrap().listed_recipes.len(), 1);
        assert!(matches!(api.find_recipe("   "), Err(RecipeError::Api(_))));
        assert!(matches!(api.delete_recipe(""), Err(RecipeError::Api(_))));

        api.delete_recipe("PIE").unwrap();
        assert!(api.list_recipes().unwrap().listed_recipes.is_empty());
    }

    #[test]
    fn names_with_surrounding_spaces_stay_reachable() {
        let dir = TempDir::new().unwrap();
        let backend = InMemoryStore::with_recipes(vec![crate::model::Recipe::new(" Pie ", "x")]);
        let mut api = RecipeApi::new(backend, dir.path().to_path_buf(), &RecipeBoxConfig::default());

        assert!(api.find_recipe("pie").unwrap().listed_recipes.is_empty());
        assert_eq!(api.find_recipe(" PIE ").unwrap().listed_recipes.len(), 1);

        api.delete_recipe(" pie ").unwrap();
        assert!(api.store().list().is_empty());
    }

    #[test]
    fn update_dispatches_changes() {
        let (_dir, mut api) = api();
        api.add_recipe("Pie", "Dessert", NO_INGREDIENTS, "").unwrap();

        let changes = RecipeChanges {
            name: Some("Apple Pie"),
            instructions: Some("Bake."),
            ..RecipeChanges::ingredients(&["apple, 3, pcs"])
        };
        api.update_recipe("pie", changes).unwrap();

        let recipe = api.find_recipe("apple pie").unwrap().listed_recipes.remove(0);
        assert_eq!(recipe.category(), "Dessert");
        assert_eq!(recipe.instructions(), "Bake.");
        assert_eq!(recipe.ingredients().len(), 1);
    }

    #[test]
    fn config_reads_from_config_dir() {
        let (_dir, api) = api();
        let result = api.config(ConfigAction::ShowKey("data-file".into())).unwrap();
        assert_eq!(result.messages[0].content, "recipes.json");
    }
}
