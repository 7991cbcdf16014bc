use super::DataStore;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded;
/// `DataStore::save` takes `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    recipes: RefCell<Vec<Recipe>>,
    saves: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already "persisted" collection.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RefCell::new(recipes),
            ..Self::default()
        }
    }

    /// Enable read error simulation, as if the persisted data were corrupt.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Snapshot of what is currently "on disk".
    pub fn persisted(&self) -> Vec<Recipe> {
        self.recipes.borrow().clone()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        if self.simulate_read_error.get() {
            return Err(RecipeError::Store("Simulated read error".to_string()));
        }
        Ok(self.recipes.borrow().clone())
    }

    fn save(&self, recipes: &[Recipe]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RecipeError::Store("Simulated write error".to_string()));
        }
        *self.recipes.borrow_mut() = recipes.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Ingredient;
    use crate::store::RecipeStore;

    pub struct StoreFixture {
        pub recipes: Vec<Recipe>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                recipes: Vec::new(),
            }
        }

        pub fn with_recipes(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut recipe =
                    Recipe::new(format!("Test Recipe {}", i + 1), "Test".to_string());
                recipe.add_ingredient(Ingredient::new(format!("item {}", i + 1), 1.0, "pcs"));
                self.recipes.push(recipe);
            }
            self
        }

        pub fn with_recipe(mut self, name: &str, category: &str) -> Self {
            self.recipes.push(Recipe::new(name, category));
            self
        }

        pub fn build(self) -> RecipeStore<InMemoryStore> {
            RecipeStore::open(InMemoryStore::with_recipes(self.recipes))
        }
    }
}
