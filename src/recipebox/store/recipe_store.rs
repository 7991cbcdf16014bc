use super::DataStore;
use crate::model::Recipe;
use tracing::{debug, error};

/// Outcome of writing the collection back to its backend.
///
/// Persistence failures never abort an operation: the in-memory collection
/// stays authoritative and the failure is logged. `MemoryOnly` tells a UI the
/// change will not survive the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    Persisted,
    MemoryOnly,
}

impl Durability {
    pub fn is_persisted(self) -> bool {
        matches!(self, Durability::Persisted)
    }
}

/// Result of [`RecipeStore::delete`].
#[derive(Debug)]
pub struct Deleted {
    pub removed: Vec<Recipe>,
    pub durability: Durability,
}

/// Sole owner of the recipe collection.
///
/// Every mutation through `add`/`delete` rewrites the whole collection via
/// the backend before returning. Edits made through [`RecipeStore::find_mut`]
/// are only written when the caller calls [`RecipeStore::persist`].
pub struct RecipeStore<S: DataStore> {
    backend: S,
    recipes: Vec<Recipe>,
}

impl<S: DataStore> RecipeStore<S> {
    /// Load the persisted collection. Missing data yields an empty store;
    /// unreadable data is logged and also yields an empty store, leaving
    /// the backend untouched until the next write.
    pub fn open(backend: S) -> Self {
        let location = backend.location();
        let recipes = match backend.load() {
            Ok(recipes) => {
                debug!(
                    count = recipes.len(),
                    path = %location.display(),
                    "loaded recipes"
                );
                recipes
            }
            Err(err) => {
                error!(
                    path = %location.display(),
                    %err,
                    "failed to load recipes, starting with an empty collection"
                );
                Vec::new()
            }
        };
        Self { backend, recipes }
    }

    pub fn add(&mut self, recipe: Recipe) -> Durability {
        self.recipes.push(recipe);
        self.persist()
    }

    /// Remove every recipe whose name matches case-insensitively. Persists
    /// even when nothing matched.
    pub fn delete(&mut self, name: &str) -> Deleted {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.recipes)
            .into_iter()
            .partition(|recipe| recipe.is_named(name));
        self.recipes = kept;
        let durability = self.persist();
        Deleted {
            removed,
            durability,
        }
    }

    /// First recipe, in insertion order, whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.is_named(name))
    }

    /// Like [`find`](Self::find) but for in-place edits. Call
    /// [`persist`](Self::persist) afterwards.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Recipe> {
        self.recipes.iter_mut().find(|recipe| recipe.is_named(name))
    }

    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Overwrite the backend with the full in-memory collection.
    pub fn persist(&self) -> Durability {
        let location = self.backend.location();
        match self.backend.save(&self.recipes) {
            Ok(()) => {
                debug!(
                    count = self.recipes.len(),
                    path = %location.display(),
                    "saved recipes"
                );
                Durability::Persisted
            }
            Err(err) => {
                error!(
                    path = %location.display(),
                    %err,
                    "failed to save recipes, changes are kept in memory only"
                );
                Durability::MemoryOnly
            }
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}
