//! # Storage Layer
//!
//! The recipe collection is always read and written as one blob. The
//! [`DataStore`] trait covers that raw I/O, while [`RecipeStore`] owns the
//! in-memory collection and decides when to write it back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a pretty-printed JSON array in a
//!   single file (`recipes.json` by default)
//! - [`memory::InMemoryStore`]: In-memory storage for testing, with switches
//!   to simulate read and write failures
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "name": "Borscht",
//!     "category": "Soup",
//!     "ingredients": [{ "name": "beet", "quantity": 2.0, "unit": "pcs" }],
//!     "instructions": ""
//!   }
//! ]
//! ```
//!
//! Writes overwrite the file in place. There is no temp-file-then-rename
//! step, so a failed write can leave a truncated file behind.

use crate::error::Result;
use crate::model::Recipe;
use std::path::PathBuf;

pub mod fs;
pub mod memory;
pub mod recipe_store;

pub use recipe_store::{Deleted, Durability, RecipeStore};

/// Whole-collection persistence.
pub trait DataStore {
    /// Read the entire collection. A store with nothing persisted yet
    /// returns an empty list, not an error.
    fn load(&self) -> Result<Vec<Recipe>>;

    /// Overwrite the persisted collection with `recipes`.
    fn save(&self, recipes: &[Recipe]) -> Result<()>;

    /// Where the collection lives, for messages and logs.
    fn location(&self) -> PathBuf;
}
