use super::DataStore;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "recipes.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RecipeError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read(&self.path).map_err(RecipeError::Io)?;
        let recipes: Vec<Recipe> =
            serde_json::from_slice(&content).map_err(RecipeError::Serialization)?;
        Ok(recipes)
    }

    fn save(&self, recipes: &[Recipe]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(recipes).map_err(RecipeError::Serialization)?;
        fs::write(&self.path, content).map_err(RecipeError::Io)?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join(DEFAULT_DATA_FILE));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn garbage_file_is_a_serialization_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), [0xde, 0xad, 0xbe, 0xef, 0x00]).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, RecipeError::Serialization(_)));
    }

    #[test]
    fn wrong_shape_is_a_serialization_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), r#"{"name": "not a list"}"#).unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            RecipeError::Serialization(_)
        ));
    }

    #[test]
    fn save_then_load_keeps_order_and_fields() {
        let (_dir, store) = setup();
        let mut soup = Recipe::new("Borscht", "Soup");
        soup.add_ingredient(Ingredient::new("beet", 2.0, "pcs"));
        soup.set_instructions("Simmer for an hour.");
        let tea = Recipe::new("tea", "Drinks");

        store.save(&[soup.clone(), tea.clone()]).unwrap();

        assert_eq!(store.load().unwrap(), vec![soup, tea]);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, store) = setup();
        store
            .save(&[Recipe::new("A", "x"), Recipe::new("B", "y")])
            .unwrap();
        store.save(&[Recipe::new("C", "z")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "C");
    }

    #[test]
    fn save_creates_missing_parent_dir() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("box.json"));

        store.save(&[Recipe::new("A", "x")]).unwrap();

        assert!(store.path().exists());
    }
}
