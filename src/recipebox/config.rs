use crate::error::{RecipeError, Result};
use crate::input::DEFAULT_SEPARATOR;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "recipebox.config.json";

/// Configuration for recipebox, stored in `recipebox.config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeBoxConfig {
    /// Path of the recipe collection, relative to the config directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Field separator for typed ingredient entries ("beet, 2, pcs")
    #[serde(default = "default_separator")]
    pub ingredient_separator: char,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl Default for RecipeBoxConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            ingredient_separator: default_separator(),
        }
    }
}

impl RecipeBoxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let config: RecipeBoxConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecipeError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeError::Io)?;
        Ok(())
    }

    pub const KEYS: [&'static str; 2] = ["data-file", "ingredient-separator"];

    /// Value of a config key, formatted for display
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "ingredient-separator" => Some(self.ingredient_separator.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => self.set_data_file(value),
            "ingredient-separator" => self.set_ingredient_separator(value),
            _ => Err(RecipeError::Config(format!("Unknown config key: {}", key))),
        }
    }

    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        config_dir.as_ref().join(&self.data_file)
    }

    pub fn set_data_file(&mut self, path: &str) -> Result<()> {
        let path = path.trim();
        if path.is_empty() {
            return Err(RecipeError::Config("data-file cannot be empty".to_string()));
        }
        self.data_file = path.to_string();
        Ok(())
    }

    /// Accepts exactly one non-whitespace character.
    pub fn set_ingredient_separator(&mut self, value: &str) -> Result<()> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => {
                self.ingredient_separator = c;
                Ok(())
            }
            _ => Err(RecipeError::Config(format!(
                "ingredient-separator must be a single character, got {:?}",
                value
            ))),
        }
    }
}
