use crate::config::RecipeBoxConfig;
use crate::model::{Ingredient, Recipe};
use crate::store::Durability;

pub mod add;
pub mod config;
pub mod delete;
pub mod find;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub listed_recipes: Vec<Recipe>,
    pub config: Option<RecipeBoxConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_config(mut self, config: RecipeBoxConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Warn when a change could not be written to disk.
    pub(crate) fn note_durability(&mut self, durability: Durability) {
        if !durability.is_persisted() {
            self.add_message(CmdMessage::warning(
                "Could not save recipes; this change will be lost when the program exits",
            ));
        }
    }
}

/// Fields for a brand new recipe.
#[derive(Debug, Clone, Default)]
pub struct NewRecipe {
    pub name: String,
    pub category: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
}

impl NewRecipe {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn into_recipe(self) -> Recipe {
        let mut recipe = Recipe::new(self.name, self.category);
        for ingredient in self.ingredients {
            recipe.add_ingredient(ingredient);
        }
        recipe.set_instructions(self.instructions);
        recipe
    }
}

/// Changes applied to an existing recipe. `None` leaves a field alone;
/// ingredients are appended.
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.instructions.is_none()
            && self.ingredients.is_empty()
    }

    pub fn apply(self, recipe: &mut Recipe) {
        if let Some(name) = self.name {
            recipe.set_name(name);
        }
        if let Some(category) = self.category {
            recipe.set_category(category);
        }
        if let Some(instructions) = self.instructions {
            recipe.set_instructions(instructions);
        }
        for ingredient in self.ingredients {
            recipe.add_ingredient(ingredient);
        }
    }
}
