use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, RecipeStore};

pub fn run<S: DataStore>(store: &RecipeStore<S>, name: &str) -> Result<CmdResult> {
    match store.find(name) {
        Some(recipe) => Ok(CmdResult::default().with_listed_recipes(vec![recipe.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Recipe not found: {}", name)));
            Ok(result)
        }
    }
}
