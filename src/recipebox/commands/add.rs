use crate::commands::{CmdMessage, CmdResult, NewRecipe};
use crate::error::Result;
use crate::store::{DataStore, RecipeStore};

pub fn run<S: DataStore>(store: &mut RecipeStore<S>, new_recipe: NewRecipe) -> Result<CmdResult> {
    let recipe = new_recipe.into_recipe();
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::success(format!(
        "Recipe added: {}",
        recipe.name()
    )));
    result.affected_recipes.push(recipe.clone());

    let durability = store.add(recipe);
    result.note_durability(durability);
    Ok(result)
}
