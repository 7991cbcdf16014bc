use crate::commands::{CmdMessage, CmdResult, RecipeUpdate};
use crate::error::Result;
use crate::store::{DataStore, RecipeStore};

/// Edit the first recipe matching `name` in place, then write the
/// collection back. Field edits do not persist on their own.
pub fn run<S: DataStore>(
    store: &mut RecipeStore<S>,
    name: &str,
    update: RecipeUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(recipe) = store.find_mut(name) else {
        result.add_message(CmdMessage::warning(format!("Recipe not found: {}", name)));
        return Ok(result);
    };

    if update.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for {}",
            recipe.name()
        )));
        return Ok(result);
    }

    update.apply(recipe);
    let updated = recipe.clone();

    let durability = store.persist();
    result.add_message(CmdMessage::success(format!(
        "Recipe updated: {}",
        updated.name()
    )));
    result.note_durability(durability);
    Ok(result.with_affected_recipes(vec![updated]))
}
