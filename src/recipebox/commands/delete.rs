use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, RecipeStore};

pub fn run<S: DataStore>(store: &mut RecipeStore<S>, name: &str) -> Result<CmdResult> {
    let deleted = store.delete(name);
    let mut result = CmdResult::default();

    match deleted.removed.len() {
        0 => result.add_message(CmdMessage::info(format!("No recipe named {}", name))),
        1 => result.add_message(CmdMessage::success(format!(
            "Recipe deleted: {}",
            deleted.removed[0].name()
        ))),
        n => result.add_message(CmdMessage::success(format!(
            "{} recipes named {} deleted",
            n, name
        ))),
    }
    result.note_durability(deleted.durability);

    Ok(result.with_affected_recipes(deleted.removed))
}
