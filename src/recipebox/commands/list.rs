use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DataStore, RecipeStore};

pub fn run<S: DataStore>(store: &RecipeStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_recipes(store.list().to_vec()))
}
