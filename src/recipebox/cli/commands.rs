use super::print::{print_config, print_full_recipes, print_messages, print_recipes};
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use recipebox::api::{ConfigAction, RecipeApi, RecipeChanges};
use recipebox::config::RecipeBoxConfig;
use recipebox::error::Result;
use recipebox::store::fs::FileStore;
use std::path::PathBuf;
use tracing::{debug, warn};

struct AppContext {
    api: RecipeApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            ingredients,
            instructions,
        }) => handle_add(&mut ctx, name, category, ingredients, instructions),
        Some(Commands::List { full }) => handle_list(&ctx, full),
        Some(Commands::View { name }) => handle_view(&ctx, name.join(" ")),
        Some(Commands::Edit {
            name,
            new_name,
            category,
            instructions,
            ingredients,
        }) => {
            let changes = RecipeChanges {
                name: new_name.as_deref(),
                category: category.as_deref(),
                instructions: instructions.as_deref(),
                ingredients: ingredients.as_slice(),
            };
            handle_edit(&mut ctx, &name, changes)
        }
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, name.join(" ")),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = RecipeBoxConfig::load(&cwd).unwrap_or_else(|err| {
        warn!(%err, "could not read config, using defaults");
        RecipeBoxConfig::default()
    });

    let data_path = match &cli.file {
        Some(path) => path.clone(),
        None => config.data_path(&cwd),
    };
    debug!(path = %data_path.display(), "using recipe file");

    let api = RecipeApi::new(FileStore::new(data_path), cwd, &config);
    AppContext { api }
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    category: String,
    ingredients: Vec<String>,
    instructions: String,
) -> Result<()> {
    let result = ctx
        .api
        .add_recipe(&name, &category, &ingredients, &instructions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, full: bool) -> Result<()> {
    let result = ctx.api.list_recipes()?;
    if full && !result.listed_recipes.is_empty() {
        print_full_recipes(&result.listed_recipes);
    } else {
        print_recipes(&result.listed_recipes);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, name: String) -> Result<()> {
    let result = ctx.api.find_recipe(&name)?;
    print_full_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, name: &str, changes: RecipeChanges<'_, String>) -> Result<()> {
    let result = ctx.api.update_recipe(name, changes)?;
    print_full_recipes(&result.affected_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.delete_recipe(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
