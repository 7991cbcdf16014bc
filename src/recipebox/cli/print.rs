use colored::Colorize;
use recipebox::api::{CmdMessage, MessageLevel};
use recipebox::config::RecipeBoxConfig;
use recipebox::model::Recipe;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const RECIPE_SEPARATOR: &str = "-------------------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_full_recipes(recipes: &[Recipe]) {
    for recipe in recipes {
        println!("{}", recipe);
        println!("{}", RECIPE_SEPARATOR);
    }
}

pub(super) fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for (i, recipe) in recipes.iter().enumerate() {
        println!("{}", format_list_line(i + 1, recipe));
    }
}

pub(super) fn print_config(config: &RecipeBoxConfig) {
    for key in RecipeBoxConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// `"  1. Name  (Category)  3 ingredients"`, truncated to the line width.
fn format_list_line(position: usize, recipe: &Recipe) -> String {
    let idx_str = format!("{:>3}. ", position);
    let count = recipe.ingredients().len();
    let suffix = format!(
        "  {} ingredient{}",
        count,
        if count == 1 { "" } else { "s" }
    );

    let label = if recipe.category().is_empty() {
        recipe.name().to_string()
    } else {
        format!("{}  ({})", recipe.name(), recipe.category())
    };

    let available = LINE_WIDTH.saturating_sub(idx_str.width() + suffix.width());
    let label = truncate_to_width(&label, available);

    format!(
        "{}{}{}",
        idx_str.yellow(),
        label.bold(),
        suffix.dimmed()
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
