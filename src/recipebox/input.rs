//! Parsing of free-text ingredient entries such as `"beet, 2, pcs"`.
//!
//! The store never validates ingredient content, so any UI that accepts
//! typed ingredients should go through [`parse_ingredient`] first.

use crate::error::{RecipeError, Result};
use crate::model::Ingredient;

pub const DEFAULT_SEPARATOR: char = ',';

/// Parse `"<name><sep> <quantity><sep> <unit>"` into an [`Ingredient`].
///
/// Exactly three fields are required. Fields are trimmed; name and unit may
/// be empty, the quantity must be a finite number.
pub fn parse_ingredient(text: &str, separator: char) -> Result<Ingredient> {
    let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
    let [name, quantity, unit] = parts.as_slice() else {
        return Err(RecipeError::InputFormat(format!(
            "expected \"name{sep} quantity{sep} unit\", got {:?}",
            text,
            sep = separator
        )));
    };

    let quantity: f64 = quantity.parse().map_err(|_| {
        RecipeError::InputFormat(format!("invalid quantity {:?} in {:?}", quantity, text))
    })?;
    if !quantity.is_finite() {
        return Err(RecipeError::InputFormat(format!(
            "quantity must be a finite number, got {} in {:?}",
            quantity, text
        )));
    }

    Ok(Ingredient::new(*name, quantity, *unit))
}

pub fn parse_ingredients<I: AsRef<str>>(entries: &[I], separator: char) -> Result<Vec<Ingredient>> {
    entries
        .iter()
        .map(|entry| parse_ingredient(entry.as_ref(), separator))
        .collect()
}
