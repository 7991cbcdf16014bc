use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `(name, quantity, unit)` line of a recipe.
///
/// Ingredients are values: once built they are never changed, and two
/// ingredients with the same fields are the same ingredient. No validation
/// happens here; zero, negative, or empty fields are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_quantity(self.quantity),
            self.unit,
            self.name
        )
    }
}

/// Whole numbers keep one decimal ("2.0") so quantities always read as
/// measurements; everything else uses the shortest exact form ("0.25").
pub fn format_quantity(quantity: f64) -> String {
    if quantity.is_finite() && quantity.fract() == 0.0 && quantity.abs() < 1e16 {
        format!("{:.1}", quantity)
    } else {
        quantity.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    category: String,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    instructions: String,
}

impl Recipe {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
        }
    }

    /// Appends to the end of the ingredient list. Duplicates are kept.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = instructions.into();
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Case-insensitive name comparison used for every lookup. Folds per
    /// character, so word-final sigma compares equal to a medial one.
    pub fn is_named(&self, name: &str) -> bool {
        fold_case(&self.name).eq(fold_case(name))
    }
}

fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  - {}", ingredient)?;
        }
        write!(f, "Instructions: {}", self.instructions)
    }
}
