//! Recipes Entity Module

pub mod recipe;

pub use recipe::{Recipe, RecipeChanges};
