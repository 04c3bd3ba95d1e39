//! Table-backed providers used when no model is configured.

pub mod ingredient_identifier;
pub mod recipe_provider;
pub mod recipe_table;
