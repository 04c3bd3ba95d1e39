pub mod client;
pub mod ingredient_identifier;
pub mod recipe_generator;
