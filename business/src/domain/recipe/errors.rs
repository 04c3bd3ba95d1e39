/// Recipe generation errors.
/// Validation variants use code-style identifiers for i18n compatibility;
/// provider failures carry the upstream message verbatim.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.no_ingredients")]
    NoIngredients,
    #[error("recipe.invalid_count")]
    InvalidCount,
    #[error("recipe.invalid_response")]
    InvalidResponse,
    #[error("{0}")]
    Provider(String),
}

impl RecipeError {
    pub fn provider(message: impl Into<String>) -> Self {
        RecipeError::Provider(message.into())
    }

    /// True for errors raised before any provider call is attempted.
    pub fn is_validation(&self) -> bool {
        matches!(self, RecipeError::NoIngredients | RecipeError::InvalidCount)
    }
}
