#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.not_an_image")]
    NotAnImage,
    #[error("ingredient.unreadable_image")]
    UnreadableImage,
    #[error("ingredient.invalid_response")]
    InvalidResponse,
    #[error("{0}")]
    Provider(String),
}

impl IngredientError {
    pub fn provider(message: impl Into<String>) -> Self {
        IngredientError::Provider(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            IngredientError::NotAnImage | IngredientError::UnreadableImage
        )
    }
}
