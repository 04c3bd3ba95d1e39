use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeGenerationRequest};

pub struct GenerateRecipesParams {
    pub request: RecipeGenerationRequest,
}

#[async_trait]
pub trait GenerateRecipesUseCase: Send + Sync {
    async fn execute(&self, params: GenerateRecipesParams) -> Result<Vec<Recipe>, RecipeError>;
}
