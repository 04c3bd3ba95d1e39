use std::time::Duration;

use async_trait::async_trait;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{Recipe, RecipeGenerationRequest};
use business::domain::recipe::services::RecipeProviderService;

use crate::recipe_table::{match_key, recipes_for};

pub const DEFAULT_RECIPE_LATENCY: Duration = Duration::from_millis(1200);

/// Serves pre-authored recipes from a fixed table instead of calling a model.
///
/// Vibe, mocktail flag and count are ignored: every call answers with the
/// three recipes of the matched set.
pub struct DemoRecipeProvider {
    latency: Duration,
}

impl DemoRecipeProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for DemoRecipeProvider {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPE_LATENCY)
    }
}

#[async_trait]
impl RecipeProviderService for DemoRecipeProvider {
    async fn generate_recipes(
        &self,
        request: &RecipeGenerationRequest,
    ) -> Result<Vec<Recipe>, RecipeError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(recipes_for(match_key(&request.ingredients)))
    }
}
