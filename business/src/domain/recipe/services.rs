use async_trait::async_trait;

use super::errors::RecipeError;
use super::model::{Recipe, RecipeGenerationRequest};

/// Service port for producing recipes from a bar selection.
///
/// Implementations either call a hosted model or serve a fixed table; the
/// caller cannot tell them apart. A successful result only ever holds
/// complete recipes: a malformed upstream answer fails the whole call.
#[async_trait]
pub trait RecipeProviderService: Send + Sync {
    async fn generate_recipes(
        &self,
        request: &RecipeGenerationRequest,
    ) -> Result<Vec<Recipe>, RecipeError>;
}
