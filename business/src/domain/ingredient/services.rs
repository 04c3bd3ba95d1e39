use async_trait::async_trait;

use super::errors::IngredientError;
use super::image::ImageUpload;

/// Service port for reading ingredient names off a photo of a bar.
///
/// The result may be empty. Implementations never touch the caller's
/// selection; merging is up to the caller.
#[async_trait]
pub trait IngredientIdentifierService: Send + Sync {
    async fn identify_ingredients(
        &self,
        image: &ImageUpload,
    ) -> Result<Vec<String>, IngredientError>;
}
