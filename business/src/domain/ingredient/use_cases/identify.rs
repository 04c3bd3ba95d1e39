use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::image::ImageUpload;

pub struct IdentifyIngredientsParams {
    pub image: ImageUpload,
}

#[async_trait]
pub trait IdentifyIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: IdentifyIngredientsParams,
    ) -> Result<Vec<String>, IngredientError>;
}
