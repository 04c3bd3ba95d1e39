use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::services::IngredientIdentifierService;
use crate::domain::ingredient::use_cases::identify::{
    IdentifyIngredientsParams, IdentifyIngredientsUseCase,
};
use crate::domain::logger::Logger;

pub struct IdentifyIngredientsUseCaseImpl {
    pub identifier: Arc<dyn IngredientIdentifierService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IdentifyIngredientsUseCase for IdentifyIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: IdentifyIngredientsParams,
    ) -> Result<Vec<String>, IngredientError> {
        self.logger.info(&format!(
            "Identifying ingredients from {} image ({} bytes)",
            params.image.mime_type(),
            params.image.byte_len()
        ));

        let ingredients = match self.identifier.identify_ingredients(&params.image).await {
            Ok(ingredients) => ingredients,
            Err(err) => {
                self.logger
                    .error(&format!("Error identifying ingredients: {}", err));
                return Err(err);
            }
        };

        if ingredients.is_empty() {
            self.logger.warn("No ingredients identified in image");
        } else {
            self.logger.info(&format!(
                "Identified {} ingredients: {}",
                ingredients.len(),
                ingredients.join(", ")
            ));
        }

        Ok(ingredients)
    }
}
