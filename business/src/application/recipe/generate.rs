use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::RecipeProviderService;
use crate::domain::recipe::use_cases::generate::{GenerateRecipesParams, GenerateRecipesUseCase};

pub struct GenerateRecipesUseCaseImpl {
    pub provider: Arc<dyn RecipeProviderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateRecipesUseCase for GenerateRecipesUseCaseImpl {
    async fn execute(&self, params: GenerateRecipesParams) -> Result<Vec<Recipe>, RecipeError> {
        let request = params.request;

        self.logger.info(&format!(
            "Generating {} {} recipes from: {}{}",
            request.count,
            if request.is_mocktail { "mocktail" } else { "cocktail" },
            request.ingredients.join(", "),
            request
                .vibe
                .as_deref()
                .map(|v| format!(" (vibe: {})", v))
                .unwrap_or_default()
        ));

        let recipes = match self.provider.generate_recipes(&request).await {
            Ok(recipes) => recipes,
            Err(err) => {
                self.logger
                    .error(&format!("Error generating recipes: {}", err));
                return Err(err);
            }
        };

        self.logger
            .info(&format!("Generated {} recipes", recipes.len()));

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::model::{RecipeGenerationRequest, RecipeIngredient};
    use mockall::mock;

    mock! {
        pub RecipeProvider {}

        #[async_trait]
        impl RecipeProviderService for RecipeProvider {
            async fn generate_recipes(
                &self,
                request: &RecipeGenerationRequest,
            ) -> Result<Vec<Recipe>, RecipeError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_request() -> RecipeGenerationRequest {
        RecipeGenerationRequest::new(
            vec!["Gin".to_string(), "Tonic".to_string()],
            Some("Sophisticated".to_string()),
            false,
            3,
        )
        .unwrap()
    }

    fn sample_recipe() -> Recipe {
        Recipe {
            name: "Gin & Tonic".to_string(),
            description: None,
            glass_type: "Highball".to_string(),
            ingredients: vec![
                RecipeIngredient::new("Gin", "2 oz"),
                RecipeIngredient::new("Tonic", "4 oz"),
            ],
            instructions: vec!["Build over ice".to_string()],
            garnish: Some("Lime wedge".to_string()),
        }
    }

    #[tokio::test]
    async fn should_return_recipes_when_provider_succeeds() {
        let mut mock_provider = MockRecipeProvider::new();
        mock_provider
            .expect_generate_recipes()
            .withf(|request| request.ingredients == ["Gin", "Tonic"] && request.count == 3)
            .returning(|_| Ok(vec![sample_recipe()]));

        let use_case = GenerateRecipesUseCaseImpl {
            provider: Arc::new(mock_provider),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateRecipesParams {
                request: sample_request(),
            })
            .await;

        assert!(result.is_ok());
        let recipes = result.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Gin & Tonic");
    }

    #[tokio::test]
    async fn should_log_and_return_error_when_provider_fails() {
        let mut mock_provider = MockRecipeProvider::new();
        mock_provider
            .expect_generate_recipes()
            .returning(|_| Err(RecipeError::provider("rate limited")));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("rate limited"))
            .times(1)
            .returning(|_| ());

        let use_case = GenerateRecipesUseCaseImpl {
            provider: Arc::new(mock_provider),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(GenerateRecipesParams {
                request: sample_request(),
            })
            .await;

        assert!(matches!(result, Err(RecipeError::Provider(message)) if message == "rate limited"));
    }

    #[tokio::test]
    async fn should_not_yield_recipes_when_response_invalid() {
        let mut mock_provider = MockRecipeProvider::new();
        mock_provider
            .expect_generate_recipes()
            .returning(|_| Err(RecipeError::InvalidResponse));

        let use_case = GenerateRecipesUseCaseImpl {
            provider: Arc::new(mock_provider),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateRecipesParams {
                request: sample_request(),
            })
            .await;

        assert!(matches!(result, Err(RecipeError::InvalidResponse)));
    }
}
