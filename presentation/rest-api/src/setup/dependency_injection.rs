use std::sync::Arc;

use logger::TracingLogger;

use demo::ingredient_identifier::{DEFAULT_IDENTIFY_LATENCY, DemoIngredientIdentifier};
use demo::recipe_provider::{DEFAULT_RECIPE_LATENCY, DemoRecipeProvider};
use openai::client::OpenAIClient;
use openai::ingredient_identifier::IngredientIdentifierOpenAI;
use openai::recipe_generator::RecipeProviderOpenAI;

use business::application::ingredient::identify::IdentifyIngredientsUseCaseImpl;
use business::application::recipe::generate::GenerateRecipesUseCaseImpl;
use business::domain::ingredient::services::IngredientIdentifierService;
use business::domain::logger::Logger;
use business::domain::recipe::services::RecipeProviderService;

use crate::config::provider_config::{OpenAIConfig, ProviderConfig, ProviderMode};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub recipe_api: crate::api::recipe::routes::RecipeApi,
    pub ingredient_api: crate::api::ingredient::routes::IngredientApi,
}

type Providers = (
    Arc<dyn RecipeProviderService>,
    Arc<dyn IngredientIdentifierService>,
);

impl DependencyContainer {
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let mode = config.mode.to_string();

        // Infrastructure adapters
        let (recipe_provider, ingredient_identifier) = match (config.mode, &config.openai) {
            (ProviderMode::Live, Some(openai)) => live_providers(openai),
            (ProviderMode::Live, None) => {
                anyhow::bail!("live provider mode requires an OpenAI configuration")
            }
            (ProviderMode::Demo, _) => demo_providers(config),
        };
        logger.info(&format!("Providers wired in {} mode", mode));

        // Use cases
        let generate_use_case = Arc::new(GenerateRecipesUseCaseImpl {
            provider: recipe_provider,
            logger: logger.clone(),
        });
        let identify_use_case = Arc::new(IdentifyIngredientsUseCaseImpl {
            identifier: ingredient_identifier,
            logger,
        });

        Ok(Self {
            health_api: crate::api::health::routes::Api::new(mode.clone()),
            catalog_api: crate::api::catalog::routes::CatalogApi::new(),
            recipe_api: crate::api::recipe::routes::RecipeApi::new(generate_use_case, mode),
            ingredient_api: crate::api::ingredient::routes::IngredientApi::new(identify_use_case),
        })
    }
}

fn live_providers(config: &OpenAIConfig) -> Providers {
    let mut client = OpenAIClient::new(config.api_key.clone());
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url.as_str());
    }
    if let Some(model) = &config.model {
        client = client.with_model(model.as_str());
    }
    if let Some(vision_model) = &config.vision_model {
        client = client.with_vision_model(vision_model.as_str());
    }
    let client = Arc::new(client);

    (
        Arc::new(RecipeProviderOpenAI::new(client.clone())),
        Arc::new(IngredientIdentifierOpenAI::new(client)),
    )
}

fn demo_providers(config: &ProviderConfig) -> Providers {
    let recipe_latency = config.demo_latency.unwrap_or(DEFAULT_RECIPE_LATENCY);
    let identify_latency = config.demo_latency.unwrap_or(DEFAULT_IDENTIFY_LATENCY);

    (
        Arc::new(DemoRecipeProvider::new(recipe_latency)),
        Arc::new(DemoIngredientIdentifier::new(identify_latency)),
    )
}
