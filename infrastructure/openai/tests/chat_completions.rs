use std::sync::Arc;

use httpmock::{Method, MockServer};
use serde_json::json;

use business::domain::ingredient::errors::IngredientError;
use business::domain::ingredient::image::ImageUpload;
use business::domain::ingredient::services::IngredientIdentifierService;
use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::RecipeGenerationRequest;
use business::domain::recipe::services::RecipeProviderService;
use openai::client::OpenAIClient;
use openai::ingredient_identifier::IngredientIdentifierOpenAI;
use openai::recipe_generator::RecipeProviderOpenAI;

fn client_for(server: &MockServer) -> Arc<OpenAIClient> {
    Arc::new(
        OpenAIClient::new("TEST".to_string())
            .with_base_url(server.base_url())
            .with_model("gpt-test")
            .with_vision_model("gpt-test-vision"),
    )
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
}

fn gin_request() -> RecipeGenerationRequest {
    RecipeGenerationRequest::new(
        vec!["Gin".to_string(), "Tonic".to_string()],
        None,
        false,
        1,
    )
    .unwrap()
}

fn sample_image() -> ImageUpload {
    ImageUpload::new(Some("image/png"), vec![0x89, 0x50, 0x4E, 0x47]).unwrap()
}

#[tokio::test]
async fn should_return_recipe_when_completion_is_valid() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/chat/completions")
                .header("Authorization", "Bearer TEST");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion(
                    r#"{"recipes":[{"name":"X","ingredients":[{"name":"Lime","amount":"1"}],"instructions":["step"],"glassType":"Rocks"}]}"#,
                ));
        })
        .await;

    let provider = RecipeProviderOpenAI::new(client_for(&server));
    let recipes = provider.generate_recipes(&gin_request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "X");
}

#[tokio::test]
async fn should_fail_with_invalid_response_when_content_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"choices": [{"message": {"role": "assistant", "content": null}}]}));
        })
        .await;

    let provider = RecipeProviderOpenAI::new(client_for(&server));
    let result = provider.generate_recipes(&gin_request()).await;

    assert!(matches!(result, Err(RecipeError::InvalidResponse)));
}

#[tokio::test]
async fn should_fail_with_invalid_response_when_content_unparsable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion("Sorry, I can only suggest a Negroni."));
        })
        .await;

    let provider = RecipeProviderOpenAI::new(client_for(&server));
    let result = provider.generate_recipes(&gin_request()).await;

    assert!(matches!(result, Err(RecipeError::InvalidResponse)));
}

#[tokio::test]
async fn should_pass_service_message_through_when_request_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/chat/completions");
            then.status(429)
                .header("content-type", "application/json")
                .json_body(json!({"error": {"message": "Rate limit reached", "type": "requests"}}));
        })
        .await;

    let provider = RecipeProviderOpenAI::new(client_for(&server));
    let result = provider.generate_recipes(&gin_request()).await;

    match result {
        Err(RecipeError::Provider(message)) => assert!(message.contains("Rate limit reached")),
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn should_identify_ingredients_when_vision_reply_is_valid() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/chat/completions")
                .header("Authorization", "Bearer TEST");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion(r#"{"ingredients":["Vodka","Lime"]}"#));
        })
        .await;

    let identifier = IngredientIdentifierOpenAI::new(client_for(&server));
    let ingredients = identifier
        .identify_ingredients(&sample_image())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(ingredients, vec!["Vodka", "Lime"]);
}

#[tokio::test]
async fn should_fail_identification_when_ingredients_field_missing() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion(r#"{"bottles":["Vodka"]}"#));
        })
        .await;

    let identifier = IngredientIdentifierOpenAI::new(client_for(&server));
    let result = identifier.identify_ingredients(&sample_image()).await;

    assert!(matches!(result, Err(IngredientError::InvalidResponse)));
}

#[tokio::test]
async fn should_fail_identification_with_provider_error_when_service_unreachable() {
    let client = Arc::new(
        OpenAIClient::new("TEST".to_string()).with_base_url("http://127.0.0.1:1"),
    );

    let identifier = IngredientIdentifierOpenAI::new(client);
    let result = identifier.identify_ingredients(&sample_image()).await;

    assert!(matches!(result, Err(IngredientError::Provider(_))));
}
