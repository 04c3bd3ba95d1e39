use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::ingredient::errors::IngredientError;
use business::domain::ingredient::image::ImageUpload;
use business::domain::ingredient::services::IngredientIdentifierService;

use crate::client::{ChatCompletionError, OpenAIClient};

const SYSTEM_PROMPT: &str = r#"You are an expert at identifying bottles, ingredients, and bar supplies from photos.

Your task is to identify ALL visible bottles, ingredients, and bar items in the image.

IMPORTANT:
1. Look for bottle labels, logos, and text
2. Identify spirits (vodka, gin, rum, tequila, whiskey, etc.)
3. Identify mixers (sodas, juices, tonic water, etc.)
4. Identify garnishes (limes, lemons, mint, etc.)
5. Be specific about brands when visible
6. If you can't read a label clearly, make your best guess based on bottle shape/color

Return your response as a JSON object with this structure:
{
  "ingredients": ["ingredient1", "ingredient2", "ingredient3"]
}

List each identifiable ingredient separately. For example, if you see a bottle of vodka and a lime, return:
{"ingredients": ["Vodka", "Lime"]}"#;

const USER_PROMPT: &str =
    "Please identify all bottles, ingredients, and bar supplies visible in this image. Be thorough!";

const MAX_TOKENS: u32 = 500;

#[derive(Deserialize)]
struct IdentifiedIngredientsPayload {
    ingredients: Vec<String>,
}

pub struct IngredientIdentifierOpenAI {
    client: Arc<OpenAIClient>,
}

impl IngredientIdentifierOpenAI {
    pub fn new(client: Arc<OpenAIClient>) -> Self {
        Self { client }
    }

    pub fn parse_response(content: &str) -> Result<Vec<String>, IngredientError> {
        let json_match = regex::Regex::new(r"\{[\s\S]*\}")
            .ok()
            .and_then(|re| re.find(content));

        let json_str = json_match
            .map(|m| m.as_str())
            .ok_or(IngredientError::InvalidResponse)?;

        let parsed: IdentifiedIngredientsPayload =
            serde_json::from_str(json_str).map_err(|_| IngredientError::InvalidResponse)?;

        Ok(parsed
            .ingredients
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect())
    }
}

#[async_trait]
impl IngredientIdentifierService for IngredientIdentifierOpenAI {
    async fn identify_ingredients(
        &self,
        image: &ImageUpload,
    ) -> Result<Vec<String>, IngredientError> {
        let body = json!({
            "model": self.client.vision_model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {
                    "role": "user",
                    "content": [
                        {"type": "text", "text": USER_PROMPT},
                        {
                            "type": "image_url",
                            "image_url": {"url": image.to_data_url()},
                        },
                    ],
                },
            ],
            "response_format": {"type": "json_object"},
            "max_tokens": MAX_TOKENS,
        });

        let content = self
            .client
            .chat_completion(&body)
            .await
            .map_err(|err| match err {
                ChatCompletionError::Transport(message) => IngredientError::Provider(message),
                ChatCompletionError::NoContent => IngredientError::InvalidResponse,
            })?;

        Self::parse_response(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_ingredient_list() {
        let result =
            IngredientIdentifierOpenAI::parse_response(r#"{"ingredients":["Vodka"," Lime ",""]}"#);
        assert_eq!(result.unwrap(), vec!["Vodka", "Lime"]);
    }

    #[test]
    fn should_accept_empty_list() {
        let result = IngredientIdentifierOpenAI::parse_response(r#"{"ingredients":[]}"#);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn should_fail_when_field_missing_or_not_array() {
        let missing = IngredientIdentifierOpenAI::parse_response(r#"{"items":["Gin"]}"#);
        let not_array = IngredientIdentifierOpenAI::parse_response(r#"{"ingredients":"Gin"}"#);

        assert!(matches!(missing, Err(IngredientError::InvalidResponse)));
        assert!(matches!(not_array, Err(IngredientError::InvalidResponse)));
    }

    #[test]
    fn should_fail_when_an_entry_is_not_a_string() {
        let result = IngredientIdentifierOpenAI::parse_response(r#"{"ingredients":["Gin",1]}"#);
        assert!(matches!(result, Err(IngredientError::InvalidResponse)));
    }

    #[test]
    fn should_fail_when_content_has_no_json() {
        let result = IngredientIdentifierOpenAI::parse_response("I see a bottle of gin.");
        assert!(matches!(result, Err(IngredientError::InvalidResponse)));
    }
}
