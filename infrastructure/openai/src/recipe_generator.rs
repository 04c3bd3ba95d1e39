use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{
    Recipe, RecipeGenerationRequest, RecipeIngredient, create_recipe,
};
use business::domain::recipe::services::RecipeProviderService;

use crate::client::{ChatCompletionError, OpenAIClient};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipePayload {
    name: String,
    description: Option<String>,
    ingredients: Vec<IngredientPayload>,
    instructions: Vec<String>,
    glass_type: String,
    garnish: Option<String>,
}

#[derive(Deserialize)]
struct IngredientPayload {
    #[serde(alias = "item")]
    name: String,
    amount: String,
}

pub struct RecipeProviderOpenAI {
    client: Arc<OpenAIClient>,
}

impl RecipeProviderOpenAI {
    pub fn new(client: Arc<OpenAIClient>) -> Self {
        Self { client }
    }

    fn build_system_prompt(request: &RecipeGenerationRequest) -> String {
        format!(
            r#"You are an expert mixologist and cocktail recipe creator. Your task is to create {count} unique and delicious {kind} recipes.

CRITICAL RULES:
1. The user's selected ingredients are the PRIMARY ingredients - each recipe MUST feature at least one of them prominently
2. You MAY also use common bar staples that any home bar would have: ice, water, simple syrup, club soda, bitters, citrus juice (lime/lemon)
3. If the user selected garnishes, incorporate them creatively
4. Each recipe must be COMPLETELY different from the others - vary the ratios, techniques, and presentations
5. Create REAL, BALANCED drinks using proper mixology techniques
6. Include precise measurements and clear techniques
7. Never suggest dangerous combinations

If the user only selected 2-3 ingredients, enhance them with citrus, bitters, or simple syrup to create balanced, professional drinks.

Return your response as a JSON object with a "recipes" array containing {count} recipe objects.

EXACT FORMAT REQUIRED:
{{
  "recipes": [
    {{
      "name": "Creative drink name",
      "description": "Brief 1-2 sentence description of the drink and its flavor profile",
      "ingredients": [
        {{"name": "Ingredient name", "amount": "2 oz"}}
      ],
      "instructions": ["Step 1", "Step 2", "Step 3"],
      "glassType": "Type of glass (e.g., 'Highball', 'Martini', 'Rocks')",
      "garnish": "Optional garnish suggestion"
    }}
  ]
}}"#,
            count = request.count,
            kind = request.drink_kind(),
        )
    }

    fn build_user_prompt(request: &RecipeGenerationRequest) -> String {
        let mut parts = vec![format!(
            "Create {} {} recipes featuring these ingredients as the PRIMARY components:\n{}",
            request.count,
            request.drink_kind(),
            request.ingredients.join(", ")
        )];
        if let Some(vibe) = &request.vibe {
            parts.push(format!("The drinks should match this vibe/theme: {}", vibe));
        }
        parts.push(
            "Remember: Feature my ingredients prominently! You can add bar staples (citrus, simple syrup, bitters, soda) to create balanced, professional drinks."
                .to_string(),
        );
        parts.join("\n\n")
    }

    /// Parses the model's reply into recipes.
    ///
    /// Accepts a bare array or an object exposing `recipes` (or the older
    /// `cocktails`). A single malformed recipe fails the whole reply.
    pub fn parse_response(content: &str) -> Result<Vec<Recipe>, RecipeError> {
        // Remove markdown code blocks if present
        let mut json_text = content.trim().to_string();
        if json_text.starts_with("```json") {
            json_text = json_text
                .replace("```json", "")
                .replace("```", "")
                .trim()
                .to_string();
        } else if json_text.starts_with("```") {
            json_text = json_text.replace("```", "").trim().to_string();
        }

        let parsed: serde_json::Value =
            serde_json::from_str(&json_text).map_err(|_| RecipeError::InvalidResponse)?;

        let items = match parsed {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(mut fields) => {
                let recipes = fields
                    .remove("recipes")
                    .filter(|v| !v.is_null())
                    .or_else(|| fields.remove("cocktails"));
                match recipes {
                    Some(serde_json::Value::Array(items)) => items,
                    _ => return Err(RecipeError::InvalidResponse),
                }
            }
            _ => return Err(RecipeError::InvalidResponse),
        };

        items
            .into_iter()
            .map(|item| {
                let payload: RecipePayload =
                    serde_json::from_value(item).map_err(|_| RecipeError::InvalidResponse)?;

                create_recipe(
                    payload.name,
                    payload.description,
                    payload.glass_type,
                    payload
                        .ingredients
                        .into_iter()
                        .map(|i| RecipeIngredient::new(i.name, i.amount))
                        .collect(),
                    payload.instructions,
                    payload.garnish,
                )
            })
            .collect()
    }
}

#[async_trait]
impl RecipeProviderService for RecipeProviderOpenAI {
    async fn generate_recipes(
        &self,
        request: &RecipeGenerationRequest,
    ) -> Result<Vec<Recipe>, RecipeError> {
        let body = json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": Self::build_system_prompt(request)},
                {"role": "user", "content": Self::build_user_prompt(request)},
            ],
            "response_format": {"type": "json_object"},
            "temperature": 0.9,
        });

        let content = self
            .client
            .chat_completion(&body)
            .await
            .map_err(|err| match err {
                ChatCompletionError::Transport(message) => RecipeError::Provider(message),
                ChatCompletionError::NoContent => RecipeError::InvalidResponse,
            })?;

        Self::parse_response(&content)
    }
}
