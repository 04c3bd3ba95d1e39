use poem_openapi::Object;

use business::domain::recipe::model::{DEFAULT_RECIPE_COUNT, Recipe, RecipeIngredient};
use business::domain::selection::model::SelectionState;

/// Selection to generate recipes from.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    /// Selected ingredient names (at least one)
    pub ingredients: Vec<String>,
    /// Optional theme the drinks should match
    #[oai(skip_serializing_if_is_none)]
    pub vibe: Option<String>,
    /// Ask for non-alcoholic drinks (default: false)
    #[oai(skip_serializing_if_is_none)]
    pub is_mocktail: Option<bool>,
    /// Number of recipes to generate (default: 3, max: 10)
    #[oai(skip_serializing_if_is_none)]
    pub count: Option<usize>,
}

impl GenerateRecipesRequest {
    pub fn selection(&self) -> SelectionState {
        SelectionState::from_choices(
            self.ingredients.clone(),
            self.vibe.clone(),
            self.is_mocktail.unwrap_or(false),
        )
    }

    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_RECIPE_COUNT)
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecipeIngredientResponse {
    /// Ingredient name
    pub name: String,
    /// Measured amount, e.g. "2 oz"
    pub amount: String,
}

impl From<RecipeIngredient> for RecipeIngredientResponse {
    fn from(i: RecipeIngredient) -> Self {
        Self {
            name: i.name,
            amount: i.amount,
        }
    }
}

/// A recipe ready to be rendered as a card.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecipeCardResponse {
    /// Drink name
    pub name: String,
    /// Short flavor profile
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Glass to serve in
    pub glass_type: String,
    /// Ingredients with amounts
    pub ingredients: Vec<RecipeIngredientResponse>,
    /// Preparation steps, in order
    pub instructions: Vec<String>,
    /// Garnish suggestion
    #[oai(skip_serializing_if_is_none)]
    pub garnish: Option<String>,
}

impl From<Recipe> for RecipeCardResponse {
    fn from(r: Recipe) -> Self {
        Self {
            name: r.name,
            description: r.description,
            glass_type: r.glass_type,
            ingredients: r.ingredients.into_iter().map(|i| i.into()).collect(),
            instructions: r.instructions,
            garnish: r.garnish,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecipeBatchResponse {
    /// Generated recipes
    pub recipes: Vec<RecipeCardResponse>,
    /// Provider that produced them: "live" or "demo"
    pub mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_count_and_mocktail_flag() {
        let request = GenerateRecipesRequest {
            ingredients: vec!["Gin".to_string(), "Gin".to_string(), "Tonic".to_string()],
            vibe: Some("Cozy".to_string()),
            is_mocktail: None,
            count: None,
        };

        let generation = request.selection().to_request(request.count()).unwrap();

        assert_eq!(generation.ingredients, vec!["Gin", "Tonic"]);
        assert_eq!(generation.vibe.as_deref(), Some("Cozy"));
        assert!(!generation.is_mocktail);
        assert_eq!(generation.count, DEFAULT_RECIPE_COUNT);
    }

    #[test]
    fn should_map_recipe_to_card() {
        let recipe = Recipe {
            name: "Cuba Libre".to_string(),
            description: None,
            glass_type: "Highball".to_string(),
            ingredients: vec![RecipeIngredient::new("Rum", "2 oz")],
            instructions: vec!["Build over ice".to_string()],
            garnish: Some("Lime shell".to_string()),
        };

        let card: RecipeCardResponse = recipe.into();

        assert_eq!(card.name, "Cuba Libre");
        assert_eq!(card.glass_type, "Highball");
        assert_eq!(card.ingredients[0].name, "Rum");
        assert_eq!(card.ingredients[0].amount, "2 oz");
        assert_eq!(card.garnish.as_deref(), Some("Lime shell"));
    }
}
