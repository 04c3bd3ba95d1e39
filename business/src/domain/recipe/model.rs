use super::errors::RecipeError;

/// Recipes requested per generation when the caller does not say otherwise.
pub const DEFAULT_RECIPE_COUNT: usize = 3;

/// Upper bound on recipes requested in a single generation call.
pub const MAX_RECIPE_COUNT: usize = 10;

/// A single line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// A cocktail or mocktail definition ready to be rendered as a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub description: Option<String>,
    pub glass_type: String,
    pub ingredients: Vec<RecipeIngredient>,
    /// Steps in the order they must be performed.
    pub instructions: Vec<String>,
    pub garnish: Option<String>,
}

/// Creates a new Recipe with validation.
///
/// Fails with `InvalidResponse` when the name or glass is blank, the
/// ingredient or instruction lists are empty, or any ingredient name or
/// instruction step is blank. Recipes only ever come from providers.
pub fn create_recipe(
    name: String,
    description: Option<String>,
    glass_type: String,
    ingredients: Vec<RecipeIngredient>,
    instructions: Vec<String>,
    garnish: Option<String>,
) -> Result<Recipe, RecipeError> {
    if name.trim().is_empty() || glass_type.trim().is_empty() {
        return Err(RecipeError::InvalidResponse);
    }

    if ingredients.is_empty() || instructions.is_empty() {
        return Err(RecipeError::InvalidResponse);
    }

    if ingredients.iter().any(|i| i.name.trim().is_empty())
        || instructions.iter().any(|step| step.trim().is_empty())
    {
        return Err(RecipeError::InvalidResponse);
    }

    Ok(Recipe {
        name: name.trim().to_string(),
        description: description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        glass_type: glass_type.trim().to_string(),
        ingredients: ingredients
            .into_iter()
            .map(|i| RecipeIngredient::new(i.name.trim(), i.amount.trim()))
            .collect(),
        instructions: instructions
            .into_iter()
            .map(|step| step.trim().to_string())
            .collect(),
        garnish: garnish
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty()),
    })
}

/// Input handed to a recipe provider. Built fresh from a selection for every
/// call; `ingredients` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeGenerationRequest {
    pub ingredients: Vec<String>,
    pub vibe: Option<String>,
    pub is_mocktail: bool,
    pub count: usize,
}

impl RecipeGenerationRequest {
    pub fn new(
        ingredients: Vec<String>,
        vibe: Option<String>,
        is_mocktail: bool,
        count: usize,
    ) -> Result<Self, RecipeError> {
        if ingredients.is_empty() {
            return Err(RecipeError::NoIngredients);
        }
        if count == 0 || count > MAX_RECIPE_COUNT {
            return Err(RecipeError::InvalidCount);
        }

        Ok(Self {
            ingredients,
            vibe: vibe.filter(|v| !v.trim().is_empty()),
            is_mocktail,
            count,
        })
    }

    /// "mocktail (non-alcoholic)" or "cocktail", as used in prompts.
    pub fn drink_kind(&self) -> &'static str {
        if self.is_mocktail {
            "mocktail (non-alcoholic)"
        } else {
            "cocktail"
        }
    }
}
