use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::catalog::{IngredientCategory, VIBES, ingredients_in};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum IngredientCategoryDto {
    #[oai(rename = "spirit")]
    Spirit,
    #[oai(rename = "mixer")]
    Mixer,
    #[oai(rename = "garnish")]
    Garnish,
}

impl From<IngredientCategory> for IngredientCategoryDto {
    fn from(category: IngredientCategory) -> Self {
        match category {
            IngredientCategory::Spirit => IngredientCategoryDto::Spirit,
            IngredientCategory::Mixer => IngredientCategoryDto::Mixer,
            IngredientCategory::Garnish => IngredientCategoryDto::Garnish,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogCategoryResponse {
    /// Category identifier
    pub category: IngredientCategoryDto,
    /// Ingredient names, in display order
    pub ingredients: Vec<String>,
}

/// Everything the selection screen offers.
#[derive(Debug, Clone, Object)]
pub struct CatalogResponse {
    pub categories: Vec<CatalogCategoryResponse>,
    /// Available themes; at most one can be active
    pub vibes: Vec<String>,
}

impl CatalogResponse {
    pub fn build() -> Self {
        let categories = IngredientCategory::ALL
            .into_iter()
            .map(|category| CatalogCategoryResponse {
                category: category.into(),
                ingredients: ingredients_in(category)
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            })
            .collect();

        Self {
            categories,
            vibes: VIBES.iter().map(|v| v.to_string()).collect(),
        }
    }
}
