use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::catalog::category_of;
use business::domain::selection::model::SelectionState;

use crate::api::catalog::dto::IngredientCategoryDto;

/// Photo of a bar plus the selection it should be merged into.
#[derive(Multipart)]
pub struct IdentifyIngredientsForm {
    /// Photo to analyze (any image/* content type)
    pub image: Upload,
    /// Current selection, comma-separated
    pub selected: Option<String>,
}

/// Splits a comma-separated selection, dropping blank entries.
pub fn parse_selected(selected: Option<&str>) -> SelectionState {
    let names = selected
        .unwrap_or_default()
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    SelectionState::from_choices(names, None, false)
}

/// One ingredient found in the photo.
#[derive(Debug, Clone, Object)]
pub struct IdentifiedIngredientResponse {
    /// Ingredient name as reported by the identifier
    pub name: String,
    /// Catalog section the name belongs to; absent for off-catalog items
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<IngredientCategoryDto>,
}

impl From<String> for IdentifiedIngredientResponse {
    fn from(name: String) -> Self {
        let category = category_of(&name).map(|c| c.into());
        Self { name, category }
    }
}

#[derive(Debug, Clone, Object)]
pub struct IdentifiedIngredientsResponse {
    /// Ingredients found in the photo
    pub identified: Vec<IdentifiedIngredientResponse>,
    /// Selection after merging the identified names
    pub selection: Vec<String>,
    /// How many identified names were not selected before
    pub added: usize,
}
