use std::collections::BTreeSet;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeGenerationRequest;

/// The user's current bar choices, driving the next generation request.
///
/// Ingredients behave as a set: each name appears at most once. Insertion
/// order is kept because it shapes the prompt, but it is ignored when two
/// selections are compared.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    ingredients: Vec<String>,
    vibe: Option<String>,
    is_mocktail: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from raw choices, collapsing duplicates and
    /// dropping blank names.
    pub fn from_choices(ingredients: Vec<String>, vibe: Option<String>, is_mocktail: bool) -> Self {
        let mut selection = Self::new();
        selection.merge_ingredients(&ingredients);
        if let Some(vibe) = vibe {
            selection.select_vibe(&vibe);
        }
        selection.set_mocktail(is_mocktail);
        selection
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn vibe(&self) -> Option<&str> {
        self.vibe.as_deref()
    }

    pub fn is_mocktail(&self) -> bool {
        self.is_mocktail
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.iter().any(|i| i == name.trim())
    }

    /// Adds the ingredient when absent, removes it when present.
    pub fn toggle_ingredient(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        if let Some(position) = self.ingredients.iter().position(|i| i == name) {
            self.ingredients.remove(position);
        } else {
            self.ingredients.push(name.to_string());
        }
    }

    /// Selecting the active vibe clears it; any other vibe replaces it.
    pub fn select_vibe(&mut self, vibe: &str) {
        let vibe = vibe.trim();
        if vibe.is_empty() || self.vibe.as_deref() == Some(vibe) {
            self.vibe = None;
        } else {
            self.vibe = Some(vibe.to_string());
        }
    }

    pub fn set_mocktail(&mut self, is_mocktail: bool) {
        self.is_mocktail = is_mocktail;
    }

    /// Appends every name not already selected, keeping the given order.
    /// Returns how many were added.
    pub fn merge_ingredients<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let mut added = 0;
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !self.contains(name) {
                self.ingredients.push(name.to_string());
                added += 1;
            }
        }
        added
    }

    /// Snapshot of the selection as a provider request. An empty selection
    /// never reaches a provider.
    pub fn to_request(&self, count: usize) -> Result<RecipeGenerationRequest, RecipeError> {
        RecipeGenerationRequest::new(
            self.ingredients.clone(),
            self.vibe.clone(),
            self.is_mocktail,
            count,
        )
    }

    fn ingredient_set(&self) -> BTreeSet<&str> {
        self.ingredients.iter().map(String::as_str).collect()
    }
}

impl PartialEq for SelectionState {
    fn eq(&self, other: &Self) -> bool {
        self.ingredient_set() == other.ingredient_set()
            && self.vibe == other.vibe
            && self.is_mocktail == other.is_mocktail
    }
}

impl Eq for SelectionState {}
