use std::collections::HashSet;

use business::domain::recipe::model::{Recipe, RecipeIngredient};

/// Identifies one of the pre-authored recipe sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeKey {
    VodkaOrangeJuice,
    GinTonic,
    RumCoke,
    Default,
}

impl std::fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeKey::VodkaOrangeJuice => write!(f, "vodka-orange-juice"),
            RecipeKey::GinTonic => write!(f, "gin-tonic"),
            RecipeKey::RumCoke => write!(f, "rum-coke"),
            RecipeKey::Default => write!(f, "default"),
        }
    }
}

/// A set of ingredients that, when all selected, picks a recipe set.
pub struct MatchRule {
    pub requires: &'static [&'static str],
    pub key: RecipeKey,
}

impl MatchRule {
    fn matches(&self, selected: &HashSet<String>) -> bool {
        self.requires.iter().all(|name| selected.contains(*name))
    }
}

/// Checked top to bottom; the first satisfied rule wins. Anything else
/// selected alongside is ignored.
pub const MATCH_RULES: &[MatchRule] = &[
    MatchRule {
        requires: &["vodka", "orange juice"],
        key: RecipeKey::VodkaOrangeJuice,
    },
    MatchRule {
        requires: &["gin", "tonic"],
        key: RecipeKey::GinTonic,
    },
    MatchRule {
        requires: &["rum", "coke"],
        key: RecipeKey::RumCoke,
    },
];

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn match_key<S: AsRef<str>>(ingredients: &[S]) -> RecipeKey {
    let selected: HashSet<String> = ingredients.iter().map(|i| normalize(i.as_ref())).collect();

    MATCH_RULES
        .iter()
        .find(|rule| rule.matches(&selected))
        .map(|rule| rule.key)
        .unwrap_or(RecipeKey::Default)
}

fn recipe(
    name: &str,
    glass_type: &str,
    ingredients: &[(&str, &str)],
    instructions: &[&str],
    garnish: Option<&str>,
) -> Recipe {
    Recipe {
        name: name.to_string(),
        description: None,
        glass_type: glass_type.to_string(),
        ingredients: ingredients
            .iter()
            .map(|(name, amount)| RecipeIngredient::new(*name, *amount))
            .collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        garnish: garnish.map(|g| g.to_string()),
    }
}

/// The three recipes stored under `key`.
pub fn recipes_for(key: RecipeKey) -> Vec<Recipe> {
    match key {
        RecipeKey::VodkaOrangeJuice => vec![
            recipe(
                "Classic Screwdriver",
                "Highball",
                &[("Vodka", "2 oz"), ("Orange Juice", "4 oz")],
                &[
                    "Fill a highball glass with ice",
                    "Pour vodka over ice",
                    "Top with fresh orange juice",
                    "Stir gently and serve",
                ],
                None,
            ),
            recipe(
                "Sunrise Twist",
                "Collins",
                &[
                    ("Vodka", "1.5 oz"),
                    ("Orange Juice", "3 oz"),
                    ("Lime", "1 wedge"),
                ],
                &[
                    "Add ice to a collins glass",
                    "Pour vodka and orange juice",
                    "Squeeze lime wedge over drink",
                    "Stir and garnish with lime wheel",
                ],
                Some("Lime wheel"),
            ),
            recipe(
                "Citrus Cooler",
                "Rocks",
                &[
                    ("Vodka", "2 oz"),
                    ("Orange Juice", "2 oz"),
                    ("Soda Water", "2 oz"),
                ],
                &[
                    "Fill rocks glass with ice",
                    "Add vodka and orange juice",
                    "Top with soda water",
                    "Stir lightly and enjoy",
                ],
                None,
            ),
        ],
        RecipeKey::GinTonic => vec![
            recipe(
                "Classic Gin & Tonic",
                "Highball",
                &[("Gin", "2 oz"), ("Tonic", "4 oz"), ("Lime", "1 wedge")],
                &[
                    "Fill glass with ice cubes",
                    "Pour gin over ice",
                    "Top with tonic water",
                    "Squeeze lime wedge and drop in glass",
                ],
                Some("Lime wedge"),
            ),
            recipe(
                "Botanical Breeze",
                "Copa",
                &[("Gin", "2 oz"), ("Tonic", "5 oz"), ("Mint", "3 leaves")],
                &[
                    "Muddle mint leaves gently in glass",
                    "Add ice and gin",
                    "Top with premium tonic",
                    "Stir once and garnish",
                ],
                Some("Mint sprig"),
            ),
            recipe(
                "Garden Party G&T",
                "Highball",
                &[
                    ("Gin", "1.5 oz"),
                    ("Tonic", "4 oz"),
                    ("Lime", "2 wedges"),
                    ("Sugar", "1 tsp"),
                ],
                &[
                    "Rim glass with sugar",
                    "Fill with ice",
                    "Add gin and tonic",
                    "Garnish with lime wedges",
                ],
                Some("Lime"),
            ),
        ],
        RecipeKey::RumCoke => vec![
            recipe(
                "Cuba Libre",
                "Highball",
                &[("Rum", "2 oz"), ("Coke", "4 oz"), ("Lime", "1/2 lime")],
                &[
                    "Squeeze lime half into glass",
                    "Add ice cubes",
                    "Pour rum and cola",
                    "Stir and garnish with lime shell",
                ],
                Some("Lime shell"),
            ),
            recipe(
                "Spiced Rum & Cola",
                "Rocks",
                &[("Rum", "2 oz"), ("Coke", "3 oz")],
                &[
                    "Fill rocks glass with ice",
                    "Pour rum over ice",
                    "Top with cola",
                    "Stir gently",
                ],
                None,
            ),
            recipe(
                "Tropical Cola Splash",
                "Hurricane",
                &[
                    ("Rum", "1.5 oz"),
                    ("Coke", "3 oz"),
                    ("Orange Juice", "1 oz"),
                ],
                &[
                    "Fill hurricane glass with crushed ice",
                    "Add rum and orange juice",
                    "Top with cola",
                    "Stir and serve with straw",
                ],
                None,
            ),
        ],
        RecipeKey::Default => vec![
            recipe(
                "The Mixologist's Choice",
                "Coupe",
                &[
                    ("Your selected spirit", "2 oz"),
                    ("Your selected mixer", "3 oz"),
                ],
                &[
                    "Combine ingredients in a shaker with ice",
                    "Shake vigorously for 10 seconds",
                    "Strain into chilled coupe glass",
                    "Garnish as desired",
                ],
                None,
            ),
            recipe(
                "The Improviser",
                "Rocks",
                &[("Base spirit", "2 oz"), ("Mixer of choice", "4 oz")],
                &[
                    "Fill glass with fresh ice",
                    "Pour spirit over ice",
                    "Add mixer and stir",
                    "Taste and adjust to preference",
                ],
                None,
            ),
            recipe(
                "Creative Concoction",
                "Highball",
                &[("Selected ingredients", "as needed")],
                &[
                    "Build drink in glass over ice",
                    "Layer ingredients carefully",
                    "Stir gently to combine",
                    "Garnish creatively",
                ],
                None,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_vodka_orange_juice_over_gin_tonic() {
        let key = match_key(&["Vodka", "Orange Juice", "Gin", "Tonic"]);
        assert_eq!(key, RecipeKey::VodkaOrangeJuice);
    }

    #[test]
    fn should_prefer_gin_tonic_over_rum_coke() {
        let key = match_key(&["Rum", "Coke", "Gin", "Tonic"]);
        assert_eq!(key, RecipeKey::GinTonic);
    }

    #[test]
    fn should_match_regardless_of_case_and_spacing() {
        assert_eq!(
            match_key(&["VODKA", "orange juice"]),
            match_key(&["Vodka", "Orange Juice"])
        );
        assert_eq!(match_key(&[" Gin ", "TONIC"]), RecipeKey::GinTonic);
    }

    #[test]
    fn should_need_both_ingredients_of_a_pair() {
        assert_eq!(match_key(&["Vodka", "Tonic"]), RecipeKey::Default);
        assert_eq!(match_key(&["Pineapple"]), RecipeKey::Default);
    }

    #[test]
    fn should_hold_three_complete_recipes_per_key() {
        for key in [
            RecipeKey::VodkaOrangeJuice,
            RecipeKey::GinTonic,
            RecipeKey::RumCoke,
            RecipeKey::Default,
        ] {
            let recipes = recipes_for(key);
            assert_eq!(recipes.len(), 3, "{}", key);
            for recipe in recipes {
                assert!(!recipe.name.is_empty());
                assert!(!recipe.ingredients.is_empty());
                assert!(!recipe.instructions.is_empty());
            }
        }
    }

    #[test]
    fn should_render_keys_as_slugs() {
        assert_eq!(RecipeKey::VodkaOrangeJuice.to_string(), "vodka-orange-juice");
        assert_eq!(RecipeKey::Default.to_string(), "default");
    }
}
