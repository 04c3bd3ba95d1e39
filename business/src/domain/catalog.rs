pub const SPIRITS: &[&str] = &["Vodka", "Gin", "Rum", "Tequila", "Whiskey"];
pub const MIXERS: &[&str] = &["Coke", "Soda Water", "Tonic", "Orange Juice", "Lemon Juice"];
pub const GARNISHES: &[&str] = &["Lime", "Mint", "Sugar", "Salt"];

/// Themes a user can ask the drinks to match. At most one is active.
pub const VIBES: &[&str] = &[
    "Cozy",
    "Wild",
    "Sophisticated",
    "Tropical",
    "Festive",
    "Romantic",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientCategory {
    Spirit,
    Mixer,
    Garnish,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 3] = [
        IngredientCategory::Spirit,
        IngredientCategory::Mixer,
        IngredientCategory::Garnish,
    ];
}

pub fn ingredients_in(category: IngredientCategory) -> &'static [&'static str] {
    match category {
        IngredientCategory::Spirit => SPIRITS,
        IngredientCategory::Mixer => MIXERS,
        IngredientCategory::Garnish => GARNISHES,
    }
}

/// Looks an ingredient up in the catalog, ignoring case and surrounding
/// whitespace. Ingredients identified from photos are often not listed.
pub fn category_of(name: &str) -> Option<IngredientCategory> {
    let name = name.trim();
    IngredientCategory::ALL.into_iter().find(|category| {
        ingredients_in(*category)
            .iter()
            .any(|known| known.eq_ignore_ascii_case(name))
    })
}
