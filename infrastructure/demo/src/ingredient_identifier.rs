use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use business::domain::ingredient::errors::IngredientError;
use business::domain::ingredient::image::ImageUpload;
use business::domain::ingredient::services::IngredientIdentifierService;

pub const DEFAULT_IDENTIFY_LATENCY: Duration = Duration::from_millis(1500);

/// Names handed out by the demo identifier, always as a prefix.
pub const DEMO_INGREDIENTS: [&str; 7] = [
    "Vodka",
    "Gin",
    "Rum",
    "Tonic",
    "Orange Juice",
    "Lime",
    "Mint",
];

/// Stand-in for the vision call. The image is never looked at.
pub struct DemoIngredientIdentifier {
    latency: Duration,
}

impl DemoIngredientIdentifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for DemoIngredientIdentifier {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTIFY_LATENCY)
    }
}

#[async_trait]
impl IngredientIdentifierService for DemoIngredientIdentifier {
    async fn identify_ingredients(
        &self,
        _image: &ImageUpload,
    ) -> Result<Vec<String>, IngredientError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let count = rand::rng().random_range(4..=6);

        Ok(DEMO_INGREDIENTS
            .iter()
            .take(count)
            .map(|name| name.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_four_to_six_item_prefix_starting_with_vodka() {
        let identifier = DemoIngredientIdentifier::new(Duration::ZERO);
        let image = ImageUpload::new(Some("image/jpeg"), vec![1, 2, 3]).unwrap();

        for _ in 0..50 {
            let ingredients = identifier.identify_ingredients(&image).await.unwrap();

            assert!((4..=6).contains(&ingredients.len()));
            assert_eq!(ingredients[0], "Vodka");
            assert_eq!(ingredients, DEMO_INGREDIENTS[..ingredients.len()]);
        }
    }
}
