use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            RecipeError::NoIngredients => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.no_ingredients",
            ),
            RecipeError::InvalidCount => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.invalid_count",
            ),
            RecipeError::InvalidResponse => error_response(
                StatusCode::BAD_GATEWAY,
                "InvalidResponse",
                "recipe.invalid_response",
            ),
            RecipeError::Provider(message) => {
                error_response(StatusCode::BAD_GATEWAY, "ProviderError", message)
            }
        }
    }
}
