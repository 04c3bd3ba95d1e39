use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::ingredient::errors::IngredientError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for IngredientError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            IngredientError::NotAnImage => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "ingredient.not_an_image",
            ),
            IngredientError::UnreadableImage => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "ingredient.unreadable_image",
            ),
            IngredientError::InvalidResponse => error_response(
                StatusCode::BAD_GATEWAY,
                "InvalidResponse",
                "ingredient.invalid_response",
            ),
            IngredientError::Provider(message) => {
                error_response(StatusCode::BAD_GATEWAY, "ProviderError", message)
            }
        }
    }
}
