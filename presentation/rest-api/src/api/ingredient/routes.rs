use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::ingredient::errors::IngredientError;
use business::domain::ingredient::image::ImageUpload;
use business::domain::ingredient::use_cases::identify::{
    IdentifyIngredientsParams, IdentifyIngredientsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::{
    IdentifiedIngredientsResponse, IdentifyIngredientsForm, parse_selected,
};
use crate::api::tags::ApiTags;

pub struct IngredientApi {
    identify_use_case: Arc<dyn IdentifyIngredientsUseCase>,
}

impl IngredientApi {
    pub fn new(identify_use_case: Arc<dyn IdentifyIngredientsUseCase>) -> Self {
        Self { identify_use_case }
    }
}

#[OpenApi]
impl IngredientApi {
    /// Identify ingredients from a photo
    ///
    /// Detects bottles and bar ingredients in the uploaded photo and merges
    /// them into the given selection. Names already selected are not
    /// duplicated; `added` counts the new ones.
    #[oai(
        path = "/ingredients/identify",
        method = "post",
        tag = "ApiTags::Ingredients"
    )]
    async fn identify_ingredients(
        &self,
        form: IdentifyIngredientsForm,
    ) -> IdentifyIngredientsResponse {
        let content_type = form.image.content_type().map(|s| s.to_string());
        let image = match form.image.into_vec().await {
            Ok(bytes) => ImageUpload::new(content_type.as_deref(), bytes),
            Err(_) => Err(IngredientError::UnreadableImage),
        };
        let image = match image {
            Ok(image) => image,
            Err(err) => return err.into(),
        };

        match self
            .identify_use_case
            .execute(IdentifyIngredientsParams { image })
            .await
        {
            Ok(identified) => {
                let mut selection = parse_selected(form.selected.as_deref());
                let added = selection.merge_ingredients(identified.as_slice());
                IdentifyIngredientsResponse::Ok(Json(IdentifiedIngredientsResponse {
                    identified: identified.into_iter().map(|name| name.into()).collect(),
                    selection: selection.ingredients().to_vec(),
                    added,
                }))
            }
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum IdentifyIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<IdentifiedIngredientsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

impl From<IngredientError> for IdentifyIngredientsResponse {
    fn from(err: IngredientError) -> Self {
        let is_validation = err.is_validation();
        let (_, json) = err.into_error_response();
        if is_validation {
            IdentifyIngredientsResponse::BadRequest(json)
        } else {
            IdentifyIngredientsResponse::BadGateway(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_answer_bad_request_when_upload_is_unreadable() {
        let response: IdentifyIngredientsResponse = IngredientError::UnreadableImage.into();

        match response {
            IdentifyIngredientsResponse::BadRequest(json) => {
                assert_eq!(json.0.message, "ingredient.unreadable_image")
            }
            _ => panic!("expected BadRequest"),
        }
    }

    #[test]
    fn should_answer_bad_gateway_when_reply_is_malformed() {
        let response: IdentifyIngredientsResponse = IngredientError::InvalidResponse.into();

        match response {
            IdentifyIngredientsResponse::BadGateway(json) => {
                assert_eq!(json.0.message, "ingredient.invalid_response")
            }
            _ => panic!("expected BadGateway"),
        }
    }
}
