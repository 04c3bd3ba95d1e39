use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::use_cases::generate::{GenerateRecipesParams, GenerateRecipesUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{GenerateRecipesRequest, RecipeBatchResponse, RecipeCardResponse};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    generate_use_case: Arc<dyn GenerateRecipesUseCase>,
    mode: String,
}

impl RecipeApi {
    pub fn new(generate_use_case: Arc<dyn GenerateRecipesUseCase>, mode: String) -> Self {
        Self {
            generate_use_case,
            mode,
        }
    }
}

/// Recipe API
///
/// Endpoints for generating cocktail and mocktail recipes from a bar selection.
#[OpenApi]
impl RecipeApi {
    /// Generate recipes
    ///
    /// Returns recipes built around the selected ingredients. An empty
    /// selection is rejected before any provider is called; a malformed
    /// provider answer yields no recipes at all.
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn generate_recipes(&self, body: Json<GenerateRecipesRequest>) -> GenerateRecipesResponse {
        let request = match body.0.selection().to_request(body.0.count()) {
            Ok(request) => request,
            Err(err) => return err.into(),
        };

        match self
            .generate_use_case
            .execute(GenerateRecipesParams { request })
            .await
        {
            Ok(recipes) => {
                let cards: Vec<RecipeCardResponse> =
                    recipes.into_iter().map(|r| r.into()).collect();
                GenerateRecipesResponse::Ok(Json(RecipeBatchResponse {
                    recipes: cards,
                    mode: self.mode.clone(),
                }))
            }
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeBatchResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

impl From<RecipeError> for GenerateRecipesResponse {
    fn from(err: RecipeError) -> Self {
        let is_validation = err.is_validation();
        let (_, json) = err.into_error_response();
        if is_validation {
            GenerateRecipesResponse::BadRequest(json)
        } else {
            GenerateRecipesResponse::BadGateway(json)
        }
    }
}
