use poem_openapi::{OpenApi, payload::Json};

use crate::api::catalog::dto::CatalogResponse;
use crate::api::tags::ApiTags;

pub struct CatalogApi;

impl CatalogApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl CatalogApi {
    /// Ingredient catalog
    ///
    /// Lists the spirits, mixers and garnishes that can be selected, plus
    /// the available vibes.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(&self) -> Json<CatalogResponse> {
        Json(CatalogResponse::build())
    }
}
