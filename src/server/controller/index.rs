use std::sync::LazyLock;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::SitemapDto,
    server::router::{self, OPENAPI_PATH},
};

/// Tag for grouping the index endpoint in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

static SITEMAP: LazyLock<SitemapDto> = LazyLock::new(|| {
    let mut endpoints: Vec<String> = router::openapi().paths.paths.into_keys().collect();
    endpoints.push(OPENAPI_PATH.to_string());
    endpoints.sort();

    SitemapDto { endpoints }
});

/// List every path the API serves.
///
/// The list is derived from the OpenAPI document once and reused afterwards.
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Sitemap of registered endpoints", body = SitemapDto)
    ),
)]
pub async fn get_sitemap() -> impl IntoResponse {
    (StatusCode::OK, Json(SITEMAP.clone()))
}
