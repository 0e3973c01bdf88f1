use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::planet::CreatePlanetParam,
        service::planet::PlanetService,
        state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let dtos: Vec<PlanetDto> = planets.into_iter().map(|planet| planet.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new planet.
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = StatusDto),
        (status = 400, description = "Invalid planet data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreatePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    PlanetService::new(&state.db)
        .create(CreatePlanetParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Planet created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Delete a planet.
///
/// # Returns
/// - `200 OK` - Planet deleted
/// - `404 Not Found` - Planet does not exist
/// - `409 Conflict` - Characters or species still reference the planet as homeworld
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet deleted", body = StatusDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 409, description = "Planet is still a homeworld", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    PlanetService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Planet deleted successfully")),
    ))
}
