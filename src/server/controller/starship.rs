use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        starship::{CreateStarshipDto, StarshipDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::starship::CreateStarshipParam,
        service::starship::StarshipService,
        state::AppState,
    },
};

/// Tag for grouping starship endpoints in OpenAPI documentation
pub static STARSHIP_TAG: &str = "starship";

#[utoipa::path(
    get,
    path = "/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved starships", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let starships = StarshipService::new(&state.db).get_all().await?;

    let dtos: Vec<StarshipDto> = starships
        .into_iter()
        .map(|starship| starship.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new starship.
///
/// The `MGLT` field keeps its upper-case name on the wire.
#[utoipa::path(
    post,
    path = "/starships",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    responses(
        (status = 201, description = "Starship created", body = StatusDto),
        (status = 400, description = "Invalid starship data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_starship(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStarshipDto>,
) -> Result<impl IntoResponse, AppError> {
    StarshipService::new(&state.db)
        .create(CreateStarshipParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Starship created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/starships/{id}",
    tag = STARSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Starship ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved starship", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let starship = StarshipService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(starship.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/starships/{id}",
    tag = STARSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Starship ID")
    ),
    responses(
        (status = 200, description = "Starship deleted", body = StatusDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_starship(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    StarshipService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Starship deleted successfully")),
    ))
}

/// Record a character as pilot of a starship.
///
/// # Returns
/// - `201 Created` - Pilot added
/// - `404 Not Found` - Starship or character does not exist
/// - `409 Conflict` - Character already pilots the starship
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/starships/{id}/pilots/{character_id}",
    tag = STARSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Starship ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Pilot added to starship", body = StatusDto),
        (status = 404, description = "Starship or character not found", body = ErrorDto),
        (status = 409, description = "Character already pilots the starship", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_starship_pilot(
    State(state): State<AppState>,
    ApiPath((id, character_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    StarshipService::new(&state.db)
        .add_pilot(id, character_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Pilot added to starship")),
    ))
}

/// Record that a starship appears in a film.
#[utoipa::path(
    post,
    path = "/starships/{id}/films/{film_id}",
    tag = STARSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Starship ID"),
        ("film_id" = i32, Path, description = "Film ID")
    ),
    responses(
        (status = 201, description = "Film added to starship", body = StatusDto),
        (status = 404, description = "Starship or film not found", body = ErrorDto),
        (status = 409, description = "Starship already linked to the film", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_starship_film(
    State(state): State<AppState>,
    ApiPath((id, film_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    StarshipService::new(&state.db).add_film(id, film_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Film added to starship")),
    ))
}
