use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::character::CreateCharacterParam,
        service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

/// List all characters.
///
/// Each character carries its homeworld name and the titles of the films it appears in.
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let dtos: Vec<CharacterDto> = characters
        .into_iter()
        .map(|character| character.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new character.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Every character field, including species and homeworld IDs
///
/// # Returns
/// - `201 Created` - Character created
/// - `400 Bad Request` - Malformed body, missing field, or unknown gender
/// - `409 Conflict` - Species or homeworld does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = StatusDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 409, description = "Species or homeworld does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCharacterParam::from_dto(payload);

    CharacterService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Character created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete a character.
///
/// Film, starship, and vehicle associations of the character are removed with it.
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character deleted", body = StatusDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CharacterService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Character deleted successfully")),
    ))
}
