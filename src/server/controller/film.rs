use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        film::{CreateFilmDto, FilmDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::film::CreateFilmParam,
        service::film::FilmService,
        state::AppState,
    },
};

/// Tag for grouping film endpoints in OpenAPI documentation
pub static FILM_TAG: &str = "film";

#[utoipa::path(
    get,
    path = "/films",
    tag = FILM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved films", body = Vec<FilmDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_films(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let films = FilmService::new(&state.db).get_all().await?;

    let dtos: Vec<FilmDto> = films.into_iter().map(|film| film.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new film.
///
/// `release_date` is an ISO 8601 calendar date such as `1977-05-25`.
#[utoipa::path(
    post,
    path = "/films",
    tag = FILM_TAG,
    request_body = CreateFilmDto,
    responses(
        (status = 201, description = "Film created", body = StatusDto),
        (status = 400, description = "Invalid film data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_film(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateFilmDto>,
) -> Result<impl IntoResponse, AppError> {
    FilmService::new(&state.db)
        .create(CreateFilmParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Film created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/films/{id}",
    tag = FILM_TAG,
    params(
        ("id" = i32, Path, description = "Film ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved film", body = FilmDto),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_film(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let film = FilmService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(film.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/films/{id}",
    tag = FILM_TAG,
    params(
        ("id" = i32, Path, description = "Film ID")
    ),
    responses(
        (status = 200, description = "Film deleted", body = StatusDto),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_film(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FilmService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Film deleted successfully")),
    ))
}

/// Add a character to a film's cast.
///
/// # Returns
/// - `201 Created` - Character added to the film
/// - `404 Not Found` - Film or character does not exist
/// - `409 Conflict` - Character already listed for the film
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/films/{id}/characters/{character_id}",
    tag = FILM_TAG,
    params(
        ("id" = i32, Path, description = "Film ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Character added to film", body = StatusDto),
        (status = 404, description = "Film or character not found", body = ErrorDto),
        (status = 409, description = "Character already in film", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_film_character(
    State(state): State<AppState>,
    ApiPath((id, character_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FilmService::new(&state.db)
        .add_character(id, character_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Character added to film")),
    ))
}
