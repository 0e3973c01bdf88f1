use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        species::{CreateSpeciesDto, SpeciesDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::species::CreateSpeciesParam,
        service::species::SpeciesService,
        state::AppState,
    },
};

/// Tag for grouping species endpoints in OpenAPI documentation
pub static SPECIES_TAG: &str = "species";

/// List all species.
///
/// Unlike characters, species report their homeworld by ID rather than by name.
#[utoipa::path(
    get,
    path = "/species",
    tag = SPECIES_TAG,
    responses(
        (status = 200, description = "Successfully retrieved species", body = Vec<SpeciesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species_list(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let species = SpeciesService::new(&state.db).get_all().await?;

    let dtos: Vec<SpeciesDto> = species.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new species.
///
/// # Returns
/// - `201 Created` - Species created
/// - `400 Bad Request` - Malformed body or unknown classification/designation
/// - `409 Conflict` - Homeworld planet does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/species",
    tag = SPECIES_TAG,
    request_body = CreateSpeciesDto,
    responses(
        (status = 201, description = "Species created", body = StatusDto),
        (status = 400, description = "Invalid species data", body = ErrorDto),
        (status = 409, description = "Homeworld does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_species(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSpeciesDto>,
) -> Result<impl IntoResponse, AppError> {
    SpeciesService::new(&state.db)
        .create(CreateSpeciesParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Species created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/species/{id}",
    tag = SPECIES_TAG,
    params(
        ("id" = i32, Path, description = "Species ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved species", body = SpeciesDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let species = SpeciesService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(species.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/species/{id}",
    tag = SPECIES_TAG,
    params(
        ("id" = i32, Path, description = "Species ID")
    ),
    responses(
        (status = 200, description = "Species deleted", body = StatusDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 409, description = "Characters still belong to the species", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_species(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    SpeciesService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Species deleted successfully")),
    ))
}
