use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        vehicle::{CreateVehicleDto, VehicleDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::vehicle::CreateVehicleParam,
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// List all vehicles with the names of their pilots.
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let vehicles = VehicleService::new(&state.db).get_all().await?;

    let dtos: Vec<VehicleDto> = vehicles.into_iter().map(|vehicle| vehicle.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = StatusDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    VehicleService::new(&state.db)
        .create(CreateVehicleParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Vehicle created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Vehicle deleted", body = StatusDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    VehicleService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Vehicle deleted successfully")),
    ))
}

/// Record a character as pilot of a vehicle.
///
/// # Returns
/// - `201 Created` - Pilot added
/// - `404 Not Found` - Vehicle or character does not exist
/// - `409 Conflict` - Character already pilots the vehicle
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/vehicles/{id}/pilots/{character_id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Pilot added to vehicle", body = StatusDto),
        (status = 404, description = "Vehicle or character not found", body = ErrorDto),
        (status = 409, description = "Character already pilots the vehicle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_vehicle_pilot(
    State(state): State<AppState>,
    ApiPath((id, character_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    VehicleService::new(&state.db)
        .add_pilot(id, character_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Pilot added to vehicle")),
    ))
}

/// Record that a vehicle appears in a film.
#[utoipa::path(
    post,
    path = "/vehicles/{id}/films/{film_id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID"),
        ("film_id" = i32, Path, description = "Film ID")
    ),
    responses(
        (status = 201, description = "Film added to vehicle", body = StatusDto),
        (status = 404, description = "Vehicle or film not found", body = ErrorDto),
        (status = 409, description = "Vehicle already linked to the film", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_vehicle_film(
    State(state): State<AppState>,
    ApiPath((id, film_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    VehicleService::new(&state.db).add_film(id, film_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Film added to vehicle")),
    ))
}
