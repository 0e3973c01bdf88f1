use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        favorite::{FavoriteDto, FavoriteItemDto},
    },
    server::{
        controller::extract::ApiPath, error::AppError, service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List a user's favorites.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user whose favorites to list
///
/// # Returns
/// - `200 OK` - The user's favorites, possibly empty
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db).get_by_user(user_id).await?;

    let dtos: Vec<FavoriteDto> = favorites
        .into_iter()
        .map(|favorite| favorite.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a character or planet to a user's favorites.
///
/// The category is validated before the user is looked up. The item id is stored
/// without checking that the character or planet exists, and adding the same item
/// twice stores two favorites.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user adding the favorite
/// - `category` - `people` or `planets`
/// - `item_id` - ID of the character or planet
///
/// # Returns
/// - `201 Created` - Favorite stored
/// - `400 Bad Request` - Unknown category
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{id}/favorites/{category}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("category" = String, Path, description = "Favorite category: people or planets"),
        ("item_id" = i32, Path, description = "Character or planet ID")
    ),
    responses(
        (status = 201, description = "Favorite added", body = StatusDto),
        (status = 400, description = "Invalid category", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, category, item_id)): ApiPath<(i32, String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .add(user_id, &category, item_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusDto::ok("Favorite added successfully")),
    ))
}

/// Get the character or planet a user's favorite points at.
#[utoipa::path(
    get,
    path = "/users/{id}/favorites/{category}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("category" = String, Path, description = "Favorite category: people or planets"),
        ("item_id" = i32, Path, description = "Character or planet ID")
    ),
    responses(
        (status = 200, description = "The favorited character or planet", body = FavoriteItemDto),
        (status = 400, description = "Invalid category", body = ErrorDto),
        (status = 404, description = "User, favorite, or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite_item(
    State(state): State<AppState>,
    ApiPath((user_id, category, item_id)): ApiPath<(i32, String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let target = FavoriteService::new(&state.db)
        .get_item(user_id, &category, item_id)
        .await?;

    Ok((StatusCode::OK, Json(target.into_dto())))
}

/// Remove a character or planet from a user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `400 Bad Request` - Unknown category
/// - `404 Not Found` - User does not exist or has no such favorite
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{id}/favorites/{category}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("category" = String, Path, description = "Favorite category: people or planets"),
        ("item_id" = i32, Path, description = "Character or planet ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = StatusDto),
        (status = 400, description = "Invalid category", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, category, item_id)): ApiPath<(i32, String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove(user_id, &category, item_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Favorite deleted successfully")),
    ))
}
