//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here through `utoipa_axum::routes!`, which collects the
//! handlers' `utoipa::path` annotations into a single OpenAPI document. The document is
//! served as JSON at `/api/docs/openapi.json` and also feeds the sitemap at `/`.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, error::InternalServerError, state::AppState};

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holocron",
        description = "Characters, planets, species, films, starships, vehicles, and user favorites"
    ),
    tags(
        (name = controller::index::INDEX_TAG, description = "Sitemap"),
        (name = controller::user::USER_TAG, description = "User registration and lookup"),
        (name = controller::favorite::FAVORITE_TAG, description = "Per-user favorite characters and planets"),
        (name = controller::character::PEOPLE_TAG, description = "Characters"),
        (name = controller::planet::PLANET_TAG, description = "Planets"),
        (name = controller::species::SPECIES_TAG, description = "Species"),
        (name = controller::film::FILM_TAG, description = "Films and their casts"),
        (name = controller::starship::STARSHIP_TAG, description = "Starships, pilots, and film appearances"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicles, pilots, and film appearances"),
    )
)]
struct ApiDoc;

fn api_router() -> OpenApiRouter<AppState> {
    use controller::{character, favorite, film, index, planet, species, starship, user, vehicle};

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(index::get_sitemap))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::delete_user))
        .routes(routes!(favorite::get_favorites))
        .routes(routes!(
            favorite::add_favorite,
            favorite::get_favorite_item,
            favorite::delete_favorite
        ))
        .routes(routes!(character::get_people, character::create_person))
        .routes(routes!(character::get_person, character::delete_person))
        .routes(routes!(planet::get_planets, planet::create_planet))
        .routes(routes!(planet::get_planet, planet::delete_planet))
        .routes(routes!(species::get_species_list, species::create_species))
        .routes(routes!(species::get_species, species::delete_species))
        .routes(routes!(film::get_films, film::create_film))
        .routes(routes!(film::get_film, film::delete_film))
        .routes(routes!(film::add_film_character))
        .routes(routes!(starship::get_starships, starship::create_starship))
        .routes(routes!(starship::get_starship, starship::delete_starship))
        .routes(routes!(starship::add_starship_pilot))
        .routes(routes!(starship::add_starship_film))
        .routes(routes!(vehicle::get_vehicles, vehicle::create_vehicle))
        .routes(routes!(vehicle::get_vehicle, vehicle::delete_vehicle))
        .routes(routes!(vehicle::add_vehicle_pilot))
        .routes(routes!(vehicle::add_vehicle_film))
}

/// Builds the application's HTTP router with all API endpoints and the OpenAPI document.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap
/// - `GET|POST /users`, `GET|DELETE /users/{id}`
/// - `GET /users/{id}/favorites`
/// - `POST|GET|DELETE /users/{id}/favorites/{category}/{item_id}`
/// - `GET|POST /people`, `GET|DELETE /people/{id}`
/// - `GET|POST /planets`, `GET|DELETE /planets/{id}`
/// - `GET|POST /species`, `GET|DELETE /species/{id}`
/// - `GET|POST /films`, `GET|DELETE /films/{id}`, `POST /films/{id}/characters/{character_id}`
/// - `GET|POST /starships`, `GET|DELETE /starships/{id}` plus pilot and film links
/// - `GET|POST /vehicles`, `GET|DELETE /vehicles/{id}` plus pilot and film links
/// - `GET /api/docs/openapi.json` - OpenAPI document
///
/// # Returns
/// An Axum `Router<AppState>` awaiting its state.
pub fn routes() -> Router<AppState> {
    let (routes, api) = api_router().split_for_parts();

    routes.route(
        OPENAPI_PATH,
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}

/// Builds the complete application with state and middleware applied.
///
/// Requests are traced, handler panics become a 500 `ErrorDto` response, and CORS is
/// open to every origin. Trailing-slash normalization has to wrap the finished router
/// from the outside, so it is applied by the caller.
pub fn app(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(format!("Request handler panicked: {}", detail)).into_response()
}

/// Builds the OpenAPI document describing every registered endpoint.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_, api) = api_router().split_for_parts();

    api
}
