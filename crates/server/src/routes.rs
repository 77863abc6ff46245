use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, RouteEntry};

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;

pub mod auth;
pub mod characters;
pub mod favourites;
pub mod planets;
pub mod users;
pub mod vehicles;

pub use auth::{ServerAuthConfig, ServerState};

/// Every route served by [`build_router`], as listed by `GET /`.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { method: "GET", path: "/" },
    RouteEntry { method: "GET", path: "/health" },
    RouteEntry { method: "GET", path: "/planets" },
    RouteEntry { method: "GET", path: "/planets/{id}" },
    RouteEntry { method: "POST", path: "/planets" },
    RouteEntry { method: "GET", path: "/characters" },
    RouteEntry { method: "GET", path: "/characters/{id}" },
    RouteEntry { method: "POST", path: "/characters" },
    RouteEntry { method: "GET", path: "/vehicles" },
    RouteEntry { method: "GET", path: "/vehicles/{id}" },
    RouteEntry { method: "POST", path: "/vehicles" },
    RouteEntry { method: "POST", path: "/favourites/planets/{id}" },
    RouteEntry { method: "DELETE", path: "/favourites/planets/{id}" },
    RouteEntry { method: "POST", path: "/favourites/characters/{id}" },
    RouteEntry { method: "DELETE", path: "/favourites/characters/{id}" },
    RouteEntry { method: "POST", path: "/favourites/vehicles/{id}" },
    RouteEntry { method: "DELETE", path: "/favourites/vehicles/{id}" },
    RouteEntry { method: "GET", path: "/user" },
    RouteEntry { method: "GET", path: "/user/{id}" },
    RouteEntry { method: "POST", path: "/users" },
    RouteEntry { method: "GET", path: "/users/favourites" },
    RouteEntry { method: "GET", path: "/users/favourites/{userId}" },
    RouteEntry { method: "POST", path: "/signup" },
    RouteEntry { method: "POST", path: "/login" },
    RouteEntry { method: "POST", path: "/logout" },
    RouteEntry { method: "GET", path: "/private" },
    RouteEntry { method: "GET", path: "/valid-token" },
    RouteEntry { method: "GET", path: "/docs" },
    RouteEntry { method: "GET", path: "/api-docs/openapi.json" },
];

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Route map")))]
pub async fn index() -> Json<&'static [RouteEntry]> {
    Json(ROUTES)
}

async fn not_found() -> JsonApiError {
    JsonApiError::new(StatusCode::NOT_FOUND, "route not found")
}

/// Build the full application router: catalog, favourites, users, auth and docs.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/planets", get(planets::list).post(planets::create))
        .route("/planets/:id", get(planets::get))
        .route("/characters", get(characters::list).post(characters::create))
        .route("/characters/:id", get(characters::get))
        .route("/vehicles", get(vehicles::list).post(vehicles::create))
        .route("/vehicles/:id", get(vehicles::get))
        .route(
            "/favourites/planets/:id",
            post(favourites::add_planet).delete(favourites::remove_planet),
        )
        .route(
            "/favourites/characters/:id",
            post(favourites::add_character).delete(favourites::remove_character),
        )
        .route(
            "/favourites/vehicles/:id",
            post(favourites::add_vehicle).delete(favourites::remove_vehicle),
        )
        .route("/user", get(users::list))
        .route("/user/:id", get(users::get))
        .route("/users", post(users::create))
        .route("/users/favourites", get(favourites::list_all))
        .route("/users/favourites/:id", get(favourites::list_for_user))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout));

    // Bearer token (or auth_token cookie) required
    let protected = Router::new()
        .route("/private", get(auth::private))
        .route("/valid-token", get(auth::valid_token))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer_token));

    public
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
