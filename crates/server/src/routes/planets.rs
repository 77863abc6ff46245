use axum::{extract::State, Json};

use models::planet::{self, NewPlanet};
use service::planet_service;

use crate::errors::JsonApiError;
use crate::extract::{IdPath, JsonBody};
use crate::response::{ItemBody, ListBody};
use super::ServerState;

#[utoipa::path(get, path = "/planets", tag = "catalog", responses((status = 200, description = "All planets"), (status = 404, description = "No planets stored")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<ListBody<planet::Model>>, JsonApiError> {
    let rows = planet_service::list_planets(&state.db).await?;
    Ok(Json(ListBody::ok(rows)))
}

#[utoipa::path(get, path = "/planets/{id}", tag = "catalog", params(("id" = i32, Path, description = "Planet id")), responses((status = 200, description = "One planet"), (status = 404, description = "Unknown id")))]
pub async fn get(State(state): State<ServerState>, IdPath(id): IdPath<i32>) -> Result<Json<ItemBody<planet::Model>>, JsonApiError> {
    let row = planet_service::get_planet(&state.db, id).await?;
    Ok(Json(ItemBody::ok(row)))
}

#[utoipa::path(post, path = "/planets", tag = "catalog", request_body = crate::openapi::NewPlanetDoc, responses((status = 200, description = "Created"), (status = 400, description = "Invalid body")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewPlanet>) -> Result<Json<ItemBody<planet::Model>>, JsonApiError> {
    let row = planet_service::create_planet(&state.db, &input).await?;
    Ok(Json(ItemBody::with_msg("planet created", row)))
}
