use axum::{extract::State, Json};

use models::character::{self, NewCharacter};
use service::character_service;

use crate::errors::JsonApiError;
use crate::extract::{IdPath, JsonBody};
use crate::response::{ItemBody, ListBody};
use super::ServerState;

#[utoipa::path(get, path = "/characters", tag = "catalog", responses((status = 200, description = "All characters"), (status = 404, description = "No characters stored")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<ListBody<character::Model>>, JsonApiError> {
    let rows = character_service::list_characters(&state.db).await?;
    Ok(Json(ListBody::ok(rows)))
}

#[utoipa::path(get, path = "/characters/{id}", tag = "catalog", params(("id" = i32, Path, description = "Character id")), responses((status = 200, description = "One character"), (status = 404, description = "Unknown id")))]
pub async fn get(State(state): State<ServerState>, IdPath(id): IdPath<i32>) -> Result<Json<ItemBody<character::Model>>, JsonApiError> {
    let row = character_service::get_character(&state.db, id).await?;
    Ok(Json(ItemBody::ok(row)))
}

#[utoipa::path(post, path = "/characters", tag = "catalog", request_body = crate::openapi::NewCharacterDoc, responses((status = 200, description = "Created"), (status = 400, description = "Invalid body")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewCharacter>) -> Result<Json<ItemBody<character::Model>>, JsonApiError> {
    let row = character_service::create_character(&state.db, &input).await?;
    Ok(Json(ItemBody::with_msg("character created", row)))
}
