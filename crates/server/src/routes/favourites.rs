//! Add/remove favourites per item kind, plus the listing endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use models::favourite::{self, FavouriteKind};
use service::favourite_service::{self, AddOutcome};

use crate::errors::JsonApiError;
use crate::extract::{IdPath, JsonBody};
use crate::response::{ListBody, MsgBody};
use super::ServerState;

/// Body of every favourite add/remove request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteTarget {
    #[serde(alias = "user_id")]
    pub user_id: i32,
}

#[derive(Debug, Serialize)]
pub struct FavouriteAdded {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<favourite::Model>,
}

async fn add(state: &ServerState, kind: FavouriteKind, item_id: i32, target: FavouriteTarget) -> Result<Json<FavouriteAdded>, JsonApiError> {
    let outcome = favourite_service::add_favourite(&state.db, kind, item_id, target.user_id).await?;
    let msg = outcome.message(kind);
    let result = match outcome {
        AddOutcome::Added(row) => Some(row),
        AddOutcome::AlreadyFavourite => None,
    };
    Ok(Json(FavouriteAdded { msg, result }))
}

async fn remove(state: &ServerState, kind: FavouriteKind, item_id: i32, target: FavouriteTarget) -> Result<Json<MsgBody>, JsonApiError> {
    favourite_service::remove_favourite(&state.db, kind, item_id, target.user_id).await?;
    Ok(Json(MsgBody::new(format!("{kind} removed from favourites"))))
}

#[utoipa::path(post, path = "/favourites/planets/{id}", tag = "favourites", params(("id" = i32, Path, description = "Planet id")), request_body = crate::openapi::FavouriteTargetDoc, responses((status = 200, description = "Added or already present"), (status = 400, description = "Unknown user or planet")))]
pub async fn add_planet(State(state): State<ServerState>, IdPath(id): IdPath<i32>, JsonBody(target): JsonBody<FavouriteTarget>) -> Result<Json<FavouriteAdded>, JsonApiError> {
    add(&state, FavouriteKind::Planet, id, target).await
}

#[utoipa::path(delete, path = "/favourites/planets/{id}", tag = "favourites", params(("id" = i32, Path, description = "Planet id")), request_body = crate::openapi::FavouriteTargetDoc, responses((status = 200, description = "Removed"), (status = 404, description = "Not a favourite")))]
pub async fn remove_planet(State(state): State<ServerState>, IdPath(id): IdPath<i32>, JsonBody(target): JsonBody<FavouriteTarget>) -> Result<Json<MsgBody>, JsonApiError> {
    remove(&state, FavouriteKind::Planet, id, target).await
}

#[utoipa::path(post, path = "/favourites/characters/{id}", tag = "favourites", params(("id" = i32, Path, description = "Character id")), request_body = crate::openapi::FavouriteTargetDoc, responses((status = 200, description = "Added or already present"), (status = 400, description = "Unknown user or character")))]
pub async fn add_character(State(state): State<ServerState>, IdPath(id): IdPath<i32>, JsonBody(target): JsonBody<FavouriteTarget>) -> Result<Json<FavouriteAdded>, JsonApiError> {
    add(&state, FavouriteKind::Character, id, target).await
}

#[utoipa::path(delete, path = "/favourites/characters/{id}", tag = "favourites", params(("id" = i32, Path, description = "Character id")), request_body = crate::openapi::FavouriteTargetDoc, responses((status = 200, description = "Removed"), (status = 404, description = "Not a favourite")))]
pub async fn remove_character(State(state): State<ServerState>, IdPath(id): IdPath<i32>, JsonBody(target): JsonBody<FavouriteTarget>) -> Result<Json<MsgBody>, JsonApiError> {
    remove(&state, FavouriteKind::Character, id, target).await
}

#[utoipa::path(post, path = "/favourites/vehicles/{id}", tag = "favourites", params(("id" = i32, Path, description = "Vehicle id")), request_body = crate::openapi::FavouriteTargetDoc, responses((status = 200, description = "Added or already present"), (status = 400, description = "Unknown user or vehicle")))]
pub async fn add_vehicle(State(state): State<ServerState>, IdPath(id): IdPath<i32>, JsonBody(target): JsonBody<FavouriteTarget>) -> Result<Json<FavouriteAdded>, JsonApiError> {
    add(&state, FavouriteKind::Vehicle, id, target).await
}

#[utoipa::path(delete, path = "/favourites/vehicles/{id}", tag = "favourites", params(("id" = i32, Path, description = "Vehicle id")), request_body = crate::openapi::FavouriteTargetDoc, responses((status = 200, description = "Removed"), (status = 404, description = "Not a favourite")))]
pub async fn remove_vehicle(State(state): State<ServerState>, IdPath(id): IdPath<i32>, JsonBody(target): JsonBody<FavouriteTarget>) -> Result<Json<MsgBody>, JsonApiError> {
    remove(&state, FavouriteKind::Vehicle, id, target).await
}

#[utoipa::path(get, path = "/users/favourites", tag = "favourites", responses((status = 200, description = "Every stored favourite"), (status = 404, description = "None stored")))]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<ListBody<favourite::Model>>, JsonApiError> {
    let rows = favourite_service::list_all_favourites(&state.db).await?;
    Ok(Json(ListBody::ok(rows)))
}

#[utoipa::path(get, path = "/users/favourites/{userId}", tag = "favourites", params(("userId" = i32, Path, description = "User id")), responses((status = 200, description = "Favourites of one user"), (status = 404, description = "User has none")))]
pub async fn list_for_user(State(state): State<ServerState>, IdPath(user_id): IdPath<i32>) -> Result<Json<ListBody<favourite::Model>>, JsonApiError> {
    let rows = favourite_service::list_favourites_for_user(&state.db, user_id).await?;
    Ok(Json(ListBody::ok(rows)))
}
