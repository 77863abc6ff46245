use axum::{extract::State, Json};

use models::user::{self, NewUser};
use service::user_service;

use crate::errors::JsonApiError;
use crate::extract::{IdPath, JsonBody};
use crate::response::{ItemBody, ListBody};
use super::ServerState;

#[utoipa::path(get, path = "/user", tag = "users", responses((status = 200, description = "All users"), (status = 404, description = "No users stored")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<ListBody<user::Model>>, JsonApiError> {
    let rows = user_service::list_users(&state.db).await?;
    Ok(Json(ListBody::ok(rows)))
}

#[utoipa::path(get, path = "/user/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), responses((status = 200, description = "One user"), (status = 404, description = "Unknown id")))]
pub async fn get(State(state): State<ServerState>, IdPath(id): IdPath<i32>) -> Result<Json<ItemBody<user::Model>>, JsonApiError> {
    let row = user_service::get_user(&state.db, id).await?;
    Ok(Json(ItemBody::ok(row)))
}

/// Administrative create; same hashing as `/signup`.
#[utoipa::path(post, path = "/users", tag = "users", request_body = crate::openapi::NewUserDoc, responses((status = 200, description = "Created"), (status = 400, description = "Invalid body")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewUser>) -> Result<Json<ItemBody<user::Model>>, JsonApiError> {
    let row = user_service::create_user(&state.db, &input).await?;
    Ok(Json(ItemBody::with_msg("user created", row)))
}
