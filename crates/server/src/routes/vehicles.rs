use axum::{extract::State, Json};

use models::vehicle::{self, NewVehicle};
use service::vehicle_service;

use crate::errors::JsonApiError;
use crate::extract::{IdPath, JsonBody};
use crate::response::{ItemBody, ListBody};
use super::ServerState;

#[utoipa::path(get, path = "/vehicles", tag = "catalog", responses((status = 200, description = "All vehicles"), (status = 404, description = "No vehicles stored")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<ListBody<vehicle::Model>>, JsonApiError> {
    let rows = vehicle_service::list_vehicles(&state.db).await?;
    Ok(Json(ListBody::ok(rows)))
}

#[utoipa::path(get, path = "/vehicles/{id}", tag = "catalog", params(("id" = i32, Path, description = "Vehicle id")), responses((status = 200, description = "One vehicle"), (status = 404, description = "Unknown id")))]
pub async fn get(State(state): State<ServerState>, IdPath(id): IdPath<i32>) -> Result<Json<ItemBody<vehicle::Model>>, JsonApiError> {
    let row = vehicle_service::get_vehicle(&state.db, id).await?;
    Ok(Json(ItemBody::ok(row)))
}

#[utoipa::path(post, path = "/vehicles", tag = "catalog", request_body = crate::openapi::NewVehicleDoc, responses((status = 200, description = "Created"), (status = 400, description = "Invalid body")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewVehicle>) -> Result<Json<ItemBody<vehicle::Model>>, JsonApiError> {
    let row = vehicle_service::create_vehicle(&state.db, &input).await?;
    Ok(Json(ItemBody::with_msg("vehicle created", row)))
}
