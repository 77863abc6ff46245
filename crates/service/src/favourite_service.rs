//! Favourites: links between one user and one catalog item.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};
use tracing::{debug, info, instrument};

use models::errors::ModelError;
use models::favourite::{self, FavouriteKind};
use models::{character, planet, user, vehicle};
use crate::errors::ServiceError;

/// Successful result of [`add_favourite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(favourite::Model),
    /// The triple was already stored; nothing changed.
    AlreadyFavourite,
}

impl AddOutcome {
    pub fn message(&self, kind: FavouriteKind) -> String {
        match self {
            AddOutcome::Added(_) => format!("{kind} added to favourites"),
            AddOutcome::AlreadyFavourite => format!("this user already has this {kind} as a favourite"),
        }
    }
}

fn db_err(e: sea_orm::DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

async fn item_exists<C: ConnectionTrait>(db: &C, kind: FavouriteKind, item_id: i32) -> Result<bool, ServiceError> {
    let found = match kind {
        FavouriteKind::Planet => planet::Entity::find_by_id(item_id).one(db).await.map(|m| m.is_some()),
        FavouriteKind::Character => character::Entity::find_by_id(item_id).one(db).await.map(|m| m.is_some()),
        FavouriteKind::Vehicle => vehicle::Entity::find_by_id(item_id).one(db).await.map(|m| m.is_some()),
    };
    found.map_err(db_err)
}

/// Mark a catalog item as a favourite of a user.
///
/// Missing user and/or item are reported as `BadRequest` with one message per
/// case. The duplicate pre-check is advisory; the unique index on
/// (user_id, kind, item_id) settles concurrent inserts.
#[instrument(skip(db))]
pub async fn add_favourite(
    db: &DatabaseConnection,
    kind: FavouriteKind,
    item_id: i32,
    user_id: i32,
) -> Result<AddOutcome, ServiceError> {
    let user_exists = user::Entity::find_by_id(user_id).one(db).await.map_err(db_err)?.is_some();
    let item_found = item_exists(db, kind, item_id).await?;
    match (user_exists, item_found) {
        (false, false) => return Err(ServiceError::bad_request(format!("both user and {kind} do not exist"))),
        (false, true) => return Err(ServiceError::bad_request("this user does not exist")),
        (true, false) => return Err(ServiceError::bad_request(format!("this {kind} does not exist"))),
        (true, true) => {}
    }

    if favourite::find_by_triple(db, user_id, kind, item_id).await?.is_some() {
        debug!("favourite already present");
        return Ok(AddOutcome::AlreadyFavourite);
    }
    // Autocommit insert; the unique index decides between racing requests.
    match favourite::create(db, user_id, kind, item_id).await {
        Ok(row) => {
            info!(favourite_id = row.id, "favourite_added");
            Ok(AddOutcome::Added(row))
        }
        Err(ModelError::UniqueViolation(_)) => {
            debug!("concurrent insert won the race");
            Ok(AddOutcome::AlreadyFavourite)
        }
        Err(e) => Err(e.into()),
    }
}

/// Remove the favourite identified by (user, kind, item).
#[instrument(skip(db))]
pub async fn remove_favourite(
    db: &DatabaseConnection,
    kind: FavouriteKind,
    item_id: i32,
    user_id: i32,
) -> Result<(), ServiceError> {
    let row = favourite::find_by_triple(db, user_id, kind, item_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("this {kind} is not a favourite of this user")))?;
    let id = row.id;
    row.delete(db).await.map_err(db_err)?;
    info!(favourite_id = id, "favourite_removed");
    Ok(())
}

pub async fn list_all_favourites(db: &DatabaseConnection) -> Result<Vec<favourite::Model>, ServiceError> {
    let rows = favourite::Entity::find()
        .order_by_asc(favourite::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    if rows.is_empty() {
        return Err(ServiceError::not_found("no favourites found"));
    }
    Ok(rows)
}

/// Every favourite of one user, oldest first.
pub async fn list_favourites_for_user(db: &DatabaseConnection, user_id: i32) -> Result<Vec<favourite::Model>, ServiceError> {
    let rows = favourite::Entity::find()
        .filter(favourite::Column::UserId.eq(user_id))
        .order_by_asc(favourite::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    if rows.is_empty() {
        return Err(ServiceError::not_found("no favourites for that user"));
    }
    Ok(rows)
}
