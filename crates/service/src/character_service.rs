use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::character;
use crate::errors::ServiceError;

/// All characters. An empty catalog is reported as `NotFound`.
pub async fn list_characters(db: &DatabaseConnection) -> Result<Vec<character::Model>, ServiceError> {
    let rows = character::Entity::find()
        .order_by_asc(character::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if rows.is_empty() {
        return Err(ServiceError::not_found("no characters found"));
    }
    Ok(rows)
}

pub async fn get_character(db: &DatabaseConnection, id: i32) -> Result<character::Model, ServiceError> {
    character::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("no character with that id"))
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_character(db: &DatabaseConnection, input: &character::NewCharacter) -> Result<character::Model, ServiceError> {
    let created = character::create(db, input).await?;
    info!(character_id = created.id, "character_created");
    Ok(created)
}
