use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::vehicle;
use crate::errors::ServiceError;

pub async fn list_vehicles(db: &DatabaseConnection) -> Result<Vec<vehicle::Model>, ServiceError> {
    let rows = vehicle::Entity::find()
        .order_by_asc(vehicle::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if rows.is_empty() {
        return Err(ServiceError::not_found("no vehicles found"));
    }
    Ok(rows)
}

pub async fn get_vehicle(db: &DatabaseConnection, id: i32) -> Result<vehicle::Model, ServiceError> {
    vehicle::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("no vehicle with that id"))
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_vehicle(db: &DatabaseConnection, input: &vehicle::NewVehicle) -> Result<vehicle::Model, ServiceError> {
    let created = vehicle::create(db, input).await?;
    info!(vehicle_id = created.id, "vehicle_created");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn vehicle_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(list_vehicles(&db).await, Err(ServiceError::NotFound(_))));

        let input = vehicle::NewVehicle { name: "Sand Crawler".into(), length: Some(36), crew_size: Some(46) };
        let created = create_vehicle(&db, &input).await?;
        let found = get_vehicle(&db, created.id).await?;
        assert_eq!(found.length, Some(36));
        assert_eq!(found.crew_size, Some(46));
        assert_eq!(list_vehicles(&db).await?, vec![found]);

        // Unknown ids are a typed NotFound, never a crash.
        assert!(matches!(get_vehicle(&db, 99).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
