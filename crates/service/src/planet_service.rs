use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::planet;
use crate::errors::ServiceError;

/// All planets. An empty catalog is reported as `NotFound`.
pub async fn list_planets(db: &DatabaseConnection) -> Result<Vec<planet::Model>, ServiceError> {
    let rows = planet::Entity::find()
        .order_by_asc(planet::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if rows.is_empty() {
        return Err(ServiceError::not_found("no planets found"));
    }
    Ok(rows)
}

/// Get a planet by id.
pub async fn get_planet(db: &DatabaseConnection, id: i32) -> Result<planet::Model, ServiceError> {
    planet::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("no planet with that id"))
}

/// Create a planet and return the stored row.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_planet(db: &DatabaseConnection, input: &planet::NewPlanet) -> Result<planet::Model, ServiceError> {
    let created = planet::create(db, input).await?;
    info!(planet_id = created.id, "planet_created");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn tatooine() -> planet::NewPlanet {
        planet::NewPlanet { name: "Tatooine".into(), population: Some(200_000), average_temp: Some(40) }
    }

    #[tokio::test]
    async fn planet_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        assert!(matches!(list_planets(&db).await, Err(ServiceError::NotFound(_))));

        let created = create_planet(&db, &tatooine()).await?;
        assert_eq!(created.id, 1);

        let found = get_planet(&db, created.id).await?;
        assert_eq!(found.name, "Tatooine");
        assert_eq!(found.population, Some(200_000));
        assert_eq!(found.average_temp, Some(40));

        let hoth = create_planet(&db, &planet::NewPlanet { name: "Hoth".into(), population: None, average_temp: Some(-60) }).await?;
        let all = list_planets(&db).await?;
        assert_eq!(all, vec![created, hoth]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_planet_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        match get_planet(&db, 7).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "no planet with that id"),
            other => panic!("unexpected: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn blank_name_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let res = create_planet(&db, &planet::NewPlanet { name: "".into(), population: None, average_temp: None }).await;
        assert!(matches!(res, Err(ServiceError::Model(models::errors::ModelError::Validation(_)))));
        Ok(())
    }
}
