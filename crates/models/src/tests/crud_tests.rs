use crate::db::connect_in_memory;
use crate::errors::ModelError;
use crate::favourite::{self, FavouriteKind};
use crate::{character, planet, user, vehicle};
use sea_orm::{EntityTrait, ModelTrait};
use anyhow::Result;

#[tokio::test]
async fn test_planet_crud() -> Result<()> {
    let db = connect_in_memory().await?;

    let input = planet::NewPlanet { name: "Tatooine".into(), population: Some(200_000), average_temp: Some(40) };
    let created = planet::create(&db, &input).await?;
    assert_eq!(created.id, 1);

    let found = planet::Entity::find_by_id(created.id).one(&db).await?.expect("planet");
    assert_eq!(found.name, "Tatooine");
    assert_eq!(found.population, Some(200_000));
    assert_eq!(found.average_temp, Some(40));

    assert!(planet::Entity::find_by_id(999).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_planet_validation() -> Result<()> {
    let db = connect_in_memory().await?;
    let blank = planet::NewPlanet { name: "  ".into(), population: None, average_temp: None };
    assert!(matches!(planet::create(&db, &blank).await, Err(ModelError::Validation(_))));

    let negative = planet::NewPlanet { name: "Hoth".into(), population: Some(-1), average_temp: Some(-60) };
    assert!(matches!(planet::create(&db, &negative).await, Err(ModelError::Validation(_))));

    assert!(planet::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_character_and_vehicle_crud() -> Result<()> {
    let db = connect_in_memory().await?;

    let luke = character::create(
        &db,
        &character::NewCharacter { name: "Luke".into(), race: "Human".into(), homeworld: "Tatooine".into() },
    )
    .await?;
    let missing_race = character::NewCharacter { name: "Yoda".into(), race: "".into(), homeworld: "Unknown".into() };
    assert!(character::create(&db, &missing_race).await.is_err());

    let speeder = vehicle::create(
        &db,
        &vehicle::NewVehicle { name: "X-34 landspeeder".into(), length: Some(3), crew_size: Some(1) },
    )
    .await?;

    let all_chars = character::Entity::find().all(&db).await?;
    assert_eq!(all_chars, vec![luke]);
    let all_vehicles = vehicle::Entity::find().all(&db).await?;
    assert_eq!(all_vehicles, vec![speeder]);
    Ok(())
}

#[tokio::test]
async fn test_user_create_and_lookup() -> Result<()> {
    let db = connect_in_memory().await?;

    let u = user::create(&db, "alice", "a@x.com", "$argon2id$fake".into(), Some(true)).await?;
    assert_eq!(u.user_name, "alice");

    let by_name = user::find_by_user_name(&db, "alice").await?.expect("alice");
    assert_eq!(by_name.id, u.id);
    assert!(user::find_by_user_name(&db, "bob").await?.is_none());

    assert!(user::create(&db, "carol", "not-an-email", "h".into(), None).await.is_err());
    assert!(user::create(&db, "", "c@x.com", "h".into(), None).await.is_err());

    let json = serde_json::to_value(&u)?;
    assert!(json.get("password").is_none());
    assert_eq!(json["userName"], "alice");
    assert_eq!(json["onlineStatus"], true);
    Ok(())
}

#[tokio::test]
async fn test_favourite_unique_triple() -> Result<()> {
    let db = connect_in_memory().await?;
    let u = user::create(&db, "alice", "a@x.com", "h".into(), None).await?;

    let fav = favourite::create(&db, u.id, FavouriteKind::Planet, 1).await?;
    assert_eq!(fav.kind, FavouriteKind::Planet);

    // Same item id under another kind is a different favourite.
    favourite::create(&db, u.id, FavouriteKind::Vehicle, 1).await?;

    let dup = favourite::create(&db, u.id, FavouriteKind::Planet, 1).await;
    assert!(matches!(dup, Err(ModelError::UniqueViolation(_))));

    let found = favourite::find_by_triple(&db, u.id, FavouriteKind::Planet, 1).await?.expect("favourite");
    assert_eq!(found.id, fav.id);
    found.delete(&db).await?;
    assert!(favourite::find_by_triple(&db, u.id, FavouriteKind::Planet, 1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_favourite_requires_existing_user() -> Result<()> {
    let db = connect_in_memory().await?;
    let orphan = favourite::create(&db, 42, FavouriteKind::Character, 1).await;
    assert!(orphan.is_err());
    Ok(())
}

#[test]
fn favourite_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(FavouriteKind::Character).unwrap(), "character");
    assert_eq!(FavouriteKind::Vehicle.to_string(), "vehicle");
}
