use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planets")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub population: Option<i32>,
    pub average_temp: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted by `POST /planets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlanet {
    pub name: String,
    #[serde(default)]
    pub population: Option<i32>,
    #[serde(default)]
    pub average_temp: Option<i32>,
}

pub fn validate(input: &NewPlanet) -> Result<(), errors::ModelError> {
    crate::validate_required("name", &input.name)?;
    crate::validate_non_negative("population", input.population)?;
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: &NewPlanet) -> Result<Model, errors::ModelError> {
    validate(input)?;
    let am = ActiveModel {
        name: Set(input.name.trim().to_string()),
        population: Set(input.population),
        average_temp: Set(input.average_temp),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}
