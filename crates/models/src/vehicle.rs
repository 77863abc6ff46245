use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Metres.
    pub length: Option<i32>,
    pub crew_size: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub name: String,
    #[serde(default)]
    pub length: Option<i32>,
    #[serde(default)]
    pub crew_size: Option<i32>,
}

pub fn validate(input: &NewVehicle) -> Result<(), errors::ModelError> {
    crate::validate_required("name", &input.name)?;
    crate::validate_non_negative("length", input.length)?;
    crate::validate_non_negative("crewSize", input.crew_size)?;
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: &NewVehicle) -> Result<Model, errors::ModelError> {
    validate(input)?;
    let am = ActiveModel {
        name: Set(input.name.trim().to_string()),
        length: Set(input.length),
        crew_size: Set(input.crew_size),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}
