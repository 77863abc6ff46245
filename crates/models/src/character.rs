use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub race: String,
    /// Free text; not a reference to `planets`.
    pub homeworld: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub race: String,
    pub homeworld: String,
}

pub fn validate(input: &NewCharacter) -> Result<(), errors::ModelError> {
    crate::validate_required("name", &input.name)?;
    crate::validate_required("race", &input.race)?;
    crate::validate_required("homeworld", &input.homeworld)?;
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: &NewCharacter) -> Result<Model, errors::ModelError> {
    validate(input)?;
    let am = ActiveModel {
        name: Set(input.name.trim().to_string()),
        race: Set(input.race.trim().to_string()),
        homeworld: Set(input.homeworld.trim().to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}
