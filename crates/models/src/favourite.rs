use std::fmt;

use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::user;

/// Which catalog a favourite points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum FavouriteKind {
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "character")]
    Character,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
}

impl FavouriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavouriteKind::Planet => "planet",
            FavouriteKind::Character => "character",
            FavouriteKind::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for FavouriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favourites")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: FavouriteKind,
    pub item_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Look up the row for a (user, kind, item) triple.
pub async fn find_by_triple<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    kind: FavouriteKind,
    item_id: i32,
) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::Kind.eq(kind))
        .filter(Column::ItemId.eq(item_id))
        .one(db)
        .await
        .map_err(errors::ModelError::from_db)
}

/// Insert a favourite. A duplicate triple surfaces as `ModelError::UniqueViolation`.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    kind: FavouriteKind,
    item_id: i32,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        user_id: Set(user_id),
        kind: Set(kind),
        item_id: Set(item_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}
