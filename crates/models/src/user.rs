use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter, QueryOrder};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::favourite;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_name: String,
    pub email: String,
    /// argon2 PHC string; never leaves the process.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub online_status: Option<bool>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Favourite,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Favourite => Entity::has_many(favourite::Entity).into() }
    }
}

impl Related<favourite::Entity> for Entity {
    fn to() -> RelationDef { Relation::Favourite.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted by `POST /users` and `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(alias = "user_name")]
    pub user_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub online_status: Option<bool>,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    crate::validate_required("userName", name)
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    crate::validate_required("email", email)?;
    if !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), errors::ModelError> {
    if password.is_empty() { return Err(errors::ModelError::Validation("password required".into())); }
    Ok(())
}

pub fn validate(input: &NewUser) -> Result<(), errors::ModelError> {
    validate_name(&input.user_name)?;
    validate_email(&input.email)?;
    validate_password(&input.password)
}

/// Insert a user. `password_hash` must already be hashed by the caller.
pub async fn create(
    db: &DatabaseConnection,
    user_name: &str,
    email: &str,
    password_hash: String,
    online_status: Option<bool>,
) -> Result<Model, errors::ModelError> {
    validate_name(user_name)?;
    validate_email(email)?;
    if password_hash.trim().is_empty() {
        return Err(errors::ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        user_name: Set(user_name.trim().to_string()),
        email: Set(email.trim().to_string()),
        password: Set(password_hash),
        online_status: Set(online_status),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}

/// First user with this exact user name, if any.
pub async fn find_by_user_name(db: &DatabaseConnection, user_name: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::UserName.eq(user_name))
        .order_by_asc(Column::Id)
        .one(db)
        .await
        .map_err(errors::ModelError::from_db)
}
