use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use models::user;
use crate::auth::password::hash_password;
use crate::errors::ServiceError;

/// Create a user; the password is hashed before it reaches the store.
#[instrument(skip(db, input), fields(user_name = %input.user_name))]
pub async fn create_user(db: &DatabaseConnection, input: &user::NewUser) -> Result<user::Model, ServiceError> {
    user::validate(input)?;
    let hash = hash_password(&input.password).map_err(|e| ServiceError::Internal(e.to_string()))?;
    let created = user::create(db, &input.user_name, &input.email, hash, input.online_status).await?;
    info!(user_id = created.id, "user_created");
    Ok(created)
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<user::Model, ServiceError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("no user with that id"))
}

/// List every user. No users at all is reported as `NotFound`.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if users.is_empty() {
        return Err(ServiceError::not_found("no users found"));
    }
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(list_users(&db).await, Err(ServiceError::NotFound(_))));

        let input = user::NewUser {
            user_name: "han".into(),
            email: "han@falcon.io".into(),
            password: "chewie".into(),
            online_status: Some(false),
        };
        let u = create_user(&db, &input).await?;
        assert_eq!(u.user_name, "han");
        assert_eq!(u.online_status, Some(false));
        assert!(verify_password("chewie", &u.password)?);

        let found = get_user(&db, u.id).await?;
        assert_eq!(found.id, u.id);
        assert_eq!(list_users(&db).await?.len(), 1);

        assert!(matches!(get_user(&db, u.id + 10).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn empty_password_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input = user::NewUser { user_name: "x".into(), email: "x@y.z".into(), password: "".into(), online_status: None };
        assert!(matches!(create_user(&db, &input).await, Err(ServiceError::Model(_))));
        Ok(())
    }
}
