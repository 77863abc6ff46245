use sea_orm::{DatabaseConnection, EntityTrait};

use crate::auth::domain::{AuthUser, StoredUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use models::errors::ModelError;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_name(&self, user_name: &str) -> Result<Option<StoredUser>, AuthError> {
        let res = models::user::find_by_user_name(&self.db, user_name)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| {
            let password_hash = u.password.clone();
            StoredUser { user: AuthUser::from(u), password_hash }
        }))
    }

    async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(AuthUser::from))
    }

    async fn create_user(&self, user_name: &str, email: &str, password_hash: String) -> Result<AuthUser, AuthError> {
        let created = models::user::create(&self.db, user_name, email, password_hash, None)
            .await
            .map_err(|e| match e {
                ModelError::Validation(msg) => AuthError::Validation(msg),
                other => AuthError::Repository(other.to_string()),
            })?;
        Ok(AuthUser::from(created))
    }
}
