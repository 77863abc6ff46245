use async_trait::async_trait;

use super::domain::{AuthUser, StoredUser};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// First user registered under this name.
    async fn find_user_by_name(&self, user_name: &str) -> Result<Option<StoredUser>, AuthError>;
    async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError>;
    async fn create_user(&self, user_name: &str, email: &str, password_hash: String) -> Result<AuthUser, AuthError>;
}
