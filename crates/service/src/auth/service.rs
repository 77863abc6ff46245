use std::sync::Arc;

use tracing::{info, debug, instrument};

use super::domain::{SignupInput, LoginInput, AuthUser, AuthSession};
use super::errors::AuthError;
use super::password::{hash_password, verify_against_dummy, verify_password};
use super::repository::AuthRepository;
use super::token::{issue_token, verify_token, TokenConfig};

/// Auth service configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_mins: i64,
}

impl AuthConfig {
    fn token(&self) -> TokenConfig {
        TokenConfig { secret: self.jwt_secret.clone(), ttl_mins: self.token_ttl_mins }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new user with a hashed password.
    ///
    /// User names and emails are not required to be unique.
    #[instrument(skip(self, input), fields(user_name = %input.user_name))]
    pub async fn signup(&self, input: SignupInput) -> Result<AuthUser, AuthError> {
        models::user::validate_name(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;
        models::user::validate_email(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;
        models::user::validate_password(&input.password).map_err(|e| AuthError::Validation(e.to_string()))?;

        let hash = hash_password(&input.password)?;
        let user = self.repo.create_user(&input.user_name, &input.email, hash).await?;
        info!(user_id = user.id, user_name = %user.user_name, "user_signed_up");
        Ok(user)
    }

    /// Authenticate a user and issue a bearer token.
    ///
    /// Unknown user and wrong password both yield `Unauthorized`.
    #[instrument(skip(self, input), fields(user_name = %input.user_name))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let stored = match self.repo.find_user_by_name(&input.user_name).await? {
            Some(s) => s,
            None => {
                debug!("login for unknown user");
                verify_against_dummy(&input.password);
                return Err(AuthError::Unauthorized);
            }
        };

        if !verify_password(&input.password, &stored.password_hash)? {
            debug!(user_id = stored.user.id, "password mismatch");
            return Err(AuthError::Unauthorized);
        }

        let access_token = issue_token(stored.user.id, &stored.user.user_name, &self.cfg.token())?;
        info!(user_id = stored.user.id, "user_logged_in");
        Ok(AuthSession { user: stored.user, access_token })
    }

    /// Resolve the user behind a bearer token.
    ///
    /// The token must verify and its `sub` must still name an existing user.
    pub async fn identity(&self, token: &str) -> Result<AuthUser, AuthError> {
        let claims = verify_token(token, &self.cfg.token())?;
        self.repo
            .find_user_by_id(claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)
    }
}
