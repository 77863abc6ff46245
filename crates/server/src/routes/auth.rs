use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Extension, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::warn;

use service::auth::{
    domain::{AuthUser, LoginInput, SignupInput},
    repo::seaorm::SeaOrmAuthRepository,
    service::AuthConfig,
    AuthService,
};

use crate::errors::JsonApiError;
use crate::extract::JsonBody;
use crate::response::{ItemBody, MsgBody};

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone, Debug)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
    pub token_ttl_mins: i64,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

impl ServerState {
    pub fn auth_service(&self) -> AuthService<SeaOrmAuthRepository> {
        let repo = Arc::new(SeaOrmAuthRepository { db: self.db.clone() });
        AuthService::new(
            repo,
            AuthConfig { jwt_secret: self.auth.jwt_secret.clone(), token_ttl_mins: self.auth.token_ttl_mins },
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateOutput {
    pub logged_in_as: String,
}

#[derive(Debug, Serialize)]
pub struct ValidTokenOutput {
    pub valid: bool,
    pub user: AuthUser,
}

#[utoipa::path(post, path = "/signup", tag = "auth", request_body = crate::openapi::SignupRequest, responses((status = 200, description = "Signed up"), (status = 400, description = "Bad Request")))]
pub async fn signup(State(state): State<ServerState>, JsonBody(input): JsonBody<SignupInput>) -> Result<Json<ItemBody<AuthUser>>, JsonApiError> {
    let user = state.auth_service().signup(input).await?;
    Ok(Json(ItemBody::with_msg("user signed up successfully", user)))
}

#[utoipa::path(post, path = "/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in"), (status = 401, description = "Bad username or password")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), JsonApiError> {
    let session = state.auth_service().login(input).await?;

    let mut cookie = Cookie::new(AUTH_COOKIE, session.access_token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);

    Ok((jar, Json(LoginOutput { access_token: session.access_token, user: session.user })))
}

#[utoipa::path(post, path = "/logout", tag = "auth", responses((status = 200, description = "Cookie cleared")))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MsgBody>) {
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/"));
    (jar, Json(MsgBody::new("logged out")))
}

#[utoipa::path(get, path = "/private", tag = "auth", responses((status = 200, description = "Caller identity"), (status = 401, description = "Missing or invalid token")), security(("bearer" = [])))]
pub async fn private(Extension(user): Extension<AuthUser>) -> Json<PrivateOutput> {
    Json(PrivateOutput { logged_in_as: user.user_name })
}

#[utoipa::path(get, path = "/valid-token", tag = "auth", responses((status = 200, description = "Token is valid"), (status = 401, description = "Missing or invalid token")), security(("bearer" = [])))]
pub async fn valid_token(Extension(user): Extension<AuthUser>) -> Json<ValidTokenOutput> {
    Json(ValidTokenOutput { valid: true, user })
}

/// Reads `Authorization: Bearer <token>`, falling back to the `auth_token` cookie.
/// On success the resolved [`AuthUser`] is inserted into request extensions.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_owned();

    let token = match req.headers().get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(h) => match h.strip_prefix("Bearer ") {
            Some(t) => t.trim().to_owned(),
            None => {
                warn!(path = %path, "invalid Authorization format (expect Bearer)");
                return Err(JsonApiError::new(StatusCode::UNAUTHORIZED, "invalid authorization header"));
            }
        },
        None => CookieJar::from_headers(req.headers())
            .get(AUTH_COOKIE)
            .map(|c| c.value().to_owned())
            .unwrap_or_default(),
    };
    if token.is_empty() {
        warn!(path = %path, "missing Authorization header and auth_token cookie");
        return Err(JsonApiError::new(StatusCode::UNAUTHORIZED, "missing token"));
    }

    let user = state.auth_service().identity(&token).await.map_err(|e| {
        warn!(path = %path, err = %e, "token validation failed");
        JsonApiError::from(e)
    })?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
