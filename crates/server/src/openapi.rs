use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use serde::Deserialize;
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse { pub status: String }

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPlanetDoc { pub name: String, pub population: Option<i32>, pub average_temp: Option<i32> }

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacterDoc { pub name: String, pub race: String, pub homeworld: String }

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicleDoc { pub name: String, pub length: Option<i32>, pub crew_size: Option<i32> }

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDoc {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub online_status: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteTargetDoc {
    pub user_id: i32,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::index,
        crate::routes::planets::list,
        crate::routes::planets::get,
        crate::routes::planets::create,
        crate::routes::characters::list,
        crate::routes::characters::get,
        crate::routes::characters::create,
        crate::routes::vehicles::list,
        crate::routes::vehicles::get,
        crate::routes::vehicles::create,
        crate::routes::favourites::add_planet,
        crate::routes::favourites::remove_planet,
        crate::routes::favourites::add_character,
        crate::routes::favourites::remove_character,
        crate::routes::favourites::add_vehicle,
        crate::routes::favourites::remove_vehicle,
        crate::routes::favourites::list_all,
        crate::routes::favourites::list_for_user,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::auth::signup,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::private,
        crate::routes::auth::valid_token,
    ),
    components(
        schemas(
            HealthResponse,
            NewPlanetDoc,
            NewCharacterDoc,
            NewVehicleDoc,
            NewUserDoc,
            FavouriteTargetDoc,
            SignupRequest,
            LoginRequest,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "catalog"),
        (name = "favourites"),
        (name = "users"),
        (name = "auth")
    )
)]
pub struct ApiDoc;
