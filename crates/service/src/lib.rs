//! Service layer providing the catalog, user, favourite and auth operations
//! on top of models.
//! - Every operation receives the store handle explicitly.
//! - Reuses validation and entity definitions in `models` crate.
//! - Absent rows surface as `ServiceError::NotFound`, never as a panic.

pub mod errors;
pub mod auth;
pub mod planet_service;
pub mod character_service;
pub mod vehicle_service;
pub mod user_service;
pub mod favourite_service;
#[cfg(test)]
pub mod test_support;
