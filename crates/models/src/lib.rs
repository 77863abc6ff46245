//! SeaORM entities for the catalog, users and favourites, plus the
//! insert helpers and field validation shared by the service layer.

pub mod errors;
pub mod db;
pub mod planet;
pub mod character;
pub mod vehicle;
pub mod user;
pub mod favourite;

#[cfg(test)]
mod tests;

pub(crate) fn validate_required(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

pub(crate) fn validate_non_negative(field: &str, value: Option<i32>) -> Result<(), errors::ModelError> {
    match value {
        Some(v) if v < 0 => Err(errors::ModelError::Validation(format!("{field} must not be negative"))),
        _ => Ok(()),
    }
}
