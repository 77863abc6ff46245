pub mod routes;
pub mod startup;
pub mod errors;
pub mod extract;
pub mod response;
pub mod openapi;

pub use startup::run;
