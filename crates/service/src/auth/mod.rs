//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Signup, login and bearer-token identity checks live here, independent of
//! the web framework.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod repo;
pub mod token;

pub use service::AuthService;
