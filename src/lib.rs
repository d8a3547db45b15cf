//! MovieApp account service
//!
//! User registration, login and user management over HTTP, organised in
//! the usual layers: `domain` (entities, value objects, ports), `application`
//! (use cases), `infrastructure` (Postgres, Argon2, JWT, configuration) and
//! `adapters` (actix-web handlers and routes).

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
