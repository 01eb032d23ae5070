//! kittenctl-server: breeds and kittens over HTTP
//!
//! A three-tier CRUD service:
//! - `http`: axum routes, extractors and JSON errors
//! - `service`: breed-name resolution and error policy
//! - `db`: pool, migrations and a repository generic over record types
//!
//! `models` holds the validated values passed between the layers.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;
pub mod state;

pub use config::{ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
