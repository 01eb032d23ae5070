//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared by all requests - no Arc<Mutex<Connection>>
//! - Kitten reads JOIN the breed name - no N+1 queries
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use migrations::{reset_schema, run_migrations, MIGRATOR};
pub use pool::{connect_pool, create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
