pub mod executor;
pub mod manager;
pub mod models;
pub mod schema;

pub use executor::{Param, PgExecutor, QueryExecutor};
pub use manager::StoreError;
