//! PostgreSQL persistence

mod postgres;
pub mod predicate;
mod rows;

pub use postgres::PostgresWarehouseRepository;
