// Copyright 2025 Alexandre D. Díaz
pub mod connection;
pub mod error;
pub mod models;

pub use connection::{get_db, init_pool, with_session, DatabaseUrl};
pub use error::DbError;

pub type Pool = r2d2::Pool<r2d2_sqlite::SqliteConnectionManager>;

/// Creates every table that does not exist yet. Existing tables and rows are
/// left untouched, so calling it on each start is safe.
pub fn create_db_and_tables(pool: &Pool) -> Result<(), DbError> {
    with_session(pool, |conn| {
        models::prepare_schema(conn)?;
        Ok(())
    })?;
    log::info!("database tables created (if they didn't exist)");
    Ok(())
}
