// Copyright 2025 Alexandre D. Díaz
pub mod individual;
pub mod user;

pub type Connection = r2d2::PooledConnection<r2d2_sqlite::SqliteConnectionManager>;

pub fn prepare_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    user::create_table(conn)?;
    individual::create_table(conn)?;
    Ok(())
}
